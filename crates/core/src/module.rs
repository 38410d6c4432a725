//! Capabilities a game module (and the launcher menu) must provide.
//!
//! A game is a (model, view, controller) triad. The launcher only talks to
//! the controller and, through it, the view; the model is private to the
//! controller. Views must never panic for a control they currently display.

use crate::descriptor::GameAssets;
use crate::exit_hook::QuitControl;
use crate::surface::DisplaySurface;
use crate::types::{FrameBuffer, LauncherAction, PointerEvent, SurfaceArea};

/// Presentation half of a game module, also implemented by the menu.
pub trait GameView {
    /// Reset to the launcher's start screen. Only the menu has one.
    fn initialize_start_menu(&mut self) {}

    /// Prepare to display the game described by `assets`.
    fn show_game(&mut self, assets: &GameAssets);

    /// Drop any per-activation presentation state.
    fn close_game_view(&mut self);

    /// Hand the view the area of the shared display surface it draws into.
    fn set_display_surface(&mut self, area: SurfaceArea);

    /// Draw into `fb`, which is sized to the last area handed over.
    fn render(&self, fb: &mut FrameBuffer);
}

/// Control half of a game module.
///
/// The controller exclusively owns its model and view for the lifetime of
/// the triad.
pub trait GameController {
    fn title(&self) -> &str;

    /// Start (or restart) the game session.
    fn initiate_game(&mut self);

    /// Detach the view from `surface` and release listeners. After this the
    /// triad is dropped by the registry.
    fn close_game(&mut self, surface: &mut dyn DisplaySurface);

    fn is_running(&self) -> bool;

    fn set_running(&mut self, running: bool);

    /// Hook up input listeners. Controllers with nothing to wire keep the
    /// default no-op.
    fn wire_listeners(&mut self) {}

    fn view(&self) -> &dyn GameView;

    fn view_mut(&mut self) -> &mut dyn GameView;

    /// The module's designated "return to launcher" control.
    fn quit_control(&self) -> &QuitControl;

    fn quit_control_mut(&mut self) -> &mut QuitControl;

    /// Keyboard input while this game is active. `Back` presses the quit
    /// control; games override this to add their own bindings.
    fn handle_action(&mut self, action: LauncherAction) {
        if action == LauncherAction::Back {
            self.quit_control_mut().press();
        }
    }

    /// Pointer input while this game is active.
    fn handle_pointer(&mut self, event: PointerEvent) {
        self.quit_control_mut().handle_pointer(event);
    }
}

/// The launcher's own icon menu.
pub trait MenuView: GameView {
    /// Replace the list of icons, in display order.
    fn set_entries(&mut self, entries: Vec<GameAssets>);

    /// Move the highlight in response to a directional action.
    fn move_highlight(&mut self, action: LauncherAction);

    /// Title under the highlight, if the menu has any icons.
    fn highlighted(&self) -> Option<&str>;

    /// Move the highlight onto `title`. Returns false if no such icon exists.
    fn highlight_title(&mut self, title: &str) -> bool;

    /// Title of the icon at `(x, y)`.
    fn hit_test(&self, x: u16, y: u16) -> Option<&str>;

    /// Show (or clear) a one-line status message, e.g. a failed selection.
    fn set_status(&mut self, status: Option<String>);
}
