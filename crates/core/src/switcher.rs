//! Session switcher: the `Idle` / `Active(title)` state machine.
//!
//! Every transition runs to completion on the UI thread. The outgoing game
//! is always fully closed (view detached, triad dropped) before the incoming
//! one is started, so two controllers never both believe they are running
//! and two views never both claim the display surface.

use crate::descriptor::GameAssets;
use crate::error::LauncherError;
use crate::exit_hook::ExitHookBinder;
use crate::module::{GameController, MenuView};
use crate::registry::GameRegistry;
use crate::surface::DisplaySurface;
use crate::types::{Cell, FrameBuffer, Panel, SurfaceArea};

/// Which game, if any, is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No game active; the menu is shown.
    #[default]
    Idle,
    Active(String),
}

impl SessionState {
    pub fn active_title(&self) -> Option<&str> {
        match self {
            SessionState::Idle => None,
            SessionState::Active(title) => Some(title),
        }
    }

    pub fn is_active(&self, title: &str) -> bool {
        self.active_title() == Some(title)
    }
}

/// Result of a successful `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The title was already active; nothing changed.
    Unchanged,
    /// The title is now active, backed by the triad with this instance id.
    Activated { instance: u64 },
}

pub struct SessionSwitcher<S, M> {
    registry: GameRegistry,
    surface: S,
    menu: M,
    binder: ExitHookBinder,
    state: SessionState,
}

impl<S: DisplaySurface, M: MenuView> SessionSwitcher<S, M> {
    /// Take ownership of the catalog, the display surface and the menu, and
    /// show the menu.
    pub fn new(registry: GameRegistry, surface: S, mut menu: M, binder: ExitHookBinder) -> Self {
        menu.set_entries(registry.list_assets());
        let mut switcher = Self {
            registry,
            surface,
            menu,
            binder,
            state: SessionState::Idle,
        };
        switcher.show_menu();
        switcher
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active_title(&self) -> Option<&str> {
        self.state.active_title()
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for surface bookkeeping. Attaching or detaching panels
    /// here bypasses the state machine.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    pub fn binder(&self) -> &ExitHookBinder {
        &self.binder
    }

    /// Controller of the active game, if any.
    pub fn active_controller_mut(&mut self) -> Option<&mut dyn GameController> {
        let title = self.state.active_title()?;
        self.registry
            .live_triad_mut(title)
            .map(|triad| triad.controller_mut())
    }

    /// Make `title` the active game.
    ///
    /// Unknown titles fail without touching any state. Re-selecting the
    /// active title is a no-op. If the game's factories fail, whatever was
    /// active stays closed and the menu is shown.
    pub fn select(&mut self, title: &str) -> Result<SwitchOutcome, LauncherError> {
        let Some(descriptor) = self.registry.descriptor(title) else {
            tracing::warn!(title, "selected unknown game");
            return Err(LauncherError::UnknownTitle(title.to_string()));
        };
        let assets = descriptor.assets();

        if self.state.is_active(title) && self.registry.live_triad(title).is_some() {
            tracing::debug!(title, "already active");
            return Ok(SwitchOutcome::Unchanged);
        }

        for outgoing in self.registry.live_titles() {
            if outgoing != title {
                self.deactivate(&outgoing);
            }
        }
        self.surface.detach(&Panel::Menu);

        if self.registry.live_triad(title).is_none() {
            match self.registry.instantiate(title) {
                Ok(triad) => self.binder.bind(triad.controller_mut()),
                Err(err) => {
                    tracing::error!(title, error = %err, "failed to start game");
                    self.show_menu();
                    return Err(err);
                }
            }
        }

        let instance = self.activate(title, &assets)?;
        tracing::info!(title, instance, "game active");
        Ok(SwitchOutcome::Activated { instance })
    }

    fn activate(&mut self, title: &str, assets: &GameAssets) -> Result<u64, LauncherError> {
        let area = self.surface.area();
        let Some(triad) = self.registry.live_triad_mut(title) else {
            return Err(LauncherError::UnknownTitle(title.to_string()));
        };
        let instance = triad.instance();

        let controller = triad.controller_mut();
        controller.initiate_game();
        controller.set_running(true);
        controller.quit_control_mut().arm();

        let view = controller.view_mut();
        view.set_display_surface(area);
        view.show_game(assets);

        self.surface.attach(Panel::game(title));
        self.state = SessionState::Active(title.to_string());
        Ok(instance)
    }

    /// Close `title` and drop its triad. No-op if it is not live, which
    /// absorbs duplicate quit events.
    pub fn deactivate(&mut self, title: &str) {
        let Some(triad) = self.registry.live_triad_mut(title) else {
            tracing::debug!(title, "deactivate ignored, game not live");
            return;
        };

        let controller = triad.controller_mut();
        controller.close_game(&mut self.surface);
        controller.set_running(false);

        if self.surface.detach(&Panel::game(title)) {
            tracing::warn!(title, "controller left its view attached after close");
        }
        self.registry.remove(title);

        if self.state.is_active(title) {
            self.state = SessionState::Idle;
        }
        tracing::info!(title, "game closed");
    }

    /// Close the active game (if any) and show the menu.
    pub fn return_to_menu(&mut self) {
        if let SessionState::Active(title) = self.state.clone() {
            self.deactivate(&title);
        }
        self.show_menu();
    }

    fn show_menu(&mut self) {
        self.state = SessionState::Idle;
        if self.surface.attached() == Some(&Panel::Menu) {
            return;
        }
        if let Some(stale) = self.surface.attached().cloned() {
            self.surface.detach(&stale);
        }
        self.menu.set_display_surface(self.surface.area());
        self.menu.initialize_start_menu();
        self.surface.attach(Panel::Menu);
        tracing::debug!("menu shown");
    }

    /// Propagate a new window size to the surface and every attached view.
    pub fn resize(&mut self, area: SurfaceArea) {
        if self.surface.area() == area {
            return;
        }
        self.surface.resize(area);
        self.menu.set_display_surface(area);
        if let Some(controller) = self.active_controller_mut() {
            controller.view_mut().set_display_surface(area);
        }
    }

    /// Draw whichever panel the surface holds.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        match self.surface.attached() {
            Some(Panel::Menu) => self.menu.render(fb),
            Some(Panel::Game(title)) => match self.registry.live_triad(title) {
                Some(triad) => triad.controller().view().render(fb),
                None => fb.clear(Cell::default()),
            },
            None => fb.clear(Cell::default()),
        }
    }
}
