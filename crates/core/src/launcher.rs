//! Input and event dispatch around the session switcher.
//!
//! The UI loop feeds every key and pointer event into a [`Launcher`], then
//! calls [`Launcher::pump`] to drain events queued by quit controls, external
//! selection requests and the window-close action.

use tokio::sync::mpsc;

use crate::error::LauncherError;
use crate::exit_hook::ExitHookBinder;
use crate::module::MenuView;
use crate::registry::GameRegistry;
use crate::shutdown::ShutdownSignal;
use crate::surface::DisplaySurface;
use crate::switcher::{SessionSwitcher, SwitchOutcome};
use crate::types::{LauncherAction, LauncherEvent, PointerEvent};

pub struct Launcher<S, M> {
    switcher: SessionSwitcher<S, M>,
    events: mpsc::UnboundedReceiver<LauncherEvent>,
    shutdown: ShutdownSignal,
}

impl<S: DisplaySurface, M: MenuView> Launcher<S, M> {
    pub fn new(registry: GameRegistry, surface: S, menu: M, shutdown: ShutdownSignal) -> Self {
        let (binder, events) = ExitHookBinder::channel();
        tracing::info!(games = ?registry.list_titles(), "launcher ready");
        Self {
            switcher: SessionSwitcher::new(registry, surface, menu, binder),
            events,
            shutdown,
        }
    }

    pub fn switcher(&self) -> &SessionSwitcher<S, M> {
        &self.switcher
    }

    pub fn switcher_mut(&mut self) -> &mut SessionSwitcher<S, M> {
        &mut self.switcher
    }

    /// Handle for queueing events from outside the UI loop.
    pub fn binder(&self) -> &ExitHookBinder {
        self.switcher.binder()
    }

    /// Whether the window was closed and the shutdown gate released.
    pub fn is_closed(&self) -> bool {
        self.shutdown.is_triggered()
    }

    /// Icon click / Enter on an icon. Failures are shown on the menu's
    /// status line and returned to the caller.
    pub fn on_select(&mut self, title: &str) -> Result<SwitchOutcome, LauncherError> {
        let result = self.switcher.select(title);
        let status = result.as_ref().err().map(|err| err.to_string());
        self.switcher.menu_mut().set_status(status);
        result
    }

    /// Keyboard input, already mapped to launcher actions.
    pub fn handle_action(&mut self, action: LauncherAction) {
        if action == LauncherAction::CloseWindow {
            self.binder().request_shutdown();
        } else if let Some(controller) = self.switcher.active_controller_mut() {
            controller.handle_action(action);
        } else if action.is_directional() {
            self.switcher.menu_mut().move_highlight(action);
        } else if action == LauncherAction::Confirm {
            if let Some(title) = self.switcher.menu().highlighted().map(str::to_string) {
                let _ = self.on_select(&title);
            }
        }
        self.pump();
    }

    /// Pointer input in surface coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some(controller) = self.switcher.active_controller_mut() {
            controller.handle_pointer(event);
        } else {
            let (x, y) = event.position();
            let hit = self.switcher.menu().hit_test(x, y).map(str::to_string);
            match (event, hit) {
                (PointerEvent::Pressed { .. }, Some(title)) => {
                    let _ = self.on_select(&title);
                }
                (PointerEvent::Moved { .. }, Some(title)) => {
                    self.switcher.menu_mut().highlight_title(&title);
                }
                _ => {}
            }
        }
        self.pump();
    }

    /// Drain queued events. Returns false once the window has been closed.
    pub fn pump(&mut self) -> bool {
        while let Ok(event) = self.events.try_recv() {
            match event {
                LauncherEvent::Select(title) => {
                    let _ = self.on_select(&title);
                }
                LauncherEvent::ReturnToMenu(title) => {
                    if self.switcher.state().is_active(&title) {
                        self.switcher.return_to_menu();
                    } else {
                        tracing::debug!(%title, "stale quit ignored");
                    }
                }
                LauncherEvent::Shutdown => {
                    if self.switcher.active_title().is_some() {
                        self.switcher.return_to_menu();
                    }
                    self.shutdown.trigger();
                }
            }
        }
        !self.is_closed()
    }
}
