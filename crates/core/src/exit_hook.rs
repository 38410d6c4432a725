//! Quit controls and the hooks that route them back to the launcher.
//!
//! A game's quit control cannot reach the session switcher directly: the
//! switcher owns the registry, which owns the controller, which owns the
//! control. Instead the bound [`ExitHook`] queues a
//! [`LauncherEvent::ReturnToMenu`] carrying its game's title, which the UI
//! loop drains right after the input that caused it.

use tokio::sync::mpsc;

use crate::module::GameController;
use crate::types::{ControlStyle, LauncherEvent, PointerEvent, Rect};

/// Callback attached to a quit control. Fires at most once per activation.
#[derive(Debug)]
pub struct ExitHook {
    title: String,
    tx: mpsc::UnboundedSender<LauncherEvent>,
    armed: bool,
}

impl ExitHook {
    fn new(title: String, tx: mpsc::UnboundedSender<LauncherEvent>) -> Self {
        Self {
            title,
            tx,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn arm(&mut self) {
        self.armed = true;
    }

    /// Request a return to the menu. Returns false when already fired.
    fn fire(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        if self.tx.send(LauncherEvent::ReturnToMenu(self.title.clone())).is_err() {
            tracing::warn!(title = %self.title, "launcher event queue closed");
        }
        true
    }
}

/// A game's designated "return to launcher" button.
#[derive(Debug)]
pub struct QuitControl {
    label: String,
    bounds: Rect,
    style: ControlStyle,
    hook: Option<ExitHook>,
}

impl QuitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bounds: Rect::default(),
            style: ControlStyle::Normal,
            hook: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Where the view last laid the control out.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn style(&self) -> ControlStyle {
        self.style
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.style = if hovered {
            ControlStyle::Hovered
        } else {
            ControlStyle::Normal
        };
    }

    pub fn is_bound(&self) -> bool {
        self.hook.is_some()
    }

    /// Whether the next press will return to the menu.
    pub fn is_armed(&self) -> bool {
        self.hook.as_ref().is_some_and(ExitHook::is_armed)
    }

    /// Attach the exit hook. Replaces any previous hook.
    pub fn bind(&mut self, hook: ExitHook) {
        self.hook = Some(hook);
    }

    /// Re-enable the hook for a new activation.
    pub fn arm(&mut self) {
        if let Some(hook) = self.hook.as_mut() {
            hook.arm();
        }
    }

    /// Press the control. The control drops its hovered look before the
    /// launcher is asked to switch, so it does not come back highlighted.
    ///
    /// Returns whether a return to the menu was requested.
    pub fn press(&mut self) -> bool {
        let Some(hook) = self.hook.as_mut() else {
            tracing::debug!(label = %self.label, "quit pressed with no hook bound");
            return false;
        };
        if !hook.is_armed() {
            tracing::debug!(title = %hook.title, "quit ignored, hook already fired");
            return false;
        }
        self.style = ControlStyle::Normal;
        hook.fire()
    }

    /// Hover styling and click handling against the laid-out bounds.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let (x, y) = event.position();
        let over = self.bounds.contains(x, y);
        match event {
            PointerEvent::Moved { .. } => {
                self.set_hovered(over);
                false
            }
            PointerEvent::Pressed { .. } => over && self.press(),
        }
    }
}

/// Binds exit hooks to freshly built triads and hands out the launcher's
/// shutdown path. Every hook shares one event queue.
#[derive(Debug, Clone)]
pub struct ExitHookBinder {
    tx: mpsc::UnboundedSender<LauncherEvent>,
}

impl ExitHookBinder {
    /// Create a binder and the receiving end of its event queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LauncherEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Attach a quit hook to `controller` and let it wire its listeners.
    pub fn bind(&self, controller: &mut dyn GameController) {
        let title = controller.title().to_string();
        controller
            .quit_control_mut()
            .bind(ExitHook::new(title.clone(), self.tx.clone()));
        controller.wire_listeners();
        tracing::debug!(%title, "bound exit hook");
    }

    /// Queue a selection event, the same path icon clicks take.
    pub fn request_select(&self, title: impl Into<String>) {
        let title = title.into();
        if self.tx.send(LauncherEvent::Select(title.clone())).is_err() {
            tracing::warn!(%title, "selection requested after the event queue closed");
        }
    }

    /// Queue the window-close signal.
    pub fn request_shutdown(&self) {
        if self.tx.send(LauncherEvent::Shutdown).is_err() {
            tracing::warn!("shutdown requested after the event queue closed");
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<LauncherEvent> {
        self.tx.clone()
    }
}
