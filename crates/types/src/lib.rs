//! Shared types module - launcher data structures and constants
//!
//! This module defines the plain data types every other crate agrees on.
//! Nothing here depends on the terminal, the session manager or any game, so
//! the types can be used from core logic, presentation code and tests alike.
//!
//! # Panels
//!
//! The launcher window owns one shared display area. At any instant it holds
//! at most one [`Panel`]:
//!
//! - [`Panel::Menu`]: the icon list shown when no game is active
//! - [`Panel::Game`]: the view of the single active game, keyed by title
//!
//! # Events
//!
//! Work that cannot be done in place (a quit button deep inside a game view
//! asking the launcher to return to the menu, the window asking the process to
//! shut down) is expressed as a [`LauncherEvent`] and queued for the UI loop.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `MIN_TICK_MS` | 4 | Lowest accepted frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{LauncherAction, Panel, Rect};
//!
//! let panel = Panel::game("Snake");
//! assert_eq!(panel.title(), Some("Snake"));
//! assert!(Panel::Menu.is_menu());
//!
//! assert!(LauncherAction::Left.is_directional());
//! assert!(!LauncherAction::Confirm.is_directional());
//!
//! let quit = Rect::new(10, 2, 8, 3);
//! assert!(quit.contains(12, 3));
//! assert!(!quit.contains(18, 3));
//! ```

pub mod fb;
pub mod palette;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lowest frame interval the launcher accepts from configuration
pub const MIN_TICK_MS: u32 = 4;

/// Width of one icon tile in the menu, border included
pub const ICON_TILE_WIDTH: u16 = 18;

/// Height of one icon tile in the menu, border included
pub const ICON_TILE_HEIGHT: u16 = 7;

/// Label drawn on every game's quit control
pub const QUIT_LABEL: &str = "Quit";

/// Content currently attached to the launcher's display area.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The launcher's own icon menu.
    Menu,
    /// The view of the game registered under this title.
    Game(String),
}

impl Panel {
    pub fn game(title: impl Into<String>) -> Self {
        Panel::Game(title.into())
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Panel::Menu)
    }

    /// Title of the game owning this panel, `None` for the menu.
    pub fn title(&self) -> Option<&str> {
        match self {
            Panel::Menu => None,
            Panel::Game(title) => Some(title),
        }
    }
}

/// Size of the region a view is allowed to draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceArea {
    pub width: u16,
    pub height: u16,
}

impl SurfaceArea {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }
}

/// Visual state of an interactive control such as a quit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlStyle {
    #[default]
    Normal,
    Hovered,
}

/// Events queued for the launcher's UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherEvent {
    /// Activate the game with this title.
    Select(String),
    /// The quit control of this title fired; close it and show the menu.
    /// Ignored unless that title is still the active game.
    ReturnToMenu(String),
    /// The window was closed; release the shutdown gate.
    Shutdown,
}

/// Input actions the launcher understands, independent of the input device.
///
/// Keyboard bindings live in the input crate; the same actions are used by
/// tests to drive the launcher headlessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherAction {
    /// Move the highlight (menu) or cursor (game) up
    Up,
    /// Move the highlight (menu) or cursor (game) down
    Down,
    /// Move the highlight (menu) or cursor (game) left
    Left,
    /// Move the highlight (menu) or cursor (game) right
    Right,
    /// Select the highlighted icon
    Confirm,
    /// Press the running game's quit control
    Back,
    /// Close the launcher window
    CloseWindow,
}

impl LauncherAction {
    /// Whether this action only moves a highlight or cursor.
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            LauncherAction::Up | LauncherAction::Down | LauncherAction::Left | LauncherAction::Right
        )
    }
}

/// Pointer activity in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Moved { x: u16, y: u16 },
    Pressed { x: u16, y: u16 },
}

impl PointerEvent {
    pub fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Moved { x, y } | PointerEvent::Pressed { x, y } => (x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn rect_contains_does_not_overflow_at_edge() {
        let r = Rect::new(u16::MAX - 1, 0, 4, 1);
        assert!(r.contains(u16::MAX, 0));
    }

    #[test]
    fn only_moves_are_directional() {
        assert!(LauncherAction::Up.is_directional());
        assert!(LauncherAction::Right.is_directional());
        assert!(!LauncherAction::Back.is_directional());
        assert!(!LauncherAction::CloseWindow.is_directional());
    }

    #[test]
    fn panel_title_only_for_games() {
        assert_eq!(Panel::Menu.title(), None);
        assert_eq!(Panel::game("TicTacToe").title(), Some("TicTacToe"));
    }
}
