//! Launcher color constants.

use crate::fb::Rgb;

pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
pub const TEXT: Rgb = Rgb::new(220, 220, 220);
pub const TEXT_DIM: Rgb = Rgb::new(130, 130, 140);
pub const BORDER: Rgb = Rgb::new(200, 200, 200);

/// Window chrome (title bar and status line).
pub const CHROME_BG: Rgb = Rgb::new(30, 30, 40);
pub const CHROME_FG: Rgb = Rgb::new(240, 240, 240);

/// Icon tiles in the menu.
pub const ICON_BG: Rgb = Rgb::new(25, 25, 35);
pub const ICON_HIGHLIGHT: Rgb = Rgb::new(80, 220, 220);

/// Quit control, resting and hovered.
pub const QUIT_BG: Rgb = Rgb::new(120, 30, 30);
pub const QUIT_HOVER_BG: Rgb = Rgb::new(220, 80, 80);

/// Game board background and accents used by placeholder games.
pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub const BOARD_GRID: Rgb = Rgb::new(90, 90, 100);
pub const SNAKE_BODY: Rgb = Rgb::new(100, 220, 120);
pub const FOOD: Rgb = Rgb::new(220, 80, 80);
pub const MARK_CURSOR: Rgb = Rgb::new(240, 220, 80);
