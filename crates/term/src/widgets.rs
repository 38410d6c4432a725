//! Window chrome, labels and buttons shared by the menu and game views.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{palette, ControlStyle, Rect};

/// Rows taken by the title bar at the top of the window.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Rows taken by the status line at the bottom of the window.
pub const STATUS_LINE_HEIGHT: u16 = 1;

pub fn chrome_style() -> CellStyle {
    CellStyle::new(palette::CHROME_FG, palette::CHROME_BG)
}

pub fn label_style() -> CellStyle {
    CellStyle::new(palette::TEXT, palette::BACKGROUND).bold()
}

pub fn hint_style() -> CellStyle {
    CellStyle::new(palette::TEXT_DIM, palette::BACKGROUND)
}

pub fn border_style() -> CellStyle {
    CellStyle::new(palette::BORDER, palette::BACKGROUND)
}

/// Style for a quit button in the given visual state.
pub fn quit_button_style(style: ControlStyle) -> CellStyle {
    match style {
        ControlStyle::Normal => CellStyle::new(palette::TEXT, palette::QUIT_BG),
        ControlStyle::Hovered => CellStyle::new(palette::CHROME_FG, palette::QUIT_HOVER_BG).bold(),
    }
}

/// Full-width bar on the top row with `title` centered.
pub fn draw_title_bar(fb: &mut FrameBuffer, title: &str) {
    let bar = Rect::new(0, 0, fb.width(), TITLE_BAR_HEIGHT);
    fb.fill_rect(bar, ' ', chrome_style());
    fb.put_str_centered(bar, 0, title, chrome_style().bold());
}

/// Full-width line on the bottom row, left aligned.
pub fn draw_status_line(fb: &mut FrameBuffer, text: &str, style: CellStyle) {
    if fb.height() == 0 {
        return;
    }
    let y = fb.height() - 1;
    fb.fill_rect(Rect::new(0, y, fb.width(), STATUS_LINE_HEIGHT), ' ', style);
    fb.put_str(1, y, text, style);
}

/// Area between the title bar and the status line.
pub fn content_area(width: u16, height: u16) -> Rect {
    let top = TITLE_BAR_HEIGHT;
    let h = height.saturating_sub(TITLE_BAR_HEIGHT + STATUS_LINE_HEIGHT);
    Rect::new(0, top, width, h)
}

/// Filled button with a centered label.
pub fn draw_button(fb: &mut FrameBuffer, area: Rect, label: &str, style: CellStyle) {
    if area.w == 0 || area.h == 0 {
        return;
    }
    fb.fill_rect(area, ' ', style);
    fb.put_str_centered(area, area.y + area.h / 2, label, style);
}

/// Bounds for a quit button in the top-right corner of `content`.
pub fn quit_button_rect(content: Rect, label: &str) -> Rect {
    let w = label.chars().count() as u16 + 4;
    let x = (content.x + content.w).saturating_sub(w + 1);
    Rect::new(x, content.y + 1, w.min(content.w), 3.min(content.h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_style_changes_when_hovered() {
        assert_ne!(
            quit_button_style(ControlStyle::Normal),
            quit_button_style(ControlStyle::Hovered)
        );
    }

    #[test]
    fn content_area_excludes_chrome() {
        assert_eq!(content_area(80, 24), Rect::new(0, 1, 80, 22));
        assert_eq!(content_area(80, 1).h, 0);
    }

    #[test]
    fn quit_button_hugs_right_edge() {
        let r = quit_button_rect(Rect::new(0, 1, 40, 20), "Quit");
        assert_eq!(r, Rect::new(31, 2, 8, 3));
    }

    #[test]
    fn title_bar_centers_title() {
        let mut fb = FrameBuffer::new(12, 3);
        draw_title_bar(&mut fb, "Arcade");
        assert_eq!(fb.row_text(0), "   Arcade   ");
    }
}
