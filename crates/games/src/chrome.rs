//! Frame shared by the bundled game views: title bar, quit button, hints.

use crate::core::QuitControl;
use crate::term::widgets;
use crate::term::{CellStyle, FrameBuffer};
use crate::types::{Rect, SurfaceArea};

const HINTS: &str = "Esc back to menu   Ctrl+C quit";

/// Lay out the quit control for `area` and return the remaining play area.
pub fn layout(area: SurfaceArea, quit: &mut QuitControl) -> Rect {
    let content = widgets::content_area(area.width, area.height);
    let button = widgets::quit_button_rect(content, quit.label());
    quit.set_bounds(button);

    let top = button.y + button.h + 1;
    Rect::new(
        content.x,
        top,
        content.w,
        (content.y + content.h).saturating_sub(top),
    )
}

/// Clear `fb` to `area` and draw the title bar, quit button and hint line.
pub fn draw_frame(fb: &mut FrameBuffer, area: SurfaceArea, title: &str, quit: &QuitControl) {
    fb.resize(area.width, area.height);
    fb.clear(CellStyle::default().cell(' '));
    widgets::draw_title_bar(fb, title);
    widgets::draw_button(
        fb,
        quit.bounds(),
        quit.label(),
        widgets::quit_button_style(quit.style()),
    );
    widgets::draw_status_line(fb, HINTS, widgets::chrome_style());
}

/// Top-left corner that centers a `w` x `h` block inside `area`.
pub fn centered(area: Rect, w: u16, h: u16) -> (u16, u16) {
    (
        area.x + area.w.saturating_sub(w) / 2,
        area.y + area.h.saturating_sub(h) / 2,
    )
}
