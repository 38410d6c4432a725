//! IconMenu: the launcher's start screen.
//!
//! Games are laid out as a grid of bordered tiles, one per registered title,
//! in registration order. Layout is computed when the display area is handed
//! over so rendering and hit-testing agree on tile positions.

use crate::core::{GameAssets, GameView, MenuView};
use crate::fb::{CellStyle, FrameBuffer};
use crate::icons::IconArt;
use crate::types::{
    palette, LauncherAction, Rect, SurfaceArea, ICON_TILE_HEIGHT, ICON_TILE_WIDTH,
};
use crate::widgets;

const TILE_GAP: u16 = 2;
const MENU_TITLE: &str = "TUI Arcade";
const HINTS: &str = "←→↑↓ move   Enter play   Esc back   q quit";

struct Tile {
    title: String,
    art: IconArt,
    rect: Rect,
}

pub struct IconMenu {
    tiles: Vec<Tile>,
    highlight: usize,
    columns: u16,
    area: SurfaceArea,
    status: Option<String>,
}

impl IconMenu {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            highlight: 0,
            columns: 1,
            area: SurfaceArea::default(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Tile bounds, in display order.
    pub fn tile_rects(&self) -> Vec<Rect> {
        self.tiles.iter().map(|t| t.rect).collect()
    }

    fn layout(&mut self) {
        let content = widgets::content_area(self.area.width, self.area.height);
        let stride = ICON_TILE_WIDTH + TILE_GAP;
        self.columns = (content.w.saturating_sub(TILE_GAP) / stride).max(1);

        let top = content.y + 2;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            let col = i as u16 % self.columns;
            let row = i as u16 / self.columns;
            tile.rect = Rect::new(
                TILE_GAP + col * stride,
                top + row * (ICON_TILE_HEIGHT + 1),
                ICON_TILE_WIDTH,
                ICON_TILE_HEIGHT,
            );
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: &Tile, highlighted: bool) {
        let bg = CellStyle::new(palette::TEXT, palette::ICON_BG);
        let border = if highlighted {
            CellStyle::new(palette::ICON_HIGHLIGHT, palette::ICON_BG).bold()
        } else {
            CellStyle::new(palette::BORDER, palette::ICON_BG)
        };
        let r = tile.rect;
        fb.fill_rect(r, ' ', bg);
        fb.draw_box(r, border);

        let inner = Rect::new(r.x + 1, r.y, r.w.saturating_sub(2), r.h);
        for (dy, line) in tile.art.rows().iter().enumerate() {
            fb.put_str_centered(inner, r.y + 1 + dy as u16, line, bg);
        }
        let label = if highlighted { bg.bold() } else { bg };
        fb.put_str_centered(inner, r.y + r.h.saturating_sub(2), &tile.title, label);
    }
}

impl Default for IconMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for IconMenu {
    fn initialize_start_menu(&mut self) {
        self.status = None;
        if self.highlight >= self.tiles.len() {
            self.highlight = 0;
        }
        self.layout();
    }

    fn show_game(&mut self, _assets: &GameAssets) {}

    fn close_game_view(&mut self) {}

    fn set_display_surface(&mut self, area: SurfaceArea) {
        self.area = area;
        self.layout();
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.resize(self.area.width, self.area.height);
        fb.clear(CellStyle::default().cell(' '));
        widgets::draw_title_bar(fb, MENU_TITLE);

        let content = widgets::content_area(self.area.width, self.area.height);
        if self.tiles.is_empty() {
            fb.put_str_centered(content, content.y + 1, "No games installed", widgets::hint_style());
        } else {
            fb.put_str(TILE_GAP, content.y, "Select a game", widgets::label_style());
            for (i, tile) in self.tiles.iter().enumerate() {
                self.draw_tile(fb, tile, i == self.highlight);
            }
        }

        match &self.status {
            Some(status) => widgets::draw_status_line(
                fb,
                status,
                CellStyle::new(palette::CHROME_FG, palette::QUIT_BG),
            ),
            None => widgets::draw_status_line(fb, HINTS, widgets::chrome_style()),
        }
    }
}

impl MenuView for IconMenu {
    fn set_entries(&mut self, entries: Vec<GameAssets>) {
        self.tiles = entries
            .into_iter()
            .map(|assets| Tile {
                art: IconArt::resolve(&assets.icon_path, &assets.title),
                title: assets.title,
                rect: Rect::default(),
            })
            .collect();
        self.highlight = 0;
        self.layout();
    }

    fn move_highlight(&mut self, action: LauncherAction) {
        let len = self.tiles.len();
        if len == 0 {
            return;
        }
        let cols = self.columns as usize;
        let i = self.highlight;
        self.highlight = match action {
            LauncherAction::Left => (i + len - 1) % len,
            LauncherAction::Right => (i + 1) % len,
            LauncherAction::Up if i >= cols => i - cols,
            LauncherAction::Down if i + cols < len => i + cols,
            _ => i,
        };
    }

    fn highlighted(&self) -> Option<&str> {
        self.tiles.get(self.highlight).map(|t| t.title.as_str())
    }

    fn highlight_title(&mut self, title: &str) -> bool {
        match self.tiles.iter().position(|t| t.title == title) {
            Some(i) => {
                self.highlight = i;
                true
            }
            None => false,
        }
    }

    fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        self.tiles
            .iter()
            .find(|t| t.rect.contains(x, y))
            .map(|t| t.title.as_str())
    }

    fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_with(titles: &[&str]) -> IconMenu {
        let mut menu = IconMenu::new();
        menu.set_entries(
            titles
                .iter()
                .map(|t| GameAssets {
                    title: t.to_string(),
                    icon_path: format!("icons/{}.txt", t.to_lowercase()),
                })
                .collect(),
        );
        menu.set_display_surface(SurfaceArea::new(80, 24));
        menu
    }

    #[test]
    fn highlight_wraps_horizontally() {
        let mut menu = menu_with(&["Snake", "TicTacToe"]);
        assert_eq!(menu.highlighted(), Some("Snake"));
        menu.move_highlight(LauncherAction::Left);
        assert_eq!(menu.highlighted(), Some("TicTacToe"));
        menu.move_highlight(LauncherAction::Right);
        assert_eq!(menu.highlighted(), Some("Snake"));
    }

    #[test]
    fn vertical_moves_stay_in_grid() {
        let mut menu = menu_with(&["A", "B", "C", "D", "E"]);
        // 80 columns fit 3 tiles per row.
        assert_eq!(menu.columns, 3);
        menu.move_highlight(LauncherAction::Down);
        assert_eq!(menu.highlighted(), Some("D"));
        menu.move_highlight(LauncherAction::Right);
        menu.move_highlight(LauncherAction::Down);
        assert_eq!(menu.highlighted(), Some("E"));
        menu.move_highlight(LauncherAction::Up);
        assert_eq!(menu.highlighted(), Some("B"));
    }

    #[test]
    fn hit_test_matches_layout() {
        let menu = menu_with(&["Snake", "TicTacToe"]);
        let rects = menu.tile_rects();
        assert_eq!(menu.hit_test(rects[1].x + 1, rects[1].y + 1), Some("TicTacToe"));
        assert_eq!(menu.hit_test(0, 0), None);
    }

    #[test]
    fn status_replaces_hints() {
        let mut menu = menu_with(&["Snake"]);
        menu.set_status(Some("no game registered under title \"Chess\"".to_string()));
        let mut fb = FrameBuffer::new(80, 24);
        menu.render(&mut fb);
        assert!(fb.row_text(23).contains("Chess"));

        menu.initialize_start_menu();
        menu.render(&mut fb);
        assert!(fb.row_text(23).contains("Enter play"));
    }
}
