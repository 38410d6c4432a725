//! TicTacToe (placeholder): an empty 3x3 grid with a movable cursor.
//!
//! This controller has no listener-wiring step and keeps the trait's no-op.

use crate::chrome;
use crate::core::{DisplaySurface, GameAssets, GameController, GameView, QuitControl};
use crate::term::{CellStyle, FrameBuffer};
use crate::types::{palette, LauncherAction, Panel, Rect, SurfaceArea, QUIT_LABEL};

pub const TITLE: &str = "TicTacToe";
pub const ICON_PATH: &str = "assets/icons/tictactoe.txt";

/// Grid side length.
pub const SIZE: usize = 3;

const CELL_W: u16 = 5;
const CELL_H: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicTacToeModel {
    pub cells: [[Option<Mark>; SIZE]; SIZE],
    /// (row, col)
    pub cursor: (usize, usize),
}

impl TicTacToeModel {
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            cursor: (1, 1),
        }
    }

    pub fn move_cursor(&mut self, action: LauncherAction) {
        let (row, col) = self.cursor;
        self.cursor = match action {
            LauncherAction::Up => (row.saturating_sub(1), col),
            LauncherAction::Down => ((row + 1).min(SIZE - 1), col),
            LauncherAction::Left => (row, col.saturating_sub(1)),
            LauncherAction::Right => (row, (col + 1).min(SIZE - 1)),
            _ => (row, col),
        };
    }
}

pub struct TicTacToeView {
    area: SurfaceArea,
    play: Rect,
    quit: QuitControl,
    shown: bool,
    grid: TicTacToeModel,
}

impl TicTacToeView {
    pub fn new() -> Self {
        Self {
            area: SurfaceArea::default(),
            play: Rect::default(),
            quit: QuitControl::new(QUIT_LABEL),
            shown: false,
            grid: TicTacToeModel::new(),
        }
    }

    pub fn update(&mut self, model: &TicTacToeModel) {
        self.grid = model.clone();
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    fn grid_origin(&self) -> (u16, u16) {
        let w = CELL_W * SIZE as u16 + (SIZE as u16 - 1);
        let h = CELL_H * SIZE as u16 + (SIZE as u16 - 1);
        chrome::centered(self.play, w, h)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer) {
        let (x0, y0) = self.grid_origin();
        let line = CellStyle::new(palette::BORDER, palette::BACKGROUND);
        let cell = CellStyle::new(palette::TEXT, palette::BOARD_BG);
        let cursor = CellStyle::new(palette::BACKGROUND, palette::MARK_CURSOR).bold();

        for row in 0..SIZE {
            for col in 0..SIZE {
                let x = x0 + col as u16 * (CELL_W + 1);
                let y = y0 + row as u16 * (CELL_H + 1);
                let area = Rect::new(x, y, CELL_W, CELL_H);
                let style = if self.grid.cursor == (row, col) { cursor } else { cell };
                fb.fill_rect(area, ' ', style);
                let mark = match self.grid.cells[row][col] {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => "",
                };
                fb.put_str_centered(area, y + CELL_H / 2, mark, style);

                if col + 1 < SIZE {
                    fb.fill_rect(Rect::new(x + CELL_W, y, 1, CELL_H), '│', line);
                }
                if row + 1 < SIZE {
                    fb.fill_rect(Rect::new(x, y + CELL_H, CELL_W, 1), '─', line);
                    if col + 1 < SIZE {
                        fb.put_char(x + CELL_W, y + CELL_H, '┼', line);
                    }
                }
            }
        }
    }
}

impl Default for TicTacToeView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for TicTacToeView {
    fn show_game(&mut self, _assets: &GameAssets) {
        self.shown = true;
    }

    fn close_game_view(&mut self) {
        self.shown = false;
        self.quit.set_hovered(false);
    }

    fn set_display_surface(&mut self, area: SurfaceArea) {
        self.area = area;
        self.play = chrome::layout(area, &mut self.quit);
    }

    fn render(&self, fb: &mut FrameBuffer) {
        chrome::draw_frame(fb, self.area, TITLE, &self.quit);
        self.draw_grid(fb);
        fb.put_str_centered(
            self.play,
            self.play.y,
            "Coming soon: marks cannot be placed yet",
            CellStyle::default().dim(),
        );
    }
}

pub struct TicTacToeController {
    view: TicTacToeView,
    model: TicTacToeModel,
    running: bool,
}

impl TicTacToeController {
    pub fn new(view: TicTacToeView, model: TicTacToeModel) -> Self {
        Self {
            view,
            model,
            running: false,
        }
    }

    pub fn model(&self) -> &TicTacToeModel {
        &self.model
    }
}

impl GameController for TicTacToeController {
    fn title(&self) -> &str {
        TITLE
    }

    fn initiate_game(&mut self) {
        self.model = TicTacToeModel::new();
        self.view.update(&self.model);
        tracing::debug!(title = TITLE, "board reset");
    }

    fn close_game(&mut self, surface: &mut dyn DisplaySurface) {
        self.view.close_game_view();
        surface.detach(&Panel::game(TITLE));
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn view(&self) -> &dyn GameView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut dyn GameView {
        &mut self.view
    }

    fn quit_control(&self) -> &QuitControl {
        &self.view.quit
    }

    fn quit_control_mut(&mut self) -> &mut QuitControl {
        &mut self.view.quit
    }

    fn handle_action(&mut self, action: LauncherAction) {
        if action == LauncherAction::Back {
            self.view.quit.press();
        } else if action.is_directional() {
            self.model.move_cursor(action);
            self.view.update(&self.model);
        }
    }
}
