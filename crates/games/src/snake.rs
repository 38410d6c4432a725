//! Snake (placeholder): a static board with a snake, a food pellet and a
//! heading indicator that follows the arrow keys.

use anyhow::ensure;

use crate::chrome;
use crate::core::{DisplaySurface, GameAssets, GameController, GameView, QuitControl};
use crate::term::{CellStyle, FrameBuffer};
use crate::types::{palette, LauncherAction, Panel, Rect, SurfaceArea, QUIT_LABEL};

pub const TITLE: &str = "Snake";
pub const ICON_PATH: &str = "assets/icons/snake.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    fn arrow(self) -> char {
        match self {
            Heading::Up => '▲',
            Heading::Down => '▼',
            Heading::Left => '◀',
            Heading::Right => '▶',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeModel {
    pub width: u16,
    pub height: u16,
    /// Head first.
    pub body: Vec<(u16, u16)>,
    pub food: (u16, u16),
    pub heading: Heading,
}

impl SnakeModel {
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        ensure!(width >= 8 && height >= 4, "snake board {width}x{height} is too small");
        let y = height / 2;
        let body = (0..4).map(|i| (width / 2 - i, y)).collect();
        Ok(Self {
            width,
            height,
            body,
            food: (width - 2, 1),
            heading: Heading::Right,
        })
    }
}

pub struct SnakeView {
    area: SurfaceArea,
    play: Rect,
    quit: QuitControl,
    shown: Option<GameAssets>,
    board: Option<SnakeModel>,
}

impl SnakeView {
    pub fn new() -> Self {
        Self {
            area: SurfaceArea::default(),
            play: Rect::default(),
            quit: QuitControl::new(QUIT_LABEL),
            shown: None,
            board: None,
        }
    }

    /// Copy the model state the view draws from.
    pub fn update(&mut self, model: &SnakeModel) {
        self.board = Some(model.clone());
    }

    pub fn is_shown(&self) -> bool {
        self.shown.is_some()
    }

    pub fn quit(&self) -> &QuitControl {
        &self.quit
    }

    fn draw_board(&self, fb: &mut FrameBuffer, board: &SnakeModel) {
        let (x0, y0) = chrome::centered(self.play, board.width + 2, board.height + 2);
        let frame = Rect::new(x0, y0, board.width + 2, board.height + 2);
        let bg = CellStyle::new(palette::BOARD_GRID, palette::BOARD_BG);
        fb.fill_rect(Rect::new(x0 + 1, y0 + 1, board.width, board.height), '·', bg.dim());
        fb.draw_box(frame, CellStyle::new(palette::BORDER, palette::BACKGROUND));

        let snake = CellStyle::new(palette::SNAKE_BODY, palette::BOARD_BG).bold();
        for (i, &(x, y)) in board.body.iter().enumerate() {
            let ch = if i == 0 { board.heading.arrow() } else { '█' };
            fb.put_char(x0 + 1 + x, y0 + 1 + y, ch, snake);
        }
        let (fx, fy) = board.food;
        fb.put_char(x0 + 1 + fx, y0 + 1 + fy, '●', CellStyle::new(palette::FOOD, palette::BOARD_BG));
    }
}

impl Default for SnakeView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for SnakeView {
    fn show_game(&mut self, assets: &GameAssets) {
        self.shown = Some(assets.clone());
    }

    fn close_game_view(&mut self) {
        self.shown = None;
        self.quit.set_hovered(false);
    }

    fn set_display_surface(&mut self, area: SurfaceArea) {
        self.area = area;
        self.play = chrome::layout(area, &mut self.quit);
    }

    fn render(&self, fb: &mut FrameBuffer) {
        let title = self.shown.as_ref().map_or(TITLE, |a| a.title.as_str());
        chrome::draw_frame(fb, self.area, title, &self.quit);
        if let Some(board) = &self.board {
            self.draw_board(fb, board);
        }
        let note = "Coming soon: the snake does not move yet";
        fb.put_str_centered(self.play, self.play.y, note, CellStyle::default().dim());
    }
}

pub struct SnakeController {
    view: SnakeView,
    model: SnakeModel,
    running: bool,
    listening: bool,
}

impl SnakeController {
    pub fn new(view: SnakeView, model: SnakeModel) -> Self {
        Self {
            view,
            model,
            running: false,
            listening: false,
        }
    }

    pub fn model(&self) -> &SnakeModel {
        &self.model
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl GameController for SnakeController {
    fn title(&self) -> &str {
        TITLE
    }

    fn initiate_game(&mut self) {
        self.view.update(&self.model);
    }

    fn close_game(&mut self, surface: &mut dyn DisplaySurface) {
        self.view.close_game_view();
        surface.detach(&Panel::game(TITLE));
        self.listening = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn wire_listeners(&mut self) {
        self.listening = true;
        tracing::debug!(title = TITLE, "arrow keys wired to heading");
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
        if !self.listening {
            return;
        }
        let heading = match action {
            LauncherAction::Up => Heading::Up,
            LauncherAction::Down => Heading::Down,
            LauncherAction::Left => Heading::Left,
            LauncherAction::Right => Heading::Right,
            LauncherAction::Back => {
                self.view.quit.press();
                return;
            }
            _ => return,
        };
        self.model.heading = heading;
        self.view.update(&self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SurfaceSlot;

    fn controller() -> SnakeController {
        SnakeController::new(SnakeView::new(), SnakeModel::new(20, 10).unwrap())
    }

    #[test]
    fn model_rejects_tiny_boards() {
        assert!(SnakeModel::new(4, 4).is_err());
        let model = SnakeModel::new(20, 10).unwrap();
        assert_eq!(model.body.len(), 4);
        assert_eq!(model.body[0], (10, 5));
    }

    #[test]
    fn arrows_only_turn_the_head_when_listening() {
        let mut c = controller();
        c.handle_action(LauncherAction::Up);
        assert_eq!(c.model().heading, Heading::Right);

        c.wire_listeners();
        c.handle_action(LauncherAction::Up);
        assert_eq!(c.model().heading, Heading::Up);
        assert_eq!(c.model().body[0], (10, 5));
    }

    #[test]
    fn close_detaches_view_and_forgets_assets() {
        let mut c = controller();
        let mut surface = SurfaceSlot::new(SurfaceArea::new(80, 24));
        surface.attach(Panel::game(TITLE));
        c.view_mut().show_game(&GameAssets {
            title: TITLE.to_string(),
            icon_path: ICON_PATH.to_string(),
        });
        c.close_game(&mut surface);
        assert_eq!(surface.attached(), None);
        assert!(!c.view.is_shown());
    }

    #[test]
    fn renders_board_and_quit_button() {
        let mut c = controller();
        c.view_mut().set_display_surface(SurfaceArea::new(80, 24));
        c.initiate_game();
        let mut fb = FrameBuffer::new(1, 1);
        c.view().render(&mut fb);
        let text = fb.text();
        assert!(text.contains("Snake"));
        assert!(text.contains("Quit"));
        assert!(text.contains('▶'));
        assert!(text.contains('●'));
    }
}
