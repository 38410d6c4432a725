//! Recording fakes shared by the launcher integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;
use tui_arcade::core::{
    DisplaySurface, GameAssets, GameController, GameDescriptor, GameRegistry, GameView, MenuView,
    QuitControl, SurfaceSlot,
};
use tui_arcade::types::{FrameBuffer, LauncherAction, Panel, Rect, SurfaceArea};

/// Shared, ordered record of lifecycle calls.
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// The quit button of every fake game sits here.
pub const QUIT_RECT: Rect = Rect::new(70, 1, 8, 3);

pub struct RecordingSurface {
    slot: SurfaceSlot,
    log: Log,
}

impl RecordingSurface {
    pub fn new(log: Log) -> Self {
        Self {
            slot: SurfaceSlot::new(SurfaceArea::new(80, 24)),
            log,
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn attach(&mut self, panel: Panel) {
        self.log.borrow_mut().push(format!("attach {}", panel_name(&panel)));
        self.slot.attach(panel);
    }

    fn detach(&mut self, panel: &Panel) -> bool {
        let detached = self.slot.detach(panel);
        if detached {
            self.log.borrow_mut().push(format!("detach {}", panel_name(panel)));
        }
        detached
    }

    fn attached(&self) -> Option<&Panel> {
        self.slot.attached()
    }

    fn area(&self) -> SurfaceArea {
        self.slot.area()
    }

    fn resize(&mut self, area: SurfaceArea) {
        self.slot.resize(area);
    }
}

fn panel_name(panel: &Panel) -> &str {
    panel.title().unwrap_or("menu")
}

#[derive(Default)]
pub struct FakeMenu {
    pub entries: Vec<String>,
    pub highlight: usize,
    pub status: Option<String>,
    pub resets: usize,
}

impl GameView for FakeMenu {
    fn initialize_start_menu(&mut self) {
        self.resets += 1;
        self.status = None;
    }

    fn show_game(&mut self, _assets: &GameAssets) {}

    fn close_game_view(&mut self) {}

    fn set_display_surface(&mut self, _area: SurfaceArea) {}

    fn render(&self, fb: &mut FrameBuffer) {
        fb.resize(80, 24);
        fb.put_str(0, 0, "MENU", Default::default());
    }
}

impl MenuView for FakeMenu {
    fn set_entries(&mut self, entries: Vec<GameAssets>) {
        self.entries = entries.into_iter().map(|a| a.title).collect();
    }

    fn move_highlight(&mut self, action: LauncherAction) {
        let len = self.entries.len().max(1);
        match action {
            LauncherAction::Right | LauncherAction::Down => self.highlight = (self.highlight + 1) % len,
            LauncherAction::Left | LauncherAction::Up => self.highlight = (self.highlight + len - 1) % len,
            _ => {}
        }
    }

    fn highlighted(&self) -> Option<&str> {
        self.entries.get(self.highlight).map(String::as_str)
    }

    fn highlight_title(&mut self, title: &str) -> bool {
        match self.entries.iter().position(|t| t == title) {
            Some(i) => {
                self.highlight = i;
                true
            }
            None => false,
        }
    }

    /// Entry `i` occupies row `i + 2`, columns 0..10.
    fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        if x >= 10 || y < 2 {
            return None;
        }
        self.entries.get((y - 2) as usize).map(String::as_str)
    }

    fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }
}

pub struct FakeView {
    title: String,
    log: Log,
    quit: QuitControl,
}

impl GameView for FakeView {
    fn show_game(&mut self, assets: &GameAssets) {
        self.log.borrow_mut().push(format!("show {}", assets.title));
    }

    fn close_game_view(&mut self) {
        self.log.borrow_mut().push(format!("close_view {}", self.title));
    }

    fn set_display_surface(&mut self, _area: SurfaceArea) {
        self.quit.set_bounds(QUIT_RECT);
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.resize(80, 24);
        fb.put_str(0, 0, &self.title, Default::default());
    }
}

pub struct FakeGame {
    title: String,
    log: Log,
    view: FakeView,
    running: bool,
    /// Leave the view attached on close, like a misbehaving module.
    sticky_view: bool,
}

impl GameController for FakeGame {
    fn title(&self) -> &str {
        &self.title
    }

    fn initiate_game(&mut self) {
        self.log.borrow_mut().push(format!("initiate {}", self.title));
    }

    fn close_game(&mut self, surface: &mut dyn DisplaySurface) {
        self.log.borrow_mut().push(format!("close {}", self.title));
        self.view.close_game_view();
        if !self.sticky_view {
            surface.detach(&Panel::game(self.title.clone()));
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn wire_listeners(&mut self) {
        self.log.borrow_mut().push(format!("wire {}", self.title));
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
}

/// Model factory logs `build {title}`, view factory `view {title}`,
/// controller factory `controller {title}`.
fn descriptor(title: &str, log: &Log, sticky_view: bool, controller_fails: bool) -> GameDescriptor {
    let (model_log, view_log, game_title) = (log.clone(), log.clone(), title.to_string());
    let view_title = game_title.clone();
    GameDescriptor::new(
        title,
        format!("icons/{}.txt", title.to_lowercase()),
        move || {
            model_log.borrow_mut().push(format!("build {game_title}"));
            Ok(game_title.clone())
        },
        move || {
            view_log.borrow_mut().push(format!("view {view_title}"));
            Ok(FakeView {
                title: view_title.clone(),
                log: view_log.clone(),
                quit: QuitControl::new("Quit"),
            })
        },
        move |view: FakeView, title: String| {
            view.log.borrow_mut().push(format!("controller {title}"));
            if controller_fails {
                bail!("controller for {title} refused to start");
            }
            Ok(FakeGame {
                log: view.log.clone(),
                title,
                view,
                running: false,
                sticky_view,
            })
        },
    )
}

pub fn fake_descriptor(title: &str, log: &Log) -> GameDescriptor {
    descriptor(title, log, false, false)
}

pub fn sticky_descriptor(title: &str, log: &Log) -> GameDescriptor {
    descriptor(title, log, true, false)
}

/// A game whose model and view build but whose controller factory fails.
pub fn failing_controller_descriptor(title: &str, log: &Log) -> GameDescriptor {
    descriptor(title, log, false, true)
}

/// A game whose model factory always fails.
pub fn broken_descriptor(title: &str) -> GameDescriptor {
    GameDescriptor::new(
        title,
        "icons/broken.txt",
        || -> anyhow::Result<()> { bail!("model refused to load") },
        || Ok(()),
        |_view: (), _model: ()| -> anyhow::Result<FakeGame> { unreachable!("model factory fails first") },
    )
}

/// Registry with "Snake" and "TicTacToe" fakes.
pub fn fake_registry(log: &Log) -> GameRegistry {
    let mut registry = GameRegistry::new();
    registry.register(fake_descriptor("Snake", log)).unwrap();
    registry.register(fake_descriptor("TicTacToe", log)).unwrap();
    registry
}
