//! Bundled game modules.
//!
//! Both games are placeholders: they build a real (model, view, controller)
//! triad, render a static board with a working quit control, and accept
//! cursor input, but implement no rules. They exist so the launcher has
//! something to host and so the triad lifecycle can be exercised end to end.
//!
//! - [`snake`]: Snake, with listener wiring
//! - [`tictactoe`]: TicTacToe, which has no listeners to wire
//! - [`catalog`]: the default registry containing both

pub mod catalog;
pub mod chrome;
pub mod snake;
pub mod tictactoe;

pub use tui_arcade_core as core;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use catalog::default_registry;
pub use snake::{SnakeController, SnakeModel, SnakeView};
pub use tictactoe::{TicTacToeController, TicTacToeModel, TicTacToeView};
