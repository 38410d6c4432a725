//! TUI Arcade (workspace facade crate).
//!
//! A terminal launcher that hosts one game at a time. The implementation
//! lives in dedicated crates under `crates/`; this package re-exports them as
//! `tui_arcade::{core,games,input,term,types}`.

pub use tui_arcade_core as core;
pub use tui_arcade_games as games;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
