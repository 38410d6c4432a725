//! Terminal input module.
//!
//! This module is intentionally independent of the session manager. It maps
//! `crossterm` key and mouse events into [`crate::types::LauncherAction`] and
//! [`crate::types::PointerEvent`] so the launcher can be driven headlessly in
//! tests with the same actions a terminal produces.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{handle_key_event, handle_mouse_event, is_window_close};
