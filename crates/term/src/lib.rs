//! Terminal presentation layer for the launcher.
//!
//! Everything the session manager treats as an external collaborator lives
//! here: the diffing terminal renderer, the icon menu, window chrome and
//! widget styling, and the display surface backed by the terminal window.
//!
//! Views render into a plain framebuffer (see [`fb`]) that is flushed to the
//! terminal by [`TerminalRenderer`]; no widget toolkit is involved.

pub mod icons;
pub mod menu;
pub mod renderer;
pub mod surface;
pub mod widgets;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;
pub use tui_arcade_types::fb;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use icons::IconArt;
pub use menu::IconMenu;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
