//! Launcher session manager - pure, single-threaded and testable
//!
//! This module decides which game module is active, builds a module's
//! (model, view, controller) triad the first time it is selected, tears the
//! previous one down, and routes every game's quit control back to the menu.
//! It has **no dependencies** on the terminal or any concrete game:
//!
//! - **Host-agnostic**: views draw into a [`FrameBuffer`](crate::types::FrameBuffer)
//!   and the display area is any [`DisplaySurface`] implementation
//! - **Typed**: each [`GameDescriptor`] is built from concrete model, view and
//!   controller types, so nothing is ever downcast
//! - **Testable**: fake surfaces and controllers drive every transition
//!
//! # Module Structure
//!
//! - [`module`]: view and controller capabilities a game must provide
//! - [`descriptor`]: immutable catalog entries with typed factories
//! - [`registry`]: catalog plus the set of live triads
//! - [`switcher`]: the `Idle` / `Active(title)` state machine
//! - [`exit_hook`]: quit controls and the hooks that return to the menu
//! - [`launcher`]: input and event dispatch around the switcher
//! - [`shutdown`]: one-shot gate the main thread blocks on
//! - [`surface`]: the shared display area contract
//! - [`config`]: environment-driven launcher settings
//!
//! # Invariants
//!
//! - At most one live triad reports `is_running() == true` at any time,
//!   including in the middle of a switch (the outgoing module is closed before
//!   the incoming one is started)
//! - Re-selecting the active title is a no-op
//! - The display surface holds at most one panel; the menu whenever no game
//!   is active
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{GameRegistry, SessionState};
//!
//! let registry = GameRegistry::new();
//! assert!(registry.list_titles().is_empty());
//! assert_eq!(SessionState::Idle.active_title(), None);
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod exit_hook;
pub mod launcher;
pub mod module;
pub mod registry;
pub mod shutdown;
pub mod surface;
pub mod switcher;

pub use tui_arcade_types as types;

pub use config::LauncherConfig;
pub use descriptor::{GameAssets, GameDescriptor};
pub use error::LauncherError;
pub use exit_hook::{ExitHook, ExitHookBinder, QuitControl};
pub use launcher::Launcher;
pub use module::{GameController, GameView, MenuView};
pub use registry::{GameRegistry, GameTriad};
pub use shutdown::{shutdown_gate, ShutdownGate, ShutdownReason, ShutdownSignal};
pub use surface::{DisplaySurface, SurfaceSlot};
pub use switcher::{SessionState, SessionSwitcher, SwitchOutcome};
