//! Terminal game launcher (default binary).
//!
//! The UI runs on its own thread and owns the terminal; the main thread only
//! waits on the shutdown gate and exits once the window has been closed.

use std::fs::File;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_arcade::core::{shutdown_gate, Launcher, LauncherConfig, ShutdownReason, ShutdownSignal};
use tui_arcade::games::default_registry;
use tui_arcade::input::{handle_key_event, handle_mouse_event};
use tui_arcade::term::{FrameBuffer, IconMenu, TerminalRenderer, TerminalSurface};
use tui_arcade::types::SurfaceArea;

fn main() -> Result<()> {
    let config = LauncherConfig::from_env();
    init_logging(&config)?;

    let (signal, gate) = shutdown_gate();
    let ui = thread::Builder::new()
        .name("ui".to_string())
        .spawn(move || ui_thread(config, signal))
        .context("failed to spawn UI thread")?;

    let reason = gate.wait();
    let ui_result = ui.join().map_err(|_| anyhow!("UI thread panicked"))?;
    tracing::info!(?reason, "launcher exiting");

    match reason {
        ShutdownReason::Requested => ui_result,
        ShutdownReason::SignalDropped => {
            ui_result?;
            Err(anyhow!("UI stopped without closing the window"))
        }
    }
}

/// Log to a file: the terminal belongs to the UI.
fn init_logging(config: &LauncherConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn ui_thread(config: LauncherConfig, signal: ShutdownSignal) -> Result<()> {
    let registry = default_registry()?;
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut launcher = Launcher::new(registry, TerminalSurface::new(w, h), IconMenu::new(), signal);

    if let Some(title) = &config.start_game {
        if let Err(err) = launcher.on_select(title) {
            tracing::warn!(title = %title, error = %err, "start game unavailable");
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter(config.mouse)?;

    let result = run(&mut term, &mut launcher, config.tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    launcher: &mut Launcher<TerminalSurface, IconMenu>,
    tick_ms: u32,
) -> Result<()> {
    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut fb = FrameBuffer::new(0, 0);

    while !launcher.is_closed() {
        let frame_start = Instant::now();

        // Render.
        if launcher.switcher_mut().surface_mut().take_swapped() {
            term.invalidate();
        }
        launcher.switcher().render_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = tick_duration
            .checked_sub(frame_start.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let in_game = launcher.switcher().active_title().is_some();
                    if let Some(action) = handle_key_event(key, in_game) {
                        launcher.handle_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        launcher.handle_pointer(pointer);
                    }
                }
                Event::Resize(w, h) => launcher.switcher_mut().resize(SurfaceArea::new(w, h)),
                _ => {}
            }
        }

        launcher.pump();
    }

    Ok(())
}
