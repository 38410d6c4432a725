//! One-shot shutdown gate.
//!
//! The main thread blocks on [`ShutdownGate::wait`] while the UI thread runs.
//! Closing the window triggers the paired [`ShutdownSignal`], which releases
//! the gate exactly once.

use tokio::sync::oneshot;

/// Why the gate opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The window-close action triggered the signal.
    Requested,
    /// The signal was dropped without being triggered (UI thread died).
    SignalDropped,
}

/// Sending half, held by the UI thread.
#[derive(Debug)]
pub struct ShutdownSignal {
    tx: Option<oneshot::Sender<()>>,
}

impl ShutdownSignal {
    /// Release the gate. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        match self.tx.take() {
            Some(tx) => {
                // The gate may already be gone if the main thread bailed out.
                let _ = tx.send(());
                tracing::info!("shutdown signalled");
                true
            }
            None => false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.tx.is_none()
    }
}

/// Receiving half, held by the main thread.
#[derive(Debug)]
pub struct ShutdownGate {
    rx: oneshot::Receiver<()>,
}

impl ShutdownGate {
    /// Block the calling thread until the signal fires or is dropped.
    ///
    /// Must not be called from inside an async runtime.
    pub fn wait(self) -> ShutdownReason {
        match self.rx.blocking_recv() {
            Ok(()) => ShutdownReason::Requested,
            Err(_) => ShutdownReason::SignalDropped,
        }
    }
}

pub fn shutdown_gate() -> (ShutdownSignal, ShutdownGate) {
    let (tx, rx) = oneshot::channel();
    (ShutdownSignal { tx: Some(tx) }, ShutdownGate { rx })
}
