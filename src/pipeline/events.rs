//! Event channel and input thread.
//!
//! ```text
//!  input thread ── crossterm::poll/read ──┐
//!                                         ├─ mpsc ─► main thread: recv() → dispatch
//!  timer thread ── sleep(delay) → Tick ───┘
//! ```
//!
//! The main thread blocks in `recv()` and does no work while idle. Reactive
//! state is only touched on the main thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent};

/// Everything that can wake the main thread.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input (key, resize, ...).
    Input(CrosstermEvent),
    /// Playback timer fired.
    Tick,
    /// Shut down the loop.
    Stop,
}

// =============================================================================
// Event Channel
// =============================================================================

/// Many producers (input thread, timer), one consumer (main thread).
pub struct EventChannel {
    pub tx: Sender<AppEvent>,
    pub rx: Receiver<AppEvent>,
}

impl EventChannel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Block until an event arrives.
    pub fn recv(&self) -> Option<AppEvent> {
        self.rx.recv().ok()
    }

    #[cfg(test)]
    pub(crate) fn recv_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Input Thread
// =============================================================================

/// Reads terminal input on its own thread and forwards it to the channel.
///
/// `poll` sleeps in the kernel until input arrives; the timeout only bounds
/// how long shutdown takes.
pub struct InputThread {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

impl InputThread {
    pub fn spawn(tx: Sender<AppEvent>) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = thread::Builder::new()
            .name("sortviz-input".to_string())
            .spawn(move || Self::run_loop(flag, tx))?;

        Ok(Self {
            handle: Some(handle),
            running,
        })
    }

    fn run_loop(running: Arc<AtomicBool>, tx: Sender<AppEvent>) {
        while running.load(Ordering::SeqCst) {
            match event::poll(SHUTDOWN_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(AppEvent::Input(ev)).is_err() {
                            break;
                        }
                    }
                    // Transient (e.g. interrupted by a signal); keep reading.
                    Err(err) => tracing::debug!(%err, "terminal read failed"),
                },
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(%err, "terminal poll failed, stopping");
                    let _ = tx.send(AppEvent::Stop);
                    break;
                }
            }
        }
    }

    /// Stop and join. Returns within one poll timeout.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst) && self.handle.is_some()
    }
}

impl Drop for InputThread {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================
