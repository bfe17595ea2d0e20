//! Playback timer.
//!
//! A background thread that sleeps for the current delay and then wakes the
//! main thread with [`AppEvent::Tick`]. The controller itself never leaves the
//! main thread; the timer only sends wake-ups.
//!
//! The delay is read at the start of every sleep, so speed changes apply to
//! the next tick without restarting the thread.
//!
//! Each run gets its own running flag. A thread from an earlier run that is
//! still mid-sleep sees its own flag cleared and exits without sending, so a
//! quick stop/start never produces double ticks.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::pipeline::events::AppEvent;

use super::speed::Speed;

pub struct PlaybackTimer {
    tx: Sender<AppEvent>,
    interval_ms: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackTimer {
    pub fn new(tx: Sender<AppEvent>, speed: Speed) -> Self {
        Self {
            tx,
            interval_ms: Arc::new(AtomicU64::new(delay_ms(speed))),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start ticking. No-op when already running.
    pub fn start(&mut self) -> io::Result<()> {
        if self.is_running() {
            return Ok(());
        }

        let running = Arc::new(AtomicBool::new(true));
        self.running = running.clone();
        let interval_ms = self.interval_ms.clone();
        let tx = self.tx.clone();

        let handle = thread::Builder::new()
            .name("sortviz-timer".to_string())
            .spawn(move || {
                while running.load(Ordering::SeqCst) {
                    let ms = interval_ms.load(Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(ms));
                    if !running.load(Ordering::SeqCst) {
                        break;
                    }
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
            })?;

        // The old thread, if any, exits on its own flag; don't block on it.
        self.handle = Some(handle);
        tracing::trace!(interval_ms = self.interval_ms.load(Ordering::SeqCst), "timer started");
        Ok(())
    }

    /// Stop ticking. The thread exits after its current sleep.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::trace!("timer stopped");
        }
        self.handle = None;
    }

    /// Change the delay used for the next sleep.
    pub fn set_speed(&self, speed: Speed) {
        self.interval_ms.store(delay_ms(speed), Ordering::SeqCst);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.load(Ordering::SeqCst))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst) && self.handle.is_some()
    }

    /// Start or stop so the timer matches `playing`.
    pub fn sync(&mut self, playing: bool) -> io::Result<()> {
        match (playing, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => {
                self.stop();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn delay_ms(speed: Speed) -> u64 {
    speed.delay().as_millis() as u64
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::events::EventChannel;
    use crate::playback::speed::MIN_SPEED;

    #[test]
    fn test_timer_sends_ticks() {
        let channel = EventChannel::new();
        let mut timer = PlaybackTimer::new(channel.sender(), Speed::new(500).unwrap());

        timer.start().unwrap();
        assert!(timer.is_running());

        let event = channel.recv_timeout(Duration::from_millis(500));
        assert!(matches!(event, Some(AppEvent::Tick)));
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_timer_stop_silences_ticks() {
        let channel = EventChannel::new();
        let mut timer = PlaybackTimer::new(channel.sender(), Speed::new(MIN_SPEED).unwrap());

        timer.start().unwrap();
        timer.stop();

        // The thread is mid-sleep (500 ms) and must exit without sending.
        assert!(channel.recv_timeout(Duration::from_millis(700)).is_none());
    }

    #[test]
    fn test_set_speed_updates_interval() {
        let channel = EventChannel::new();
        let timer = PlaybackTimer::new(channel.sender(), Speed::default());
        assert_eq!(timer.interval(), Duration::from_millis(100));

        timer.set_speed(Speed::new(500).unwrap());
        assert_eq!(timer.interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_sync_follows_playing_flag() {
        let channel = EventChannel::new();
        let mut timer = PlaybackTimer::new(channel.sender(), Speed::default());

        timer.sync(true).unwrap();
        assert!(timer.is_running());
        timer.sync(true).unwrap();
        assert!(timer.is_running());
        timer.sync(false).unwrap();
        assert!(!timer.is_running());
    }
}
