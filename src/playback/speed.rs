//! Playback speed.
//!
//! Speed is stored as a slider position where right means faster. The delay
//! between steps is `510 - position` milliseconds, so the slider range
//! `10..=500` maps to delays from 500 ms down to 10 ms.

use std::time::Duration;

use crate::error::{Result, VizError};

/// Slowest slider position.
pub const MIN_SPEED: u64 = 10;
/// Fastest slider position.
pub const MAX_SPEED: u64 = 500;
/// Slider increment.
pub const SPEED_STEP: u64 = 10;
/// Default position, a 100 ms delay.
pub const DEFAULT_SPEED: u64 = 410;

const DELAY_BASE_MS: u64 = 510;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(u64);

impl Speed {
    /// Speed at a validated slider position.
    pub fn new(position: u64) -> Result<Self> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&position) {
            return Err(VizError::SpeedOutOfRange {
                speed: position,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(Self(position))
    }

    pub fn position(self) -> u64 {
        self.0
    }

    /// Delay between two automatic advances.
    pub fn delay(self) -> Duration {
        Duration::from_millis(DELAY_BASE_MS - self.0)
    }

    /// Display multiplier, rounded to one decimal (`410` shows as `82.0`).
    pub fn multiplier(self) -> f64 {
        let raw = self.0 as f64 / 5.0;
        (raw * 10.0).round() / 10.0
    }

    /// One slider step faster, saturating.
    pub fn faster(self) -> Self {
        Self((self.0 + SPEED_STEP).min(MAX_SPEED))
    }

    /// One slider step slower, saturating.
    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(SPEED_STEP).max(MIN_SPEED))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}
