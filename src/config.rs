//! Visualizer configuration.
//!
//! Built from the command line in `main.rs`, validated once, then handed to
//! the playback controller and the render pipeline.

use crate::algorithms::Algorithm;
use crate::error::{Result, VizError};
use crate::playback::speed::{Speed, DEFAULT_SPEED};
use crate::theme;

/// Smallest value a generated bar can have.
pub const MIN_VALUE: i32 = 5;
/// Largest value a generated bar can have.
pub const MAX_VALUE: i32 = 100;
/// Bars in a fresh visualization.
pub const DEFAULT_ARRAY_SIZE: usize = 30;
/// Smallest array the size control allows.
pub const MIN_ARRAY_SIZE: usize = 5;
/// Largest array the size control allows.
pub const MAX_ARRAY_SIZE: usize = 100;

/// Everything needed to start a visualization.
#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub min_value: i32,
    pub max_value: i32,
    /// Slider position, see [`Speed`].
    pub speed: u64,
    pub theme: String,
    /// Seed for reproducible arrays. `None` uses the thread RNG.
    pub seed: Option<u64>,
    /// Start playing as soon as the UI is up.
    pub autoplay: bool,
    /// Print frames as text instead of driving the terminal UI.
    pub headless: bool,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            array_size: DEFAULT_ARRAY_SIZE,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            speed: DEFAULT_SPEED,
            theme: "default".to_string(),
            seed: None,
            autoplay: false,
            headless: false,
        }
    }
}

impl VizConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&self.array_size) {
            return Err(VizError::ArraySizeOutOfRange {
                size: self.array_size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }
        if self.min_value > self.max_value {
            return Err(VizError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Speed::new(self.speed)?;
        if theme::get_preset(&self.theme).is_none() {
            return Err(VizError::UnknownTheme(self.theme.clone()));
        }
        Ok(())
    }

    /// The configured speed, falling back to the default when out of range.
    pub fn speed(&self) -> Speed {
        Speed::new(self.speed).unwrap_or_default()
    }
}
