//! Playback controller.
//!
//! Holds the input array, the lazily generated trace, and a position in it.
//! Knows nothing about time: the timer asks it to [`tick`] and the renderer
//! asks it for the [`current_frame`].
//!
//! The trace is generated on first demand (start or step forward) and dropped
//! whenever the array or the algorithm changes. A replacement is always built
//! completely before it is swapped in, so readers never see a mix.
//!
//! [`tick`]: PlaybackController::tick
//! [`current_frame`]: PlaybackController::current_frame

use std::borrow::Cow;
use std::rc::Rc;

use crate::algorithms::Algorithm;
use crate::config::{VizConfig, MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE};
use crate::error::{Result, VizError};
use crate::generator::ArraySource;
use crate::trace::{Step, Trace};

use super::speed::Speed;

/// How much the size control moves per key press.
pub const ARRAY_SIZE_STEP: usize = 5;

// =============================================================================
// Commands
// =============================================================================

/// User-level playback operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start when stopped, pause when playing.
    TogglePlay,
    StepForward,
    ResetToBeginning,
    NewArray,
    SelectAlgorithm(Algorithm),
    NextAlgorithm,
    PreviousAlgorithm,
    Faster,
    Slower,
    GrowArray,
    ShrinkArray,
}

/// Where playback stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not playing, end not reached.
    Stopped,
    Playing,
    /// Last step reached.
    Done,
}

// =============================================================================
// Controller
// =============================================================================

pub struct PlaybackController {
    algorithm: Algorithm,
    array: Vec<i32>,
    trace: Option<Rc<Trace>>,
    current: usize,
    playing: bool,
    done: bool,
    array_size: usize,
    min_value: i32,
    max_value: i32,
    speed: Speed,
    source: ArraySource,
}

impl PlaybackController {
    /// Controller with a freshly generated array.
    pub fn new(config: &VizConfig) -> Result<Self> {
        let mut source = ArraySource::new(config.seed);
        let array = source.generate(config.array_size, config.min_value, config.max_value)?;

        Ok(Self {
            algorithm: config.algorithm,
            array,
            trace: None,
            current: 0,
            playing: false,
            done: false,
            array_size: config.array_size,
            min_value: config.min_value,
            max_value: config.max_value,
            speed: config.speed(),
            source,
        })
    }

    /// Controller over a fixed input array, default settings otherwise.
    pub fn with_array(algorithm: Algorithm, array: Vec<i32>) -> Self {
        let config = VizConfig::default();
        Self {
            algorithm,
            array_size: array.len(),
            array,
            trace: None,
            current: 0,
            playing: false,
            done: false,
            min_value: config.min_value,
            max_value: config.max_value,
            speed: config.speed(),
            source: ArraySource::new(config.seed),
        }
    }

    // =========================================================================
    // Read model
    // =========================================================================

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The raw input array (step 0).
    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_deref()
    }

    pub fn has_trace(&self) -> bool {
        self.trace.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn state(&self) -> PlaybackState {
        if self.playing {
            PlaybackState::Playing
        } else if self.done {
            PlaybackState::Done
        } else {
            PlaybackState::Stopped
        }
    }

    /// Frame to render at the current position.
    pub fn current_frame(&self) -> Cow<'_, Step> {
        match &self.trace {
            Some(trace) => trace.frame_at(self.current, &self.array),
            None => Cow::Owned(Step::initial(&self.array)),
        }
    }

    /// Largest value of the input, used for bar scaling.
    pub fn scale_max(&self) -> i32 {
        self.array.iter().copied().max().unwrap_or(MAX_VALUE)
    }

    /// `"Step: n"` before a trace exists, `"Step: n / last"` after.
    pub fn progress_label(&self) -> String {
        match self.trace.as_deref() {
            Some(trace) if !trace.is_empty() => {
                format!("Step: {} / {}", self.current, trace.last_index())
            }
            _ => format!("Step: {}", self.current),
        }
    }

    /// Label of the play button.
    pub fn play_label(&self) -> &'static str {
        match self.state() {
            PlaybackState::Playing => "Pause",
            PlaybackState::Done => "Sorted",
            PlaybackState::Stopped => "Start",
        }
    }

    // =========================================================================
    // Guards (mirror which controls are enabled)
    // =========================================================================

    pub fn can_start(&self) -> bool {
        !self.done
    }

    pub fn can_step_forward(&self) -> bool {
        !self.playing && !self.done
    }

    pub fn can_reset_to_beginning(&self) -> bool {
        !self.playing && self.current != 0
    }

    pub fn can_edit_input(&self) -> bool {
        !self.playing
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Build the trace if it does not exist yet.
    pub fn ensure_trace(&mut self) -> Rc<Trace> {
        if let Some(trace) = &self.trace {
            return Rc::clone(trace);
        }
        let trace = Rc::new(self.algorithm.run(&self.array));
        self.trace = Some(Rc::clone(&trace));
        trace
    }

    /// Begin automatic playback. When already done, a new array is drawn first.
    pub fn start(&mut self) -> Result<()> {
        if self.done {
            self.reset_array()?;
        }
        self.ensure_trace();
        self.playing = true;
        tracing::debug!(algorithm = self.algorithm.name(), step = self.current, "playback started");
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            tracing::debug!(step = self.current, "playback paused");
        }
    }

    /// Timer callback. Advances while playing; returns whether still playing.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.advance();
        self.playing
    }

    /// Move one step forward, saturating at the end.
    ///
    /// Returns true if the position changed. Reaching the end sets `done`
    /// and stops playback.
    pub fn advance(&mut self) -> bool {
        let len = self.ensure_trace().len();
        let next = self.current + 1;

        if next >= len {
            if self.playing {
                tracing::debug!(steps = len, "playback finished");
            }
            self.playing = false;
            self.done = true;
            return false;
        }

        self.current = next;
        true
    }

    /// Manual single step. Pauses playback first.
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.advance()
    }

    /// Back to the untouched input; keeps the trace.
    pub fn reset_to_beginning(&mut self) {
        self.pause();
        self.current = 0;
        self.done = false;
    }

    /// Draw a new input array and discard the trace.
    pub fn reset_array(&mut self) -> Result<()> {
        self.pause();
        let array = self
            .source
            .generate(self.array_size, self.min_value, self.max_value)?;
        self.replace_array(array);
        Ok(())
    }

    /// Use `array` as the new input and discard the trace.
    pub fn replace_array(&mut self, array: Vec<i32>) {
        self.pause();
        self.array_size = array.len();
        self.array = array;
        self.discard_trace();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.pause();
        if algorithm != self.algorithm {
            tracing::info!(from = self.algorithm.name(), to = algorithm.name(), "algorithm changed");
        }
        self.algorithm = algorithm;
        self.discard_trace();
    }

    /// Resize the array (within the allowed range) and draw a new one.
    pub fn set_array_size(&mut self, size: usize) -> Result<()> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
            return Err(VizError::ArraySizeOutOfRange {
                size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }
        self.pause();
        self.array_size = size;
        self.reset_array()
    }

    /// At a size bound the clamp yields the current size; keep the array,
    /// trace and position in that case.
    fn resize_if_changed(&mut self, size: usize) -> Result<bool> {
        if size == self.array_size {
            return Ok(false);
        }
        self.set_array_size(size)?;
        Ok(true)
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Apply a command if its control is enabled.
    ///
    /// Returns `Ok(false)` when the command was ignored because the matching
    /// control is disabled in the current state.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        let accepted = match command {
            Command::TogglePlay if self.playing => {
                self.pause();
                true
            }
            Command::TogglePlay if self.can_start() => {
                self.start()?;
                true
            }
            Command::StepForward if self.can_step_forward() => {
                self.step_forward();
                true
            }
            Command::ResetToBeginning if self.can_reset_to_beginning() => {
                self.reset_to_beginning();
                true
            }
            Command::NewArray if self.can_edit_input() => {
                self.reset_array()?;
                true
            }
            Command::SelectAlgorithm(algorithm) if self.can_edit_input() => {
                self.set_algorithm(algorithm);
                true
            }
            Command::NextAlgorithm if self.can_edit_input() => {
                self.set_algorithm(self.algorithm.next());
                true
            }
            Command::PreviousAlgorithm if self.can_edit_input() => {
                self.set_algorithm(self.algorithm.previous());
                true
            }
            Command::GrowArray if self.can_edit_input() => {
                let size = (self.array_size + ARRAY_SIZE_STEP).min(MAX_ARRAY_SIZE);
                self.resize_if_changed(size)?
            }
            Command::ShrinkArray if self.can_edit_input() => {
                let size = self
                    .array_size
                    .saturating_sub(ARRAY_SIZE_STEP)
                    .max(MIN_ARRAY_SIZE);
                self.resize_if_changed(size)?
            }
            Command::Faster => {
                self.speed = self.speed.faster();
                true
            }
            Command::Slower => {
                self.speed = self.speed.slower();
                true
            }
            _ => false,
        };

        if !accepted {
            tracing::trace!(?command, state = ?self.state(), "command ignored");
        }
        Ok(accepted)
    }

    fn discard_trace(&mut self) {
        self.trace = None;
        self.current = 0;
        self.done = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
