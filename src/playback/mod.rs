//! Playback: position in a trace, play/pause/step, and the tick timer.

pub mod controller;
pub mod speed;
pub mod timer;

pub use controller::{Command, PlaybackController, PlaybackState};
pub use speed::Speed;
pub use timer::PlaybackTimer;
