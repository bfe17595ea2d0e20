//! # sortviz
//!
//! Terminal sorting-algorithm visualizer.
//!
//! The core is a step-trace engine: each algorithm runs once over a copy of
//! the input and records every comparison, swap, placement and newly sorted
//! position as an immutable [`Step`]. Playback then walks the recorded
//! [`Trace`] one frame at a time.
//!
//! ```text
//! generator → input → Algorithm::run → Trace → PlaybackController
//!                                                   │
//!                    signals (revision, size, palette)
//!                                                   ▼
//!                               compose_screen → DiffRenderer → terminal
//! ```
//!
//! ## Modules
//!
//! - [`trace`] - `Step` and `Trace`, plus the `frame_at` read model
//! - [`algorithms`] - the five engines and the `Algorithm` selector
//! - [`generator`] - random input arrays
//! - [`playback`] - controller, speed model, tick timer
//! - [`theme`], [`types`], [`renderer`], [`view`] - drawing
//! - [`input`], [`pipeline`] - keys, events, the reactive render loop
//!
//! ```
//! use sortviz::algorithms::Algorithm;
//!
//! let trace = Algorithm::Quick.run(&[3, 1, 2]);
//! assert_eq!(trace.last().unwrap().array(), &[1, 2, 3]);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod pipeline;
pub mod playback;
pub mod renderer;
pub mod theme;
pub mod trace;
pub mod types;
pub mod view;

pub use algorithms::{engine_for, Algorithm, Engine};
pub use config::VizConfig;
pub use error::{Result, VizError};
pub use generator::generate_random_array;
pub use playback::{Command, PlaybackController, PlaybackState, Speed};
pub use trace::{Step, Trace};
