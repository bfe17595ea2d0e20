//! Algorithm engines and selector.
//!
//! Each engine is a pure `fn(&[i32]) -> Trace`: it copies its input, sorts
//! the copy while recording, and returns the whole trace eagerly. Engines
//! contain no randomness, so the same input always yields the same trace.
//!
//! # Example
//!
//! ```
//! use sortviz::algorithms::{engine_for, Algorithm};
//!
//! let trace = engine_for("quick")(&[3, 1, 2]);
//! assert_eq!(trace.last().unwrap().array(), &[1, 2, 3]);
//!
//! // Unknown names fall back to bubble sort.
//! assert_eq!(Algorithm::from_name("bogo"), Algorithm::Bubble);
//! ```

mod bubble;
mod insertion;
mod merge;
mod quick;
mod recorder;
mod selection;

use std::fmt;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use crate::trace::Trace;

/// Signature shared by all engines.
pub type Engine = fn(&[i32]) -> Trace;

/// The five supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Look up an algorithm by its symbolic name.
    ///
    /// Matching ignores case and surrounding whitespace. Anything
    /// unrecognised falls back to [`Algorithm::Bubble`].
    pub fn from_name(name: &str) -> Self {
        match Self::parse(name) {
            Some(algorithm) => algorithm,
            None => {
                tracing::warn!(name, "unknown algorithm, falling back to bubble sort");
                Algorithm::Bubble
            }
        }
    }

    /// Strict lookup, `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
    }

    /// Symbolic name (`"bubble"`, `"insertion"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Human-readable label (`"Bubble Sort"`, ...).
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    pub fn engine(self) -> Engine {
        match self {
            Algorithm::Bubble => bubble_sort,
            Algorithm::Insertion => insertion_sort,
            Algorithm::Selection => selection_sort,
            Algorithm::Merge => merge_sort,
            Algorithm::Quick => quick_sort,
        }
    }

    /// Run the engine and log the trace size.
    pub fn run(self, input: &[i32]) -> Trace {
        let trace = (self.engine())(input);
        tracing::debug!(
            algorithm = self.name(),
            len = input.len(),
            steps = trace.len(),
            "trace generated"
        );
        trace
    }

    /// Position in [`Algorithm::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).unwrap_or(0)
    }

    /// Next algorithm in menu order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Engine for a symbolic name. Unknown names yield the bubble engine.
pub fn engine_for(name: &str) -> Engine {
    Algorithm::from_name(name).engine()
}

// =============================================================================
// Tests
// =============================================================================
