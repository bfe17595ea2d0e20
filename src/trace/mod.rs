//! Step trace model.
//!
//! A [`Trace`] is the full, ordered narration of one engine run. It is built
//! once, never mutated, and thrown away when the input array or the chosen
//! algorithm changes.
//!
//! The controller reads it through [`Trace::frame_at`], which applies the
//! "step 0 is the untouched input" convention:
//!
//! ```text
//! index 0 or empty trace  →  raw input, no highlights
//! index n (n ≥ 1)         →  trace[n] (saturating at the last step)
//! ```

mod step;

use std::borrow::Cow;
use std::ops::Index;

pub use step::Step;

/// Ordered sequence of steps produced by one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if recorded.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Highest index the playback counter can reach.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The frame to render for playback position `index`.
    ///
    /// `input` is the array the trace was generated from; it backs the
    /// synthetic frame shown at position 0 or before any trace exists.
    pub fn frame_at<'a>(&'a self, index: usize, input: &[i32]) -> Cow<'a, Step> {
        if index == 0 || self.steps.is_empty() {
            return Cow::Owned(Step::initial(input));
        }
        Cow::Borrowed(&self.steps[index.min(self.last_index())])
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}

impl From<Vec<Step>> for Trace {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
