//! Shared trace-recording state for the engines.
//!
//! Owns the working copy of the input and the running `sorted` set. Every
//! `emit_*` call snapshots the current state into a new [`Step`].

use crate::trace::{Step, Trace};

pub(crate) struct Recorder {
    pub(crate) arr: Vec<i32>,
    sorted: Vec<usize>,
    trace: Trace,
}

impl Recorder {
    pub(crate) fn new(input: &[i32]) -> Self {
        Self {
            arr: input.to_vec(),
            sorted: Vec::new(),
            trace: Trace::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.arr.len()
    }

    pub(crate) fn emit(&mut self, comparing: &[usize], swapping: &[usize], pivot: Option<usize>) {
        let step = Step::new(&self.arr, comparing, swapping, &self.sorted, pivot);
        self.trace.push(step);
    }

    /// Snapshot with no active marks.
    pub(crate) fn emit_plain(&mut self) {
        self.emit(&[], &[], None);
    }

    pub(crate) fn emit_comparing(&mut self, indices: &[usize]) {
        self.emit(indices, &[], None);
    }

    pub(crate) fn emit_swapping(&mut self, indices: &[usize]) {
        self.emit(&[], indices, None);
    }

    pub(crate) fn mark_sorted(&mut self, index: usize) {
        self.sorted.push(index);
    }

    pub(crate) fn mark_sorted_front(&mut self, index: usize) {
        self.sorted.insert(0, index);
    }

    /// Append `index` unless already present. Returns true if it was added.
    pub(crate) fn mark_sorted_once(&mut self, index: usize) -> bool {
        if self.is_marked_sorted(index) {
            return false;
        }
        self.sorted.push(index);
        true
    }

    pub(crate) fn is_marked_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    pub(crate) fn finish(self) -> Trace {
        self.trace
    }
}

// =============================================================================
// Tests
// =============================================================================
