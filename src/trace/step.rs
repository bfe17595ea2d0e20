//! A single animation frame.
//!
//! Every `Step` owns its own copy of the array and index sets. Engines keep
//! mutating one working array while they record, so a step must never borrow
//! from it.

/// One immutable frame of algorithm state.
///
/// Index sets keep the order the engine recorded them in. Bubble sort
/// prepends to `sorted`, every other engine appends. Use the `is_*` helpers
/// when only membership matters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    array: Vec<i32>,
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted: Vec<usize>,
    pivot: Option<usize>,
}

impl Step {
    /// Create a step, copying every argument.
    pub fn new(
        array: &[i32],
        comparing: &[usize],
        swapping: &[usize],
        sorted: &[usize],
        pivot: Option<usize>,
    ) -> Self {
        Self {
            array: array.to_vec(),
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
            sorted: sorted.to_vec(),
            pivot,
        }
    }

    /// The synthetic "nothing happened yet" frame: raw array, no highlights.
    pub fn initial(array: &[i32]) -> Self {
        Self::new(array, &[], &[], &[], None)
    }

    /// Array snapshot at this instant.
    #[inline]
    pub fn array(&self) -> &[i32] {
        &self.array
    }

    /// Indices under comparison (or a single highlighted candidate).
    #[inline]
    pub fn comparing(&self) -> &[usize] {
        &self.comparing
    }

    /// Indices being exchanged, or the write target of a merge placement.
    #[inline]
    pub fn swapping(&self) -> &[usize] {
        &self.swapping
    }

    /// Indices confirmed in place, in recording order.
    #[inline]
    pub fn sorted(&self) -> &[usize] {
        &self.sorted
    }

    /// Partition boundary of the active quick sort partition.
    #[inline]
    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn is_comparing(&self, index: usize) -> bool {
        self.comparing.contains(&index)
    }

    pub fn is_swapping(&self, index: usize) -> bool {
        self.swapping.contains(&index)
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    pub fn is_pivot(&self, index: usize) -> bool {
        self.pivot == Some(index)
    }

    /// True when no index set is populated.
    pub fn has_no_marks(&self) -> bool {
        self.comparing.is_empty()
            && self.swapping.is_empty()
            && self.sorted.is_empty()
            && self.pivot.is_none()
    }

    /// Iterate over every index this step references, across all sets.
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.comparing
            .iter()
            .chain(self.swapping.iter())
            .chain(self.sorted.iter())
            .copied()
            .chain(self.pivot)
    }
}

// =============================================================================
// Tests
// =============================================================================
