//! Color palettes.
//!
//! A [`Palette`] maps every visual role of the visualizer (bar states, text,
//! chrome, per-algorithm accents) to a concrete [`Rgba`]. Presets live in
//! [`presets`]; `terminal` uses ANSI indices so it follows the user's
//! terminal scheme, the others use explicit RGB.
//!
//! ```
//! use sortviz::theme::get_preset;
//!
//! let nord = get_preset("nord").unwrap();
//! assert_eq!(nord.name, "nord");
//! ```

use crate::algorithms::Algorithm;
use crate::trace::Step;
use crate::types::Rgba;

pub mod presets;

pub use presets::{get_preset, preset_names};

/// What a bar currently represents, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Swapping,
    Comparing,
    Sorted,
    Pivot,
    Unsorted,
}

impl BarRole {
    /// Role of bar `index` in `step`. Highest priority wins when an index
    /// is in more than one set.
    pub fn of(step: &Step, index: usize) -> Self {
        if step.is_swapping(index) {
            BarRole::Swapping
        } else if step.is_comparing(index) {
            BarRole::Comparing
        } else if step.is_sorted(index) {
            BarRole::Sorted
        } else if step.is_pivot(index) {
            BarRole::Pivot
        } else {
            BarRole::Unsorted
        }
    }

    /// Legend label.
    pub const fn label(self) -> &'static str {
        match self {
            BarRole::Unsorted => "Unsorted",
            BarRole::Comparing => "Comparing",
            BarRole::Swapping => "Swapping",
            BarRole::Sorted => "Sorted",
            BarRole::Pivot => "Pivot (QuickSort)",
        }
    }

    /// Legend order.
    pub const LEGEND: [BarRole; 5] = [
        BarRole::Unsorted,
        BarRole::Comparing,
        BarRole::Swapping,
        BarRole::Sorted,
        BarRole::Pivot,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub description: String,

    // Bars
    pub unsorted: Rgba,
    pub comparing: Rgba,
    pub swapping: Rgba,
    pub sorted: Rgba,
    pub pivot: Rgba,

    // Chrome
    pub title: Rgba,
    pub text: Rgba,
    pub text_muted: Rgba,
    pub text_disabled: Rgba,
    pub background: Rgba,
    pub chart_background: Rgba,

    /// Accent per algorithm, indexed by [`Algorithm::index`].
    pub accents: [Rgba; 5],
}

impl Default for Palette {
    fn default() -> Self {
        presets::default_palette()
    }
}

impl Palette {
    pub fn bar(&self, role: BarRole) -> Rgba {
        match role {
            BarRole::Swapping => self.swapping,
            BarRole::Comparing => self.comparing,
            BarRole::Sorted => self.sorted,
            BarRole::Pivot => self.pivot,
            BarRole::Unsorted => self.unsorted,
        }
    }

    pub fn accent(&self, algorithm: Algorithm) -> Rgba {
        self.accents[algorithm.index()]
    }
}

// =============================================================================
// Tests
// =============================================================================
