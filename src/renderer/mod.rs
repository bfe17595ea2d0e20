//! Terminal output: frame buffer, ANSI codes, and diff rendering.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{text_width, FrameBuffer};
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
