//! Plain-text frames for headless mode.

use std::fmt::Write;

use crate::trace::Step;

/// One line describing frame `index`.
///
/// `#3 [5, 3, 8, 1] comparing=[0, 1] swapping=[] sorted=[3] pivot=-`
pub fn frame_line(index: usize, step: &Step) -> String {
    let mut line = format!(
        "#{} {:?} comparing={:?} swapping={:?} sorted={:?} pivot=",
        index,
        step.array(),
        step.comparing(),
        step.swapping(),
        step.sorted()
    );
    match step.pivot() {
        Some(p) => {
            let _ = write!(line, "{}", p);
        }
        None => line.push('-'),
    }
    line
}
