//! Selection sort engine.

use super::recorder::Recorder;
use crate::trace::Trace;

/// Selection sort.
///
/// A new minimum candidate is announced with a single-index `comparing`
/// step; the renderer treats it as a highlight rather than a pair. The last
/// index is confirmed by elimination once the main loop finishes.
pub fn selection_sort(input: &[i32]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }

    for i in 0..n - 1 {
        let mut min = i;

        for j in i + 1..n {
            rec.emit_comparing(&[min, j]);

            if rec.arr[j] < rec.arr[min] {
                min = j;
                rec.emit_comparing(&[min]);
            }
        }

        if min != i {
            rec.emit_swapping(&[i, min]);
            rec.arr.swap(i, min);
            rec.emit_plain();
        }

        rec.mark_sorted(i);
        rec.emit_plain();
    }

    rec.mark_sorted(n - 1);
    rec.emit_plain();

    rec.finish()
}
