//! Quick sort engine (Lomuto partition, last element as pivot).
//!
//! Steps inside a partition carry `pivot = Some(high)`. The step that shows
//! the pivot after it lands in its slot drops the field, which tells the
//! renderer the partition is over.

use super::recorder::Recorder;
use crate::trace::Trace;

pub fn quick_sort(input: &[i32]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low < high {
        let pi = partition(rec, low, high);
        if pi > low {
            sort_range(rec, low, pi - 1);
        }
        if pi < high {
            sort_range(rec, pi + 1, high);
        }
    } else if low == high && rec.mark_sorted_once(low) {
        rec.emit_plain();
    }
}

/// Partition `[low, high]` around `arr[high]` and return the pivot's final slot.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.arr[high];
    rec.emit(&[], &[], Some(high));

    // Next free slot of the "< pivot" region.
    let mut boundary = low;

    for j in low..high {
        rec.emit(&[j, high], &[], Some(high));

        if rec.arr[j] < pivot {
            if boundary != j {
                rec.emit(&[], &[boundary, j], Some(high));
                rec.arr.swap(boundary, j);
                rec.emit(&[], &[], Some(high));
            }
            boundary += 1;
        }
    }

    if boundary != high {
        rec.emit(&[], &[boundary, high], Some(high));
        rec.arr.swap(boundary, high);
        rec.emit_plain();
    }

    rec.mark_sorted(boundary);
    rec.emit_plain();

    boundary
}
