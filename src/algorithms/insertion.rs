//! Insertion sort engine.

use super::recorder::Recorder;
use crate::trace::Trace;

/// Insertion sort with shift-based placement.
///
/// Index 0 counts as sorted before any comparison happens: a one-element
/// prefix is sorted by definition. Each new index first gets an "intent"
/// comparison frame against its left neighbour, even when no shift follows.
/// Shifts copy rather than swap, so mid-shift snapshots may show a value
/// twice until the key is written back.
pub fn insertion_sort(input: &[i32]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }

    rec.mark_sorted(0);
    rec.emit_plain();

    for i in 1..n {
        let key = rec.arr[i];
        // `hole` is the slot the key would land in; its left neighbour is `hole - 1`.
        let mut hole = i;

        rec.emit_comparing(&[i, i - 1]);

        while hole > 0 && rec.arr[hole - 1] > key {
            rec.emit_comparing(&[i, hole - 1]);
            rec.emit_swapping(&[hole - 1, hole]);

            rec.arr[hole] = rec.arr[hole - 1];
            hole -= 1;

            if hole > 0 {
                rec.emit_comparing(&[i, hole - 1]);
            }
        }

        rec.arr[hole] = key;
        rec.mark_sorted(i);
        rec.emit_plain();
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_starts_with_index_zero_sorted() {
        let trace = insertion_sort(&[3, 1, 2]);
        assert_eq!(trace[0].sorted(), &[0]);
        assert!(trace[0].comparing().is_empty());
        assert_eq!(trace[1].comparing(), &[1, 0]);
    }

    #[test]
    fn test_insertion_two_elements() {
        let trace = insertion_sort(&[2, 1]);
        assert_eq!(trace.len(), 5);
        assert_eq!(trace[1].comparing(), &[1, 0]);
        assert_eq!(trace[2].comparing(), &[1, 0]);
        assert_eq!(trace[3].swapping(), &[0, 1]);
        assert_eq!(trace[3].array(), &[2, 1]);
        assert_eq!(trace[4].array(), &[1, 2]);
        assert_eq!(trace[4].sorted(), &[0, 1]);
    }

    #[test]
    fn test_insertion_shift_shows_duplicate() {
        // Inserting 1 into [2, 3] shifts 3 right first, leaving [2, 3, 3]
        // on screen while 2 is compared against the key.
        let trace = insertion_sort(&[3, 2, 1]);
        assert!(trace.iter().any(|s| s.array() == [2, 3, 3] && s.comparing() == [2, 0]));
        assert_eq!(trace.last().unwrap().array(), &[1, 2, 3]);
    }

    #[test]
    fn test_insertion_sorted_is_ascending() {
        let trace = insertion_sort(&[4, 3, 2, 1]);
        assert_eq!(trace.last().unwrap().sorted(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_insertion_empty() {
        assert!(insertion_sort(&[]).is_empty());
    }
}
