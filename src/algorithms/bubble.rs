//! Bubble sort engine.

use super::recorder::Recorder;
use crate::trace::Trace;

/// Adjacent-pass bubble sort, one outer pass per element.
///
/// Each pass ends by prepending the last unsorted index to `sorted`, so the
/// set reads in descending position order. The final pass only confirms 0.
pub fn bubble_sort(input: &[i32]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            rec.emit_comparing(&[j, j + 1]);

            if rec.arr[j] > rec.arr[j + 1] {
                rec.emit_swapping(&[j, j + 1]);
                rec.arr.swap(j, j + 1);
                rec.emit_plain();
            }
        }

        rec.mark_sorted_front(n - i - 1);
        rec.emit_plain();
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_first_step_compares_first_pair() {
        let trace = bubble_sort(&[5, 3, 8, 1]);
        assert_eq!(trace[0].comparing(), &[0, 1]);
        assert!(trace[0].swapping().is_empty());
    }

    #[test]
    fn test_bubble_sorts() {
        let trace = bubble_sort(&[5, 3, 8, 1]);
        let last = trace.last().unwrap();
        assert_eq!(last.array(), &[1, 3, 5, 8]);
        assert_eq!(last.sorted(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_bubble_swap_sequence() {
        // [2, 1]: compare, swap mark, post-swap, sorted [1], sorted [0, 1]
        let trace = bubble_sort(&[2, 1]);
        assert_eq!(trace.len(), 5);
        assert_eq!(trace[1].swapping(), &[0, 1]);
        assert_eq!(trace[1].array(), &[2, 1]);
        assert_eq!(trace[2].array(), &[1, 2]);
        assert!(trace[2].has_no_marks());
        assert_eq!(trace[3].sorted(), &[1]);
        assert_eq!(trace[4].sorted(), &[0, 1]);
    }

    #[test]
    fn test_bubble_single_element() {
        let trace = bubble_sort(&[7]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].sorted(), &[0]);
    }

    #[test]
    fn test_bubble_empty() {
        assert!(bubble_sort(&[]).is_empty());
    }
}
