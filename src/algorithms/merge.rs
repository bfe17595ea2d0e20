//! Merge sort engine.
//!
//! Here `sorted` means "sorted within a finished subrange", not "in final
//! position". A singleton or a merged half shows as sorted while its parent
//! range is still pending, and indices are never listed twice.
//!
//! Placement steps reuse `swapping` with a single index to mark the write
//! target `k`; no exchange actually happens.

use super::recorder::Recorder;
use crate::trace::Trace;

/// Top-down merge sort. Ties are taken from the left run.
pub fn merge_sort(input: &[i32]) -> Trace {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(rec, left, mid);
        sort_range(rec, mid + 1, right);
        merge(rec, left, mid, right);
    } else if left == right && rec.mark_sorted_once(left) {
        rec.emit_plain();
    }
}

fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let lhs = rec.arr[left..=mid].to_vec();
    let rhs = rec.arr[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        // Heads are reported in original-array coordinates.
        rec.emit_comparing(&[left + i, mid + 1 + j]);

        let value = if lhs[i] <= rhs[j] {
            i += 1;
            lhs[i - 1]
        } else {
            j += 1;
            rhs[j - 1]
        };
        place(rec, k, value);
        k += 1;
    }

    for &value in &lhs[i..] {
        place(rec, k, value);
        k += 1;
    }

    for &value in &rhs[j..] {
        place(rec, k, value);
        k += 1;
    }

    for index in left..=right {
        rec.mark_sorted_once(index);
    }
    rec.emit_plain();
}

fn place(rec: &mut Recorder, k: usize, value: i32) {
    rec.emit_swapping(&[k]);
    rec.arr[k] = value;
    rec.emit_plain();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_two_elements() {
        // leaf 0, leaf 1, compare, place, post-write, drain place, post-write, range done
        let trace = merge_sort(&[2, 1]);
        assert_eq!(trace.len(), 8);
        assert_eq!(trace[0].sorted(), &[0]);
        assert_eq!(trace[1].sorted(), &[0, 1]);
        assert_eq!(trace[2].comparing(), &[0, 1]);
        assert_eq!(trace[3].swapping(), &[0]);
        assert_eq!(trace[4].array(), &[1, 1]);
        assert_eq!(trace[5].swapping(), &[1]);
        assert_eq!(trace[6].array(), &[1, 2]);
        assert_eq!(trace[7].sorted(), &[0, 1]);
    }

    #[test]
    fn test_merge_compare_indices_use_original_coordinates() {
        let trace = merge_sort(&[4, 3, 2, 1]);
        // The top-level merge compares heads of [0,1] and [2,3].
        assert!(trace.iter().any(|s| s.comparing() == [0, 2]));
        assert!(trace.iter().all(|s| s.comparing().iter().all(|&i| i < 4)));
    }

    #[test]
    fn test_merge_sorted_has_no_duplicates() {
        let trace = merge_sort(&[5, 1, 4, 2, 3]);
        for step in &trace {
            let mut seen = step.sorted().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), step.sorted().len());
        }
        let last = trace.last().unwrap();
        assert_eq!(last.array(), &[1, 2, 3, 4, 5]);
        assert_eq!(last.sorted().len(), 5);
    }

    #[test]
    fn test_merge_local_sortedness_precedes_global() {
        let trace = merge_sort(&[4, 3, 2, 1]);
        // Index 0 is marked before the array is globally sorted.
        let first_marked = trace.iter().position(|s| s.is_sorted(0)).unwrap();
        assert_ne!(trace[first_marked].array(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_sort(&[]).is_empty());
    }
}
