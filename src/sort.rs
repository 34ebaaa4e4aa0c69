// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Sorts `buf` ascending in place with bubble sort and returns it.
///
/// Each pass `i` (from `len - 1` down to `1`) bubbles the largest remaining
/// element up to `buf[i]` by swapping adjacent pairs that are out of order.
/// Equal elements are never swapped, so the sort is stable. `O(n²)`
/// comparisons, no allocation.
///
/// Incomparable pairs (such as `NaN`) are left where they are.
///
/// # Examples
///
/// ```rust
/// use growable_seq::bubble_sort;
///
/// let mut nums = [10, 8, 1, 4, 3, 2, 9, 7, 5, 6];
/// assert_eq!(bubble_sort(&mut nums), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn bubble_sort<T: PartialOrd>(buf: &mut [T]) -> &mut [T] {
    for i in (1..buf.len()).rev() {
        for j in 0..i {
            if buf[j] > buf[j + 1] {
                buf.swap(j, j + 1);
            }
        }
    }
    buf
}
