// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableSequence` type and its inherent API.
//!
//! `GrowableSequence<T>` is a heap-backed vector with explicit, observable
//! capacity management. It stores elements in a contiguous block of slots and
//! tracks a logical length; slots past the length hold nothing.
//! Methods mirror `Vec` semantics, but every capacity- or index-sensitive
//! operation is fallible and reports an [`Error`] instead of panicking.

mod capacity;
mod extend;
mod insert;
mod new;
mod push;
mod remove;
mod search;
mod snapshot;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Backing store of a [`GrowableSequence`].
///
/// `PendingDefault` is the state of a default-constructed sequence: nothing is
/// allocated yet and the first growth resolves to
/// [`DEFAULT_CAPACITY`](GrowableSequence::DEFAULT_CAPACITY) slots.
/// It is distinct from an allocated, zero-length backing (explicit capacity 0,
/// or a sequence that was shrunk while empty).
pub(crate) enum Storage<T> {
    PendingDefault,
    Allocated(Box<[Option<T>]>),
}

impl<T> Storage<T> {
    #[inline]
    pub(crate) fn slots(&self) -> &[Option<T>] {
        match self {
            Self::PendingDefault => &[],
            Self::Allocated(slots) => slots,
        }
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        match self {
            Self::PendingDefault => &mut [],
            Self::Allocated(slots) => slots,
        }
    }
}

/// A growable, index-addressable, ordered sequence.
///
/// `GrowableSequence<T>` keeps its elements in an exclusively owned backing
/// store whose length is the *capacity*, and tracks a logical length
/// `len ∈ 0..=capacity`. Appending is amortized `O(1)`: when the backing store
/// is full it is reallocated to 1.5x its size (or to what the operation needs,
/// if that is more).
///
/// # Layout and invariants
///
/// - Slots `[0, len)` hold the elements, in order.
/// - Slots `[len, capacity)` are empty. Removing or clearing an element drops
///   it right away; the sequence never retains ownership of removed values.
/// - `capacity >= len` after every public operation returns.
/// - A failed operation leaves length, contents, capacity and mutation count
///   untouched. Growth always happens before the write it serves.
///
/// # Capacity
///
/// - [`new`](GrowableSequence::new) allocates nothing. The first write
///   resolves the pending default to [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
///   slots.
/// - [`with_capacity`](GrowableSequence::with_capacity) allocates exactly the
///   requested number of slots (none for `0`).
/// - Growth arithmetic is checked: requests near the platform limit are
///   clamped to [`MAX_ARRAY_SIZE`](Self::MAX_ARRAY_SIZE), and only fail with
///   [`Error::CapacityOverflow`] when the *required* minimum itself is not
///   representable.
///
/// # Mutation counter
///
/// Every structural mutation (push, pop, insert, remove, clear, bulk insert,
/// shrink) increments [`mutation_count`](GrowableSequence::mutation_count)
/// exactly once. Value-only writes ([`set`](GrowableSequence::set),
/// [`get_mut`](GrowableSequence::get_mut), indexing, `iter_mut`) do not.
/// A [`Cursor`](crate::Cursor) uses the counter to fail fast with
/// [`Error::ConcurrentModification`]. The counter is a diagnostic; the
/// sequence is not synchronized and is not `Sync`-safe for mutation.
///
/// # Copies are shallow
///
/// [`Clone`], [`to_vec`](GrowableSequence::to_vec) and friends clone each
/// element with `T::clone`. For handle types such as `Rc<U>` or `Arc<U>` that
/// duplicates the handle, not the pointee; element types decide their own deep
/// or shallow copy semantics.
///
/// # Examples
///
/// ```rust
/// use growable_seq::GrowableSequence;
///
/// let mut seq = GrowableSequence::new();
/// seq.push(5).unwrap();
/// seq.push(3).unwrap();
/// seq.insert(1, 9).unwrap();
/// assert_eq!(seq, [5, 9, 3]);
/// assert_eq!(seq.capacity(), 10);
///
/// assert_eq!(seq.remove(1), Ok(9));
/// assert_eq!(seq.to_vec(), [5, 3]);
/// ```
pub struct GrowableSequence<T> {
    pub(crate) storage: Storage<T>,
    pub(crate) len: usize,
    pub(crate) mutations: u64,
}

impl<T> GrowableSequence<T> {
    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of structural mutations applied so far.
    #[inline]
    pub const fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Returns `Ok(&T)` if `index < len`, otherwise [`Error::IndexOutOfRange`].
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns `Ok(&mut T)` if `index < len`, otherwise [`Error::IndexOutOfRange`].
    ///
    /// Writing through the reference is not a structural mutation.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.live_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; the sequence is
    /// unchanged in that case (and `value` is dropped).
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.live().first().and_then(Option::as_ref)
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.live().last().and_then(Option::as_ref)
    }

    /// The occupied prefix of the backing store.
    #[inline]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.storage.slots()[..self.len]
    }

    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        let len = self.len;
        &mut self.storage.slots_mut()[..len]
    }

    #[inline]
    pub(crate) fn bump_mutations(&mut self) {
        self.mutations = self.mutations.wrapping_add(1);
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Elements<'a, T>(&'a GrowableSequence<T>);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSequence")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &Elements(self))
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for GrowableSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: PartialEq> PartialEq<&[T]> for GrowableSequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}
impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for GrowableSequence<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        *self == other[..]
    }
}

impl<T: Ord> Ord for GrowableSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
impl<T: PartialOrd> PartialOrd for GrowableSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Hash> Hash for GrowableSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowableSequence;
    use crate::Error;
    use alloc::vec::Vec;

    fn seq_of(items: &[i32]) -> GrowableSequence<i32> {
        GrowableSequence::try_from(items).unwrap()
    }

    #[test]
    fn test_default_construct_then_get_is_out_of_range() {
        let seq: GrowableSequence<i32> = GrowableSequence::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 0);
        assert_eq!(seq.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_push_push_insert_scenario() {
        let mut seq = GrowableSequence::new();
        seq.push(5).unwrap();
        seq.push(3).unwrap();
        seq.insert(1, 9).unwrap();
        assert_eq!(seq, [5, 9, 3]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_remove_middle_scenario() {
        let mut seq = seq_of(&[5, 9, 3]);
        assert_eq!(seq.remove(1), Ok(9));
        assert_eq!(seq, [5, 3]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_growth_from_capacity_two_keeps_order() {
        let mut seq = GrowableSequence::with_capacity(2).unwrap();
        for i in 0..11 {
            seq.push(i).unwrap();
        }
        assert_eq!(seq.len(), 11);
        for i in 0..11 {
            assert_eq!(seq.get(i), Ok(&(i as i32)));
        }
        assert_eq!(seq.to_vec(), (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_index_of_and_last_index_of_scenario() {
        let seq = seq_of(&[5, 9, 3, 9]);
        assert_eq!(seq.index_of(&9), Some(1));
        assert_eq!(seq.last_index_of(&9), Some(3));
        assert_eq!(seq.index_of(&7), None);
        assert_eq!(seq.last_index_of(&7), None);
    }

    #[test]
    fn test_set_then_get_returns_new_value() {
        let mut seq = seq_of(&[1, 2, 3]);
        for i in 0..seq.len() {
            let old = seq.set(i, 10 * i as i32).unwrap();
            assert_eq!(old, i as i32 + 1);
            assert_eq!(seq.get(i), Ok(&(10 * i as i32)));
        }
        assert_eq!(
            seq.set(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_push_then_remove_last_restores() {
        let mut seq = seq_of(&[4, 5, 6]);
        let before = seq.to_vec();
        seq.push(7).unwrap();
        assert_eq!(seq.remove(seq.len() - 1), Ok(7));
        assert_eq!(seq.to_vec(), before);
        assert_eq!(seq.len(), before.len());
    }

    #[test]
    fn test_insert_then_remove_same_index_restores() {
        let original = [1, 2, 3, 4];
        for i in 0..=original.len() {
            let mut seq = seq_of(&original);
            seq.insert(i, 99).unwrap();
            assert_eq!(seq.get(i), Ok(&99));
            assert_eq!(seq.remove(i), Ok(99));
            assert_eq!(seq, original);
        }
    }

    #[test]
    fn test_len_tracks_operations() {
        let mut seq = GrowableSequence::new();
        let mut expected = 0usize;
        for i in 0..25 {
            seq.push(i).unwrap();
            expected += 1;
            if i % 3 == 0 {
                seq.insert(0, -i).unwrap();
                expected += 1;
            }
            if i % 5 == 0 {
                seq.remove(seq.len() / 2).unwrap();
                expected -= 1;
            }
            assert_eq!(seq.len(), expected);
        }
        seq.clear();
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_mutation_count_structural_only() {
        let mut seq = GrowableSequence::new();
        assert_eq!(seq.mutation_count(), 0);
        seq.push(1).unwrap();
        seq.push(2).unwrap();
        assert_eq!(seq.mutation_count(), 2);

        seq.set(0, 10).unwrap();
        *seq.get_mut(1).unwrap() = 20;
        seq[0] = 11;
        assert_eq!(seq.mutation_count(), 2);

        seq.insert(0, 0).unwrap();
        seq.remove(0).unwrap();
        assert!(seq.remove_item(&20));
        seq.clear();
        assert_eq!(seq.mutation_count(), 6);
    }

    #[test]
    fn test_failed_operations_do_not_count_or_change() {
        let mut seq = seq_of(&[1, 2]);
        let count = seq.mutation_count();
        assert!(seq.insert(5, 0).is_err());
        assert!(seq.remove(2).is_err());
        assert!(!seq.remove_item(&42));
        assert_eq!(seq.mutation_count(), count);
        assert_eq!(seq, [1, 2]);
    }

    #[test]
    fn test_first_and_last() {
        let seq = seq_of(&[7, 8, 9]);
        assert_eq!(seq.first(), Some(&7));
        assert_eq!(seq.last(), Some(&9));

        let empty: GrowableSequence<i32> = GrowableSequence::default();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_get_mut_out_of_range() {
        let mut seq = seq_of(&[1]);
        assert_eq!(
            seq.get_mut(1).unwrap_err(),
            Error::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_eq_ord_hash_via_elements() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a = seq_of(&[1, 2, 3]);
        let mut b = GrowableSequence::with_capacity(64).unwrap();
        b.append_all([1, 2, 3]).unwrap();
        let c = seq_of(&[1, 2, 4]);

        // Capacity and history do not take part in equality.
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));
        assert_eq!(a, &[1, 2, 3][..]);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        use alloc::format;
        let seq = seq_of(&[1, 2]);
        let dbg = format!("{seq:?}");
        assert!(dbg.contains("GrowableSequence"));
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity: 2"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_option_elements_model_absent_values() {
        let mut seq: GrowableSequence<Option<&str>> = GrowableSequence::new();
        seq.push(Some("a")).unwrap();
        seq.push(None).unwrap();
        seq.push(Some("b")).unwrap();
        seq.push(None).unwrap();

        assert_eq!(seq.index_of(&None), Some(1));
        assert_eq!(seq.last_index_of(&None), Some(3));
        assert!(seq.contains(&Some("b")));
        assert!(seq.remove_item(&None));
        assert_eq!(seq, [Some("a"), Some("b"), None]);
    }

    #[test]
    fn test_zero_sized_type() {
        let mut seq: GrowableSequence<()> = GrowableSequence::new();
        for _ in 0..12 {
            seq.push(()).unwrap();
        }
        assert_eq!(seq.len(), 12);
        assert_eq!(seq.capacity(), 15);
        assert_eq!(seq.remove(3), Ok(()));
        assert_eq!(seq.len(), 11);
    }
}
