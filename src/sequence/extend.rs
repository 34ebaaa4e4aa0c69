// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::GrowableSequence};

// Alloc imports
use alloc::vec::Vec;

impl<T> GrowableSequence<T> {
    /// Appends every item of `iter`, in iteration order.
    ///
    /// Semantics:
    /// - The source is collected first, then capacity is ensured once for the
    ///   whole batch.
    /// - Returns `Ok(true)` if anything was appended, `Ok(false)` for an empty
    ///   source (which is not a mutation).
    /// - On error nothing is appended; the source has been consumed.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<bool, Error> {
        let batch: Vec<T> = iter.into_iter().collect();
        if batch.is_empty() {
            return Ok(false);
        }
        let len = self.len;
        let new_len = len
            .checked_add(batch.len())
            .ok_or(Error::CapacityOverflow)?;
        self.ensure_capacity(new_len)?;

        for (slot, item) in self.storage.slots_mut()[len..new_len]
            .iter_mut()
            .zip(batch)
        {
            *slot = Some(item);
        }

        self.len = new_len;
        self.bump_mutations();
        Ok(true)
    }

    /// Inserts every item of `iter` starting at `index`, shifting the tail
    /// `[index, len)` right by the number of items.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`; the source is not
    ///   consumed in that case.
    /// - Capacity is ensured once for the whole batch.
    /// - Returns `Ok(true)` if anything was inserted.
    pub fn insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<bool, Error> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let batch: Vec<T> = iter.into_iter().collect();
        let added = batch.len();
        if added == 0 {
            return Ok(false);
        }
        let new_len = len.checked_add(added).ok_or(Error::CapacityOverflow)?;
        self.ensure_capacity(new_len)?;

        // The `added` empty slots past `len` rotate down to `index`.
        let window = &mut self.storage.slots_mut()[index..new_len];
        window.rotate_right(added);
        for (slot, item) in window[..added].iter_mut().zip(batch) {
            *slot = Some(item);
        }

        self.len = new_len;
        self.bump_mutations();
        Ok(true)
    }
}

impl<T> Extend<T> for GrowableSequence<T> {
    /// # Panics
    ///
    /// Panics if the backing store cannot grow, like `Vec` does.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.append_all(iter) {
            panic!("GrowableSequence::extend: {err}");
        }
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    /// # Panics
    ///
    /// Panics if the backing store cannot be allocated. Use
    /// [`GrowableSequence::try_from_iter`] to handle that case.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(seq) => seq,
            Err(err) => panic!("GrowableSequence::from_iter: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, GrowableSequence};
    use alloc::vec::Vec;

    #[test]
    fn test_append_all_grows_once() {
        let mut seq = GrowableSequence::try_from(&[1, 2][..]).unwrap();
        assert_eq!(seq.append_all(3..=20), Ok(true));
        assert_eq!(seq.to_vec(), (1..=20).collect::<Vec<_>>());
        // One reallocation straight to the batch size.
        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.mutation_count(), 1);
    }

    #[test]
    fn test_append_all_small_batch_uses_growth_policy() {
        let mut seq = GrowableSequence::with_capacity(10).unwrap();
        seq.append_all(0..10).unwrap();
        seq.append_all([10, 11]).unwrap();
        assert_eq!(seq.capacity(), 15);
        assert_eq!(seq.len(), 12);
    }

    #[test]
    fn test_append_all_empty_is_noop() {
        let mut seq: GrowableSequence<i32> = GrowableSequence::new();
        assert_eq!(seq.append_all(core::iter::empty()), Ok(false));
        assert_eq!(seq.mutation_count(), 0);
        assert_eq!(seq.capacity(), 0);
        assert!(seq.is_pending_default());
    }

    #[test]
    fn test_append_all_into_pending_default() {
        let mut seq = GrowableSequence::new();
        seq.append_all([1, 2, 3]).unwrap();
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn test_insert_all_middle() {
        let mut seq = GrowableSequence::try_from(&[1, 5][..]).unwrap();
        assert_eq!(seq.insert_all(1, [2, 3, 4]), Ok(true));
        assert_eq!(seq, [1, 2, 3, 4, 5]);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.mutation_count(), 1);
    }

    #[test]
    fn test_insert_all_front_and_tail() {
        let mut seq = GrowableSequence::try_from(&[3][..]).unwrap();
        seq.insert_all(0, [1, 2]).unwrap();
        seq.insert_all(3, [4, 5]).unwrap();
        assert_eq!(seq, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_all_out_of_range_does_not_consume_source() {
        let mut seq = GrowableSequence::try_from(&[1][..]).unwrap();
        let mut source = [7, 8].into_iter();
        assert_eq!(
            seq.insert_all(2, &mut source),
            Err(Error::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(source.next(), Some(7));
        assert_eq!(seq, [1]);
    }

    #[test]
    fn test_insert_all_empty_is_noop() {
        let mut seq = GrowableSequence::try_from(&[1, 2][..]).unwrap();
        assert_eq!(seq.insert_all(1, Vec::new()), Ok(false));
        assert_eq!(seq, [1, 2]);
        assert_eq!(seq.mutation_count(), 0);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut seq: GrowableSequence<u32> = (1..=3).collect();
        seq.extend([4, 5]);
        assert_eq!(seq, [1, 2, 3, 4, 5]);
        assert_eq!(seq.capacity(), 5);
    }

    #[test]
    fn test_append_all_from_another_sequence_snapshot() {
        let mut seq = GrowableSequence::try_from(&[1, 2][..]).unwrap();
        let snapshot = seq.to_vec();
        seq.append_all(snapshot).unwrap();
        assert_eq!(seq, [1, 2, 1, 2]);
    }
}
