// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::GrowableSequence};

impl<T> GrowableSequence<T> {
    /// Removes and returns the element at `index`, shifting `(index, len)` left.
    ///
    /// The vacated tail slot is emptied. Returns [`Error::IndexOutOfRange`]
    /// if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.take_at(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the sequence untouched when there is none.
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                drop(self.take_at(index));
                true
            }
            None => false,
        }
    }

    /// Drops every element and sets `len = 0`. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.live_mut() {
            *slot = None;
        }
        self.len = 0;
        self.bump_mutations();
    }

    /// Unchecked-by-contract removal shared by `remove` and `remove_item`;
    /// callers guarantee `index < len`.
    pub(crate) fn take_at(&mut self, index: usize) -> Option<T> {
        let len = self.len;

        // Shift left: the emptied slot rotates up to `len - 1`.
        let window = &mut self.storage.slots_mut()[index..len];
        let out = window[0].take();
        window.rotate_left(1);

        self.len = len - 1;
        self.bump_mutations();
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, GrowableSequence};
    use alloc::rc::Rc;

    #[test]
    fn test_remove_first_and_last() {
        let mut seq = GrowableSequence::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        assert_eq!(seq.remove(0), Ok(1));
        assert_eq!(seq.remove(seq.len() - 1), Ok(5));
        assert_eq!(seq, [2, 3, 4]);
        assert_eq!(seq.capacity(), 5);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut seq = GrowableSequence::try_from(&[1, 2][..]).unwrap();
        assert_eq!(
            seq.remove(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        let mut empty: GrowableSequence<i32> = GrowableSequence::new();
        assert_eq!(
            empty.remove(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_remove_releases_ownership() {
        let a = Rc::new('a');
        let b = Rc::new('b');
        let mut seq = GrowableSequence::new();
        seq.push(Rc::clone(&a)).unwrap();
        seq.push(Rc::clone(&b)).unwrap();

        let removed = seq.remove(0).unwrap();
        drop(removed);
        assert_eq!(Rc::strong_count(&a), 1);
        // `b` moved down; exactly one live reference remains in the sequence.
        assert_eq!(Rc::strong_count(&b), 2);
        assert_eq!(**seq.get(0).unwrap(), 'b');
    }

    #[test]
    fn test_remove_item_first_occurrence_only() {
        let mut seq = GrowableSequence::try_from(&[5, 9, 3, 9][..]).unwrap();
        assert!(seq.remove_item(&9));
        assert_eq!(seq, [5, 3, 9]);
        assert!(!seq.remove_item(&7));
        assert_eq!(seq, [5, 3, 9]);
    }

    #[test]
    fn test_clear_keeps_capacity_and_drops_elements() {
        let item = Rc::new(1);
        let mut seq = GrowableSequence::with_capacity(8).unwrap();
        for _ in 0..5 {
            seq.push(Rc::clone(&item)).unwrap();
        }
        assert_eq!(Rc::strong_count(&item), 6);

        let count = seq.mutation_count();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 8);
        assert_eq!(seq.mutation_count(), count + 1);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut seq = GrowableSequence::try_from(&[1, 2, 3][..]).unwrap();
        seq.clear();
        seq.append_all([9, 9]).unwrap();
        assert_eq!(seq, [9, 9]);
    }
}
