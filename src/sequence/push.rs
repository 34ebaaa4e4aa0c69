// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::GrowableSequence};

impl<T> GrowableSequence<T> {
    /// Appends `value` at the tail, growing the backing store if it is full.
    ///
    /// Amortized `O(1)`; `O(len)` when a reallocation is needed.
    /// On error the sequence is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let new_len = self.len.checked_add(1).ok_or(Error::CapacityOverflow)?;
        self.ensure_capacity(new_len)?;

        let len = self.len;
        self.storage.slots_mut()[len] = Some(value);

        self.len = new_len;
        self.bump_mutations();
        Ok(())
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let len = self.len;
        let out = self.storage.slots_mut()[len].take();
        self.bump_mutations();
        out
    }
}
