// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::GrowableSequence};

impl<T> GrowableSequence<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// - `index == len` appends.
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`.
    /// - Growth errors are reported as for [`push`](Self::push).
    ///
    /// `O(len - index)`, plus a reallocation when full.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let new_len = len.checked_add(1).ok_or(Error::CapacityOverflow)?;
        self.ensure_capacity(new_len)?;

        // Shift right: the empty slot at `len` rotates down to `index`.
        let window = &mut self.storage.slots_mut()[index..new_len];
        window.rotate_right(1);
        window[0] = Some(value);

        self.len = new_len;
        self.bump_mutations();
        Ok(())
    }
}
