// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::GrowableSequence;

impl<T: PartialEq> GrowableSequence<T> {
    /// Returns the index of the first element equal to `value`, or `None`.
    ///
    /// For `Option<U>` elements, a `None` query matches only `None` slots.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`, or `None`.
    #[inline]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|item| item == value)
    }

    /// Returns `true` if some element equals `value` (linear scan).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}
