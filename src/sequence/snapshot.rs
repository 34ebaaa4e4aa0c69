// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copies out of a sequence: snapshots, caller buffers and `Clone`.
//!
//! Every copy here clones elements with `T::clone` and never shares the
//! backing store.

// Crate imports
use crate::sequence::{GrowableSequence, Storage};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T: Clone> GrowableSequence<T> {
    /// Returns a new `Vec` with exactly the `len` elements, in order.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Clones the elements into `dst`, front to back, and returns how many
    /// were copied (`min(len, dst.len())`). Slots of `dst` past that are not
    /// touched.
    pub fn copy_into(&self, dst: &mut [T]) -> usize {
        let mut copied = 0;
        for (slot, item) in dst.iter_mut().zip(self.iter()) {
            slot.clone_from(item);
            copied += 1;
        }
        copied
    }
}

impl<T> GrowableSequence<T> {
    /// Consumes the sequence and returns its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        match self.storage {
            Storage::PendingDefault => Vec::new(),
            Storage::Allocated(slots) => slots
                .into_vec()
                .into_iter()
                .take(self.len)
                .flatten()
                .collect(),
        }
    }
}

impl<T: Clone> Clone for GrowableSequence<T> {
    /// Returns an independent sequence with a backing store of exactly `len`
    /// slots and a fresh mutation history.
    fn clone(&self) -> Self {
        let slots: Box<[Option<T>]> = self.iter().cloned().map(Some).collect();
        Self {
            storage: Storage::Allocated(slots),
            len: self.len,
            mutations: 0,
        }
    }
}
