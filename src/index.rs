// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableSequence`](crate::GrowableSequence).
//!
//! `seq[i]` mirrors slice behavior and panics when `i >= len`. Use
//! [`get`](crate::GrowableSequence::get) or
//! [`set`](crate::GrowableSequence::set) for the checked forms.
//! Range indexing is not offered: the live prefix is not a contiguous `[T]`.

// Crate imports
use crate::sequence::GrowableSequence;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableSequence<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match self.get_mut(i) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}
