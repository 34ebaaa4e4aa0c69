// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration support for [`GrowableSequence`](crate::GrowableSequence).
//!
//! - [`Iter`], [`IterMut`] and [`IntoIter`] are the usual borrowed/owned
//!   iterators. They support `DoubleEndedIterator`, `ExactSizeIterator`, and
//!   `FusedIterator`. The borrow checker already rules out mutation while they
//!   are alive.
//! - [`Cursor`] is a detached traversal position that holds no borrow between
//!   steps. It remembers the sequence's mutation count and reports
//!   [`Error::ConcurrentModification`] once the sequence changed shape under it.

// Crate imports
use crate::{
    error::Error,
    sequence::{GrowableSequence, Storage},
};

// Alloc imports
use alloc::vec;

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`GrowableSequence::iter`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n).and_then(Option::as_ref)
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Mutably borrowing iterator returned by [`GrowableSequence::iter_mut`].
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owned iterator returned by `GrowableSequence::into_iter()`.
///
/// Yields elements by value from front to back.
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next().flatten()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().flatten()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> GrowableSequence<T> {
    /// Iterates the elements by shared reference, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.live().iter(),
        }
    }

    /// Iterates the elements by mutable reference. Not a structural mutation.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.live_mut().iter_mut(),
        }
    }

    /// Starts a fail-fast [`Cursor`] at the front of the sequence.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            next: 0,
            last: None,
            expected: self.mutations,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for GrowableSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let slots = match self.storage {
            Storage::PendingDefault => alloc::vec::Vec::new(),
            Storage::Allocated(slots) => {
                let mut slots = slots.into_vec();
                slots.truncate(self.len);
                slots
            }
        };
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

/// A traversal position over a [`GrowableSequence`] that detects structural
/// changes.
///
/// A cursor does not borrow the sequence; each step takes it as an argument.
/// The cursor records the sequence's
/// [`mutation_count`](GrowableSequence::mutation_count) when created and
/// checks it on every step, returning [`Error::ConcurrentModification`] if it
/// moved. Value-only writes such as [`set`](GrowableSequence::set) are not
/// detected.
///
/// Detection is best effort: a cursor must only be used with the sequence it
/// was created from.
///
/// # Examples
///
/// ```rust
/// use growable_seq::{Error, GrowableSequence};
///
/// let mut seq = GrowableSequence::try_from(&[1, 2, 3][..]).unwrap();
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.next(&seq), Ok(Some(&1)));
///
/// seq.push(4).unwrap();
/// assert!(matches!(
///     cursor.next(&seq),
///     Err(Error::ConcurrentModification { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    next: usize,
    last: Option<usize>,
    expected: u64,
}

impl Cursor {
    /// Index of the element the next call to [`next`](Cursor::next) yields.
    #[inline]
    pub const fn position(&self) -> usize {
        self.next
    }

    /// Returns `true` if another element is available.
    pub fn has_next<T>(&self, seq: &GrowableSequence<T>) -> Result<bool, Error> {
        self.check(seq)?;
        Ok(self.next < seq.len())
    }

    /// Yields the next element, or `Ok(None)` at the end.
    pub fn next<'a, T>(&mut self, seq: &'a GrowableSequence<T>) -> Result<Option<&'a T>, Error> {
        self.check(seq)?;
        if self.next >= seq.len() {
            return Ok(None);
        }
        let item = seq.get(self.next)?;
        self.last = Some(self.next);
        self.next += 1;
        Ok(Some(item))
    }

    /// Returns the next element without advancing.
    pub fn peek<'a, T>(&self, seq: &'a GrowableSequence<T>) -> Result<Option<&'a T>, Error> {
        self.check(seq)?;
        Ok(seq.get(self.next).ok())
    }

    /// Removes the element most recently yielded by [`next`](Cursor::next).
    ///
    /// Removal through the cursor is not a conflict: the cursor adopts the
    /// new mutation count. Returns `Ok(None)` if nothing was yielded since
    /// the last removal.
    pub fn remove<T>(&mut self, seq: &mut GrowableSequence<T>) -> Result<Option<T>, Error> {
        self.check(seq)?;
        let Some(index) = self.last.take() else {
            return Ok(None);
        };
        let removed = seq.remove(index)?;
        self.next = index;
        self.expected = seq.mutation_count();
        Ok(Some(removed))
    }

    fn check<T>(&self, seq: &GrowableSequence<T>) -> Result<(), Error> {
        let found = seq.mutation_count();
        if found == self.expected {
            Ok(())
        } else {
            Err(Error::ConcurrentModification {
                expected: self.expected,
                found,
            })
        }
    }
}
