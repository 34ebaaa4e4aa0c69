// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    sequence::{GrowableSequence, Storage, capacity::empty_backing},
};

// Alloc imports
use alloc::vec::Vec;

impl<T> GrowableSequence<T> {
    /// Constructs an empty sequence without allocating.
    ///
    /// The first write allocates [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: Storage::PendingDefault,
            len: 0,
            mutations: 0,
        }
    }

    /// Constructs an empty sequence with exactly `capacity` slots.
    ///
    /// - `capacity == 0` uses the zero-length backing and does not allocate.
    /// - Returns [`Error::CapacityOverflow`] above [`MAX_CAPACITY`](Self::MAX_CAPACITY)
    ///   and [`Error::OutOfMemory`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity > Self::MAX_CAPACITY {
            return Err(Error::CapacityOverflow);
        }
        let mut seq = Self {
            storage: Storage::Allocated(empty_backing()),
            len: 0,
            mutations: 0,
        };
        if capacity > 0 {
            seq.reallocate(capacity)?;
        }
        Ok(seq)
    }

    /// Like [`with_capacity`](Self::with_capacity), for capacities coming
    /// from signed arithmetic.
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is negative.
    pub fn with_signed_capacity(capacity: isize) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidArgument {
            requested: capacity,
        })?;
        Self::with_capacity(capacity)
    }

    /// Builds a sequence holding exactly the items of `items`, in order.
    ///
    /// The capacity equals the item count; an empty source gives the
    /// zero-length backing.
    pub(crate) fn from_exact<I: ExactSizeIterator<Item = T>>(items: I) -> Result<Self, Error> {
        let len = items.len();
        let mut slots: Vec<Option<T>> = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { capacity: len })?;
        slots.extend(items.map(Some));
        let len = slots.len();
        Ok(Self {
            storage: Storage::Allocated(slots.into_boxed_slice()),
            len,
            mutations: 0,
        })
    }

    /// Constructs a sequence from a finite iterator, taking a snapshot of its items.
    ///
    /// The items are collected first; the resulting capacity equals their count.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from_exact(items.into_iter())
    }
}

impl<T: Clone> TryFrom<&[T]> for GrowableSequence<T> {
    type Error = Error;

    /// Copies `src` into a new sequence of capacity `src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::from_exact(src.iter().cloned())
    }
}

impl<T> TryFrom<Vec<T>> for GrowableSequence<T> {
    type Error = Error;

    fn try_from(src: Vec<T>) -> Result<Self, Error> {
        Self::from_exact(src.into_iter())
    }
}
