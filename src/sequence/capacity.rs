// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity management: growth policy, reservation and shrinking.
//!
//! All growth goes through [`grown_capacity`], a pure function over slot
//! counts, so the limit handling can be exercised without allocating.

// Crate imports
use crate::{
    error::Error,
    sequence::{GrowableSequence, Storage},
};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// External imports - log
use log::{debug, trace};

/// Starting capacity of a default-constructed sequence.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// Slots kept in reserve below the platform maximum.
const HEADROOM: usize = 8;

const fn max_slots(slot_size: usize) -> usize {
    let size = if slot_size == 0 { 1 } else { slot_size };
    isize::MAX as usize / size
}

/// Computes the capacity to grow to so that at least `required` slots exist.
///
/// - While `pending_default`, `required` is raised to [`DEFAULT_CAPACITY`].
/// - Otherwise grows by half the current capacity, or straight to `required`
///   if that is larger.
/// - Results above `max_capacity - HEADROOM` are clamped to it; when
///   `required` itself is above that bound the true `max_capacity` is used;
///   when `required` exceeds `max_capacity` this fails with
///   [`Error::CapacityOverflow`].
pub(crate) fn grown_capacity(
    current: usize,
    required: usize,
    pending_default: bool,
    max_capacity: usize,
) -> Result<usize, Error> {
    let required = if pending_default {
        required.max(DEFAULT_CAPACITY)
    } else {
        required
    };
    let max_array_size = max_capacity.saturating_sub(HEADROOM);

    let grown = current.saturating_add(current >> 1).max(required);
    if grown <= max_array_size {
        return Ok(grown);
    }
    if required > max_capacity {
        Err(Error::CapacityOverflow)
    } else if required > max_array_size {
        Ok(max_capacity)
    } else {
        Ok(max_array_size)
    }
}

impl<T> GrowableSequence<T> {
    /// Capacity a default-constructed sequence resolves to on its first write.
    pub const DEFAULT_CAPACITY: usize = DEFAULT_CAPACITY;

    /// Largest number of slots the platform can address for this element type.
    pub const MAX_CAPACITY: usize = max_slots(core::mem::size_of::<Option<T>>());

    /// Soft growth limit: growth estimates are clamped here unless a larger
    /// minimum is explicitly required.
    pub const MAX_ARRAY_SIZE: usize = Self::MAX_CAPACITY.saturating_sub(HEADROOM);

    /// Returns the number of allocated slots.
    ///
    /// A default-constructed sequence reports `0` until its first write.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.slots().len()
    }

    /// Returns `capacity - len`, the number of pushes possible without reallocating.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline]
    pub(crate) fn is_pending_default(&self) -> bool {
        matches!(self.storage, Storage::PendingDefault)
    }

    /// Pre-grows the backing store so that it holds at least `min_capacity` slots.
    ///
    /// While the sequence is still waiting for its default allocation, requests
    /// up to [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) are a no-op: the
    /// first write will allocate that much anyway. Requests the current
    /// capacity already satisfies are a no-op as well.
    ///
    /// Reserving is not a structural mutation.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), Error> {
        let threshold = if self.is_pending_default() {
            DEFAULT_CAPACITY
        } else {
            0
        };
        if min_capacity > threshold {
            self.ensure_capacity(min_capacity)?;
        }
        Ok(())
    }

    /// Same as [`reserve`](Self::reserve) with `len + additional`.
    ///
    /// Returns [`Error::CapacityOverflow`] if that sum overflows `usize`.
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        self.reserve(required)
    }

    /// Reallocates the backing store to exactly `len` slots.
    ///
    /// An empty sequence ends up with the zero-length backing (no allocation).
    /// A default-constructed sequence that never allocated stays pending.
    /// Always counts as a structural mutation.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        let capacity = self.capacity();
        if self.len < capacity {
            debug!("shrinking sequence backing store from {capacity} to {} slots", self.len);
            if self.len == 0 {
                self.storage = Storage::Allocated(empty_backing());
            } else {
                self.reallocate(self.len)?;
            }
        }
        self.bump_mutations();
        Ok(())
    }

    /// Makes sure at least `required` slots exist, growing per [`grown_capacity`].
    pub(crate) fn ensure_capacity(&mut self, required: usize) -> Result<(), Error> {
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }
        let new_capacity = grown_capacity(
            capacity,
            required,
            self.is_pending_default(),
            Self::MAX_CAPACITY,
        )?;
        self.reallocate(new_capacity)
    }

    /// Moves the live elements into a fresh backing store of `new_capacity` slots.
    ///
    /// The allocation is attempted before anything is touched, so on error the
    /// sequence is unchanged.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> Result<(), Error> {
        debug_assert!(new_capacity >= self.len);

        let mut slots: Vec<Option<T>> = Vec::new();
        slots
            .try_reserve_exact(new_capacity)
            .map_err(|_| Error::OutOfMemory {
                capacity: new_capacity,
            })?;

        let old_capacity = self.capacity();
        if let Storage::Allocated(old) =
            core::mem::replace(&mut self.storage, Storage::PendingDefault)
        {
            slots.extend(old.into_vec().into_iter().take(self.len));
        }
        slots.resize_with(new_capacity, || None);

        trace!("reallocated sequence backing store: {old_capacity} -> {new_capacity} slots");
        self.storage = Storage::Allocated(slots.into_boxed_slice());
        Ok(())
    }
}

/// The canonical zero-length backing; never allocates.
#[inline]
pub(crate) fn empty_backing<T>() -> Box<[Option<T>]> {
    Vec::new().into_boxed_slice()
}
