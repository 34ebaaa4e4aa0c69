// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableSequence`.
//!
//! These errors represent contract violations (bad indices or arguments),
//! hard resource limits, and fail-fast traversal invalidation.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowableSequence`](crate::GrowableSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A negative initial capacity was requested.
    InvalidArgument {
        /// The capacity the caller asked for.
        requested: isize,
    },
    /// An index was outside the valid range of the operation.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// The required capacity cannot be represented on this platform.
    CapacityOverflow,
    /// The allocator could not provide a backing store of the computed size.
    OutOfMemory {
        /// Number of slots that were requested.
        capacity: usize,
    },
    /// The sequence changed shape while a [`Cursor`](crate::Cursor) was walking it.
    ConcurrentModification {
        /// Mutation count captured when the traversal started (or last synced).
        expected: u64,
        /// Mutation count observed on the sequence.
        found: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { requested } => write!(f, "illegal capacity: {requested}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::OutOfMemory { capacity } => {
                write!(f, "out of memory allocating {capacity} slots")
            }
            Self::ConcurrentModification { expected, found } => write!(
                f,
                "sequence modified during traversal (expected {expected} mutations, found {found})"
            ),
        }
    }
}

impl CoreError for Error {}
