// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-seq`
//!
//! A `no_std` + `alloc`, heap-backed growable sequence with explicit capacity
//! management, **with no `unsafe`**.
//!
//! The core type, [`GrowableSequence<T>`], keeps its elements in a contiguous
//! backing store and tracks a logical length `len ∈ 0..=capacity`. It behaves
//! much like `Vec<T>`, with a few deliberate differences:
//!
//! - Capacity is observable and policy-driven: a default-constructed sequence
//!   allocates nothing until its first write, then starts at
//!   [`DEFAULT_CAPACITY`](GrowableSequence::DEFAULT_CAPACITY) slots; afterwards
//!   it grows to 1.5x, or to exactly what a bulk operation needs.
//! - Index- and capacity-sensitive operations return [`Error`] instead of
//!   panicking or aborting. Only `seq[i]` panics, like slices do.
//! - Every structural mutation is counted. A detached [`Cursor`] uses the count
//!   to fail fast with [`Error::ConcurrentModification`].
//!
//! The crate also ships two small companions: [`Bag`], an unordered,
//! insert-only multiset, and [`bubble_sort`], an in-place stable sort for
//! slices (for example a [`GrowableSequence::to_vec`] snapshot).
//!
//! ## Capacity policy
//!
//! | State / request                         | Resulting capacity                |
//! |-----------------------------------------|-----------------------------------|
//! | `new()` / `default()`                   | 0, pending default                |
//! | first growth while pending              | `max(10, required)`               |
//! | growth                                  | `max(capacity * 3 / 2, required)` |
//! | growth result above `MAX_ARRAY_SIZE`    | clamped to `MAX_ARRAY_SIZE`       |
//! | required above `MAX_ARRAY_SIZE`         | `MAX_CAPACITY`                    |
//! | required above `MAX_CAPACITY`           | [`Error::CapacityOverflow`]       |
//! | allocator refuses the block             | [`Error::OutOfMemory`]            |
//!
//! ## Logging
//!
//! The crate emits records through the [`log`] facade: `trace` on every
//! reallocation and `debug` when the backing store is shrunk. Nothing is
//! printed unless the application installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use growable_seq::{bubble_sort, GrowableSequence};
//!
//! let mut seq = GrowableSequence::new();
//! seq.append_all([5, 9, 3]).unwrap();
//! seq.insert(0, 7).unwrap();
//! assert_eq!(seq, [7, 5, 9, 3]);
//!
//! let mut snapshot = seq.to_vec();
//! bubble_sort(&mut snapshot);
//! assert_eq!(snapshot, [3, 5, 7, 9]);
//! // The snapshot is independent of the sequence.
//! assert_eq!(seq.first(), Some(&7));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod bag;
mod error;
mod index;
mod iter;
mod sequence;
mod sort;

// Public exports (crate API surface)
pub use bag::{Bag, Iter as BagIter};
pub use error::Error;
pub use iter::{Cursor, IntoIter, Iter, IterMut};
pub use sequence::GrowableSequence;
pub use sort::bubble_sort;
