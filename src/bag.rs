// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An insert-only, unordered multiset.

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, iter::FusedIterator};

struct Node<T> {
    item: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A collection that only supports adding items and iterating over them.
///
/// Items are kept in a singly linked list, so [`insert`](Bag::insert) is
/// `O(1)` and never reallocates. Iteration order is unspecified; currently the
/// most recently inserted item comes first. Duplicates are kept.
///
/// # Examples
///
/// ```rust
/// use growable_seq::Bag;
///
/// let mut bag = Bag::new();
/// bag.insert("1");
/// bag.insert("2");
/// bag.insert("3");
///
/// assert_eq!(bag.len(), 3);
/// assert!(bag.contains(&"1"));
/// assert!(!bag.contains(&"4"));
/// ```
pub struct Bag<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Bag<T> {
    /// Creates an empty bag.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of items in the bag.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `item` to the bag.
    pub fn insert(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    /// Returns `true` if some item equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Iterates over the items, most recently inserted first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Bag<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive drop would use one
        // stack frame per item.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`Bag::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}
