//! Bijections with a deterministic, index-addressable entry order.
//!
//! - [`OrderedBijection`]: immutable, O(1) inverse
//! - [`MutableOrderedBijection`]: in-place mutation, positional insertion
//!
//! # Storage
//!
//! Both directions are insertion-ordered hash maps kept in lockstep: the
//! entry at position `i` of `forward` is `(k, v)` exactly when the entry at
//! position `i` of `inverse` is `(v, k)`. The shared position sequence is the
//! bijection's order, so `index_of` and `index_of_value` are O(1) and the
//! inverse keeps the same order.
//!
//! # Time Complexity
//!
//! | Operation             | Complexity          |
//! |-----------------------|---------------------|
//! | `get` / `get_key`     | O(1) expected       |
//! | `entry_at`, `key_at`  | O(1)                |
//! | `index_of`            | O(1) expected       |
//! | `set` (append)        | O(1) amortized      |
//! | `set` (evicting)      | O(n)                |
//! | `set_at`              | O(n)                |
//! | `remove`              | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use bijective::prelude::*;
//!
//! let mut bijection: MutableOrderedBijection<&str, i32> =
//!     [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
//!
//! bijection.set_at("d", 4, 1).unwrap();
//! assert_eq!(bijection.ordered_keys(), vec!["a", "d", "b", "c"]);
//! assert_eq!(bijection.key_at(1), Ok(&"d"));
//! assert_eq!(bijection.index_of("b"), Some(2));
//! ```

mod immutable;
mod mutable;

use std::iter::FusedIterator;

pub use immutable::OrderedBijection;
pub use mutable::MutableOrderedBijection;

/// Borrowing iterator over the entries of an ordered bijection, by position.
#[derive(Clone)]
pub struct OrderedIter<'a, K, V> {
    inner: indexmap::map::Iter<'a, K, V>,
}

impl<'a, K, V> OrderedIter<'a, K, V> {
    pub(crate) const fn new(inner: indexmap::map::Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for OrderedIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedIter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedIter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedIter<'_, K, V> {}

/// Owning iterator over the entries of an ordered bijection, by position.
pub struct OrderedIntoIter<K, V> {
    inner: indexmap::map::IntoIter<K, V>,
}

impl<K, V> OrderedIntoIter<K, V> {
    pub(crate) const fn new(inner: indexmap::map::IntoIter<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Iterator for OrderedIntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedIntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedIntoIter<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedIntoIter<K, V> {}
