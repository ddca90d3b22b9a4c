//! Hash-backed bijections with unspecified iteration order.
//!
//! - [`Bijection`]: immutable, cheaply cloneable, O(1) inverse
//! - [`MutableBijection`]: in-place mutation with eviction
//!
//! Both keep two hash maps, `forward` (key to value) and `inverse` (value to
//! key), that always describe the same set of pairs.
//!
//! # Examples
//!
//! ```rust
//! use bijective::prelude::*;
//!
//! let mut mutable = MutableBijection::new();
//! mutable.set("a", 1);
//! mutable.set("b", 2);
//!
//! let frozen = mutable.freeze();
//! let flipped = frozen.inverse();
//! assert_eq!(flipped.get(&1), Some(&"a"));
//! assert_eq!(flipped.get(&2), Some(&"b"));
//! ```

mod immutable;
mod mutable;

use std::collections::hash_map;
use std::iter::FusedIterator;

pub use immutable::Bijection;
pub use mutable::MutableBijection;

/// Borrowing iterator over the entries of a hash-backed bijection.
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: hash_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) const fn new(inner: hash_map::Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
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

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator over the entries of a hash-backed bijection.
pub struct IntoIter<K, V> {
    inner: hash_map::IntoIter<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) const fn new(inner: hash_map::IntoIter<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
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

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}
