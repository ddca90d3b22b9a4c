//! Immutable ordered bijection with shared storage.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{MutableOrderedBijection, OrderedIntoIter, OrderedIter};
use crate::ReferenceCounter;
use crate::error::BijectionError;
use crate::hasher::{OrderedMap, ordered_map};
use crate::traits::{Invert, Lookup, Mutate, Ordered};

/// An immutable one-to-one mapping with a deterministic entry order.
///
/// Like [`Bijection`](crate::Bijection), the storage is shared, so `clone`
/// and [`inverse`](Invert::inverse) are O(1). The inverse keeps the order:
/// the value at position `i` becomes the key at position `i`.
///
/// # Examples
///
/// ```rust
/// use bijective::prelude::*;
///
/// let bijection =
///     OrderedBijection::from_parallel(["x", "y", "z"], [10, 20, 30]).unwrap();
/// assert_eq!(bijection.key_at(2), Ok(&"z"));
/// assert_eq!(bijection.index_of("y"), Some(1));
/// assert!(bijection.key_at(3).is_err());
///
/// let inverse = bijection.inverse();
/// assert_eq!(inverse.ordered_keys(), vec![10, 20, 30]);
/// ```
pub struct OrderedBijection<K, V> {
    forward: ReferenceCounter<OrderedMap<K, V>>,
    inverse: ReferenceCounter<OrderedMap<V, K>>,
}

impl<K, V> OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Creates an empty bijection.
    #[must_use]
    pub fn new() -> Self {
        Self::from_maps(ordered_map(0), ordered_map(0))
    }

    /// Builds a bijection from parallel key and value sequences, in sequence
    /// order.
    ///
    /// # Errors
    ///
    /// [`BijectionError::SizeMismatch`] if the sequences differ in length.
    pub fn from_parallel<IK, IV>(keys: IK, values: IV) -> Result<Self, BijectionError>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        MutableOrderedBijection::from_parallel(keys, values).map(MutableOrderedBijection::freeze)
    }

    /// Returns a new bijection holding this one's entries followed by
    /// `other`'s, in `other`'s iteration order. On conflict, `other` wins:
    /// an existing key keeps its position, and a key that loses its value to
    /// `other` is dropped.
    #[must_use]
    pub fn union<L>(&self, other: &L) -> Self
    where
        L: Lookup<Key = K, Value = V> + ?Sized,
    {
        let mut merged = MutableOrderedBijection::from_maps(
            (*self.forward).clone(),
            (*self.inverse).clone(),
        );
        merged.add_entries(other);
        merged.freeze()
    }

    /// Converts into a [`MutableOrderedBijection`], copying only if the
    /// storage is shared with another `OrderedBijection`.
    #[must_use]
    pub fn into_mutable(self) -> MutableOrderedBijection<K, V> {
        MutableOrderedBijection::from_maps(
            ReferenceCounter::unwrap_or_clone(self.forward),
            ReferenceCounter::unwrap_or_clone(self.inverse),
        )
    }

    pub(crate) fn from_maps(forward: OrderedMap<K, V>, inverse: OrderedMap<V, K>) -> Self {
        debug_assert_eq!(forward.len(), inverse.len());
        Self {
            forward: ReferenceCounter::new(forward),
            inverse: ReferenceCounter::new(inverse),
        }
    }
}

impl<K, V> Lookup for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = OrderedIter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key)
    }

    #[inline]
    fn get_key<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inverse.get(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    fn iter(&self) -> OrderedIter<'_, K, V> {
        OrderedIter::new(self.forward.iter())
    }
}

impl<K, V> Ordered for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn entry_at(&self, index: usize) -> Result<(&K, &V), BijectionError> {
        self.forward
            .get_index(index)
            .ok_or(BijectionError::IndexOutOfRange {
                index,
                len: self.forward.len(),
            })
    }

    #[inline]
    fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get_index_of(key)
    }

    #[inline]
    fn index_of_value<Q>(&self, value: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inverse.get_index_of(value)
    }
}

impl<K, V> Invert for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Inverse = OrderedBijection<V, K>;

    /// O(1): storage is shared, not copied.
    fn inverse(&self) -> OrderedBijection<V, K> {
        OrderedBijection {
            forward: ReferenceCounter::clone(&self.inverse),
            inverse: ReferenceCounter::clone(&self.forward),
        }
    }

    fn into_inverse(self) -> OrderedBijection<V, K> {
        OrderedBijection {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for OrderedBijection<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            forward: ReferenceCounter::clone(&self.forward),
            inverse: ReferenceCounter::clone(&self.inverse),
        }
    }
}

impl<K, V> Default for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .collect::<MutableOrderedBijection<K, V>>()
            .freeze()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        MutableOrderedBijection::from(map).freeze()
    }
}

impl<K, V> From<MutableOrderedBijection<K, V>> for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn from(bijection: MutableOrderedBijection<K, V>) -> Self {
        bijection.freeze()
    }
}

impl<K, V> IntoIterator for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = OrderedIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedIntoIter::new(ReferenceCounter::unwrap_or_clone(self.forward).into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> PartialEq for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Content equality; position is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K, V> Eq for OrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
}

impl<K, V> fmt::Debug for OrderedBijection<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.forward.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_union_appends_new_keys_in_order() {
        let left: OrderedBijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let right: OrderedBijection<&str, i32> = [("c", 3), ("a", 10)].into_iter().collect();
        let union = left.union(&right);
        assert_eq!(union.ordered_keys(), vec!["a", "b", "c"]);
        assert_eq!(union.get("a"), Some(&10));
    }

    #[rstest]
    fn test_entry_at_out_of_range() {
        let bijection: OrderedBijection<&str, i32> = OrderedBijection::new();
        assert_eq!(
            bijection.entry_at(0),
            Err(BijectionError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[rstest]
    fn test_into_iter_yields_positions_in_order() {
        let bijection: OrderedBijection<&str, i32> =
            [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        let shared = bijection.clone();
        let entries: Vec<(&str, i32)> = bijection.into_iter().collect();
        assert_eq!(entries, vec![("c", 3), ("a", 1), ("b", 2)]);
        assert_eq!(shared.len(), 3);
    }

    #[rstest]
    fn test_into_iter_reverse() {
        let bijection: OrderedBijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let keys: Vec<&str> = bijection.iter().rev().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
