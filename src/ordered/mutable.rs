//! In-place ordered bijection with positional insertion.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::trace;

use super::{OrderedBijection, OrderedIntoIter, OrderedIter};
use crate::error::BijectionError;
use crate::evicted::Evicted;
use crate::hasher::{OrderedMap, ordered_map};
use crate::traits::{Invert, Lookup, Mutate, Ordered, OrderedMutate};

/// A mutable one-to-one mapping that keeps its entries in a deterministic
/// order.
///
/// - [`set`](Mutate::set) keeps an existing key in place and appends a new one.
/// - [`set_at`](OrderedMutate::set_at) places the entry at a given position,
///   shifting later entries up by one.
/// - [`remove`](Mutate::remove) splices the entry out, shifting later entries
///   down by one.
///
/// # Examples
///
/// ```rust
/// use bijective::prelude::*;
///
/// let mut bijection = MutableOrderedBijection::new();
/// bijection.set("a", 1);
/// bijection.set("b", 2);
/// bijection.set("c", 3);
///
/// // An existing key keeps its slot.
/// bijection.set("b", 20);
/// assert_eq!(bijection.ordered_keys(), vec!["a", "b", "c"]);
///
/// // Moving an existing key never duplicates it.
/// bijection.set_at("c", 3, 0).unwrap();
/// assert_eq!(bijection.ordered_keys(), vec!["c", "a", "b"]);
///
/// bijection.remove("a");
/// assert_eq!(bijection.index_of("b"), Some(1));
/// ```
#[derive(Clone)]
pub struct MutableOrderedBijection<K, V> {
    forward: OrderedMap<K, V>,
    inverse: OrderedMap<V, K>,
}

impl<K, V> MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Creates an empty bijection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty bijection with room for `capacity` entries.
    ///
    /// The capacity is a performance hint only.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: ordered_map(capacity),
            inverse: ordered_map(capacity),
        }
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
        let keys: Vec<K> = keys.into_iter().collect();
        let values: Vec<V> = values.into_iter().collect();
        if keys.len() != values.len() {
            return Err(BijectionError::SizeMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let mut bijection = Self::with_capacity(keys.len());
        bijection.extend(keys.into_iter().zip(values));
        Ok(bijection)
    }

    /// Freezes the bijection into an immutable [`OrderedBijection`] without
    /// copying.
    #[must_use]
    pub fn freeze(self) -> OrderedBijection<K, V> {
        OrderedBijection::from_maps(self.forward, self.inverse)
    }

    pub(crate) fn from_maps(forward: OrderedMap<K, V>, inverse: OrderedMap<V, K>) -> Self {
        debug_assert_eq!(forward.len(), inverse.len());
        Self { forward, inverse }
    }

    /// Removes the entry at `index` from both maps.
    fn splice_out(&mut self, index: usize) -> Option<(K, V)> {
        let (key, value) = self.forward.shift_remove_index(index)?;
        let mirrored = self.inverse.shift_remove_index(index);
        debug_assert!(
            mirrored
                .as_ref()
                .is_some_and(|(mirrored_value, mirrored_key)| {
                    *mirrored_value == value && *mirrored_key == key
                }),
            "forward and inverse order diverged at {index}"
        );
        Some((key, value))
    }

    /// Inserts a pair whose key and value are both absent at `index`.
    fn splice_in(&mut self, index: usize, key: K, value: V) {
        debug_assert!(index <= self.forward.len());
        self.forward.shift_insert(index, key.clone(), value.clone());
        self.inverse.shift_insert(index, value, key);
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.forward.len() == self.inverse.len()
            && self
                .forward
                .iter()
                .zip(self.inverse.iter())
                .all(|((key, value), (mirrored_value, mirrored_key))| {
                    key == mirrored_key && value == mirrored_value
                })
    }
}

impl<K, V> Lookup for MutableOrderedBijection<K, V>
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

impl<K, V> Mutate for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn set(&mut self, key: K, value: V) -> Evicted<K, V> {
        if self.forward.get(&key) == Some(&value) {
            return Evicted::none();
        }

        let mut evicted = Evicted::none();
        let mut slot = None;
        if let Some(index) = self.forward.get_index_of(&key)
            && let Some((_, previous_value)) = self.splice_out(index)
        {
            evicted.previous_value = Some(previous_value);
            slot = Some(index);
        }
        if let Some(index) = self.inverse.get_index_of(&value)
            && let Some((previous_key, _)) = self.splice_out(index)
        {
            evicted.previous_key = Some(previous_key);
            if let Some(slot) = slot.as_mut()
                && index < *slot
            {
                *slot -= 1;
            }
        }

        let index = slot.unwrap_or(self.forward.len());
        self.splice_in(index, key, value);

        if !evicted.is_empty() {
            trace!(
                evicted_by_key = evicted.previous_value.is_some(),
                evicted_by_value = evicted.previous_key.is_some(),
                index,
                len = self.forward.len(),
                "ordered bijection entry replaced"
            );
        }
        evicted
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _, value) = self.forward.shift_remove_full(key)?;
        let mirrored = self.inverse.shift_remove_index(index);
        debug_assert!(mirrored.is_some_and(|(mirrored_value, _)| mirrored_value == value));
        Some(value)
    }

    fn remove_by_value<Q>(&mut self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _, key) = self.inverse.shift_remove_full(value)?;
        let mirrored = self.forward.shift_remove_index(index);
        debug_assert!(mirrored.is_some_and(|(mirrored_key, _)| mirrored_key == key));
        Some(key)
    }

    fn remove_all(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }
}

impl<K, V> Ordered for MutableOrderedBijection<K, V>
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

impl<K, V> OrderedMutate for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn set_at(&mut self, key: K, value: V, index: usize) -> Result<Evicted<K, V>, BijectionError> {
        let len = self.forward.len();
        if index > len {
            return Err(BijectionError::IndexOutOfRange { index, len });
        }

        let mut evicted = Evicted::none();
        if let Some(position) = self.forward.get_index_of(&key)
            && let Some((_, previous_value)) = self.splice_out(position)
            && previous_value != value
        {
            evicted.previous_value = Some(previous_value);
        }
        if let Some(position) = self.inverse.get_index_of(&value)
            && let Some((previous_key, _)) = self.splice_out(position)
        {
            evicted.previous_key = Some(previous_key);
        }

        let index = index.min(self.forward.len());
        self.splice_in(index, key, value);

        trace!(
            index,
            evicted_by_key = evicted.previous_value.is_some(),
            evicted_by_value = evicted.previous_key.is_some(),
            len = self.forward.len(),
            "ordered bijection entry placed"
        );
        Ok(evicted)
    }
}

impl<K, V> Invert for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Inverse = MutableOrderedBijection<V, K>;

    /// O(n): both maps are cloned. The order is preserved.
    fn inverse(&self) -> MutableOrderedBijection<V, K> {
        MutableOrderedBijection::from_maps(self.inverse.clone(), self.forward.clone())
    }

    /// O(1): the maps swap roles. The order is preserved.
    fn into_inverse(self) -> MutableOrderedBijection<V, K> {
        MutableOrderedBijection::from_maps(self.inverse, self.forward)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Entries are ordered by first appearance of their key; later pairs win
    /// conflicts.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bijection = Self::with_capacity(iter.size_hint().0);
        bijection.extend(iter);
        bijection
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Entries take the map's iteration order.
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> IntoIterator for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = OrderedIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedIntoIter::new(self.forward.into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a MutableOrderedBijection<K, V>
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

impl<K, V> PartialEq for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Content equality; position is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K, V> Eq for MutableOrderedBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
}

impl<K, V> fmt::Debug for MutableOrderedBijection<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.forward.iter()).finish()
    }
}
