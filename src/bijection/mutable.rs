//! In-place bijection with eviction-based conflict resolution.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::trace;

use super::{Bijection, IntoIter, Iter};
use crate::error::BijectionError;
use crate::evicted::Evicted;
use crate::hasher::{HashedMap, hashed_map};
use crate::traits::{Invert, Lookup, Mutate};

/// A mutable one-to-one mapping between keys and values.
///
/// Both directions are backed by hash maps, so lookups and mutations run in
/// O(1) expected time. Iteration order is unspecified but stable while the
/// bijection is not mutated.
///
/// # Examples
///
/// ```rust
/// use bijective::prelude::*;
///
/// let mut bijection = MutableBijection::new();
/// bijection.set("one", 1);
/// bijection.set("two", 2);
/// assert_eq!(bijection.get("one"), Some(&1));
/// assert_eq!(bijection.get_key(&2), Some(&"two"));
///
/// // "uno" takes 1 from "one", which is left unmapped.
/// bijection.set("uno", 1);
/// assert_eq!(bijection.get("one"), None);
/// assert_eq!(bijection.get_key(&1), Some(&"uno"));
/// assert_eq!(bijection.len(), 2);
/// ```
#[derive(Clone)]
pub struct MutableBijection<K, V> {
    forward: HashedMap<K, V>,
    inverse: HashedMap<V, K>,
}

impl<K, V> MutableBijection<K, V>
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
            forward: hashed_map(capacity),
            inverse: hashed_map(capacity),
        }
    }

    /// Builds a bijection from parallel key and value sequences.
    ///
    /// `keys[i]` is mapped to `values[i]`. Repeated keys or values resolve as
    /// successive [`set`](Mutate::set) calls would.
    ///
    /// # Errors
    ///
    /// [`BijectionError::SizeMismatch`] if the sequences differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijective::prelude::*;
    ///
    /// let bijection = MutableBijection::from_parallel(["a", "b"], [1, 2]).unwrap();
    /// assert_eq!(bijection.get("b"), Some(&2));
    ///
    /// assert!(MutableBijection::from_parallel(["a", "b", "c"], [1, 2]).is_err());
    /// ```
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

    /// Freezes the bijection into an immutable [`Bijection`] without copying.
    #[must_use]
    pub fn freeze(self) -> Bijection<K, V> {
        Bijection::from_maps(self.forward, self.inverse)
    }

    pub(crate) fn from_maps(forward: HashedMap<K, V>, inverse: HashedMap<V, K>) -> Self {
        debug_assert_eq!(forward.len(), inverse.len());
        Self { forward, inverse }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.forward.len() == self.inverse.len()
            && self
                .forward
                .iter()
                .all(|(key, value)| self.inverse.get(value) == Some(key))
    }
}

impl<K, V> Lookup for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = Iter<'a, K, V>
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
    fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.forward.iter())
    }
}

impl<K, V> Mutate for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn set(&mut self, key: K, value: V) -> Evicted<K, V> {
        if self.forward.get(&key) == Some(&value) {
            return Evicted::none();
        }

        let mut evicted = Evicted::none();
        if let Some(previous_value) = self.forward.remove(&key) {
            self.inverse.remove(&previous_value);
            evicted.previous_value = Some(previous_value);
        }
        if let Some(previous_key) = self.inverse.remove(&value) {
            self.forward.remove(&previous_key);
            evicted.previous_key = Some(previous_key);
        }

        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);

        if !evicted.is_empty() {
            trace!(
                evicted_by_key = evicted.previous_value.is_some(),
                evicted_by_value = evicted.previous_key.is_some(),
                len = self.forward.len(),
                "bijection entry replaced"
            );
        }
        evicted
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    fn remove_by_value<Q>(&mut self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let key = self.inverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    fn remove_all(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }
}

impl<K, V> Invert for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Inverse = MutableBijection<V, K>;

    /// O(n): both maps are cloned.
    fn inverse(&self) -> MutableBijection<V, K> {
        MutableBijection::from_maps(self.inverse.clone(), self.forward.clone())
    }

    /// O(1): the maps swap roles.
    fn into_inverse(self) -> MutableBijection<V, K> {
        MutableBijection::from_maps(self.inverse, self.forward)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for MutableBijection<K, V>
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

impl<K, V> FromIterator<(K, V)> for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Later pairs win conflicts, as with repeated [`set`](Mutate::set).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bijection = Self::with_capacity(iter.size_hint().0);
        bijection.extend(iter);
        bijection
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Duplicate values in `map` resolve last-write-wins in the map's
    /// iteration order.
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> IntoIterator for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.forward.into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> PartialEq for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K, V> Eq for MutableBijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
}

impl<K, V> fmt::Debug for MutableBijection<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.forward.iter()).finish()
    }
}
