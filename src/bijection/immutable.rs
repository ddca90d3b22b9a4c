//! Immutable bijection with shared storage.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{IntoIter, Iter, MutableBijection};
use crate::ReferenceCounter;
use crate::error::BijectionError;
use crate::hasher::{HashedMap, hashed_map};
use crate::traits::{Invert, Lookup, Mutate};

/// An immutable one-to-one mapping between keys and values.
///
/// Once built, a `Bijection` never changes. Its two maps live behind
/// reference counters, so `clone` and [`inverse`](Invert::inverse) are O(1):
/// the inverse shares storage with the original, with the roles of the maps
/// swapped. Because neither side can ever be mutated, the inverse behaves as
/// an independent value, not as a live alias.
///
/// # Examples
///
/// ```rust
/// use bijective::prelude::*;
///
/// let bijection: Bijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_eq!(bijection.get("a"), Some(&1));
/// assert_eq!(bijection.get_key(&2), Some(&"b"));
///
/// let inverse = bijection.inverse();
/// assert_eq!(inverse.get(&1), Some(&"a"));
/// assert_eq!(inverse.get(&2), Some(&"b"));
/// ```
pub struct Bijection<K, V> {
    forward: ReferenceCounter<HashedMap<K, V>>,
    inverse: ReferenceCounter<HashedMap<V, K>>,
}

impl<K, V> Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Creates an empty bijection.
    #[must_use]
    pub fn new() -> Self {
        Self::from_maps(hashed_map(0), hashed_map(0))
    }

    /// Builds a bijection from parallel key and value sequences.
    ///
    /// # Errors
    ///
    /// [`BijectionError::SizeMismatch`] if the sequences differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijective::{Bijection, BijectionError};
    ///
    /// let error = Bijection::from_parallel(["a", "b", "c"], [1, 2]).unwrap_err();
    /// assert_eq!(error, BijectionError::SizeMismatch { keys: 3, values: 2 });
    /// ```
    pub fn from_parallel<IK, IV>(keys: IK, values: IV) -> Result<Self, BijectionError>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        MutableBijection::from_parallel(keys, values).map(MutableBijection::freeze)
    }

    /// Returns a new bijection holding this one's entries followed by
    /// `other`'s. On conflict, `other` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijective::prelude::*;
    ///
    /// let left: Bijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let right: Bijection<&str, i32> = [("c", 1)].into_iter().collect();
    ///
    /// let union = left.union(&right);
    /// assert_eq!(union.get("c"), Some(&1));
    /// assert_eq!(union.get("a"), None);
    /// assert_eq!(union.len(), 2);
    /// ```
    #[must_use]
    pub fn union<L>(&self, other: &L) -> Self
    where
        L: Lookup<Key = K, Value = V> + ?Sized,
    {
        let mut merged =
            MutableBijection::from_maps((*self.forward).clone(), (*self.inverse).clone());
        merged.add_entries(other);
        merged.freeze()
    }

    /// Converts into a [`MutableBijection`], copying only if the storage is
    /// shared with another `Bijection`.
    #[must_use]
    pub fn into_mutable(self) -> MutableBijection<K, V> {
        MutableBijection::from_maps(
            ReferenceCounter::unwrap_or_clone(self.forward),
            ReferenceCounter::unwrap_or_clone(self.inverse),
        )
    }

    pub(crate) fn from_maps(forward: HashedMap<K, V>, inverse: HashedMap<V, K>) -> Self {
        debug_assert_eq!(forward.len(), inverse.len());
        Self {
            forward: ReferenceCounter::new(forward),
            inverse: ReferenceCounter::new(inverse),
        }
    }
}

impl<K, V> Lookup for Bijection<K, V>
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

impl<K, V> Invert for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Inverse = Bijection<V, K>;

    /// O(1): storage is shared, not copied.
    fn inverse(&self) -> Bijection<V, K> {
        Bijection {
            forward: ReferenceCounter::clone(&self.inverse),
            inverse: ReferenceCounter::clone(&self.forward),
        }
    }

    fn into_inverse(self) -> Bijection<V, K> {
        Bijection {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for Bijection<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            forward: ReferenceCounter::clone(&self.forward),
            inverse: ReferenceCounter::clone(&self.inverse),
        }
    }
}

impl<K, V> Default for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Later pairs win conflicts.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().collect::<MutableBijection<K, V>>().freeze()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Duplicate values in `map` resolve last-write-wins in the map's
    /// iteration order.
    fn from(map: HashMap<K, V, S>) -> Self {
        MutableBijection::from(map).freeze()
    }
}

impl<K, V> From<MutableBijection<K, V>> for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[inline]
    fn from(bijection: MutableBijection<K, V>) -> Self {
        bijection.freeze()
    }
}

impl<K, V> IntoIterator for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(ReferenceCounter::unwrap_or_clone(self.forward).into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a Bijection<K, V>
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

impl<K, V> PartialEq for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        (ReferenceCounter::ptr_eq(&self.forward, &other.forward)
            && ReferenceCounter::ptr_eq(&self.inverse, &other.inverse))
            || self.equals(other)
    }
}

impl<K, V> Eq for Bijection<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
}

impl<K, V> fmt::Debug for Bijection<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.forward.iter()).finish()
    }
}
