//! Capability traits shared by every bijection variant.
//!
//! The concrete types implement exactly the combination they support:
//!
//! | Type                          | [`Lookup`] | [`Mutate`] | [`Ordered`] | [`OrderedMutate`] |
//! |-------------------------------|:----------:|:----------:|:-----------:|:-----------------:|
//! | [`Bijection`]                 | yes        |            |             |                   |
//! | [`MutableBijection`]          | yes        | yes        |             |                   |
//! | `OrderedBijection`            | yes        |            | yes         |                   |
//! | `MutableOrderedBijection`     | yes        | yes        | yes         | yes               |
//!
//! The thread-safe decorators in `sync` wrap a [`Mutate`] implementor and
//! expose the same operations through a lock, returning owned values.
//!
//! [`Bijection`]: crate::Bijection
//! [`MutableBijection`]: crate::MutableBijection

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::BijectionError;
use crate::evicted::Evicted;

/// Read access to a one-to-one mapping.
///
/// Lookups run in O(1) expected time in both directions.
pub trait Lookup {
    /// The key type.
    type Key: Clone + Eq + Hash;
    /// The value type.
    type Value: Clone + Eq + Hash;
    /// Borrowing iterator over `(key, value)` entries.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the value associated with `key`.
    fn get<Q>(&self, key: &Q) -> Option<&Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns the key associated with `value`.
    fn get_key<Q>(&self, value: &Q) -> Option<&Self::Key>
    where
        Self::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the entries.
    ///
    /// Unordered variants yield entries in an unspecified order that is stable
    /// across repeated calls on an unmutated instance. Ordered variants yield
    /// them by position.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if there are no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is mapped.
    #[inline]
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns `true` if `value` is mapped.
    #[inline]
    fn contains_value<Q>(&self, value: &Q) -> bool
    where
        Self::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key(value).is_some()
    }

    /// Borrowing iterator over the keys, in [`iter`](Lookup::iter) order.
    fn keys(&self) -> impl Iterator<Item = &Self::Key> {
        self.iter().map(|(key, _)| key)
    }

    /// Borrowing iterator over the values, in [`iter`](Lookup::iter) order.
    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns a snapshot of the keys.
    ///
    /// The set is an owned copy: later mutation of the bijection does not
    /// affect it.
    fn key_set(&self) -> HashSet<Self::Key> {
        self.keys().cloned().collect()
    }

    /// Returns a snapshot of the values. See [`key_set`](Lookup::key_set).
    fn value_set(&self) -> HashSet<Self::Value> {
        self.values().cloned().collect()
    }

    /// Calls `visit` once for every entry, in [`iter`](Lookup::iter) order.
    ///
    /// The visitor cannot mutate the bijection it walks; the shared borrow
    /// rules that out.
    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Self::Key, &Self::Value),
    {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }

    /// Content equality: same number of entries and, for every key, equal
    /// values. Position is ignored, so an ordered and an unordered bijection
    /// holding the same pairs are equal.
    fn equals<L>(&self, other: &L) -> bool
    where
        L: Lookup<Key = Self::Key, Value = Self::Value> + ?Sized,
    {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }

    /// Copies the entries into a plain, non-bijective map.
    fn to_hash_map(&self) -> HashMap<Self::Key, Self::Value> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Copies the entries into parallel key and value sequences.
    ///
    /// `keys[i]` maps to `values[i]`.
    fn to_parallel(&self) -> (Vec<Self::Key>, Vec<Self::Value>) {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .unzip()
    }

    /// Copies the entries into a new [`MutableBijection`](crate::MutableBijection).
    fn to_mutable(&self) -> crate::MutableBijection<Self::Key, Self::Value> {
        let mut copy = crate::MutableBijection::with_capacity(self.len());
        copy.add_entries(self);
        copy
    }

    /// Copies the entries, in iteration order, into a new
    /// [`MutableOrderedBijection`](crate::MutableOrderedBijection).
    #[cfg(feature = "ordered")]
    fn to_mutable_ordered(&self) -> crate::MutableOrderedBijection<Self::Key, Self::Value> {
        let mut copy = crate::MutableOrderedBijection::with_capacity(self.len());
        copy.add_entries(self);
        copy
    }

    /// Copies the entries into a new
    /// [`ThreadSafeBijection`](crate::ThreadSafeBijection).
    #[cfg(feature = "sync")]
    fn to_thread_safe(&self) -> crate::ThreadSafeBijection<Self::Key, Self::Value> {
        crate::ThreadSafeBijection::from_inner(self.to_mutable())
    }

    /// Copies the entries, in iteration order, into a new
    /// [`ThreadSafeOrderedBijection`](crate::ThreadSafeOrderedBijection).
    #[cfg(all(feature = "ordered", feature = "sync"))]
    fn to_thread_safe_ordered(
        &self,
    ) -> crate::ThreadSafeOrderedBijection<Self::Key, Self::Value> {
        crate::ThreadSafeOrderedBijection::from_inner(self.to_mutable_ordered())
    }
}

/// In-place mutation that keeps the mapping one-to-one.
pub trait Mutate: Lookup {
    /// Maps `key` to `value`, evicting whatever stood in the way.
    ///
    /// 1. If `key` held another value, that value is unmapped.
    /// 2. If `value` was held by another key, that key is unmapped.
    /// 3. The new pair is installed.
    ///
    /// Setting a pair that is already present is a no-op.
    fn set(&mut self, key: Self::Key, value: Self::Value) -> Evicted<Self::Key, Self::Value>;

    /// Removes `key` and its value. Absent keys are ignored.
    fn remove<Q>(&mut self, key: &Q) -> Option<Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes `value` and its key. Absent values are ignored.
    fn remove_by_value<Q>(&mut self, value: &Q) -> Option<Self::Key>
    where
        Self::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes every entry.
    fn remove_all(&mut self);

    /// Calls [`set`](Mutate::set) for every entry of `other`, in `other`'s
    /// iteration order. Later entries win conflicts.
    fn add_entries<L>(&mut self, other: &L)
    where
        L: Lookup<Key = Self::Key, Value = Self::Value> + ?Sized,
    {
        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
    }

    /// Calls [`remove`](Mutate::remove) for every key of `other`.
    fn remove_entries<L>(&mut self, other: &L)
    where
        L: Lookup<Key = Self::Key, Value = Self::Value> + ?Sized,
    {
        for key in other.keys() {
            self.remove(key);
        }
    }
}

/// Position-indexed access over a deterministic entry order.
pub trait Ordered: Lookup {
    /// Returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    fn entry_at(&self, index: usize) -> Result<(&Self::Key, &Self::Value), BijectionError>;

    /// Returns the position of `key`.
    fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns the position of `value`.
    fn index_of_value<Q>(&self, value: &Q) -> Option<usize>
    where
        Self::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns the key at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    fn key_at(&self, index: usize) -> Result<&Self::Key, BijectionError> {
        self.entry_at(index).map(|(key, _)| key)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    fn value_at(&self, index: usize) -> Result<&Self::Value, BijectionError> {
        self.entry_at(index).map(|(_, value)| value)
    }

    /// Snapshot of the keys in position order.
    fn ordered_keys(&self) -> Vec<Self::Key> {
        self.keys().cloned().collect()
    }

    /// Snapshot of the values in position order.
    fn ordered_values(&self) -> Vec<Self::Value> {
        self.values().cloned().collect()
    }
}

/// Positional insertion.
pub trait OrderedMutate: Ordered + Mutate {
    /// Maps `key` to `value` and places the entry at `index`.
    ///
    /// Eviction follows [`Mutate::set`]; evicted entries are spliced out of
    /// the order first. The entry then lands at `index` (or at the end, if
    /// evictions shortened the order below `index`), pushing the occupant and
    /// everything after it one slot later. A key that was already present is
    /// moved, never duplicated.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index > len`. Nothing is
    /// mutated in that case.
    fn set_at(
        &mut self,
        key: Self::Key,
        value: Self::Value,
        index: usize,
    ) -> Result<Evicted<Self::Key, Self::Value>, BijectionError>;
}

/// Flipping keys and values.
pub trait Invert {
    /// The flipped type.
    type Inverse;

    /// Returns a new, independent instance whose keys are this instance's
    /// values and vice versa.
    fn inverse(&self) -> Self::Inverse;

    /// Consumes `self` and returns the flipped instance without copying.
    fn into_inverse(self) -> Self::Inverse;
}
