//! Thread-safe bijections.
//!
//! [`ThreadSafe`] decorates a mutable bijection with a
//! [`parking_lot::RwLock`]. Every public operation holds the lock for its
//! whole duration, so each call is atomic with respect to every other call
//! on the same instance:
//!
//! - mutations (`set`, `set_at`, `remove`, ...) take the write lock;
//! - reads (`get`, `len`, `key_at`, ...) take the read lock;
//! - batches (`add_entries`, `remove_entries`) hold the write lock across the
//!   whole batch, so no observer ever sees a partially applied batch.
//!
//! Guards are released on every exit path, including panics and errors.
//! There is no timeout: a caller blocks until the lock is free.
//!
//! Because no borrow may outlive the guard, reads return owned clones.
//! [`ThreadSafe::with_read`] and [`ThreadSafe::with_write`] run a closure
//! under the lock for callers that need to compose several steps atomically.
//!
//! # Re-entrancy
//!
//! A closure passed to [`with_read`](ThreadSafe::with_read),
//! [`with_write`](ThreadSafe::with_write) or [`for_each`](ThreadSafe::for_each)
//! must not call back into the same instance; doing so deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use bijective::prelude::*;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shared = Arc::new(ThreadSafeBijection::new());
//! let handles: Vec<_> = (0..8)
//!     .map(|index| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             shared.set(format!("key_{index}"), index);
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.len(), 8);
//! assert_eq!(shared.get_key(&3), Some("key_3".to_string()));
//! ```

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;
use static_assertions::assert_impl_all;

use crate::bijection::{Bijection, MutableBijection};
use crate::error::BijectionError;
use crate::evicted::Evicted;
use crate::traits::{Invert, Lookup, Mutate, Ordered, OrderedMutate};

#[cfg(feature = "ordered")]
use crate::ordered::{MutableOrderedBijection, OrderedBijection};

/// A lock-guarded mutable bijection.
///
/// `B` is the wrapped core, typically [`MutableBijection`] or
/// [`MutableOrderedBijection`]; see the [`ThreadSafeBijection`] and
/// [`ThreadSafeOrderedBijection`] aliases.
pub struct ThreadSafe<B> {
    inner: RwLock<B>,
}

/// Thread-safe [`MutableBijection`].
pub type ThreadSafeBijection<K, V> = ThreadSafe<MutableBijection<K, V>>;

/// Thread-safe [`MutableOrderedBijection`].
#[cfg(feature = "ordered")]
pub type ThreadSafeOrderedBijection<K, V> = ThreadSafe<MutableOrderedBijection<K, V>>;

assert_impl_all!(ThreadSafeBijection<String, u64>: Send, Sync);
#[cfg(feature = "ordered")]
assert_impl_all!(ThreadSafeOrderedBijection<String, u64>: Send, Sync);

impl<B> ThreadSafe<B> {
    /// Wraps an existing bijection.
    #[inline]
    #[must_use]
    pub fn from_inner(inner: B) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Unwraps the bijection. No lock is needed since `self` is owned.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }

    /// Runs `read` with shared access to the wrapped bijection.
    pub fn with_read<R, F>(&self, read: F) -> R
    where
        F: FnOnce(&B) -> R,
    {
        read(&self.inner.read())
    }

    /// Runs `write` with exclusive access to the wrapped bijection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijective::prelude::*;
    ///
    /// let shared = ThreadSafeBijection::new();
    /// shared.set("a", 1);
    ///
    /// // Swap two values atomically.
    /// shared.set("b", 2);
    /// shared.with_write(|bijection| {
    ///     bijection.remove("a");
    ///     bijection.set("b", 1);
    ///     bijection.set("a", 2);
    /// });
    /// assert_eq!(shared.get("a"), Some(2));
    /// assert_eq!(shared.get("b"), Some(1));
    /// ```
    pub fn with_write<R, F>(&self, write: F) -> R
    where
        F: FnOnce(&mut B) -> R,
    {
        write(&mut self.inner.write())
    }
}

impl<B: Lookup> ThreadSafe<B> {
    /// Returns a clone of the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<B::Value>
    where
        B::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().get(key).cloned()
    }

    /// Returns a clone of the key associated with `value`.
    pub fn get_key<Q>(&self, value: &Q) -> Option<B::Key>
    where
        B::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().get_key(value).cloned()
    }

    /// Returns `true` if `key` is mapped.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        B::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// Returns `true` if `value` is mapped.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        B::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_value(value)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the keys.
    pub fn key_set(&self) -> HashSet<B::Key> {
        self.inner.read().key_set()
    }

    /// Snapshot of the values.
    pub fn value_set(&self) -> HashSet<B::Value> {
        self.inner.read().value_set()
    }

    /// Snapshot as a plain map.
    pub fn to_hash_map(&self) -> HashMap<B::Key, B::Value> {
        self.inner.read().to_hash_map()
    }

    /// Snapshot as parallel key and value sequences.
    pub fn to_parallel(&self) -> (Vec<B::Key>, Vec<B::Value>) {
        self.inner.read().to_parallel()
    }

    /// Visits every entry while holding the read lock.
    ///
    /// Writers block until the walk finishes.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&B::Key, &B::Value),
    {
        self.inner.read().for_each(visit);
    }

    /// Content equality against any other bijection.
    pub fn equals<L>(&self, other: &L) -> bool
    where
        L: Lookup<Key = B::Key, Value = B::Value> + ?Sized,
    {
        self.inner.read().equals(other)
    }
}

impl<B: Mutate> ThreadSafe<B> {
    /// Atomically maps `key` to `value`. See [`Mutate::set`].
    pub fn set(&self, key: B::Key, value: B::Value) -> Evicted<B::Key, B::Value> {
        self.inner.write().set(key, value)
    }

    /// Atomically removes `key` and its value.
    pub fn remove<Q>(&self, key: &Q) -> Option<B::Value>
    where
        B::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    /// Atomically removes `value` and its key.
    pub fn remove_by_value<Q>(&self, value: &Q) -> Option<B::Key>
    where
        B::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove_by_value(value)
    }

    /// Atomically removes every entry.
    pub fn remove_all(&self) {
        self.inner.write().remove_all();
    }

    /// Applies every entry of `other` under a single write lock.
    pub fn add_entries<L>(&self, other: &L)
    where
        L: Lookup<Key = B::Key, Value = B::Value> + ?Sized,
    {
        self.inner.write().add_entries(other);
    }

    /// Removes every key of `other` under a single write lock.
    pub fn remove_entries<L>(&self, other: &L)
    where
        L: Lookup<Key = B::Key, Value = B::Value> + ?Sized,
    {
        self.inner.write().remove_entries(other);
    }
}

impl<B: Ordered> ThreadSafe<B> {
    /// Returns clones of the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    pub fn entry_at(&self, index: usize) -> Result<(B::Key, B::Value), BijectionError> {
        self.inner
            .read()
            .entry_at(index)
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Returns a clone of the key at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    pub fn key_at(&self, index: usize) -> Result<B::Key, BijectionError> {
        self.inner.read().key_at(index).cloned()
    }

    /// Returns a clone of the value at `index`.
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index >= len`.
    pub fn value_at(&self, index: usize) -> Result<B::Value, BijectionError> {
        self.inner.read().value_at(index).cloned()
    }

    /// Returns the position of `key`.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        B::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().index_of(key)
    }

    /// Returns the position of `value`.
    pub fn index_of_value<Q>(&self, value: &Q) -> Option<usize>
    where
        B::Value: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().index_of_value(value)
    }

    /// Snapshot of the keys in position order.
    pub fn ordered_keys(&self) -> Vec<B::Key> {
        self.inner.read().ordered_keys()
    }

    /// Snapshot of the values in position order.
    pub fn ordered_values(&self) -> Vec<B::Value> {
        self.inner.read().ordered_values()
    }
}

impl<B: OrderedMutate> ThreadSafe<B> {
    /// Atomically maps `key` to `value` at `index`. See
    /// [`OrderedMutate::set_at`].
    ///
    /// # Errors
    ///
    /// [`BijectionError::IndexOutOfRange`] if `index > len`; nothing is
    /// mutated.
    pub fn set_at(
        &self,
        key: B::Key,
        value: B::Value,
        index: usize,
    ) -> Result<Evicted<B::Key, B::Value>, BijectionError> {
        self.inner.write().set_at(key, value, index)
    }
}

impl<B: Invert> ThreadSafe<B> {
    /// Returns a new, independently locked bijection with keys and values
    /// swapped.
    #[must_use]
    pub fn inverse(&self) -> ThreadSafe<B::Inverse> {
        ThreadSafe::from_inner(self.inner.read().inverse())
    }

    /// Consumes `self` and swaps keys and values without copying.
    #[must_use]
    pub fn into_inverse(self) -> ThreadSafe<B::Inverse> {
        ThreadSafe::from_inner(self.into_inner().into_inverse())
    }
}

impl<K, V> ThreadSafe<MutableBijection<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Creates an empty bijection.
    #[must_use]
    pub fn new() -> Self {
        Self::from_inner(MutableBijection::new())
    }

    /// Creates an empty bijection with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_inner(MutableBijection::with_capacity(capacity))
    }

    /// Immutable snapshot taken under the read lock.
    #[must_use]
    pub fn snapshot(&self) -> Bijection<K, V> {
        self.inner.read().clone().freeze()
    }
}

#[cfg(feature = "ordered")]
impl<K, V> ThreadSafe<MutableOrderedBijection<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Creates an empty bijection.
    #[must_use]
    pub fn new() -> Self {
        Self::from_inner(MutableOrderedBijection::new())
    }

    /// Creates an empty bijection with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_inner(MutableOrderedBijection::with_capacity(capacity))
    }

    /// Immutable snapshot taken under the read lock.
    #[must_use]
    pub fn snapshot(&self) -> OrderedBijection<K, V> {
        self.inner.read().clone().freeze()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<B: Default> Default for ThreadSafe<B> {
    #[inline]
    fn default() -> Self {
        Self::from_inner(B::default())
    }
}

impl<B> From<B> for ThreadSafe<B> {
    #[inline]
    fn from(inner: B) -> Self {
        Self::from_inner(inner)
    }
}

impl<B, T> FromIterator<T> for ThreadSafe<B>
where
    B: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_inner(iter.into_iter().collect())
    }
}

impl<B: Clone> Clone for ThreadSafe<B> {
    /// Copies the contents under the read lock into a new, independently
    /// locked instance.
    fn clone(&self) -> Self {
        Self::from_inner(self.inner.read().clone())
    }
}

impl<B: fmt::Debug> fmt::Debug for ThreadSafe<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner.read(), formatter)
    }
}
