//! Record of the stale entries displaced by a `set`.

/// The entries a `set(key, value)` call displaced to keep the mapping
/// one-to-one.
///
/// At most two entries are affected by a single call:
///
/// - the value `key` held before (evicted by key), and
/// - the key that held `value` before (evicted by value).
///
/// Setting a pair that is already present displaces nothing.
///
/// # Examples
///
/// ```rust
/// use bijective::prelude::*;
///
/// let mut bijection = MutableBijection::new();
/// bijection.set("a", 1);
/// bijection.set("b", 2);
///
/// // "a" gives up 1 and "b" loses 2.
/// let evicted = bijection.set("a", 2);
/// assert_eq!(evicted.previous_value, Some(1));
/// assert_eq!(evicted.previous_key, Some("b"));
/// assert_eq!(bijection.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evicted<K, V> {
    /// The value the key mapped to before the call, when it differs from the
    /// new value.
    pub previous_value: Option<V>,
    /// The key that held the value before the call, when it differs from the
    /// new key. That key is unmapped afterwards.
    pub previous_key: Option<K>,
}

impl<K, V> Evicted<K, V> {
    /// An empty record: nothing was displaced.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self {
            previous_value: None,
            previous_key: None,
        }
    }

    /// Returns `true` if the call displaced nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.previous_value.is_none() && self.previous_key.is_none()
    }
}

impl<K, V> Default for Evicted<K, V> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}
