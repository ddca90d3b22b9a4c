//! Hasher selection.
//!
//! Every map inside a bijection hashes with [`HashBuilder`]. The concrete
//! builder is picked at compile time:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (ignored when `fxhash` is also enabled)
//! - neither: `std::collections::hash_map::RandomState`
//!
//! The choice has no observable semantic effect beyond iteration order of the
//! unordered variants, which is unspecified anyway.

use std::collections::HashMap;

/// Hash builder shared by every map in the crate.
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder shared by every map in the crate.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// Hash builder shared by every map in the crate.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::collections::hash_map::RandomState;

pub(crate) type HashedMap<K, V> = HashMap<K, V, HashBuilder>;

#[cfg(feature = "ordered")]
pub(crate) type OrderedMap<K, V> = indexmap::IndexMap<K, V, HashBuilder>;

pub(crate) fn hashed_map<K, V>(capacity: usize) -> HashedMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, HashBuilder::default())
}

#[cfg(feature = "ordered")]
pub(crate) fn ordered_map<K, V>(capacity: usize) -> OrderedMap<K, V> {
    indexmap::IndexMap::with_capacity_and_hasher(capacity, HashBuilder::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_capacity_hint_is_honoured() {
        let map: HashedMap<u32, u32> = hashed_map(64);
        assert!(map.capacity() >= 64);
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_same_key_same_slot_across_maps() {
        let mut first: HashedMap<String, i32> = hashed_map(0);
        let mut second: HashedMap<String, i32> = hashed_map(0);
        first.insert("key".to_string(), 1);
        second.insert("key".to_string(), 2);
        assert_eq!(first.get("key"), Some(&1));
        assert_eq!(second.get("key"), Some(&2));
    }
}
