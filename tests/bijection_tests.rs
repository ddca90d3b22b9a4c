//! Unit tests for Bijection and MutableBijection.
//!
//! Covers construction, lookup in both directions, conflict eviction,
//! inversion, interop conversions and copying between variants.

use std::collections::{HashMap, HashSet};

use bijective::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn letters() -> MutableBijection<String, i32> {
    [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_bijection() {
    let bijection: Bijection<i32, i32> = Bijection::new();
    assert!(bijection.is_empty());
    assert_eq!(bijection.len(), 0);

    let mutable: MutableBijection<i32, i32> = MutableBijection::default();
    assert!(mutable.is_empty());
}

#[rstest]
fn test_with_capacity_has_no_observable_effect() {
    let mut hinted = MutableBijection::with_capacity(1024);
    let mut plain = MutableBijection::new();
    for index in 0..10 {
        hinted.set(index, index * 2);
        plain.set(index, index * 2);
    }
    assert_eq!(hinted, plain);
}

#[rstest]
fn test_from_parallel_pairs_by_position() {
    let bijection = Bijection::from_parallel(vec!["a", "b", "c"], vec![1, 2, 3]).unwrap();
    assert_eq!(bijection.get("a"), Some(&1));
    assert_eq!(bijection.get("b"), Some(&2));
    assert_eq!(bijection.get("c"), Some(&3));
}

#[rstest]
#[case(3, 2)]
#[case(0, 1)]
#[case(2, 5)]
fn test_from_parallel_size_mismatch(#[case] key_count: usize, #[case] value_count: usize) {
    let keys: Vec<usize> = (0..key_count).collect();
    let values: Vec<usize> = (0..value_count).collect();
    let result = MutableBijection::from_parallel(keys, values);
    assert_eq!(
        result.unwrap_err(),
        BijectionError::SizeMismatch {
            keys: key_count,
            values: value_count,
        }
    );
}

#[rstest]
fn test_from_hash_map_with_unique_values() {
    let map: HashMap<&str, i32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
    let bijection = Bijection::from(map.clone());
    assert_eq!(bijection.to_hash_map(), map);
}

#[rstest]
fn test_from_hash_map_with_duplicate_values_keeps_one_key() {
    let map: HashMap<&str, i32> = [("x", 1), ("y", 1), ("z", 2)].into_iter().collect();
    let bijection = Bijection::from(map);
    assert_eq!(bijection.len(), 2);
    let holder = bijection.get_key(&1).copied().unwrap();
    assert!(holder == "x" || holder == "y");
    assert_eq!(bijection.get(holder), Some(&1));
}

#[rstest]
fn test_from_iterator_last_write_wins() {
    let bijection: Bijection<&str, i32> =
        [("a", 1), ("b", 1), ("a", 2)].into_iter().collect();
    assert_eq!(bijection.len(), 2);
    assert_eq!(bijection.get("a"), Some(&2));
    assert_eq!(bijection.get("b"), Some(&1));
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
fn test_lookup_both_directions(letters: MutableBijection<String, i32>) {
    for (key, value) in &letters {
        assert_eq!(letters.get_key(value), Some(key));
        assert_eq!(letters.get(key), Some(value));
    }
    assert!(letters.contains_key("a"));
    assert!(!letters.contains_key("z"));
    assert!(letters.contains_value(&3));
    assert!(!letters.contains_value(&4));
}

#[rstest]
fn test_key_and_value_sets_are_snapshots(mut letters: MutableBijection<String, i32>) {
    let keys = letters.key_set();
    let values = letters.value_set();
    letters.remove_all();

    let expected_keys: HashSet<String> = ["a", "b", "c"].iter().map(|key| key.to_string()).collect();
    assert_eq!(keys, expected_keys);
    assert_eq!(values, [1, 2, 3].into_iter().collect::<HashSet<i32>>());
    assert!(letters.is_empty());
}

#[rstest]
fn test_for_each_visits_every_entry_once(letters: MutableBijection<String, i32>) {
    let mut visited = Vec::new();
    letters.for_each(|key, value| visited.push((key.clone(), *value)));
    visited.sort();
    assert_eq!(
        visited,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]
    );
}

#[rstest]
fn test_iteration_order_is_stable_without_mutation(letters: MutableBijection<String, i32>) {
    let first: Vec<_> = letters.iter().collect();
    let second: Vec<_> = letters.iter().collect();
    assert_eq!(first, second);
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_set_twice_is_idempotent(mut letters: MutableBijection<String, i32>) {
    letters.set("d".to_string(), 4);
    let once = letters.clone();
    let evicted = letters.set("d".to_string(), 4);
    assert!(evicted.is_empty());
    assert_eq!(letters, once);
}

#[rstest]
fn test_conflict_eviction_moves_value_to_new_key() {
    let mut bijection = MutableBijection::new();
    bijection.set("k1", "v1");
    bijection.set("k2", "v1");
    assert_eq!(bijection.get("k1"), None);
    assert_eq!(bijection.get("k2"), Some(&"v1"));
    assert_eq!(bijection.len(), 1);
}

#[rstest]
fn test_set_can_evict_key_and_value_holders(mut letters: MutableBijection<String, i32>) {
    let evicted = letters.set("a".to_string(), 3);
    assert_eq!(evicted.previous_value, Some(1));
    assert_eq!(evicted.previous_key, Some("c".to_string()));
    assert_eq!(letters.len(), 2);
    assert_eq!(letters.get_key(&3), Some(&"a".to_string()));
    assert_eq!(letters.get_key(&1), None);
    assert_eq!(letters.get("c"), None);
}

#[rstest]
fn test_remove_absent_key_is_noop(mut letters: MutableBijection<String, i32>) {
    let before = letters.clone();
    assert_eq!(letters.remove("missing"), None);
    assert_eq!(letters, before);
}

#[rstest]
fn test_remove_deletes_both_directions(mut letters: MutableBijection<String, i32>) {
    assert_eq!(letters.remove("b"), Some(2));
    assert_eq!(letters.get("b"), None);
    assert_eq!(letters.get_key(&2), None);
    assert_eq!(letters.len(), 2);
}

#[rstest]
fn test_add_entries_later_entries_win(mut letters: MutableBijection<String, i32>) {
    let other: Bijection<String, i32> = [("z".to_string(), 1), ("b".to_string(), 20)]
        .into_iter()
        .collect();
    letters.add_entries(&other);

    assert_eq!(letters.get("a"), None);
    assert_eq!(letters.get("z"), Some(&1));
    assert_eq!(letters.get("b"), Some(&20));
    assert_eq!(letters.len(), 3);
    assert_eq!(other.len(), 2);
}

#[rstest]
fn test_remove_entries_removes_by_key(mut letters: MutableBijection<String, i32>) {
    let other: Bijection<String, i32> = [("a".to_string(), 100), ("q".to_string(), 5)]
        .into_iter()
        .collect();
    letters.remove_entries(&other);
    assert_eq!(letters.len(), 2);
    assert!(!letters.contains_key("a"));
    assert!(letters.contains_value(&2));
}

#[rstest]
fn test_extend_applies_set_in_order() {
    let mut bijection = MutableBijection::new();
    bijection.extend([(1, 'a'), (2, 'b'), (3, 'a')]);
    assert_eq!(bijection.len(), 2);
    assert_eq!(bijection.get_key(&'a'), Some(&3));
}

// =============================================================================
// Inverse
// =============================================================================

#[rstest]
fn test_inverse_scenario() {
    let bijection: Bijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let inverse = bijection.inverse();
    assert_eq!(inverse.get(&1), Some(&"a"));
    assert_eq!(inverse.get(&2), Some(&"b"));
}

#[rstest]
fn test_mutable_inverse_is_a_copy(mut letters: MutableBijection<String, i32>) {
    let inverse = letters.inverse();
    letters.set("d".to_string(), 4);
    assert_eq!(inverse.len(), 3);
    assert_eq!(inverse.get(&4), None);
    assert_eq!(inverse.get(&1), Some(&"a".to_string()));
}

// =============================================================================
// Equality and interop
// =============================================================================

#[rstest]
fn test_equality_is_by_content(letters: MutableBijection<String, i32>) {
    let frozen = letters.clone().freeze();
    assert!(letters.equals(&frozen));
    assert!(frozen.equals(&letters));

    let mut changed = letters.clone();
    changed.set("a".to_string(), 10);
    assert!(!changed.equals(&letters));
    assert_ne!(changed, letters);
}

#[rstest]
fn test_to_parallel_keeps_pairs_aligned(letters: MutableBijection<String, i32>) {
    let (keys, values) = letters.to_parallel();
    assert_eq!(keys.len(), values.len());
    for (key, value) in keys.iter().zip(&values) {
        assert_eq!(letters.get(key), Some(value));
    }
    let rebuilt = Bijection::from_parallel(keys, values).unwrap();
    assert!(rebuilt.equals(&letters));
}

#[rstest]
fn test_union_does_not_mutate_operands() {
    let left: Bijection<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let right: Bijection<&str, i32> = [("c", 2)].into_iter().collect();
    let union = left.union(&right);
    assert_eq!(union.get("b"), None);
    assert_eq!(union.get("c"), Some(&2));
    assert_eq!(left.get("b"), Some(&2));
    assert_eq!(right.len(), 1);
}

#[rstest]
fn test_debug_formats_as_map() {
    let bijection: Bijection<&str, i32> = [("a", 1)].into_iter().collect();
    assert_eq!(format!("{bijection:?}"), r#"{"a": 1}"#);
}

// =============================================================================
// Copying between variants
// =============================================================================

#[rstest]
fn test_to_mutable_is_independent() {
    let bijection: Bijection<&str, i32> = [("a", 1)].into_iter().collect();
    let mut copy = bijection.to_mutable();
    copy.set("b", 2);
    assert_eq!(bijection.len(), 1);
    assert_eq!(copy.len(), 2);
}

#[cfg(feature = "ordered")]
#[rstest]
fn test_to_mutable_ordered_holds_same_pairs(letters: MutableBijection<String, i32>) {
    let ordered = letters.to_mutable_ordered();
    assert!(ordered.equals(&letters));
    assert_eq!(ordered.ordered_keys(), letters.keys().cloned().collect::<Vec<_>>());
}

#[cfg(feature = "sync")]
#[rstest]
fn test_to_thread_safe_holds_same_pairs(letters: MutableBijection<String, i32>) {
    let shared = letters.to_thread_safe();
    assert!(shared.equals(&letters));
    shared.set("d".to_string(), 4);
    assert_eq!(letters.len(), 3);
}
