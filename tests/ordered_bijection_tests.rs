#![cfg(feature = "ordered")]
//! Unit tests for OrderedBijection and MutableOrderedBijection.
//!
//! These tests exercise position semantics: index lookups, positional
//! insertion with shifting, and how eviction interacts with the order.

use bijective::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn abc() -> MutableOrderedBijection<char, i32> {
    MutableOrderedBijection::from_parallel(['a', 'b', 'c'], [1, 2, 3]).unwrap()
}

fn assert_order_consistent(bijection: &MutableOrderedBijection<char, i32>) {
    let keys = bijection.ordered_keys();
    assert_eq!(keys.len(), bijection.len());
    for (index, key) in keys.iter().enumerate() {
        assert_eq!(bijection.index_of(key), Some(index));
        assert_eq!(bijection.key_at(index), Ok(key));
        let value = bijection.get(key).unwrap();
        assert_eq!(bijection.index_of_value(value), Some(index));
    }
}

// =============================================================================
// Positional access
// =============================================================================

#[rstest]
fn test_key_at_follows_construction_order(abc: MutableOrderedBijection<char, i32>) {
    assert_eq!(abc.key_at(0), Ok(&'a'));
    assert_eq!(abc.key_at(1), Ok(&'b'));
    assert_eq!(abc.key_at(2), Ok(&'c'));
    assert_eq!(abc.value_at(2), Ok(&3));
    assert_eq!(abc.entry_at(1), Ok((&'b', &2)));
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn test_key_at_out_of_range(abc: MutableOrderedBijection<char, i32>, #[case] index: usize) {
    assert_eq!(
        abc.key_at(index),
        Err(BijectionError::IndexOutOfRange { index, len: 3 })
    );
}

#[rstest]
fn test_index_of_absent_key(abc: MutableOrderedBijection<char, i32>) {
    assert_eq!(abc.index_of(&'z'), None);
    assert_eq!(abc.index_of_value(&99), None);
}

#[rstest]
fn test_iteration_follows_order(abc: MutableOrderedBijection<char, i32>) {
    let entries: Vec<(char, i32)> = abc.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(entries, vec![('a', 1), ('b', 2), ('c', 3)]);

    let mut visited = Vec::new();
    abc.for_each(|key, _| visited.push(*key));
    assert_eq!(visited, vec!['a', 'b', 'c']);
}

// =============================================================================
// Positional insertion
// =============================================================================

#[rstest]
fn test_positional_insertion_scenario(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set_at('d', 4, 1).unwrap();
    assert_eq!(abc.ordered_keys(), vec!['a', 'd', 'b', 'c']);
    assert_eq!(abc.key_at(1), Ok(&'d'));
    assert_eq!(abc.index_of(&'b'), Some(2));
    assert_order_consistent(&abc);
}

#[rstest]
fn test_set_at_len_appends(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set_at('d', 4, 3).unwrap();
    assert_eq!(abc.ordered_keys(), vec!['a', 'b', 'c', 'd']);
}

#[rstest]
fn test_set_at_past_len_fails_without_mutation(mut abc: MutableOrderedBijection<char, i32>) {
    let before = abc.ordered_keys();
    assert_eq!(
        abc.set_at('d', 4, 5),
        Err(BijectionError::IndexOutOfRange { index: 5, len: 3 })
    );
    assert_eq!(abc.ordered_keys(), before);
    assert_eq!(abc.get(&'d'), None);
}

#[rstest]
fn test_set_at_existing_key_moves_it(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set_at('c', 30, 0).unwrap();
    assert_eq!(abc.ordered_keys(), vec!['c', 'a', 'b']);
    assert_eq!(abc.get(&'c'), Some(&30));
    assert_eq!(abc.len(), 3);
    assert_order_consistent(&abc);
}

#[rstest]
fn test_set_at_transferring_value_drops_old_holder(mut abc: MutableOrderedBijection<char, i32>) {
    let evicted = abc.set_at('z', 2, 0).unwrap();
    assert_eq!(evicted.previous_key, Some('b'));
    assert_eq!(abc.ordered_keys(), vec!['z', 'a', 'c']);
    assert_order_consistent(&abc);
}

#[rstest]
fn test_set_at_into_empty() {
    let mut bijection = MutableOrderedBijection::new();
    bijection.set_at('a', 1, 0).unwrap();
    assert_eq!(bijection.key_at(0), Ok(&'a'));
    assert!(bijection.set_at('b', 2, 2).is_err());
}

// =============================================================================
// Order-preserving set and remove
// =============================================================================

#[rstest]
fn test_set_existing_key_keeps_position(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set('a', 100);
    assert_eq!(abc.ordered_keys(), vec!['a', 'b', 'c']);
    assert_eq!(abc.ordered_values(), vec![100, 2, 3]);
}

#[rstest]
fn test_set_new_key_appends(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set('d', 4);
    assert_eq!(abc.index_of(&'d'), Some(3));
}

#[rstest]
fn test_remove_shifts_positions_down(mut abc: MutableOrderedBijection<char, i32>) {
    abc.remove(&'a');
    assert_eq!(abc.key_at(0), Ok(&'b'));
    assert_eq!(abc.key_at(1), Ok(&'c'));
    assert!(abc.key_at(2).is_err());
    assert_order_consistent(&abc);
}

#[rstest]
fn test_remove_all_clears_order(mut abc: MutableOrderedBijection<char, i32>) {
    abc.remove_all();
    assert!(abc.is_empty());
    assert!(abc.ordered_keys().is_empty());
    assert!(abc.key_at(0).is_err());
}

// =============================================================================
// Immutable variant and conversions
// =============================================================================

#[rstest]
fn test_freeze_preserves_order(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set_at('d', 4, 0).unwrap();
    let frozen = abc.freeze();
    assert_eq!(frozen.ordered_keys(), vec!['d', 'a', 'b', 'c']);
    assert_eq!(frozen.index_of(&'b'), Some(2));
}

#[rstest]
fn test_inverse_keeps_positions(abc: MutableOrderedBijection<char, i32>) {
    let frozen = abc.freeze();
    let inverse = frozen.inverse();
    assert_eq!(inverse.ordered_keys(), vec![1, 2, 3]);
    assert_eq!(inverse.ordered_values(), vec!['a', 'b', 'c']);
    assert_eq!(inverse.get(&2), Some(&'b'));
}

#[rstest]
fn test_into_mutable_then_edit_leaves_original(abc: MutableOrderedBijection<char, i32>) {
    let frozen = abc.freeze();
    let mut editable = frozen.clone().into_mutable();
    editable.set_at('x', 9, 0).unwrap();
    assert_eq!(frozen.len(), 3);
    assert_eq!(editable.ordered_keys(), vec!['x', 'a', 'b', 'c']);
}

#[rstest]
fn test_equality_ignores_order() {
    let forward: OrderedBijection<char, i32> = [('a', 1), ('b', 2)].into_iter().collect();
    let backward: OrderedBijection<char, i32> = [('b', 2), ('a', 1)].into_iter().collect();
    assert_eq!(forward, backward);
    assert_ne!(forward.ordered_keys(), backward.ordered_keys());
}

#[rstest]
fn test_ordered_equals_unordered() {
    let ordered: OrderedBijection<char, i32> = [('a', 1), ('b', 2)].into_iter().collect();
    let unordered: Bijection<char, i32> = [('b', 2), ('a', 1)].into_iter().collect();
    assert!(ordered.equals(&unordered));
    assert!(unordered.equals(&ordered));
}

#[rstest]
fn test_parallel_round_trip_keeps_order(mut abc: MutableOrderedBijection<char, i32>) {
    abc.set_at('d', 4, 2).unwrap();
    let (keys, values) = abc.to_parallel();
    assert_eq!(keys, vec!['a', 'b', 'd', 'c']);
    assert_eq!(values, vec![1, 2, 4, 3]);

    let rebuilt = OrderedBijection::from_parallel(keys, values).unwrap();
    assert_eq!(rebuilt.ordered_keys(), abc.ordered_keys());
}

#[rstest]
fn test_from_parallel_size_mismatch() {
    let result = OrderedBijection::from_parallel(['a', 'b', 'c'], [1, 2]);
    assert_eq!(
        result.unwrap_err(),
        BijectionError::SizeMismatch { keys: 3, values: 2 }
    );
}

#[rstest]
fn test_from_hash_map_keeps_every_unique_pair() {
    let map: std::collections::HashMap<char, i32> =
        [('a', 1), ('b', 2), ('c', 3)].into_iter().collect();
    let bijection = OrderedBijection::from(map.clone());
    assert_eq!(bijection.to_hash_map(), map);
    for index in 0..bijection.len() {
        let key = bijection.key_at(index).unwrap();
        assert_eq!(bijection.index_of(key), Some(index));
    }
}
