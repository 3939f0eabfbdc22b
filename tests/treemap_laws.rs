//! Property-based tests for TreeMap.
//!
//! This module verifies that TreeMap satisfies the map laws and keeps its
//! structural invariants, using `std::collections::BTreeMap` as the model.

use bstmap::TreeMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Put(i16, i32),
    Remove(i16),
}

fn arbitrary_key() -> impl Strategy<Value = i16> {
    // A narrow key range makes overwrites and hits on remove common.
    -64i16..64
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(i16, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..80)
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (arbitrary_key(), any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
        arbitrary_key().prop_map(Operation::Remove),
    ]
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arbitrary_operation(), 0..150)
}

// =============================================================================
// Model Law: every operation agrees with BTreeMap
// =============================================================================

proptest! {
    #[test]
    fn prop_agrees_with_btreemap(operations in arbitrary_operations()) {
        let mut map = TreeMap::new();
        let mut model = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Put(key, value) => {
                    prop_assert_eq!(map.put(key, value), Ok(model.insert(key, value)));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), Ok(model.remove(&key)));
                }
            }
            prop_assert_eq!(map.check_invariants(), Ok(()));
            prop_assert_eq!(map.len(), model.len());
        }

        let entries: Vec<(&i16, &i32)> = map.iter().collect();
        let expected: Vec<(&i16, &i32)> = model.iter().collect();
        prop_assert_eq!(entries, expected);
    }
}

// =============================================================================
// Get-Put Law: after put(k, v), get(k) == Some(v)
// =============================================================================

proptest! {
    #[test]
    fn prop_get_put_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        let mut map: TreeMap<i16, i32> = entries.into_iter().collect();
        map.put(key, value).unwrap();

        prop_assert_eq!(map.get(&key), Ok(Some(&value)));
    }
}

// =============================================================================
// Get-Put-Other Law: k1 != k2 => put(k1, v) leaves get(k2) unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_get_put_other_law(
        entries in arbitrary_entries(),
        key1 in arbitrary_key(),
        key2 in arbitrary_key(),
        value in any::<i32>()
    ) {
        prop_assume!(key1 != key2);

        let mut map: TreeMap<i16, i32> = entries.into_iter().collect();
        let before = map.get(&key2).unwrap().copied();
        map.put(key1, value).unwrap();

        prop_assert_eq!(map.get(&key2).unwrap().copied(), before);
    }
}

// =============================================================================
// Remove-Get Law: after remove(k), get(k) == None
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_get_law(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut map: TreeMap<i16, i32> = entries.into_iter().collect();
        map.remove(&key).unwrap();

        prop_assert_eq!(map.get(&key), Ok(None));
        prop_assert_eq!(map.check_invariants(), Ok(()));
    }
}

// =============================================================================
// Idempotent Remove: removing an absent key changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_absent_is_noop(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut map: TreeMap<i16, i32> = entries.into_iter().collect();
        map.remove(&key).unwrap();
        let before = map.clone();

        prop_assert_eq!(map.remove(&key), Ok(None));
        prop_assert_eq!(map.height(), before.height());
        prop_assert_eq!(map, before);
    }
}

// =============================================================================
// Size Consistency: len == distinct keys put - keys removed
// =============================================================================

proptest! {
    #[test]
    fn prop_size_counts_distinct_keys(
        entries in arbitrary_entries(),
        removals in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let mut map: TreeMap<i16, i32> = entries.iter().copied().collect();
        let mut distinct: std::collections::BTreeSet<i16> =
            entries.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(map.len(), distinct.len());

        for key in removals {
            let removed = map.remove(&key).unwrap();
            prop_assert_eq!(removed.is_some(), distinct.remove(&key));
        }
        prop_assert_eq!(map.len(), distinct.len());
    }
}

// =============================================================================
// Sorted Traversal: entry_set is strictly ascending
// =============================================================================

proptest! {
    #[test]
    fn prop_entry_set_strictly_ascending(entries in arbitrary_entries()) {
        let map: TreeMap<i16, i32> = entries.into_iter().collect();
        let keys: Vec<i16> = map.entry_set().into_iter().map(|entry| **entry.key()).collect();

        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(keys.len(), map.len());
    }
}

// =============================================================================
// Extremes: first/last entries are the min/max keys
// =============================================================================

proptest! {
    #[test]
    fn prop_first_last_are_extremes(entries in arbitrary_entries()) {
        let map: TreeMap<i16, i32> = entries.iter().copied().collect();
        let model: BTreeMap<i16, i32> = entries.into_iter().collect();

        prop_assert_eq!(
            map.first_entry().map(|entry| (**entry.key(), **entry.value())),
            model.first_key_value().map(|(key, value)| (*key, *value))
        );
        prop_assert_eq!(
            map.last_entry().map(|entry| (**entry.key(), **entry.value())),
            model.last_key_value().map(|(key, value)| (*key, *value))
        );
    }
}
