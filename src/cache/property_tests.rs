//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's contract over generated operation
//! sequences. Time is driven by a `ManualClock`, never by sleeping.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStore, ManualClock};

// == Test Configuration ==
const TEST_MAX_SIZE: usize = 100;
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

fn new_store(max_size: usize, clock: &ManualClock) -> CacheStore<String> {
    CacheStore::with_clock(max_size, TEST_DEFAULT_TTL, Arc::new(clock.clone()))
}

// == Strategies ==
/// Generates cache keys shaped like the façade's keys
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hostels".to_string()),
        "[0-9]{1,3}".prop_map(|id| format!("hostel-{}", id)),
        ("[a-z]{0,4}", "[a-z]{0,4}").prop_map(|(q, l)| format!("search-{}-{}", q, l)),
    ]
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
        (0u64..400_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A fresh key is absent; a just-set key reads back.
    #[test]
    fn prop_set_then_get(key in key_strategy(), value in value_strategy(), ttl_ms in 1u64..1_000_000) {
        let clock = ManualClock::new(1_000);
        let mut store = new_store(TEST_MAX_SIZE, &clock);

        prop_assert_eq!(store.get(&key), None);

        store.set(key.clone(), value.clone(), Some(Duration::from_millis(ttl_ms)));
        prop_assert_eq!(store.get(&key), Some(value));
        prop_assert!(store.has(&key));
    }

    // Past the TTL an entry is absent and physically removed.
    #[test]
    fn prop_expiry_removes_entry(
        key in key_strategy(),
        value in value_strategy(),
        ttl_ms in 0u64..100_000,
        overshoot in 1u64..100_000
    ) {
        let clock = ManualClock::new(0);
        let mut store = new_store(TEST_MAX_SIZE, &clock);

        store.set(key.clone(), value, Some(Duration::from_millis(ttl_ms)));
        clock.advance(Duration::from_millis(ttl_ms + overshoot));

        prop_assert_eq!(store.size(), 1);
        prop_assert_eq!(store.get(&key), None);
        prop_assert!(!store.has(&key));
        prop_assert_eq!(store.size(), 0);
    }

    // Size never exceeds capacity, whatever the operation mix.
    #[test]
    fn prop_capacity_enforcement(
        max_size in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..100)
    ) {
        let clock = ManualClock::new(0);
        let mut store = new_store(max_size, &clock);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, value, None),
                CacheOp::Get { key } => {
                    store.get(&key);
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
            prop_assert!(store.size() <= max_size);
        }
    }

    // Inserting into a full store evicts exactly the entry with the smallest
    // stored_at, insertion order breaking ties.
    #[test]
    fn prop_evicts_oldest_stored(
        gaps in prop::collection::vec(0u64..3, 2..10),
        value in value_strategy()
    ) {
        let clock = ManualClock::new(0);
        let capacity = gaps.len();
        let mut store = new_store(capacity, &clock);

        for (i, gap) in gaps.iter().enumerate() {
            clock.advance(Duration::from_millis(*gap));
            store.set(format!("k{}", i), value.clone(), None);
        }

        store.set("newcomer", value, None);

        prop_assert_eq!(store.size(), capacity);
        prop_assert!(!store.has("k0"));
        prop_assert!(store.has("newcomer"));
        for i in 1..capacity {
            let key = format!("k{}", i);
            prop_assert!(store.has(&key), "{} should survive", key);
        }
        prop_assert_eq!(store.stats().evictions, 1);
    }

    // Store behaves like a map when nothing expires and nothing is evicted.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let clock = ManualClock::new(0);
        let mut store = new_store(TEST_MAX_SIZE, &clock);
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), None);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
                // Time stands still for this property
                CacheOp::Advance { .. } => {}
            }
        }

        let mut expected: Vec<String> = model.keys().cloned().collect();
        expected.sort();
        prop_assert_eq!(store.stats().keys, expected);
    }

    // Hit/miss counters match the outcomes the caller observed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let clock = ManualClock::new(0);
        let mut store = new_store(TEST_MAX_SIZE, &clock);
        let mut hits = 0u64;
        let mut misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, value, None),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => hits += 1,
                    None => misses += 1,
                },
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, hits);
        prop_assert_eq!(stats.misses, misses);
        prop_assert_eq!(stats.size, store.size());
    }
}

// == Edge Cases ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_capacity_two() {
        let clock = ManualClock::new(0);
        let mut store = new_store(2, &clock);

        store.set("a", "1".to_string(), None);
        clock.advance(Duration::from_millis(1));
        store.set("b", "2".to_string(), None);
        clock.advance(Duration::from_millis(1));
        store.set("c", "3".to_string(), None);

        assert!(!store.has("a"));
        assert!(store.has("b"));
        assert!(store.has("c"));
    }

    #[test]
    fn test_stale_entries_count_toward_capacity() {
        let clock = ManualClock::new(0);
        let mut store = new_store(2, &clock);

        store.set("stale", "1".to_string(), Some(Duration::from_millis(1)));
        clock.advance(Duration::from_millis(5));
        store.set("b", "2".to_string(), None);

        assert_eq!(store.size(), 2);

        // The stale entry is also the oldest, so it goes first
        store.set("c", "3".to_string(), None);
        assert_eq!(store.stats().keys, vec!["b".to_string(), "c".to_string()]);
    }
}
