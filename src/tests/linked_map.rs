use std::collections::HashMap;
use std::hash::BuildHasher;
use std::hash::RandomState;

use super::Value;
use super::sample;
use crate::KeyEquivalence;
use crate::LinkedMap;
use crate::Nullable;

fn keys<K: Copy, V, E>(map: &LinkedMap<K, V, E>) -> Vec<K> {
    map.keys().copied().collect()
}

#[test]
fn new_map_is_empty() {
    let map: LinkedMap<&str, Value> = LinkedMap::new();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.entry_set().len(), 0);
}

#[test]
fn from_source_copies_every_pair() {
    let source = sample();
    let map = LinkedMap::from_source(&source);

    assert_eq!(map.len(), source.len());
    assert!(map.contains_key("key1"));
    assert!(map.contains_value(&Value::Long(36)));
    assert!(map.contains_value(&Value::Str("string")));
    assert!(!map.contains_value(&Value::Int(36)));
    assert_eq!(map, source);
}

#[test]
fn from_source_keeps_source_order() {
    let source: HashMap<&str, Value> = sample().into_iter().collect();
    let map = LinkedMap::from_source(&source);

    let expected: Vec<_> = source.iter().collect();
    let actual: Vec<_> = map.iter().collect();
    assert_eq!(actual, expected);
    assert_eq!(map, source);
}

#[test]
fn insert_new_key_returns_none() {
    let mut map = LinkedMap::new();

    assert_eq!(map.insert("dummy", 200), None);
    assert_eq!(map.get("dummy"), Some(&200));
}

#[test]
fn insert_existing_key_returns_previous_value() {
    let mut map = LinkedMap::from_source(&sample());

    assert_eq!(map.insert("key2", Value::Int(30)), Some(Value::Int(20)));
    assert_eq!(map.get("key2"), Some(&Value::Int(30)));
    assert_eq!(map.len(), 4);
}

#[test]
fn remove_returns_value_and_shrinks() {
    let mut map = LinkedMap::from_source(&sample());

    assert_eq!(map.remove("key2"), Some(Value::Int(20)));
    assert_eq!(map.get("key2"), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn clear_empties_the_map() {
    let mut map = LinkedMap::from_source(&sample());

    map.clear();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);

    map.insert("key9", Value::Bool(false));
    assert_eq!(keys(&map), ["key9"]);
}

#[test]
fn first_entry_formats_its_key_and_value() {
    let source = sample();
    let map = LinkedMap::from_source(&source);

    let entry = map.entry_set().iter().next().expect("map is not empty");

    assert_eq!(*entry.key(), "key1");
    assert_eq!(Some(entry.value()), source.get("key1"));
    assert_eq!(
        entry.to_string(),
        format!("Entry [key={}, value={}]", entry.key(), entry.value())
    );
    assert_eq!(entry.to_string(), "Entry [key=key1, value=string]");
}

#[test]
fn map_formats_in_insertion_order() {
    let mut map = LinkedMap::new();
    map.insert("b", 2);
    map.insert("a", 1);

    assert_eq!(map.to_string(), "{b=2, a=1}");
    assert_eq!(format!("{map:?}"), r#"{"b": 2, "a": 1}"#);
    assert_eq!(LinkedMap::<i32, i32>::new().to_string(), "{}");
}

#[test]
fn iterates_in_first_insertion_order() {
    let mut map = LinkedMap::new();
    for key in ["delta", "alpha", "charlie", "bravo"] {
        map.insert(key, key.len());
    }

    assert_eq!(keys(&map), ["delta", "alpha", "charlie", "bravo"]);
}

#[test]
fn update_does_not_reorder() {
    let mut map = LinkedMap::from([("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(map.insert("a", 10), Some(1));
    assert_eq!(keys(&map), ["a", "b", "c"]);
    assert_eq!(map.get_index(0), Some((&"a", &10)));
}

#[test]
fn remove_then_insert_moves_to_end() {
    let mut map = LinkedMap::from([("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(map.remove("a"), Some(1));
    assert_eq!(keys(&map), ["b", "c"]);
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(keys(&map), ["b", "c", "a"]);
}

#[test]
fn misses_return_none() {
    let mut map = LinkedMap::from([("a", 1)]);

    assert_eq!(map.get("zzz"), None);
    assert_eq!(map.get_mut("zzz"), None);
    assert_eq!(map.remove("zzz"), None);
    assert_eq!(map.remove_entry("zzz"), None);
    assert!(!map.contains_key("zzz"));
    assert_eq!(map.insert("zzz", 2), None);
}

#[test]
fn stored_null_is_not_absent() {
    let mut map: LinkedMap<&str, Option<i32>> = LinkedMap::new();

    assert_eq!(map.insert("a", None), None);
    assert_eq!(map.get("a"), Some(&None));
    assert_eq!(map.insert("a", Some(1)), Some(None));
    assert!(map.contains_value(&Some(1)));
}

#[test]
fn nullable_keys_match_only_null() {
    let mut map = LinkedMap::new();
    map.insert(Nullable::from("a"), 1);
    map.insert(Nullable::NULL, 2);

    assert_eq!(map.get(&Nullable::NULL), Some(&2));
    assert_eq!(map.get(&Nullable::from("a")), Some(&1));
    assert_eq!(map.get(&Nullable::from("null")), None);

    assert_eq!(map.insert(Nullable::NULL, 3), Some(2));
    assert_eq!(map.len(), 2);
    assert_eq!(map.to_string(), "{a=1, null=3}");
}

#[test]
fn equality_ignores_order() {
    let a = LinkedMap::from([(1, "one"), (2, "two"), (3, "three")]);
    let b = LinkedMap::from([(3, "three"), (1, "one"), (2, "two")]);
    let c = LinkedMap::from([(3, "three"), (1, "uno"), (2, "two")]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, LinkedMap::from([(1, "one"), (2, "two")]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
}

#[test]
fn equals_std_maps_with_same_pairs() {
    let map = LinkedMap::from_source(&sample());
    let hash_map: HashMap<&str, Value> = sample().into_iter().collect();

    assert_eq!(map, hash_map);
    assert_eq!(map, sample());

    let mut other = hash_map.clone();
    other.insert("key5", Value::Int(5));
    assert_ne!(map, other);
}

#[test]
fn entry_api() {
    let mut map: LinkedMap<&str, u32> = LinkedMap::new();

    *map.entry("a").or_insert(0) += 1;
    *map.entry("b").or_default() += 5;
    *map.entry("a").or_insert_with(|| 100) += 1;
    map.entry("c").and_modify(|v| *v += 1).or_insert(7);

    assert_eq!(map["a"], 2);
    assert_eq!(map["b"], 5);
    assert_eq!(map["c"], 7);
    assert_eq!(map.entry("b").key(), &"b");

    match map.entry("a") {
        crate::linked_map::Entry::Occupied(entry) => assert_eq!(entry.remove(), 2),
        crate::linked_map::Entry::Vacant(_) => unreachable!(),
    }
    assert_eq!(keys(&map), ["b", "c"]);
}

struct IgnoreAsciiCase;

impl KeyEquivalence<str, String> for IgnoreAsciiCase {
    fn equivalent(&self, query: &str, key: &String) -> bool {
        query.eq_ignore_ascii_case(key)
    }
}

impl KeyEquivalence<String, String> for IgnoreAsciiCase {
    fn equivalent(&self, query: &String, key: &String) -> bool {
        query.eq_ignore_ascii_case(key)
    }
}

#[test]
fn custom_equivalence_decides_key_identity() {
    let mut headers = LinkedMap::with_equivalence(IgnoreAsciiCase);

    assert_eq!(headers.insert("Content-Type".to_string(), 1), None);
    assert_eq!(headers.insert("Accept".to_string(), 2), None);
    assert_eq!(headers.insert("CONTENT-TYPE".to_string(), 3), Some(1));

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("content-type"), Some(&3));
    assert_eq!(
        headers.get_key_value("content-type"),
        Some((&"Content-Type".to_string(), &3))
    );
    assert_eq!(headers.remove("accept"), Some(2));
    assert_eq!(headers.len(), 1);
}

#[test]
fn equality_uses_the_key_equivalence() {
    let mut a = LinkedMap::with_equivalence(IgnoreAsciiCase);
    a.insert("Accept".to_string(), 1);
    a.insert("Host".to_string(), 2);
    let mut b = LinkedMap::with_equivalence(IgnoreAsciiCase);
    b.insert("HOST".to_string(), 2);
    b.insert("accept".to_string(), 1);

    assert!(a == b);
    assert!(b == a);

    b.insert("Accept".to_string(), 3);
    assert!(a != b);
}

#[test]
fn retain_and_drain_keep_order() {
    let mut map: LinkedMap<i32, i32> = (0..10).map(|i| (i, i * i)).collect();

    map.retain(|k, v| {
        *v += 1;
        k % 3 != 0
    });
    assert_eq!(keys(&map), [1, 2, 4, 5, 7, 8]);
    assert_eq!(map[&4], 17);

    let drained: Vec<_> = map.drain().collect();
    assert_eq!(drained.first(), Some(&(1, 2)));
    assert_eq!(drained.len(), 6);
    assert!(map.is_empty());
}

#[test]
#[should_panic(expected = "key not found")]
fn index_panics_on_missing_key() {
    let map = LinkedMap::from([("a", 1)]);
    assert_eq!(map["b"], 0);
}

#[test]
fn extend_and_insert_all_update_in_place() {
    let mut map = LinkedMap::from([("a", 1), ("b", 2)]);

    map.extend([("b", 20), ("c", 3)]);
    assert_eq!(keys(&map), ["a", "b", "c"]);
    assert_eq!(map["b"], 20);

    let other = LinkedMap::from([("d", 4), ("a", 10)]);
    map.insert_all(&other);
    assert_eq!(keys(&map), ["a", "b", "c", "d"]);
    assert_eq!(map["a"], 10);

    map.extend(other.iter());
    assert_eq!(map.len(), 4);
}

#[test]
fn mutable_iteration_writes_through() {
    let mut map = LinkedMap::from([("a", 1), ("b", 2)]);

    for (_, value) in &mut map {
        *value *= 10;
    }
    for value in map.values_mut() {
        *value += 1;
    }
    if let Some(value) = map.get_mut("a") {
        *value += 100;
    }

    assert_eq!(map.values().copied().collect::<Vec<_>>(), [111, 21]);
    let pairs: Vec<(&str, i32)> = map.into_iter().collect();
    assert_eq!(pairs, [("a", 111), ("b", 21)]);
}

#[test]
fn clone_is_independent() {
    let mut map = LinkedMap::from([("a", 1)]);
    let copy = map.clone();

    map.insert("b", 2);

    assert_eq!(copy.len(), 1);
    assert_eq!(map.len(), 2);
}
