use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::RandomState;

use super::Value;
use super::sample;
use crate::EntrySource;
use crate::LinkedMap;
use crate::derived;
use crate::derived::DisplayEntries;

#[test]
fn lookups_work_on_any_source() {
    let btree = sample();
    let hash: HashMap<_, _> = sample().into_iter().collect();
    let linked = LinkedMap::from_source(&btree);

    assert_eq!(derived::get(&btree, "key2"), Some(&Value::Int(20)));
    assert_eq!(derived::get(&hash, "key2"), Some(&Value::Int(20)));
    assert_eq!(derived::get(&linked, "key2"), Some(&Value::Int(20)));
    assert_eq!(derived::get(&linked.entry_set(), "key2"), Some(&Value::Int(20)));

    assert!(derived::contains_key(&hash, "key4"));
    assert!(!derived::contains_key(&linked, "key5"));
    assert!(derived::contains_value(&linked, &Value::Bool(true)));
    assert!(!derived::contains_value(&btree, &Value::Bool(false)));

    assert!(!derived::is_empty(&linked));
    assert!(derived::is_empty(&BTreeMap::<u8, u8>::new()));
    assert!(EntrySource::is_empty(&LinkedMap::<u8, u8>::new()));
}

#[test]
fn equality_across_containers() {
    let btree = sample();
    let hash: HashMap<_, _> = sample().into_iter().collect();
    let mut linked = LinkedMap::from_source(&btree);

    assert!(derived::entries_equal(&btree, &hash));
    assert!(derived::entries_equal(&hash, &linked));
    assert!(derived::entries_equal(&linked.entry_set(), &btree));

    linked.insert("key1", Value::Str("other"));
    assert!(!derived::entries_equal(&hash, &linked));
}

#[test]
fn hash_is_independent_of_container_and_order() {
    let state = RandomState::new();
    let btree = sample();
    let hash: HashMap<_, _> = sample().into_iter().collect();
    let reversed: LinkedMap<_, _> = sample().into_iter().rev().collect();

    let expected = derived::hash_one_entries(&btree, &state);
    assert_eq!(derived::hash_one_entries(&hash, &state), expected);
    assert_eq!(derived::hash_one_entries(&reversed, &state), expected);

    let mut changed = reversed.clone();
    changed.insert("key2", Value::Int(21));
    assert_ne!(derived::hash_one_entries(&changed, &state), expected);
}

#[test]
fn display_of_any_source() {
    let btree = BTreeMap::from([(2, "two"), (1, "one")]);
    let linked: LinkedMap<_, _> = [(2, "two"), (1, "one")].into_iter().collect();

    assert_eq!(DisplayEntries(&btree).to_string(), "{1=one, 2=two}");
    assert_eq!(DisplayEntries(&linked).to_string(), "{2=two, 1=one}");
    assert_eq!(DisplayEntries(&BTreeMap::<u8, u8>::new()).to_string(), "{}");
}
