use std::panic;
use std::panic::AssertUnwindSafe;

use crate::Entry;
use crate::EntrySequence;
use crate::StructuralEq;

fn sequence_of(pairs: &[(&'static str, i32)]) -> EntrySequence<&'static str, i32> {
    let mut sequence = EntrySequence::new();
    for &(key, value) in pairs {
        sequence.append(Entry::new(key, value));
    }
    sequence
}

#[test]
fn append_and_find() {
    let sequence = sequence_of(&[("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.find_by_key("b", &StructuralEq), Some(1));
    assert_eq!(sequence.find_by_key("z", &StructuralEq), None);
    assert_eq!(sequence.get(2).map(Entry::pair), Some((&"c", &3)));
    assert_eq!(sequence.get(3), None);
}

#[test]
fn append_does_not_deduplicate() {
    let sequence = sequence_of(&[("a", 1), ("a", 2)]);

    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.find_by_key("a", &StructuralEq), Some(0));
}

#[test]
fn remove_at_preserves_order() {
    let mut sequence = sequence_of(&[("a", 1), ("b", 2), ("c", 3)]);

    let removed = sequence.remove_at(0).map(Entry::into_pair);

    assert_eq!(removed, Some(("a", 1)));
    let keys: Vec<_> = sequence.iter().map(|entry| *entry.key()).collect();
    assert_eq!(keys, ["b", "c"]);
}

#[test]
fn generation_tracks_structural_changes_only() {
    let mut sequence = EntrySequence::new();
    assert_eq!(sequence.generation(), 0);

    sequence.append(Entry::new("a", 1));
    sequence.append(Entry::new("b", 2));
    assert_eq!(sequence.generation(), 2);

    if let Some(entry) = sequence.get_mut(0) {
        entry.set_value(10);
    }
    for entry in sequence.iter_mut() {
        *entry.value_mut() += 1;
    }
    assert_eq!(sequence.generation(), 2);

    assert!(sequence.remove_at(5).is_none());
    assert_eq!(sequence.generation(), 2);

    sequence.retain(|_, _| true);
    assert_eq!(sequence.generation(), 2);

    sequence.retain(|key, _| *key == "a");
    assert_eq!(sequence.generation(), 3);

    sequence.clear();
    assert_eq!(sequence.generation(), 4);
    assert!(sequence.is_empty());

    sequence.append(Entry::new("c", 3));
    assert_eq!(sequence.drain().count(), 1);
    assert_eq!(sequence.generation(), 6);
}

#[test]
fn entries_expose_immutable_keys() {
    let mut entry = Entry::new("key", 1);

    assert_eq!(entry.set_value(2), 1);
    *entry.value_mut() += 1;

    assert_eq!(entry.pair(), (&"key", &3));
    assert_eq!(Entry::from(("key", 3)), entry);
    assert_eq!(<(&str, i32)>::from(entry), ("key", 3));
}

#[test]
fn retain_that_panics_midway_still_invalidates_cursors() {
    let mut sequence = EntrySequence::new();
    for i in 0..5 {
        sequence.append(Entry::new(i, i));
    }
    let before = sequence.generation();
    let mut cursor = sequence.cursor();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        sequence.retain(|key, _| {
            assert_ne!(*key, 3, "keep_fn gave up");
            *key != 0
        });
    }));

    assert!(result.is_err());
    assert_eq!(sequence.len(), 4);
    assert_ne!(sequence.generation(), before);
    assert!(
        cursor
            .next(&mut sequence)
            .is_err_and(|err| err.is_concurrent_structural_change())
    );
}

#[test]
fn retain_of_an_empty_sequence_is_not_structural() {
    let mut sequence: EntrySequence<u8, u8> = EntrySequence::new();

    sequence.retain(|_, _| false);

    assert_eq!(sequence.generation(), 0);
}
