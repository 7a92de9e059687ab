//! Map operations derived purely from iterating a container's key-value pairs.
//!
//! Any type implementing [`EntrySource`] (it can produce its pairs and knows how many there are)
//! gets membership tests, lookup, equality, hashing and a string form from the functions in this
//! module, without maintaining any index. [`LinkedMap`] and its views use them for their
//! `PartialEq`, `Hash` and `Display` implementations, and because the standard maps implement
//! `EntrySource` too, a [`LinkedMap`] can be compared with a `HashMap` or `BTreeMap` directly.
//!
//! [`LinkedMap`]: crate::LinkedMap

use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::btree_map;
use std::collections::hash_map;

use crate::hash_one_fixed;

/// A container that can iterate over its key-value pairs and knows how many it holds.
pub trait EntrySource {
    /// The key type.
    type Key;
    /// The value type.
    type Value;
    /// Iterator over borrowed pairs.
    type Pairs<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the number of pairs [`pairs`](EntrySource::pairs) yields.
    fn len(&self) -> usize;

    /// Returns an iterator over every key-value pair.
    fn pairs(&self) -> Self::Pairs<'_>;

    /// Returns true if there are no pairs.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> EntrySource for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }
}

impl<K, V> EntrySource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }
}

/// Returns the value paired with the first key equal to `key`, scanning `source` in order.
pub fn get<'a, S, Q>(source: &'a S, key: &Q) -> Option<&'a S::Value>
where
    S: EntrySource + ?Sized,
    S::Key: Borrow<Q>,
    Q: ?Sized + Eq,
{
    source
        .pairs()
        .find(|&(k, _)| key == k.borrow())
        .map(|(_, v)| v)
}

/// Returns true if `source` has a key equal to `key`.
#[inline]
pub fn contains_key<S, Q>(source: &S, key: &Q) -> bool
where
    S: EntrySource + ?Sized,
    S::Key: Borrow<Q>,
    Q: ?Sized + Eq,
{
    get(source, key).is_some()
}

/// Returns true if any pair in `source` has a value equal to `value`.
pub fn contains_value<S>(source: &S, value: &S::Value) -> bool
where
    S: EntrySource + ?Sized,
    S::Value: PartialEq,
{
    source.pairs().any(|(_, v)| v == value)
}

/// Returns true if `source` has no pairs.
#[inline]
pub fn is_empty<S: EntrySource + ?Sized>(source: &S) -> bool {
    source.len() == 0
}

/// Compares two sources as sets of key-value pairs: they are equal when they have the same number
/// of pairs and every pair of `a` is present in `b`, regardless of order.
///
/// Keys are assumed to be unique within each source, as they are in any map.
pub fn entries_equal<A, B>(a: &A, b: &B) -> bool
where
    A: EntrySource + ?Sized,
    B: EntrySource<Key = A::Key> + ?Sized,
    A::Key: Eq,
    A::Value: PartialEq<B::Value>,
{
    if a.len() != b.len() {
        return false;
    }

    a.pairs().all(|(key, value)| {
        b.pairs()
            .find(|(other_key, _)| *other_key == key)
            .is_some_and(|(_, other_value)| value == other_value)
    })
}

/// Feeds an order-independent hash of every pair in `source` into `state`.
///
/// Consistent with [`entries_equal`]: sources with the same pairs in any order hash the same.
pub fn hash_entries<S, H>(source: &S, state: &mut H)
where
    S: EntrySource + ?Sized,
    S::Key: Hash,
    S::Value: Hash,
    H: Hasher,
{
    // each pair is hashed with a fixed seed so that the combination does not depend on the
    // hasher of either container, then folded with xor, which is insensitive to order.
    let mut hash = 0u64;
    for pair in source.pairs() {
        hash ^= hash_one_fixed(pair);
    }
    state.write_usize(source.len());
    state.write_u64(hash);
}

/// Computes the order-independent hash of `source` with the given hasher builder.
pub fn hash_one_entries<S, B>(source: &S, build_hasher: &B) -> u64
where
    S: EntrySource + ?Sized,
    S::Key: Hash,
    S::Value: Hash,
    B: BuildHasher,
{
    let mut hasher = build_hasher.build_hasher();
    hash_entries(source, &mut hasher);
    hasher.finish()
}

/// Writes `source` as `{k1=v1, k2=v2}` in iteration order.
pub fn fmt_entries<S>(source: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: EntrySource + ?Sized,
    S::Key: fmt::Display,
    S::Value: fmt::Display,
{
    f.write_str("{")?;
    for (i, (key, value)) in source.pairs().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    f.write_str("}")
}

/// Adapter giving any [`EntrySource`] with displayable keys and values the `{k1=v1, k2=v2}` string form.
///
/// ```
/// use std::collections::BTreeMap;
/// use linkmap::derived::DisplayEntries;
///
/// let map = BTreeMap::from([(1, "one"), (2, "two")]);
/// assert_eq!(DisplayEntries(&map).to_string(), "{1=one, 2=two}");
/// ```
pub struct DisplayEntries<'a, S: ?Sized>(pub &'a S);

impl<S> fmt::Display for DisplayEntries<'_, S>
where
    S: EntrySource + ?Sized,
    S::Key: fmt::Display,
    S::Value: fmt::Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(self.0, f)
    }
}
