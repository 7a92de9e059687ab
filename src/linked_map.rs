#![deny(missing_docs)]

use core::hash::Hash;
use core::hash::Hasher;
use std::fmt;
use std::fmt::Debug;
use std::iter;
use std::ops;
use std::slice;
use std::vec;

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::Entry as MapEntry;
use crate::EntrySource;
use crate::KeyEquivalence;
use crate::StructuralEq;
use crate::derived;
use crate::sequence::Cursor;
use crate::sequence::CursorSource;
use crate::sequence::EntrySequence;
use crate::sequence::sealed::Sealed;
use crate::view::EntryView;
use crate::view::EntryViewMut;

use self::Entry::Occupied;
use self::Entry::Vacant;

/// A map that remembers the order in which its keys were first inserted, implemented by searching
/// linearly in a sequence of entries.
///
/// `LinkedMap`'s keys are compared using its key equivalence `E`, which defaults to [`StructuralEq`]
/// (the keys' [`Eq`][eq] implementation). All search operations (`contains_key`, `get`, `get_mut`,
/// `insert`, and `remove`) run in `O(n)` time; there is no hash table or tree index. This makes the
/// map suitable for small numbers of keys, or for keys that cannot be hashed or ordered.
///
/// Implements `PartialEq`, `Eq`, and `Hash` such that two maps are equal and hash to the same value if they have
/// the same `(k, v)` element pairs regardless of order. The map also compares equal to a `HashMap` or
/// `BTreeMap` holding the same pairs.
///
/// It is a logic error for a key to be modified in such a way that its equivalence to other keys
/// changes while it is in the map. This is normally only possible through [`Cell`][cell],
/// [`RefCell`][ref_cell], global state, I/O, or unsafe code.
///
/// [cell]: https://doc.rust-lang.org/nightly/std/cell/struct.Cell.html
/// [eq]: https://doc.rust-lang.org/nightly/std/cmp/trait.Eq.html
/// [ref_cell]: https://doc.rust-lang.org/nightly/std/cell/struct.RefCell.html
///
/// # Ordering
///
/// Iteration yields entries in the order their keys were first inserted. Replacing the value of a
/// key that is already present leaves it where it is. Removal preserves the order of the remaining
/// entries, so a key that is removed and inserted again moves to the end.
///
/// # Iteration and modification
///
/// The borrowing iterators ([`iter`], [`iter_mut`], [`entry_set`] and friends) cannot outlive a
/// modification of the map. When entries have to be removed while walking the map, or the map has to
/// be touched between steps, use a [`Cursor`] from [`cursor`]: it reports changes it did not make
/// itself instead of continuing over stale state.
///
/// [`iter`]: LinkedMap::iter
/// [`iter_mut`]: LinkedMap::iter_mut
/// [`entry_set`]: LinkedMap::entry_set
/// [`cursor`]: LinkedMap::cursor
///
/// # Example
///
/// ```
/// use linkmap::LinkedMap;
///
/// let mut stock = LinkedMap::new();
/// stock.insert("apples", 3);
/// stock.insert("pears", 0);
/// stock.insert("plums", 12);
///
/// // a restock changes the count but not the position.
/// assert_eq!(stock.insert("pears", 8), Some(0));
/// assert_eq!(stock.to_string(), "{apples=3, pears=8, plums=12}");
///
/// // sold out: the key goes, and comes back at the end when restocked.
/// assert_eq!(stock.remove("apples"), Some(3));
/// assert!(!stock.contains_key("apples"));
/// stock.insert("apples", 20);
///
/// let order: Vec<_> = stock.keys().copied().collect();
/// assert_eq!(order, ["pears", "plums", "apples"]);
/// ```
pub struct LinkedMap<K, V, E = StructuralEq> {
    entries: EntrySequence<K, V>,
    equivalence: E,
}

impl<K, V> LinkedMap<K, V> {
    /// Creates an empty map using structural key equality. This method does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::with_equivalence(StructuralEq)
    }

    /// Creates a map holding a copy of every pair of `source`, in `source`'s iteration order.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use linkmap::LinkedMap;
    ///
    /// let source = BTreeMap::from([("b", 2), ("a", 1)]);
    /// let map = LinkedMap::from_source(&source);
    ///
    /// assert_eq!(map, source);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn from_source<S>(source: &S) -> Self
    where
        S: EntrySource<Key = K, Value = V> + ?Sized,
        K: Eq + Clone,
        V: Clone,
    {
        let mut map = Self::new();
        map.insert_all(source);
        map
    }
}

impl<K, V, E> LinkedMap<K, V, E> {
    /// Creates an empty map that compares keys with the given equivalence. This method does not allocate.
    ///
    /// ```
    /// use linkmap::{KeyEquivalence, LinkedMap};
    ///
    /// struct IgnoreAsciiCase;
    ///
    /// impl KeyEquivalence<str, String> for IgnoreAsciiCase {
    ///     fn equivalent(&self, query: &str, key: &String) -> bool {
    ///         query.eq_ignore_ascii_case(key)
    ///     }
    /// }
    ///
    /// impl KeyEquivalence<String, String> for IgnoreAsciiCase {
    ///     fn equivalent(&self, query: &String, key: &String) -> bool {
    ///         query.eq_ignore_ascii_case(key)
    ///     }
    /// }
    ///
    /// let mut map = LinkedMap::with_equivalence(IgnoreAsciiCase);
    /// map.insert("Content-Type".to_string(), "text/plain");
    /// map.insert("content-type".to_string(), "text/html");
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("CONTENT-TYPE"), Some(&"text/html"));
    /// ```
    #[inline]
    pub fn with_equivalence(equivalence: E) -> Self {
        Self {
            entries: EntrySequence::new(),
            equivalence,
        }
    }

    /// Returns the key equivalence the map compares keys with.
    #[inline]
    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the structural modification counter of the underlying entry sequence.
    ///
    /// See [`EntrySequence::generation`].
    #[inline]
    pub fn generation(&self) -> u64 {
        self.entries.generation()
    }

    /// Clears the map, removing all elements.
    ///
    /// The old storage is dropped and replaced with an empty, unallocated one.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Scan through the map and keep those key-value pairs where the
    /// closure returns `true`.
    ///
    /// The elements are visited in order and the order of the kept ones is preserved.
    #[inline]
    pub fn retain<F>(&mut self, keep_fn: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain(keep_fn);
    }

    /// Removes all key-value pairs from the map and returns an iterator over them, in order.
    ///
    /// All key-value pairs are removed even if the iterator is not exhausted. However, the
    /// behavior of this method is unspecified if the iterator is leaked.
    ///
    /// The iterator's item type is `(K, V)`.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            iter: self.entries.drain(),
        }
    }

    /// Returns an iterator yielding references to the map's keys and their corresponding values.
    ///
    /// The iterator's item type is `(&K, &V)`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.entries.iter())
    }

    /// Returns an iterator yielding references to the map's keys and mutable references to their
    /// corresponding values.
    ///
    /// The iterator's item type is `(&K, &mut V)`.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            iter: self.entries.iter_mut(),
        }
    }

    /// Returns an iterator yielding references to the map's keys.
    ///
    /// The iterator's item type is `&K`.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator yielding references to the map's values.
    ///
    /// The iterator's item type is `&V`.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Returns an iterator yielding mutable references to the map's values.
    ///
    /// The iterator's item type is `&mut V`.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            iter: self.entries.iter_mut(),
        }
    }

    /// Returns the live set of entries of this map.
    ///
    /// The view owns nothing: its size and contents are always those of the map.
    #[inline]
    pub fn entry_set(&self) -> EntryView<'_, K, V> {
        EntryView::new(&self.entries)
    }

    /// Returns the live set of entries of this map, allowing values to be changed and entries to
    /// be removed through it.
    #[inline]
    pub fn entry_set_mut(&mut self) -> EntryViewMut<'_, K, V> {
        EntryViewMut::new(&mut self.entries)
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first entry.
    ///
    /// Pass the map (or its [`entry_set_mut`](LinkedMap::entry_set_mut) view) to the cursor's methods to advance it.
    #[inline]
    pub fn cursor(&self) -> Cursor<K, V> {
        self.entries.cursor()
    }

    /// Returns a reference to the key and value of the element at the given position in insertion
    /// order, if it exists.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(MapEntry::pair)
    }

    /// Returns a mutable reference to the value of the element at the given position, if it exists.
    ///
    /// Note the key is still an immutable reference as it is a logic error to change the key's value
    /// while it is in the map.
    #[inline]
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.entries.get_mut(index).map(MapEntry::pair_mut)
    }

    /// Returns true if any key in the map is associated with a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        derived::contains_value(self, value)
    }

    /// View the entries of `self` as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[MapEntry<K, V>] {
        self.entries.as_slice()
    }

    /// Returns a reference to the value in the map whose key is equivalent to the given key.
    ///
    /// Returns `None` if the map contains no such key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        let index = self.entries.find_by_key(key, &self.equivalence)?;
        self.entries.get(index).map(MapEntry::value)
    }

    /// Returns references to the stored key and its value for the key equivalent to the given key.
    ///
    /// Returns `None` if the map contains no such key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        let index = self.entries.find_by_key(key, &self.equivalence)?;
        self.entries.get(index).map(MapEntry::pair)
    }

    /// Returns a mutable reference to the value in the map whose key is equivalent to the given key.
    ///
    /// Returns `None` if the map contains no such key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        let index = self.entries.find_by_key(key, &self.equivalence)?;
        self.entries.get_mut(index).map(MapEntry::value_mut)
    }

    /// Checks if the map contains a key that is equivalent to the given key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        self.entries.find_by_key(key, &self.equivalence).is_some()
    }

    /// Removes the key in the map that is equivalent to the given key and returns its corresponding
    /// value, keeping the order of the remaining elements.
    ///
    /// Returns `None` if the map contained no such key.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the key in the map that is equivalent to the given key and returns the stored key
    /// and its value, keeping the order of the remaining elements.
    ///
    /// Returns `None` if the map contained no such key.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K>,
    {
        let index = self.entries.find_by_key(key, &self.equivalence)?;
        self.entries.remove_at(index).map(MapEntry::into_pair)
    }
}

impl<K, V, E: KeyEquivalence<K, K>> LinkedMap<K, V, E> {
    /// Inserts a key-value pair into the map.
    ///
    /// Returns `None` if the map did not contain a key that is equivalent to the given key, in
    /// which case the pair is appended after every existing element.
    ///
    /// If the map did contain such a key, its corresponding value is replaced with the given
    /// value in place, and the old value is returned. The key is not updated, though. This matters for
    /// values that can be `==` without being identical. See the [standard library's documentation]
    /// [std] for more details.
    ///
    /// [std]: https://doc.rust-lang.org/nightly/std/collections/index.html#insert-and-complex-keys
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Occupied(mut e) => Some(e.insert(value)),
            Vacant(e) => {
                e.insert(value);
                None
            }
        }
    }

    /// Inserts a copy of every pair of `source`, in `source`'s iteration order.
    ///
    /// Keys not yet present are appended in that order; keys already present have their value
    /// replaced without moving.
    pub fn insert_all<S>(&mut self, source: &S)
    where
        S: EntrySource<Key = K, Value = V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        for (key, value) in source.pairs() {
            self.insert(key.clone(), value.clone());
        }
    }

    /// Returns the given key's corresponding entry in the map for in-place manipulation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, E> {
        match self.entries.find_by_key(&key, &self.equivalence) {
            None => Vacant(VacantEntry { map: self, key }),
            Some(index) => Occupied(OccupiedEntry { map: self, index }),
        }
    }
}

impl<K, V, E> Sealed<K, V> for LinkedMap<K, V, E> {
    #[inline]
    fn sequence(&self) -> &EntrySequence<K, V> {
        &self.entries
    }

    #[inline]
    fn sequence_mut(&mut self) -> &mut EntrySequence<K, V> {
        &mut self.entries
    }
}

impl<K, V, E> CursorSource<K, V> for LinkedMap<K, V, E> {}

impl<K, V, E> EntrySource for LinkedMap<K, V, E> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }
}

impl<K: Clone, V: Clone, E: Clone> Clone for LinkedMap<K, V, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<K: Debug, V: Debug, E> Debug for LinkedMap<K, V, E> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats the map as `{k1=v1, k2=v2}`, in insertion order.
impl<K: fmt::Display, V: fmt::Display, E> fmt::Display for LinkedMap<K, V, E> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        derived::fmt_entries(self, f)
    }
}

impl<K, V, E: Default> Default for LinkedMap<K, V, E> {
    #[inline]
    fn default() -> Self {
        Self::with_equivalence(E::default())
    }
}

impl<K, V, E: KeyEquivalence<K, K>> Extend<(K, V)> for LinkedMap<K, V, E> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, key_values: I) {
        for (key, value) in key_values {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Copy, V: Copy, E: KeyEquivalence<K, K>> Extend<(&'a K, &'a V)> for LinkedMap<K, V, E> {
    #[inline]
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, key_values: I) {
        self.extend(key_values.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, E: KeyEquivalence<K, K> + Default> iter::FromIterator<(K, V)> for LinkedMap<K, V, E> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(key_values: I) -> Self {
        let mut map = Self::default();
        map.extend(key_values);
        map
    }
}

impl<K, V, E, Q> ops::Index<&Q> for LinkedMap<K, V, E>
where
    Q: ?Sized,
    E: KeyEquivalence<Q, K>,
{
    type Output = V;

    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found")
    }
}

/// Every key of `self` is looked up in `other` with `other`'s key equivalence.
impl<K, V: PartialEq, E: KeyEquivalence<K, K>> PartialEq for LinkedMap<K, V, E> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for (key, value) in self {
            if other.get(key) != Some(value) {
                return false;
            }
        }

        true
    }
}

impl<K, V: Eq, E: KeyEquivalence<K, K>> Eq for LinkedMap<K, V, E> {}

impl<K: Eq, V: PartialEq, E, S> PartialEq<HashMap<K, V, S>> for LinkedMap<K, V, E> {
    #[inline]
    fn eq(&self, other: &HashMap<K, V, S>) -> bool {
        derived::entries_equal(self, other)
    }
}

impl<K: Eq, V: PartialEq, E> PartialEq<BTreeMap<K, V>> for LinkedMap<K, V, E> {
    #[inline]
    fn eq(&self, other: &BTreeMap<K, V>) -> bool {
        derived::entries_equal(self, other)
    }
}

/// Hashes the map independently of the order of its elements, consistently with its `PartialEq`
/// implementation for the default [`StructuralEq`] key equivalence.
impl<K: Hash, V: Hash, E> Hash for LinkedMap<K, V, E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        derived::hash_entries(self, state);
    }
}

impl<K, V> From<LinkedMap<K, V>> for Vec<(K, V)> {
    #[inline]
    fn from(other: LinkedMap<K, V>) -> Self {
        other.into_iter().collect()
    }
}

impl<K: Eq, V> From<Vec<(K, V)>> for LinkedMap<K, V> {
    #[inline]
    fn from(other: Vec<(K, V)>) -> Self {
        other.into_iter().collect()
    }
}

impl<K: Eq, V, const N: usize> From<[(K, V); N]> for LinkedMap<K, V> {
    #[inline]
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

/// A view into a single occupied location in a `LinkedMap`.
///
/// See [`LinkedMap::entry`] for details.
#[allow(missing_debug_implementations)]
pub struct OccupiedEntry<'a, K, V, E = StructuralEq> {
    map: &'a mut LinkedMap<K, V, E>,
    index: usize,
}

/// A view into a single vacant location in a `LinkedMap`.
///
/// See [`LinkedMap::entry`] for details.
#[allow(missing_debug_implementations)]
pub struct VacantEntry<'a, K, V, E = StructuralEq> {
    map: &'a mut LinkedMap<K, V, E>,
    key: K,
}

/// A view into a single entry in a `LinkedMap`.
///
/// See [`LinkedMap::entry`] for details.
#[allow(missing_debug_implementations)]
pub enum Entry<'a, K, V, E = StructuralEq> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, E>),

    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, E>),
}

impl<'a, K, V, E> Entry<'a, K, V, E> {
    /// Ensures that the entry is occupied by inserting the given value if it is vacant.
    ///
    /// Returns a mutable reference to the entry's value.
    #[inline]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Occupied(entry) => entry.into_mut(),
            Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures that the entry is occupied by inserting the the result of the given function if it
    /// is vacant.
    ///
    /// Returns a mutable reference to the entry's value.
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Occupied(entry) => entry.into_mut(),
            Vacant(entry) => entry.insert(default()),
        }
    }

    /// Returns a reference to this entry's key.
    #[inline]
    pub fn key(&self) -> &K {
        match self {
            Occupied(entry) => entry.key(),
            Vacant(entry) => entry.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkmap::LinkedMap;
    ///
    /// let mut map: LinkedMap<&str, u32> = LinkedMap::new();
    ///
    /// map.entry("poneyland")
    ///    .and_modify(|e| { *e += 1 })
    ///    .or_insert(42);
    /// assert_eq!(map["poneyland"], 42);
    ///
    /// map.entry("poneyland")
    ///    .and_modify(|e| { *e += 1 })
    ///    .or_insert(42);
    /// assert_eq!(map["poneyland"], 43);
    /// ```
    #[inline]
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Occupied(mut entry) => {
                f(entry.get_mut());
                Occupied(entry)
            }
            Vacant(entry) => Vacant(entry),
        }
    }
}

impl<'a, K, V, E> OccupiedEntry<'a, K, V, E> {
    #[inline]
    fn slot(&self) -> &MapEntry<K, V> {
        &self.map.entries.as_slice()[self.index]
    }

    /// Returns a reference to the key stored in the map.
    #[inline]
    pub fn key(&self) -> &K {
        self.slot().key()
    }

    /// Returns a reference to the entry's value.
    #[inline]
    pub fn get(&self) -> &V {
        self.slot().value()
    }

    /// Returns a mutable reference to the entry's value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.map.entries.as_mut_slice()[self.index].value_mut()
    }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.map.entries.as_mut_slice()[self.index].value_mut()
    }

    /// Replaces the entry's value with the given one and returns the previous value.
    ///
    /// This is not a structural modification of the map.
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        self.map.entries.as_mut_slice()[self.index].set_value(value)
    }

    /// Removes the entry from the map, keeping the order of the remaining elements, and returns its value.
    #[inline]
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry from the map, keeping the order of the remaining elements, and returns the
    /// stored key and its value.
    #[inline]
    pub fn remove_entry(self) -> (K, V) {
        self.map.entries.take_at(self.index).into_pair()
    }
}

impl<'a, K, V: Default, E> Entry<'a, K, V, E> {
    /// If `self` is occupied, returns a mutable reference to the contained value. If it is vacant,
    /// inserts the default value and returns a mutable reference to that new contained value.
    #[inline]
    pub fn or_default(self) -> &'a mut V {
        match self {
            Self::Occupied(e) => e.into_mut(),
            Self::Vacant(e) => e.insert(V::default()),
        }
    }
}

impl<'a, K, V, E> VacantEntry<'a, K, V, E> {
    /// Returns a reference to the key that would be inserted.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes back ownership of the key without inserting anything.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Appends the entry to the map with the given value.
    ///
    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        let index = self.map.entries.append(MapEntry::new(self.key, value));
        self.map.entries.as_mut_slice()[index].value_mut()
    }
}

/// A consuming iterator over a `LinkedMap`, in insertion order.
///
/// Acquire through [`IntoIterator`](struct.LinkedMap.html#method.into_iter).
#[allow(missing_debug_implementations)]
pub struct IntoIter<K, V> {
    iter: vec::IntoIter<MapEntry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.iter.next().map(MapEntry::into_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<(K, V)> {
        self.iter.next_back().map(MapEntry::into_pair)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// A draining iterator over a `LinkedMap`.
///
/// See [`LinkedMap::drain`] for details.
#[allow(missing_debug_implementations)]
pub struct Drain<'a, K, V> {
    iter: vec::Drain<'a, MapEntry<K, V>>,
}

/// An iterator yielding references to a `LinkedMap`'s keys and their corresponding values.
///
/// See [`LinkedMap::iter`] for details.
#[allow(missing_debug_implementations)]
pub struct Iter<'a, K, V> {
    iter: slice::Iter<'a, MapEntry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub(crate) fn new(iter: slice::Iter<'a, MapEntry<K, V>>) -> Self {
        Self { iter }
    }
}

/// An iterator yielding references to a `LinkedMap`'s keys and mutable references to their
/// corresponding values.
///
/// See [`LinkedMap::iter_mut`] for details.
#[allow(missing_debug_implementations)]
pub struct IterMut<'a, K, V> {
    iter: slice::IterMut<'a, MapEntry<K, V>>,
}

/// An iterator yielding references to a `LinkedMap`'s keys.
///
/// See [`LinkedMap::keys`] for details.
#[allow(missing_debug_implementations)]
pub struct Keys<'a, K, V> {
    iter: Iter<'a, K, V>,
}

/// An iterator yielding references to a `LinkedMap`'s values.
///
/// See [`LinkedMap::values`] for details.
#[allow(missing_debug_implementations)]
pub struct Values<'a, K, V> {
    iter: Iter<'a, K, V>,
}

/// An iterator yielding mutable references to a `LinkedMap`'s values.
///
/// See [`LinkedMap::values_mut`] for details.
#[allow(missing_debug_implementations)]
pub struct ValuesMut<'a, K, V> {
    iter: slice::IterMut<'a, MapEntry<K, V>>,
}

macro_rules! impl_iter {
    ($typ:ty, $item:ty, $map:expr) => {
        impl<'a, K, V> Iterator for $typ {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next().map($map)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl<'a, K, V> DoubleEndedIterator for $typ {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back().map($map)
            }
        }

        impl<'a, K, V> ExactSizeIterator for $typ {
            #[inline]
            fn len(&self) -> usize {
                self.iter.len()
            }
        }
    };
}
impl_iter! {Drain<'a,K,V>,  (K,V),  MapEntry::into_pair }
impl_iter! {Iter<'a,K,V>,  (&'a K, &'a V),  MapEntry::pair }
impl_iter! {IterMut<'a,K,V>,  (&'a K, &'a mut V),  MapEntry::pair_mut }
impl_iter! {Keys<'a,K,V>,  &'a K,  |(k, _)| k }
impl_iter! {Values<'a,K,V>,  &'a V,  |(_, v)| v }
impl_iter! {ValuesMut<'a,K,V>,  &'a mut V,  MapEntry::value_mut }

impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Keys {
            iter: self.iter.clone(),
        }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Values {
            iter: self.iter.clone(),
        }
    }
}

impl<K, V, E> IntoIterator for LinkedMap<K, V, E> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            iter: self.entries.into_vec().into_iter(),
        }
    }
}

impl<'a, K, V, E> IntoIterator for &'a LinkedMap<K, V, E> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, E> IntoIterator for &'a mut LinkedMap<K, V, E> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a, K, V>(x: LinkedMap<&'static K, &'static V>) -> LinkedMap<&'a K, &'a V> {
        x
    }

    fn b<'a, K, V>(x: IntoIter<&'static K, &'static V>) -> IntoIter<&'a K, &'a V> {
        x
    }

    fn c<'i, 'a, K, V>(x: Iter<'i, &'static K, &'static V>) -> Iter<'i, &'a K, &'a V> {
        x
    }

    fn d<'i, 'a, K, V>(x: Keys<'i, &'static K, &'static V>) -> Keys<'i, &'a K, &'a V> {
        x
    }

    fn e<'i, 'a, K, V>(x: Values<'i, &'static K, &'static V>) -> Values<'i, &'a K, &'a V> {
        x
    }
}
