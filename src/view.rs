//! Live set-like views over the entries of a [`LinkedMap`].
//!
//! A view owns nothing. It borrows the map's entry sequence, so its size and contents are always
//! those of the map at the moment they are read.
//!
//! [`LinkedMap`]: crate::LinkedMap

use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use std::slice;

use crate::Entry;
use crate::EntrySource;
use crate::derived;
use crate::linked_map::Iter;
use crate::sequence::Cursor;
use crate::sequence::CursorSource;
use crate::sequence::EntrySequence;
use crate::sequence::sealed::Sealed;

/// A shared, read-only view of a map's entries, in insertion order.
///
/// Acquire through [`LinkedMap::entry_set`](crate::LinkedMap::entry_set).
///
/// Two views are equal when they hold the same key-value pairs, whatever their order.
pub struct EntryView<'a, K, V> {
    sequence: &'a EntrySequence<K, V>,
}

impl<'a, K, V> EntryView<'a, K, V> {
    #[inline]
    pub(crate) fn new(sequence: &'a EntrySequence<K, V>) -> Self {
        Self { sequence }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns an iterator over the entries, in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, Entry<K, V>> {
        self.sequence.iter()
    }

    /// Returns true if the view holds an entry with this key and value.
    pub fn contains(&self, key: &K, value: &V) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.sequence
            .iter()
            .any(|entry| entry.key() == key && entry.value() == value)
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first entry.
    #[inline]
    pub fn cursor(&self) -> Cursor<K, V> {
        self.sequence.cursor()
    }
}

impl<K, V> Clone for EntryView<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntryView<'_, K, V> {}

impl<K, V> EntrySource for EntryView<'_, K, V> {
    type Key = K;
    type Value = V;
    type Pairs<'b>
        = Iter<'b, K, V>
    where
        Self: 'b;

    #[inline]
    fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        Iter::new(self.sequence.iter())
    }
}

impl<'a, K, V> IntoIterator for EntryView<'a, K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = slice::Iter<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.sequence.iter()
    }
}

impl<'a, K, V> IntoIterator for &EntryView<'a, K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = slice::Iter<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.sequence.iter()
    }
}

impl<K: Eq, V: PartialEq> PartialEq for EntryView<'_, K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        derived::entries_equal(self, other)
    }
}

impl<K: Eq, V: Eq> Eq for EntryView<'_, K, V> {}

impl<K: Hash, V: Hash> Hash for EntryView<'_, K, V> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        derived::hash_entries(self, state);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntryView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the view as `[Entry [key=k1, value=v1], Entry [key=k2, value=v2]]`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for EntryView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entry_list(self.sequence, f)
    }
}

/// An exclusive view of a map's entries, through which values can be changed and entries removed.
///
/// Acquire through [`LinkedMap::entry_set_mut`](crate::LinkedMap::entry_set_mut). Keys stay
/// immutable: [`Entry`] has no way to replace its key.
///
/// ```
/// use linkmap::LinkedMap;
///
/// let mut map = LinkedMap::from([("a", 1), ("b", 2), ("c", 3)]);
///
/// let mut entries = map.entry_set_mut();
/// for entry in entries.iter_mut() {
///     *entry.value_mut() *= 10;
/// }
///
/// let mut cursor = entries.cursor();
/// while let Some(entry) = cursor.next(&mut entries)? {
///     if *entry.key() == "b" {
///         cursor.remove(&mut entries)?;
///     }
/// }
/// assert_eq!(entries.len(), 2);
/// assert_eq!(map.to_string(), "{a=10, c=30}");
/// # Ok::<(), linkmap::CursorError>(())
/// ```
pub struct EntryViewMut<'a, K, V> {
    sequence: &'a mut EntrySequence<K, V>,
}

impl<'a, K, V> EntryViewMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(sequence: &'a mut EntrySequence<K, V>) -> Self {
        Self { sequence }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns an iterator over the entries, in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Entry<K, V>> {
        self.sequence.iter()
    }

    /// Returns an iterator over the entries in insertion order whose values can be modified.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Entry<K, V>> {
        self.sequence.iter_mut()
    }

    /// Removes every entry for which `keep_fn` returns `false`.
    #[inline]
    pub fn retain<F>(&mut self, keep_fn: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.sequence.retain(keep_fn);
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first entry.
    ///
    /// Pass this view to the cursor's methods to advance it and remove entries through it.
    #[inline]
    pub fn cursor(&self) -> Cursor<K, V> {
        self.sequence.cursor()
    }

    /// Reborrows this view as a shared [`EntryView`].
    #[inline]
    pub fn as_view(&self) -> EntryView<'_, K, V> {
        EntryView::new(&*self.sequence)
    }
}

impl<K, V> Sealed<K, V> for EntryViewMut<'_, K, V> {
    #[inline]
    fn sequence(&self) -> &EntrySequence<K, V> {
        &*self.sequence
    }

    #[inline]
    fn sequence_mut(&mut self) -> &mut EntrySequence<K, V> {
        &mut *self.sequence
    }
}

impl<K, V> CursorSource<K, V> for EntryViewMut<'_, K, V> {}

impl<K, V> EntrySource for EntryViewMut<'_, K, V> {
    type Key = K;
    type Value = V;
    type Pairs<'b>
        = Iter<'b, K, V>
    where
        Self: 'b;

    #[inline]
    fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        Iter::new(self.sequence.iter())
    }
}

impl<'a, K, V> IntoIterator for EntryViewMut<'a, K, V> {
    type Item = &'a mut Entry<K, V>;
    type IntoIter = slice::IterMut<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.sequence.iter_mut()
    }
}

/// Equal to another view holding the same key-value pairs, whatever their order.
impl<K: Eq, V: PartialEq> PartialEq for EntryViewMut<'_, K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        derived::entries_equal(self, other)
    }
}

impl<K: Eq, V: Eq> Eq for EntryViewMut<'_, K, V> {}

impl<K: Hash, V: Hash> Hash for EntryViewMut<'_, K, V> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        derived::hash_entries(self, state);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntryViewMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for EntryViewMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entry_list(&*self.sequence, f)
    }
}

fn fmt_entry_list<K, V>(sequence: &EntrySequence<K, V>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: fmt::Display,
    V: fmt::Display,
{
    f.write_str("[")?;
    for (i, entry) in sequence.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{entry}")?;
    }
    f.write_str("]")
}
