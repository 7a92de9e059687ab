//! The insertion-ordered storage underneath [`LinkedMap`], and the fail-fast [`Cursor`] over it.
//!
//! [`LinkedMap`]: crate::LinkedMap

use core::marker::PhantomData;
use std::mem;
use std::slice;
use std::vec;

use log::trace;

use crate::Entry;
use crate::KeyEquivalence;
use crate::error::CursorError;
use self::sealed::Sealed;

/// An insertion-ordered sequence of [`Entry`] values, searched linearly.
///
/// The sequence itself never checks keys for uniqueness: callers look a key up with
/// [`find_by_key`] before deciding whether to [`append`].
///
/// Every structural change (an entry appended or removed, or the sequence cleared) advances the
/// sequence's [`generation`]. Replacing the value of an existing entry does not. [`Cursor`]s
/// compare the generation they last observed against the current one to detect modifications
/// they did not perform themselves.
///
/// [`find_by_key`]: EntrySequence::find_by_key
/// [`append`]: EntrySequence::append
/// [`generation`]: EntrySequence::generation
#[derive(Clone, Debug)]
pub struct EntrySequence<K, V> {
    entries: Vec<Entry<K, V>>,
    generation: u64,
}

impl<K, V> EntrySequence<K, V> {
    /// Creates an empty sequence. This method does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generation: 0,
        }
    }

    /// Returns the number of entries in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the sequence holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the structural modification counter of the sequence.
    ///
    /// Two observations of the same sequence returning the same generation guarantee that no
    /// entry was added or removed in between.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn advance_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Appends an entry at the end of the sequence and returns its index.
    ///
    /// No uniqueness check is performed.
    #[inline]
    pub fn append(&mut self, entry: Entry<K, V>) -> usize {
        self.entries.push(entry);
        self.advance_generation();
        self.entries.len() - 1
    }

    /// Returns the index of the first entry whose key is equivalent to `key`, scanning from the start.
    pub fn find_by_key<Q, E>(&self, key: &Q, equivalence: &E) -> Option<usize>
    where
        Q: ?Sized,
        E: KeyEquivalence<Q, K> + ?Sized,
    {
        self.entries
            .iter()
            .position(|entry| equivalence.equivalent(key, entry.key()))
    }

    /// Returns a reference to the entry at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Entry<K, V>> {
        self.entries.get(index)
    }

    /// Returns a mutable reference to the entry at `index`, if it exists.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry<K, V>> {
        self.entries.get_mut(index)
    }

    /// Removes and returns the entry at `index`, shifting every following entry down by one
    /// so that the order of the remaining entries is preserved.
    ///
    /// Returns `None` (and leaves the generation untouched) if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<Entry<K, V>> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.take_at(index))
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub(crate) fn take_at(&mut self, index: usize) -> Entry<K, V> {
        let removed = self.entries.remove(index);
        self.advance_generation();
        removed
    }

    /// Values may be changed through the slice, keys may not, and the length is fixed.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Entry<K, V>] {
        &mut self.entries
    }

    /// Discards every entry, replacing the storage with a fresh, unallocated one.
    ///
    /// The generation keeps counting from the discarded storage, so cursors created before the
    /// clear detect it.
    pub fn clear(&mut self) {
        let discarded = mem::take(&mut self.entries);
        self.advance_generation();
        trace!(
            "cleared entry sequence, discarding {} entries (generation {})",
            discarded.len(),
            self.generation
        );
    }

    /// Keeps only the entries for which `keep_fn` returns `true`, preserving their order.
    ///
    /// The generation advances if any entry was removed. If `keep_fn` panics, it has advanced already.
    pub fn retain<F>(&mut self, mut keep_fn: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let before = self.entries.len();
        if before == 0 {
            return;
        }
        // advanced up front: entries removed before a panicking `keep_fn` stay removed.
        self.advance_generation();
        self.entries.retain_mut(|entry| {
            let (key, value) = entry.pair_mut();
            keep_fn(key, value)
        });
        if self.entries.len() == before {
            self.generation = self.generation.wrapping_sub(1);
        }
    }

    /// Removes every entry and returns them in order through an iterator.
    ///
    /// All entries are removed even if the iterator is not exhausted.
    pub fn drain(&mut self) -> vec::Drain<'_, Entry<K, V>> {
        self.advance_generation();
        self.entries.drain(..)
    }

    /// Returns an iterator over the entries in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries in order, allowing their values to be modified.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Entry<K, V>> {
        self.entries.iter_mut()
    }

    /// Views the sequence as a slice of entries.
    #[inline]
    pub fn as_slice(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Creates a [`Cursor`] positioned before the first entry.
    #[inline]
    pub fn cursor(&self) -> Cursor<K, V> {
        Cursor::new(self)
    }

    /// Consumes the sequence, returning its entries in order.
    #[inline]
    pub fn into_vec(self) -> Vec<Entry<K, V>> {
        self.entries
    }
}

impl<K, V> Default for EntrySequence<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) mod sealed {
    use super::EntrySequence;

    /// Crate-internal access to the sequence behind a [`CursorSource`](super::CursorSource).
    pub trait Sealed<K, V> {
        fn sequence(&self) -> &EntrySequence<K, V>;

        fn sequence_mut(&mut self) -> &mut EntrySequence<K, V>;
    }
}

/// Something a [`Cursor`] can walk: an [`EntrySequence`], a [`LinkedMap`], or an
/// [`EntryViewMut`].
///
/// The trait is sealed. It lets cursors reach the underlying sequence without handing out mutable
/// access to it: appending through that access would store duplicate keys in a map.
///
/// ```compile_fail
/// use linkmap::{Entry, EntrySequence, LinkedMap};
///
/// let mut map = LinkedMap::from([("a", 1)]);
/// let sequence: &mut EntrySequence<_, _> = map.as_mut();
/// sequence.append(Entry::new("a", 2));
/// ```
///
/// ```compile_fail
/// use linkmap::{CursorSource, Entry, LinkedMap};
///
/// let mut map = LinkedMap::from([("a", 1)]);
/// map.entry_set_mut().sequence_mut().append(Entry::new("a", 2));
/// ```
///
/// [`LinkedMap`]: crate::LinkedMap
/// [`EntryViewMut`]: crate::EntryViewMut
pub trait CursorSource<K, V>: sealed::Sealed<K, V> {}

impl<K, V> sealed::Sealed<K, V> for EntrySequence<K, V> {
    #[inline]
    fn sequence(&self) -> &EntrySequence<K, V> {
        self
    }

    #[inline]
    fn sequence_mut(&mut self) -> &mut EntrySequence<K, V> {
        self
    }
}

impl<K, V> CursorSource<K, V> for EntrySequence<K, V> {}

impl<K, V> IntoIterator for EntrySequence<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = vec::IntoIter<Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a EntrySequence<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = slice::Iter<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fail-fast position within an [`EntrySequence`] that can remove the entry it is on.
///
/// Unlike the borrowing iterators, a cursor holds no borrow of the sequence: each operation takes
/// a [`CursorSource`] (the sequence, the map owning it, or the map's mutable entry view) as an
/// argument. This allows the owner to be used between steps, and the cursor reports any structural
/// change it did not make itself with [`CursorError::ConcurrentStructuralChange`] instead of
/// yielding stale entries. Changing the value of an existing entry is not a structural change.
///
/// Using a cursor with a sequence other than the one it was created from is a logic error.
///
/// # Example
///
/// ```
/// use linkmap::LinkedMap;
///
/// let mut map = LinkedMap::from([("a", 1), ("b", 2), ("c", 3)]);
///
/// let mut cursor = map.cursor();
/// while let Some(entry) = cursor.next(&mut map)? {
///     if *entry.value() == 2 {
///         cursor.remove(&mut map)?;
///     }
/// }
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "c"]);
///
/// // A cursor notices modifications made behind its back.
/// let mut cursor = map.cursor();
/// cursor.next(&mut map)?;
/// map.insert("d", 4);
/// assert!(cursor.next(&mut map).is_err());
/// # Ok::<(), linkmap::CursorError>(())
/// ```
pub struct Cursor<K, V> {
    expected: u64,
    next: usize,
    current: Option<usize>,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Cursor<K, V> {
    fn new(sequence: &EntrySequence<K, V>) -> Self {
        Self {
            expected: sequence.generation(),
            next: 0,
            current: None,
            _marker: PhantomData,
        }
    }

    fn check(&self, sequence: &EntrySequence<K, V>) -> Result<(), CursorError> {
        let found = sequence.generation();
        if found != self.expected {
            trace!(
                "cursor invalidated: expected generation {}, found {found}",
                self.expected
            );
            return Err(CursorError::ConcurrentStructuralChange {
                expected: self.expected,
                found,
            });
        }
        Ok(())
    }

    /// Returns the number of entries the cursor has moved past.
    #[inline]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Returns whether a call to [`next`](Cursor::next) would yield an entry.
    pub fn has_next<S>(&self, source: &S) -> Result<bool, CursorError>
    where
        S: CursorSource<K, V> + ?Sized,
    {
        let sequence = source.sequence();
        self.check(sequence)?;
        Ok(self.next < sequence.len())
    }

    /// Advances the cursor and returns the entry it moved onto, or `None` past the end.
    ///
    /// The returned entry is live: changing its value changes the value stored in the sequence.
    pub fn next<'s, S>(&mut self, source: &'s mut S) -> Result<Option<&'s mut Entry<K, V>>, CursorError>
    where
        S: CursorSource<K, V> + ?Sized,
    {
        let sequence = source.sequence_mut();
        self.check(sequence)?;
        let index = self.next;
        match sequence.get_mut(index) {
            Some(entry) => {
                self.current = Some(index);
                self.next += 1;
                Ok(Some(entry))
            }
            None => {
                self.current = None;
                Ok(None)
            }
        }
    }

    /// Removes the entry most recently returned by [`next`](Cursor::next) and returns it.
    ///
    /// The cursor stays valid and the following call to `next` yields the entry that came after the removed one.
    pub fn remove<S>(&mut self, source: &mut S) -> Result<Entry<K, V>, CursorError>
    where
        S: CursorSource<K, V> + ?Sized,
    {
        let sequence = source.sequence_mut();
        self.check(sequence)?;
        let index = self.current.take().ok_or(CursorError::NoCurrentEntry)?;
        let removed = sequence
            .remove_at(index)
            .ok_or(CursorError::NoCurrentEntry)?;
        self.next = index;
        self.expected = sequence.generation();
        trace!("cursor removed entry at index {index}");
        Ok(removed)
    }
}

impl<K, V> Clone for Cursor<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            expected: self.expected,
            next: self.next,
            current: self.current,
            _marker: PhantomData,
        }
    }
}

impl<K, V> core::fmt::Debug for Cursor<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("expected", &self.expected)
            .field("next", &self.next)
            .field("current", &self.current)
            .finish()
    }
}
