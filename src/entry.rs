use core::fmt;
use core::mem;

/// A single key-value pair held by a [`LinkedMap`].
///
/// The key is fixed when the entry is created and there is no way to change it afterwards,
/// while the value may be read, mutated in place, or replaced.
///
/// [`LinkedMap`]: crate::LinkedMap
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry from a key and its value.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the entry's key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the entry's value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the entry's value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the entry's value, returning the one previously stored.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Borrows the key and value together.
    #[inline]
    pub fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Borrows the key immutably and the value mutably.
    #[inline]
    pub fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Consumes the entry, returning its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_pair()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry [key={}, value={}]", self.key, self.value)
    }
}
