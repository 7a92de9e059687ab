//! # 🔗 `linkmap`
//!
//! An insertion-ordered map backed by a plain sequence of entries.
//!
//! [`LinkedMap`] remembers the order in which each distinct key was first inserted and always iterates in that order.
//! It keeps no hash table or search tree: every lookup scans the entries linearly. This makes it a good fit when
//! you want predictable iteration order, have only a modest number of keys, or have keys that can be compared for
//! equality but not hashed or ordered. Its random access operations have O(len) complexity rather than O(1) as with
//! hash-based maps.
//!
//! # Overview
//!
//! - [`LinkedMap`] is the map itself. Replacing the value of an existing key leaves it in place; removing a key and
//!   inserting it again moves it to the end.
//! - [`EntryView`] and [`EntryViewMut`], from [`LinkedMap::entry_set`] and [`LinkedMap::entry_set_mut`], are live
//!   set-like views of the map's [`Entry`]s. They own nothing and always reflect the map's current contents.
//! - [`Cursor`], from [`LinkedMap::cursor`], walks the entries without borrowing the map and can remove the entry it is on.
//!   It is fail-fast: if the map is structurally modified behind its back, its next operation returns
//!   [`CursorError::ConcurrentStructuralChange`] instead of continuing over stale state.
//! - The [`derived`] module implements lookup, equality, hashing and formatting generically for anything that can list its
//!   key-value pairs ([`EntrySource`]), including the standard library's maps.
//!
//! # Key equivalence
//!
//! By default keys are compared with [`Eq`] ([`StructuralEq`]). A different relation, for example case-insensitive
//! comparison of header names, can be installed with [`LinkedMap::with_equivalence`] by implementing [`KeyEquivalence`].
//!
//! # Absent keys and values
//!
//! Lookups return `None` for keys that are not present. To store "null" keys or values explicitly use `Option<T>`, or
//! [`Nullable<T>`] when the map should also be printable; a stored null is then distinguishable from a missing key.
//!
//! # Example
//!
//! ```
//! use linkmap::LinkedMap;
//!
//! let mut map = LinkedMap::new();
//! map.insert("key1", 1);
//! map.insert("key2", 2);
//! map.insert("key3", 3);
//!
//! assert_eq!(map.insert("key2", 20), Some(2));
//! assert_eq!(map.remove("key1"), Some(1));
//! map.insert("key1", 10);
//!
//! assert_eq!(map.to_string(), "{key2=20, key3=3, key1=10}");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

use core::hash::Hash;

/// Provides the insertion-ordered, linearly searched [`LinkedMap`].
pub mod linked_map;
#[doc(inline)]
pub use linked_map::LinkedMap;

/// Provides [`Entry`], the key-value pair stored by a [`LinkedMap`].
pub mod entry;
#[doc(inline)]
pub use entry::Entry;

/// Provides [`KeyEquivalence`], the configurable key-equality relation of a [`LinkedMap`].
pub mod equivalence;
#[doc(inline)]
pub use equivalence::KeyEquivalence;
#[doc(inline)]
pub use equivalence::StructuralEq;

pub mod sequence;
#[doc(inline)]
pub use sequence::Cursor;
#[doc(inline)]
pub use sequence::CursorSource;
#[doc(inline)]
pub use sequence::EntrySequence;

pub mod view;
#[doc(inline)]
pub use view::EntryView;
#[doc(inline)]
pub use view::EntryViewMut;

/// Errors reported while iterating with a [`Cursor`].
pub mod error;
#[doc(inline)]
pub use error::CursorError;

pub mod derived;
#[doc(inline)]
pub use derived::EntrySource;

/// Provides [`Nullable`], an optional key or value that prints as `null` when absent.
pub mod nullable;
#[doc(inline)]
pub use nullable::Nullable;


const STATIC_RANDOM_SEED: u64 = 0x86c11a44c63f4f2f;

/// Hashes a single value with a fixed seed, so that the result does not depend on the process or on
/// the hasher of any particular container.
#[inline(always)]
pub fn hash_one_fixed<H: Hash>(one: H) -> u64 {
    use core::hash::Hasher;
    let mut hasher = foldhash::fast::FoldHasher::with_seed(
        STATIC_RANDOM_SEED,
        foldhash::SharedSeed::global_fixed(),
    );
    one.hash(&mut hasher);
    hasher.finish()
}
