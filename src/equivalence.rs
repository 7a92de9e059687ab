use std::borrow::Borrow;

/// The key-equality relation a [`LinkedMap`] uses to decide whether two keys refer to the same entry.
///
/// `Q` is the type of key being looked up and `K` the type of key stored in the map. A map can be
/// queried with any `Q` for which its relation is implemented, in the same way that the standard
/// maps can be queried with any borrowed form of their key.
///
/// Implementations must behave like an equivalence relation (reflexive, symmetric and transitive)
/// over the keys stored in a map. Breaking this is a logic error: the map will not misbehave in a
/// memory-unsafe way, but lookups may miss entries or duplicate keys may be stored.
///
/// [`LinkedMap`]: crate::LinkedMap
pub trait KeyEquivalence<Q: ?Sized, K: ?Sized> {
    /// Returns `true` if `query` and `key` refer to the same logical entry.
    fn equivalent(&self, query: &Q, key: &K) -> bool;
}

/// The default key-equality relation: keys are compared with their [`Eq`] implementation.
///
/// Through [`Borrow`], a map keyed by `String` can be looked up by `&str`, a map keyed by `Box<T>`
/// by `&T`, and so on.
///
/// Absent ("null") keys are modelled with `Option<T>` (or [`Nullable<T>`]), whose structural
/// equality already gives the required behavior: absent equals absent and never equals a present key.
///
/// [`Nullable<T>`]: crate::Nullable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StructuralEq;

impl<Q, K> KeyEquivalence<Q, K> for StructuralEq
where
    Q: ?Sized + Eq,
    K: Borrow<Q> + ?Sized,
{
    #[inline]
    fn equivalent(&self, query: &Q, key: &K) -> bool {
        query == key.borrow()
    }
}
