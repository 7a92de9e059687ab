use core::fmt;

/// An optional key or value whose string form renders the absent case as `null`.
///
/// `Option<T>` has no [`Display`](fmt::Display) implementation, so maps that need to store
/// absent keys or values and still print themselves can use `Nullable<T>` instead.
/// Equality, ordering and hashing are those of the wrapped `Option<T>`: `null` equals `null`
/// and never equals a present value.
///
/// Storing a `Nullable::NULL` value is distinct from a key being absent from a map:
/// [`LinkedMap::insert`](crate::LinkedMap::insert) over a stored null returns
/// `Some(Nullable(None))`, while inserting a new key returns `None`.
///
/// ```
/// use linkmap::{LinkedMap, Nullable};
///
/// let mut map = LinkedMap::new();
/// map.insert(Nullable::from("a"), Nullable::NULL);
/// map.insert(Nullable::NULL, Nullable::from(1));
///
/// assert_eq!(map.to_string(), "{a=null, null=1}");
/// assert_eq!(map.insert(Nullable::from("a"), Nullable::from(2)), Some(Nullable::NULL));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullable<T>(pub Option<T>);

impl<T> Nullable<T> {
    /// The absent value.
    pub const NULL: Self = Self(None);

    /// Returns true if this is the absent value.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the wrapped value, if present.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwraps into the underlying `Option`.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<T> for Nullable<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(nullable: Nullable<T>) -> Self {
        nullable.0
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}
