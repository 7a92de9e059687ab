use thiserror::Error;

/// Errors reported by a [`Cursor`] over an entry sequence.
///
/// [`Cursor`]: crate::sequence::Cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The sequence was structurally modified (an entry was added or removed, or the sequence was
    /// cleared) by something other than the cursor itself since the cursor last observed it.
    ///
    /// The cursor cannot continue; start a new one.
    #[error(
        "entry sequence was structurally modified during iteration (expected generation {expected}, found {found})"
    )]
    ConcurrentStructuralChange {
        /// The generation the cursor last observed.
        expected: u64,
        /// The sequence's generation at the time of the failed operation.
        found: u64,
    },

    /// [`Cursor::remove`] was called without a preceding successful call to [`Cursor::next`],
    /// or the current entry was already removed.
    ///
    /// [`Cursor::remove`]: crate::sequence::Cursor::remove
    /// [`Cursor::next`]: crate::sequence::Cursor::next
    #[error("cursor has no current entry to remove")]
    NoCurrentEntry,
}

impl CursorError {
    /// Returns `true` if this is a [`CursorError::ConcurrentStructuralChange`].
    #[inline]
    pub fn is_concurrent_structural_change(&self) -> bool {
        matches!(self, Self::ConcurrentStructuralChange { .. })
    }
}
