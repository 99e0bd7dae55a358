use thiserror::Error;

/// Errors reported by list and cursor operations.
///
/// Every failing operation reports its error before mutating the list, so
/// an `Err` always leaves the list exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index-based access (`get`, `remove_at`) was given an index at or
    /// past the end of the list.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cursor was advanced with no elements remaining.
    #[error("no more elements in the list")]
    Exhausted,

    /// A cursor removal was requested before any element had been returned,
    /// or twice in a row without an advance in between.
    #[error("the cursor must be advanced before removing")]
    InvalidCursorState,

    /// The list was structurally modified behind a live cursor's back.
    #[error("list was modified during iteration")]
    ConcurrentModification,
}
