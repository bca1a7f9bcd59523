use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the live part of the array
    #[error("Index out of bounds: index {index} is beyond array length {len}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        len: usize,
    },
    /// Cursor navigation or dereference left the valid position range
    #[error("Cursor out of range: position {position}, array length {len}")]
    CursorOutOfRange {
        /// Cursor position at the point of failure
        position: usize,
        /// Current length of the array
        len: usize,
    },
    /// Removal from an array that holds no elements
    #[error("Cannot remove from an empty array")]
    Empty,
    /// Erase bounds do not describe a subrange of the array
    #[error("Invalid range: {first}..{last} does not fit array length {len}")]
    InvalidRange {
        /// Start of the half-open range
        first: usize,
        /// End of the half-open range (exclusive)
        last: usize,
        /// Current length of the array
        len: usize,
    },
}
