//! Error types for indexed list operations.

use core::fmt;

/// Index outside the valid range of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Insertion rejected because the position was past the end of the list.
///
/// Hands the value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertError<T> {
    /// The value that could not be inserted.
    pub value: T,
    /// The rejected position.
    pub index: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the bounds violation without the value.
    pub fn bounds(&self) -> OutOfBounds {
        OutOfBounds {
            index: self.index,
            len: self.len,
        }
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insertion index {} out of bounds for length {}",
            self.index, self.len
        )
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {}
