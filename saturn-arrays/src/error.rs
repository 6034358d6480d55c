use thiserror::Error;

use crate::dynamic::ElementType;

/// Broad failure categories shared by every operation in the crate.
///
/// Callers that only care about *what kind* of mistake was made match on this
/// instead of on the individual [`ArrayError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input that is a caller bug.
    InvalidArgument,
    /// An index or offset outside the interval a strict operation accepts.
    IndexOutOfRange,
    /// An operation that needs two arrays was handed something else.
    TypeError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Both the array and the element are absent")]
    BothAbsent,

    /// `type_error` is set when the caller asked for an array-to-array
    /// comparison, where absence is a type error rather than a bad argument.
    #[error("The array must not be absent")]
    AbsentArray { type_error: bool },

    #[error("End index {end} is before start index {start}")]
    InvertedRange { start: isize, end: isize },

    #[error("Index: {index}, Length: {length}")]
    IndexOutOfRange { index: isize, length: usize },

    #[error("A comparator is required")]
    MissingComparator,

    #[error("Arrays of {0} have no default comparator")]
    NoDefaultComparator(ElementType),

    #[error("Cannot store {stored} in an array of {array}")]
    IncompatibleTypes {
        stored: ElementType,
        array: ElementType,
    },

    #[error("Expected an array, found {found}")]
    NotAnArray { found: String, type_error: bool },

    #[error("Array element {index}, '{value}', has a length less than 2")]
    EntryTooShort { index: usize, value: String },

    #[error("Array element {index}, '{value}', is neither a key/value pair nor an array")]
    NotAnEntry { index: usize, value: String },
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ArrayError::AbsentArray { type_error: true }
            | ArrayError::NotAnArray {
                type_error: true, ..
            } => ErrorKind::TypeError,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn index_out_of_range(index: isize, length: usize) -> Self {
        tracing::debug!(index, length, "index outside the valid interval");
        ArrayError::IndexOutOfRange { index, length }
    }
}

/// Convenience alias used throughout the crate so functions can simply return
/// `Result<T>` instead of writing out the full type every time.
pub type Result<T> = core::result::Result<T, ArrayError>;
