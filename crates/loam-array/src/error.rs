//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Checked access ([`GrowableArray::at`](crate::GrowableArray::at) and
/// [`at_mut`](crate::GrowableArray::at_mut)) is the only fallible
/// operation; everything else either cannot fail or treats a bad
/// argument as a caller bug and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access asked for an index at or past the live length.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The array's live length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
        }
    }
}

impl Error for ArrayError {}
