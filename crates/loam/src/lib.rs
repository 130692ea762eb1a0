//! Loam: a growable contiguous array over an explicit single-owner heap
//! buffer.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! // Build from a literal, or push one element at a time.
//! let mut arr = GrowableArray::from([1, 2]);
//! arr.push_back(3);
//! assert_eq!(arr, [1, 2, 3]);
//!
//! // Positional insert and remove always relocate into a fresh buffer.
//! arr.insert(1, 9);
//! assert_eq!(arr, [1, 9, 2, 3]);
//! assert_eq!(arr.remove(1), 9);
//!
//! // Checked access is the only fallible operation.
//! assert_eq!(arr.at(0), Ok(&1));
//! assert_eq!(
//!     arr.at(7),
//!     Err(ArrayError::IndexOutOfRange { index: 7, len: 3 })
//! );
//!
//! // Reservation-only construction goes through a hint, so it cannot
//! // be mistaken for the length-based constructor.
//! let reserved: GrowableArray<u32> = GrowableArray::with_reserve(reserve(16));
//! assert_eq!((reserved.len(), reserved.capacity()), (0, 16));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `loam-array` | [`GrowableArray`], [`ReserveHint`], [`ArrayError`] |
//! | [`buffer`] | `loam-buffer` | [`Buffer`]: the move-only owned heap block |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use loam_array::{reserve, ArrayError, GrowableArray, ReserveHint};
pub use loam_buffer::Buffer;

/// The `loam-array` sub-crate: the container and its supporting types.
pub mod array {
    pub use loam_array::*;
}

/// The `loam-buffer` sub-crate: the owned-block primitive.
pub mod buffer {
    pub use loam_buffer::*;
}

/// Glob-import surface: `use loam::prelude::*;`.
pub mod prelude {
    pub use crate::{reserve, ArrayError, Buffer, GrowableArray, ReserveHint};
}
