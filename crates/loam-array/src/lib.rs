//! A growable contiguous array over an explicit single-owner heap buffer.
//!
//! [`GrowableArray`] implements dynamic-array semantics — indexed and
//! checked access, append/remove at the end, arbitrary-position insert
//! and remove, capacity reservation, fill-resizing, lexicographic
//! comparison — with every capacity change expressed as: build a fresh
//! [`loam_buffer::Buffer`], relocate the live elements, swap it in
//! whole. Storage is never grown in place.
//!
//! Two behavioral commitments distinguish this container from the
//! standard `Vec`:
//!
//! - **Spare slots hold values.** Allocations are fully
//!   default-constructed, and logical shrinks (`pop_back`, `clear`,
//!   shrinking `resize`) leave the tail values in place. See the
//!   [`GrowableArray`] type docs for the retention contract.
//! - **Growth is sized from the new length.** Overflow allocates
//!   `2 × new_len` slots, and positional insert/remove always relocate,
//!   even with spare capacity. The capacity sequence is part of the
//!   observable behavior and is covered by tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
mod cmp;
pub mod error;
pub mod hint;

pub use array::GrowableArray;
pub use error::ArrayError;
pub use hint::{reserve, ReserveHint};
