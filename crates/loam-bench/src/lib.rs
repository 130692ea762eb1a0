//! Benchmark workloads for the loam growable array.
//!
//! Provides pre-built arrays and deterministic index sequences shared
//! by the criterion benches:
//!
//! - [`sequential_array`]: an array of `0..len` built through `push_back`
//! - [`striding_indices`]: a deterministic walk over `[0, len)` that is
//!   not simply ascending, for positional-mutator benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_array::GrowableArray;

/// Build an array of `0..len` through `push_back`, exercising the
/// overflow growth path along the way.
pub fn sequential_array(len: usize) -> GrowableArray<u64> {
    let mut arr = GrowableArray::new();
    for v in 0..len as u64 {
        arr.push_back(v);
    }
    arr
}

/// A deterministic, non-ascending walk over `[0, len)`.
///
/// Steps by a fixed stride co-prime with typical bench lengths so the
/// positions scatter across the array without pulling in an RNG.
pub fn striding_indices(len: usize, count: usize) -> Vec<usize> {
    const STRIDE: usize = 7;
    (0..count).map(|i| (i * STRIDE) % len.max(1)).collect()
}
