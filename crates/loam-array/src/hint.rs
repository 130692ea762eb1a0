//! Capacity reservation hints.
//!
//! A [`ReserveHint`] carries a requested capacity into
//! [`GrowableArray::with_reserve`](crate::GrowableArray::with_reserve),
//! keeping the reservation-only constructor unmistakable next to the
//! length-based one. The free [`reserve`] helper is the usual way to
//! make one inline.

/// A requested capacity for a reservation-only constructor.
///
/// Immutable once made; consumed by
/// [`GrowableArray::with_reserve`](crate::GrowableArray::with_reserve).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ReserveHint {
    requested: usize,
}

impl ReserveHint {
    /// Create a hint requesting `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            requested: capacity,
        }
    }

    /// The requested capacity in slots.
    pub fn requested_capacity(&self) -> usize {
        self.requested
    }
}

/// Make a [`ReserveHint`] requesting `capacity` slots.
///
/// ```
/// use loam_array::{reserve, GrowableArray};
///
/// let arr: GrowableArray<u32> = GrowableArray::with_reserve(reserve(16));
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.capacity(), 16);
/// ```
pub fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_round_trip() {
        let hint = reserve(12);
        assert_eq!(hint.requested_capacity(), 12);
        assert_eq!(hint, ReserveHint::new(12));
    }
}
