//! The price-range facet.
//!
//! Two bounds over a fixed global interval, kept at least [`MIN_GAP`]
//! apart. Both the number inputs and the slider thumbs feed through the
//! same two setters, so the invariant `min + MIN_GAP <= max` holds no
//! matter which control moved or what a hand-edited URL claims.

/// Absolute lower price bound.
pub const PRICE_MIN: i64 = 500;

/// Absolute upper price bound.
pub const PRICE_MAX: i64 = 500_000;

/// Minimum distance kept between the two bounds.
pub const MIN_GAP: i64 = 100;

/// A selected price interval, always within the global bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: i64,
    max: i64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_MIN,
            max: PRICE_MAX,
        }
    }
}

impl PriceRange {
    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Move the lower bound. Pins at `max - MIN_GAP` rather than crossing,
    /// and never leaves the global interval.
    pub const fn set_min(&mut self, value: i64) {
        self.min = clamp(value, PRICE_MIN, self.max - MIN_GAP);
    }

    /// Move the upper bound. Pins at `min + MIN_GAP` rather than crossing,
    /// and never leaves the global interval.
    pub const fn set_max(&mut self, value: i64) {
        self.max = clamp(value, self.min + MIN_GAP, PRICE_MAX);
    }

    /// Restore both bounds to the absolute global interval.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the range still spans the full global interval.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

const fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
