//! Inclusive integer ranges supplied from outside the pipeline.
//!
//! Ranges that come from configuration are never rejected: an empty range
//! (`min > max`) is logged and collapses to its lower bound, the same way
//! vanilla's height providers degrade malformed bounds.

use std::ops::RangeInclusive;

use serde::Deserialize;

/// An inclusive `min..=max` integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InclusiveRange {
    /// Lower bound (inclusive).
    pub min: i32,
    /// Upper bound (inclusive).
    pub max: i32,
}

impl InclusiveRange {
    /// Creates a range. No validation happens until the range is used.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether `min > max`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// The usable bounds. An empty range collapses to `min..=min`.
    #[must_use]
    pub fn resolve(&self) -> RangeInclusive<i32> {
        if self.is_empty() {
            log::warn!(
                "Empty range: {} precedes {}, using {} only",
                self.max,
                self.min,
                self.min
            );
            self.min..=self.min
        } else {
            self.min..=self.max
        }
    }

    /// Number of integers covered after resolution. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            1
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as usize
        }
    }
}

impl Default for InclusiveRange {
    fn default() -> Self {
        Self::new(-64, 63)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_range_is_kept() {
        let range = InclusiveRange::new(-2, 3);
        assert_eq!(range.resolve(), -2..=3);
        assert_eq!(range.len(), 6);
    }

    #[test]
    fn empty_range_collapses_to_lower_bound() {
        let range = InclusiveRange::new(10, 4);
        assert!(range.is_empty());
        assert_eq!(range.resolve(), 10..=10);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn single_point_range() {
        let range = InclusiveRange::new(5, 5);
        assert!(!range.is_empty());
        assert_eq!(range.resolve().count(), 1);
    }
}
