//! Random sources for world generation.
//!
//! - [`lcg`] - the 64-bit linear congruential step used for layer seed mixing
//!   and per-cell random state
//! - [`legacy_random::LegacyRandom`] - Java's `java.util.Random`, used to seed
//!   noise permutation tables

pub mod lcg;
pub mod legacy_random;

/// `2^-53`, the spacing of doubles produced by [`Random::next_f64`].
const DOUBLE_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// A stateful random number generator.
pub trait Random {
    /// Returns the next `bits` random bits (`1..=32`) as the low bits of an `i32`.
    fn next(&mut self, bits: u32) -> i32;

    /// Returns a uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Returns an `i32` in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");

        if bound & bound.wrapping_neg() == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Returns an `f64` in `[0, 1)` with 53 bits of precision.
    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
