//! Java's `java.util.Random` linear congruential generator.
//!
//! Matches vanilla's `LegacyRandomSource`. Only used for seeding noise
//! generators; the per-cell layer random lives in [`super::lcg`].

use super::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// A 48-bit LCG producing the same stream as `java.util.Random`.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a new generator, scrambling the seed the way Java does.
    #[must_use]
    pub const fn from_seed(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }
}

impl Random for LegacyRandom {
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}
