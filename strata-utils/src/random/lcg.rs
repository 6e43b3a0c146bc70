//! The 64-bit linear congruential step behind layer seeds and cell randoms.
//!
//! Matches vanilla's `LinearCongruentialGenerator`. Every layer derives its own
//! seed from `(world seed, salt)` with [`mix_seed`], and every cell query
//! re-derives its random state from that layer seed, so nothing but the two
//! inputs needs to be stored.

/// Multiplier of the Knuth MMIX LCG.
const MULTIPLIER: i64 = 6_364_136_223_846_793_005;
/// Increment of the Knuth MMIX LCG.
const INCREMENT: i64 = 1_442_695_040_888_963_407;

/// Number of times the salt is folded into itself before touching the world seed.
const SALT_ROUNDS: usize = 3;
/// Number of times the folded salt is mixed into the world seed.
const SEED_ROUNDS: usize = 2;

/// One step of the generator: `seed * (seed * M + I) + salt`, wrapping.
#[inline]
#[must_use]
pub const fn next(seed: i64, salt: i64) -> i64 {
    seed.wrapping_mul(seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT))
        .wrapping_add(salt)
}

/// Derives a layer seed from a world seed and a layer salt.
///
/// Distinct salts give layer seeds with no simple arithmetic relation to each
/// other, so independently salted layers never walk correlated random streams.
#[must_use]
pub const fn mix_seed(world_seed: i64, salt: i64) -> i64 {
    let mut mixed_salt = salt;
    let mut i = 0;
    while i < SALT_ROUNDS {
        mixed_salt = next(mixed_salt, salt);
        i += 1;
    }

    let mut layer_seed = world_seed;
    let mut i = 0;
    while i < SEED_ROUNDS {
        layer_seed = next(layer_seed, mixed_salt);
        i += 1;
    }
    layer_seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_plain_wrapping_arithmetic() {
        assert_eq!(next(0, 7), 7);
        assert_eq!(next(1, 0), MULTIPLIER.wrapping_add(INCREMENT));
    }

    #[test]
    fn mix_is_reproducible() {
        assert_eq!(mix_seed(12345, 1), mix_seed(12345, 1));
        assert_eq!(mix_seed(-1, 2001), mix_seed(-1, 2001));
    }

    #[test]
    fn mix_matches_unrolled_steps() {
        let (world, salt) = (8_675_309, 2001);
        let mixed_salt = next(next(next(salt, salt), salt), salt);
        assert_eq!(mix_seed(world, salt), next(next(world, mixed_salt), mixed_salt));
    }

    #[test]
    fn distinct_salts_give_distinct_layer_seeds() {
        let seeds: Vec<i64> = (0..64).map(|salt| mix_seed(12345, salt)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn distinct_world_seeds_give_distinct_layer_seeds() {
        assert_ne!(mix_seed(1, 1000), mix_seed(2, 1000));
    }
}
