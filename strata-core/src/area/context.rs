//! Per-layer context: layer seed, cell random and the shared zone cache.

use strata_utils::noise::ImprovedNoise;
use strata_utils::random::lcg;
use strata_utils::random::legacy_random::LegacyRandom;

use super::cache::ZoneCache;

/// State one pipeline stage needs to evaluate its transform.
///
/// Matches vanilla's `LazyAreaContext`. The layer seed is derived once from
/// `(world seed, salt)`. The random state is overwritten by every
/// [`init_random`](Self::init_random) call and is never carried from one cell
/// to another, so any cell can be recomputed at any time with the same result.
///
/// The context owns the [`ZoneCache`] that every area created from it writes
/// into.
#[derive(Debug, Clone)]
pub struct LayerContext {
    seed: i64,
    rval: i64,
    max_cache: usize,
    biome_noise: ImprovedNoise,
    pub(super) cache: ZoneCache,
}

impl LayerContext {
    /// Creates a context for the layer identified by `salt`.
    ///
    /// `max_cache` is the ceiling given to areas that have no parent.
    ///
    /// # Panics
    ///
    /// Panics if `max_cache` is 0.
    #[must_use]
    pub fn new(max_cache: usize, world_seed: i64, salt: i64) -> Self {
        assert!(max_cache >= 1, "cache ceiling must be at least 1");
        Self {
            seed: lcg::mix_seed(world_seed, salt),
            rval: 0,
            max_cache,
            // Seeded from the world seed, not the layer seed.
            biome_noise: ImprovedNoise::new(&mut LegacyRandom::from_seed(world_seed)),
            cache: ZoneCache::new(),
        }
    }

    /// The layer seed derived from the world seed and salt.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Ceiling handed to leaf areas created from this context.
    #[must_use]
    pub const fn max_cache(&self) -> usize {
        self.max_cache
    }

    /// Number of entries currently held by this context's cache.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Perlin noise shared by noise-driven rules of this layer.
    #[must_use]
    pub const fn biome_noise(&self) -> &ImprovedNoise {
        &self.biome_noise
    }

    /// Resets the cell random for `(x, y)`.
    ///
    /// The state depends only on the layer seed and the coordinates.
    pub fn init_random(&mut self, x: i32, y: i32) {
        let (x, y) = (i64::from(x), i64::from(y));
        let mut r = self.seed;
        r = lcg::next(r, x);
        r = lcg::next(r, y);
        r = lcg::next(r, x);
        r = lcg::next(r, y);
        self.rval = r;
    }

    /// Draws an integer in `[0, bound)` and advances the cell random.
    ///
    /// Uses a plain floor-mod of the high bits; non-power-of-two bounds carry
    /// the same slight bias as vanilla.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn next_random(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");
        let result = (self.rval >> 24).rem_euclid(i64::from(bound)) as i32;
        self.rval = lcg::next(self.rval, self.seed);
        result
    }

    /// Picks one of two values with one draw.
    pub fn pick_of_2(&mut self, first: i32, second: i32) -> i32 {
        if self.next_random(2) == 0 {
            first
        } else {
            second
        }
    }

    /// Picks one of four values with one draw.
    pub fn pick_of_4(&mut self, first: i32, second: i32, third: i32, fourth: i32) -> i32 {
        match self.next_random(4) {
            0 => first,
            1 => second,
            2 => third,
            _ => fourth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(ctx: &mut LayerContext, x: i32, y: i32) -> [i32; 3] {
        ctx.init_random(x, y);
        [ctx.next_random(100), ctx.next_random(100), ctx.next_random(100)]
    }

    #[test]
    fn layer_seed_comes_from_world_seed_and_salt() {
        let ctx = LayerContext::new(16, 12345, 7);
        assert_eq!(ctx.seed(), lcg::mix_seed(12345, 7));
        assert_ne!(ctx.seed(), LayerContext::new(16, 12345, 8).seed());
    }

    #[test]
    fn init_random_reproduces_the_same_sequence() {
        let mut ctx = LayerContext::new(16, 12345, 1);
        let first = draws(&mut ctx, 10, 20);
        let second = draws(&mut ctx, 10, 20);
        assert_eq!(first, second);

        let mut fresh = LayerContext::new(16, 12345, 1);
        assert_eq!(draws(&mut fresh, 10, 20), first);
    }

    #[test]
    fn visiting_another_cell_does_not_leak_state() {
        let mut ctx = LayerContext::new(16, 12345, 1);
        let first = draws(&mut ctx, 10, 20);
        let _ = draws(&mut ctx, -3, 99);
        ctx.next_random(7);
        assert_eq!(draws(&mut ctx, 10, 20), first);
    }

    #[test]
    fn draws_stay_in_bounds() {
        let mut ctx = LayerContext::new(16, -42, 7);
        for x in -20..20 {
            ctx.init_random(x, -x);
            for bound in [1, 2, 3, 10, 299_999] {
                let value = ctx.next_random(bound);
                assert!((0..bound).contains(&value));
            }
        }
    }

    #[test]
    fn pickers_only_return_listed_values() {
        let mut ctx = LayerContext::new(16, 1, 1);
        for x in 0..50 {
            ctx.init_random(x, 0);
            assert!([5, 9].contains(&ctx.pick_of_2(5, 9)));
            assert!([1, 2, 3, 4].contains(&ctx.pick_of_4(1, 2, 3, 4)));
        }
    }

    #[test]
    fn salts_decorrelate_first_draw() {
        let mut diverged = 0;
        for seed in 0..200_i64 {
            let mut a = LayerContext::new(16, seed * 7919, 1);
            let mut b = LayerContext::new(16, seed * 7919, 2);
            a.init_random(0, 0);
            b.init_random(0, 0);
            if a.next_random(1 << 20) != b.next_random(1 << 20) {
                diverged += 1;
            }
        }
        assert!(diverged >= 190, "only {diverged}/200 seeds diverged");
    }

    #[test]
    #[should_panic(expected = "cache ceiling")]
    fn zero_ceiling_is_rejected() {
        let _ = LayerContext::new(0, 0, 0);
    }
}
