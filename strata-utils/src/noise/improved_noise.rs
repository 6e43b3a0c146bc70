//! Perlin noise matching vanilla's `ImprovedNoise.java`.
//!
//! Noise-driven layers (ocean temperature) read this through their layer
//! context. The permutation table and offsets are seeded once per context.

use crate::math::{floor, lerp3, smoothstep};
use crate::noise::GRADIENT;
use crate::random::Random;

/// Perlin noise generator with a 256-entry byte permutation table.
#[derive(Debug, Clone)]
pub struct ImprovedNoise {
    p: [u8; 256],
    /// X offset for the noise coordinates.
    pub xo: f64,
    /// Y offset for the noise coordinates.
    pub yo: f64,
    /// Z offset for the noise coordinates.
    pub zo: f64,
}

impl ImprovedNoise {
    /// Create a new Perlin noise generator from a random source.
    ///
    /// Consumes 3 doubles for offsets, then shuffles the identity permutation
    /// the same way vanilla does.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let xo = random.next_f64() * 256.0;
        let yo = random.next_f64() * 256.0;
        let zo = random.next_f64() * 256.0;

        let mut p = [0u8; 256];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }

        for i in 0..256 {
            let offset = random.next_i32_bounded((256 - i) as i32) as usize;
            p.swap(i, offset + i);
        }

        Self { p, xo, yo, zo }
    }

    #[inline]
    const fn p(&self, x: i32) -> i32 {
        self.p[(x & 0xFF) as usize] as i32
    }

    #[inline]
    fn grad_dot(hash: i32, x: f64, y: f64, z: f64) -> f64 {
        let g = &GRADIENT[(hash & 15) as usize];
        f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
    }

    /// Sample noise at the given coordinates.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let xx = x + self.xo;
        let yy = y + self.yo;
        let zz = z + self.zo;
        let xf = floor(xx);
        let yf = floor(yy);
        let zf = floor(zz);
        let xr = xx - f64::from(xf);
        let yr = yy - f64::from(yf);
        let zr = zz - f64::from(zf);

        self.sample_and_lerp(xf, yf, zf, xr, yr, zr)
    }

    fn sample_and_lerp(&self, a: i32, b: i32, c: i32, xr: f64, yr: f64, zr: f64) -> f64 {
        let x0 = self.p(a);
        let x1 = self.p(a + 1);
        let y00 = self.p(x0 + b);
        let y01 = self.p(x0 + b + 1);
        let y10 = self.p(x1 + b);
        let y11 = self.p(x1 + b + 1);

        let d000 = Self::grad_dot(self.p(y00 + c), xr, yr, zr);
        let d100 = Self::grad_dot(self.p(y10 + c), xr - 1.0, yr, zr);
        let d010 = Self::grad_dot(self.p(y01 + c), xr, yr - 1.0, zr);
        let d110 = Self::grad_dot(self.p(y11 + c), xr - 1.0, yr - 1.0, zr);
        let d001 = Self::grad_dot(self.p(y00 + c + 1), xr, yr, zr - 1.0);
        let d101 = Self::grad_dot(self.p(y10 + c + 1), xr - 1.0, yr, zr - 1.0);
        let d011 = Self::grad_dot(self.p(y01 + c + 1), xr, yr - 1.0, zr - 1.0);
        let d111 = Self::grad_dot(self.p(y11 + c + 1), xr - 1.0, yr - 1.0, zr - 1.0);

        let xa = smoothstep(xr);
        let ya = smoothstep(yr);
        let za = smoothstep(zr);

        lerp3(xa, ya, za, d000, d100, d010, d110, d001, d101, d011, d111)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::legacy_random::LegacyRandom;

    #[test]
    fn test_improved_noise_deterministic() {
        let noise1 = ImprovedNoise::new(&mut LegacyRandom::from_seed(42));
        let noise2 = ImprovedNoise::new(&mut LegacyRandom::from_seed(42));

        for i in 0..10 {
            let x = f64::from(i) * 13.7;
            let z = f64::from(i) * 7.3;
            assert_eq!(
                noise1.noise(x, z, 0.0).to_bits(),
                noise2.noise(x, z, 0.0).to_bits()
            );
        }
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let noise = ImprovedNoise::new(&mut LegacyRandom::from_seed(7));
        let mut seen = [false; 256];
        for &v in &noise.p {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_noise_is_bounded_and_varies() {
        let noise = ImprovedNoise::new(&mut LegacyRandom::from_seed(0));
        let values: Vec<f64> = (0..64)
            .map(|i| noise.noise(f64::from(i) / 8.0, f64::from(i * 3) / 8.0, 0.0))
            .collect();

        assert!(values.iter().all(|v| v.abs() <= 1.5));
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01, "Perlin noise should have spatial variation");
    }
}
