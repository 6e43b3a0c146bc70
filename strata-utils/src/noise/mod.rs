//! Noise generation matching vanilla Minecraft's noise system.
//!
//! - [`ImprovedNoise`] - Perlin noise, exposed to layers through their context

mod improved_noise;

pub use improved_noise::ImprovedNoise;

/// Gradient vectors shared by vanilla's Perlin and simplex noise (`SimplexNoise.GRADIENT`).
pub(crate) const GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [0, -1, 1],
    [-1, 1, 0],
    [0, -1, -1],
];
