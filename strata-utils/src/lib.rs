//! Deterministic primitives shared by the zone pipeline.
//!
//! - [`random`] - the 64-bit step function, seed mixing and the legacy LCG random
//! - [`noise`] - Perlin noise used by noise-driven layers
//! - [`math`] - floor / interpolation helpers matching vanilla's `Mth`
//! - [`range`] - inclusive integer ranges for externally supplied bounds

pub mod math;
pub mod noise;
pub mod random;
pub mod range;
