//! Math helpers matching vanilla's `Mth` for bit-identical noise evaluation.

/// Floor of a double as an `i32`, matching `Mth.floor`.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}

/// Linear interpolation: `start + delta * (end - start)`.
#[inline]
#[must_use]
pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Bilinear interpolation over the four corners of a unit square.
#[inline]
#[must_use]
pub fn lerp2(dx: f64, dy: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
    lerp(dy, lerp(dx, x0y0, x1y0), lerp(dx, x0y1, x1y1))
}

/// Trilinear interpolation over the eight corners of a unit cube.
#[inline]
#[must_use]
#[expect(clippy::too_many_arguments, reason = "mirrors vanilla's Mth.lerp3")]
pub fn lerp3(
    dx: f64,
    dy: f64,
    dz: f64,
    x0y0z0: f64,
    x1y0z0: f64,
    x0y1z0: f64,
    x1y1z0: f64,
    x0y0z1: f64,
    x1y0z1: f64,
    x0y1z1: f64,
    x1y1z1: f64,
) -> f64 {
    lerp(
        dz,
        lerp2(dx, dy, x0y0z0, x1y0z0, x0y1z0, x1y1z0),
        lerp2(dx, dy, x0y0z1, x1y0z1, x0y1z1, x1y1z1),
    )
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
