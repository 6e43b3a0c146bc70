//! Climate layers: temperature bands over land and their buffers.

use crate::area::{Cross, LayerContext, Transform};

use super::is_shallow_ocean;
use super::zones::{COLD, FREEZING, SPECIAL_MASK, TEMPERATE, WARM};

/// Assigns land a climate band: 4/6 warm, 1/6 cold, 1/6 freezing.
pub const ADD_SNOW: Transform = Transform::ZoomSample(add_snow);

/// Puts a temperate buffer between warm land and cold or freezing land.
pub const COOL_WARM_EDGE: Transform = Transform::Plus(cool_warm_edge);

/// Turns freezing land next to warm or temperate land cold.
pub const HEAT_ICE_EDGE: Transform = Transform::Plus(heat_ice_edge);

/// Tags one land cell in 13 with a special variant in bits 8..12.
pub const INTRODUCE_SPECIAL: Transform = Transform::ZoomSample(introduce_special);

fn add_snow(ctx: &mut LayerContext, zone: i32) -> i32 {
    if is_shallow_ocean(zone) {
        return zone;
    }
    match ctx.next_random(6) {
        0 => FREEZING,
        1 => COLD,
        _ => WARM,
    }
}

fn cool_warm_edge(_: &mut LayerContext, n: Cross) -> i32 {
    if n.center == WARM && n.edges().iter().any(|&zone| zone == COLD || zone == FREEZING) {
        TEMPERATE
    } else {
        n.center
    }
}

fn heat_ice_edge(_: &mut LayerContext, n: Cross) -> i32 {
    if n.center == FREEZING && n.edges().iter().any(|&zone| zone == WARM || zone == TEMPERATE) {
        COLD
    } else {
        n.center
    }
}

fn introduce_special(ctx: &mut LayerContext, zone: i32) -> i32 {
    if !is_shallow_ocean(zone) && ctx.next_random(13) == 0 {
        zone | (((1 + ctx.next_random(15)) << 8) & SPECIAL_MASK)
    } else {
        zone
    }
}
