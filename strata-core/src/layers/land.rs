//! Land/ocean layers: the initial island scatter and its refinements.

use crate::area::{Corners, Cross, LayerContext, Transform};

use super::is_shallow_ocean;
use super::zones::{
    COLD_OCEAN, DEEP_COLD_OCEAN, DEEP_FROZEN_OCEAN, DEEP_LUKEWARM_OCEAN, DEEP_OCEAN,
    DEEP_WARM_OCEAN, FREEZING, FROZEN_OCEAN, LUKEWARM_OCEAN, MUSHROOM_FIELDS, OCEAN, WARM,
    WARM_OCEAN,
};

/// Roughly one cell in ten becomes land; the origin always does.
pub const ISLAND: Transform = Transform::Generator(island);

/// Grows and erodes coastlines from the diagonal neighborhood.
pub const ADD_ISLAND: Transform = Transform::Corner(add_island);

/// Turns half of the ocean cells fully surrounded by ocean into land.
pub const REMOVE_TOO_MUCH_OCEAN: Transform = Transform::Plus(remove_too_much_ocean);

/// Rarely drops a mushroom island into open ocean.
pub const ADD_MUSHROOM_ISLAND: Transform = Transform::Corner(add_mushroom_island);

/// Deepens shallow ocean cells whose four edges are all ocean.
pub const ADD_DEEP_OCEAN: Transform = Transform::Plus(add_deep_ocean);

fn island(ctx: &mut LayerContext, x: i32, y: i32) -> i32 {
    if x == 0 && y == 0 {
        return WARM;
    }
    if ctx.next_random(10) == 0 { WARM } else { OCEAN }
}

fn add_island(ctx: &mut LayerContext, n: Corners) -> i32 {
    let center = n.center;
    let ocean_around = n.diagonals().map(is_shallow_ocean);

    if !is_shallow_ocean(center) || ocean_around.iter().all(|&ocean| ocean) {
        if !is_shallow_ocean(center)
            && ocean_around.iter().any(|&ocean| ocean)
            && ctx.next_random(5) == 0
        {
            // Erode towards the first ocean neighbor, keeping freezing land.
            for neighbor in [n.nw, n.sw, n.ne, n.se] {
                if is_shallow_ocean(neighbor) {
                    return if center == FREEZING { FREEZING } else { neighbor };
                }
            }
        }
        return center;
    }

    // Ocean next to land: pick one of the land neighbors, reservoir style.
    let mut seen = 1;
    let mut picked = WARM;
    for neighbor in [n.nw, n.ne, n.sw, n.se] {
        if !is_shallow_ocean(neighbor) {
            let bound = seen;
            seen += 1;
            if ctx.next_random(bound) == 0 {
                picked = neighbor;
            }
        }
    }

    if ctx.next_random(3) == 0 {
        picked
    } else if picked == FREEZING {
        FREEZING
    } else {
        center
    }
}

fn remove_too_much_ocean(ctx: &mut LayerContext, n: Cross) -> i32 {
    if is_shallow_ocean(n.center)
        && n.edges().into_iter().all(is_shallow_ocean)
        && ctx.next_random(2) == 0
    {
        WARM
    } else {
        n.center
    }
}

fn add_mushroom_island(ctx: &mut LayerContext, n: Corners) -> i32 {
    if is_shallow_ocean(n.center)
        && n.diagonals().into_iter().all(is_shallow_ocean)
        && ctx.next_random(100) == 0
    {
        MUSHROOM_FIELDS
    } else {
        n.center
    }
}

fn add_deep_ocean(_: &mut LayerContext, n: Cross) -> i32 {
    if !is_shallow_ocean(n.center) {
        return n.center;
    }
    let oceans = n.edges().into_iter().filter(|&zone| is_shallow_ocean(zone)).count();
    if oceans < 4 {
        return n.center;
    }
    match n.center {
        WARM_OCEAN => DEEP_WARM_OCEAN,
        LUKEWARM_OCEAN => DEEP_LUKEWARM_OCEAN,
        COLD_OCEAN => DEEP_COLD_OCEAN,
        FROZEN_OCEAN => DEEP_FROZEN_OCEAN,
        _ => DEEP_OCEAN,
    }
}
