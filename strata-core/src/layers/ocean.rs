//! Ocean temperature chain and its merge into the land chain.

use crate::area::{LayerContext, Lattice, Transform};

use super::is_ocean;
use super::zones::{
    COLD_OCEAN, DEEP_COLD_OCEAN, DEEP_FROZEN_OCEAN, DEEP_LUKEWARM_OCEAN, DEEP_OCEAN,
    FROZEN_OCEAN, LUKEWARM_OCEAN, OCEAN, WARM_OCEAN,
};

/// Ocean temperature bands from low-frequency Perlin noise.
pub const OCEAN_TEMPERATURE: Transform = Transform::Generator(ocean_temperature);

/// Replaces the oceans of the first parent with the temperatures of the second.
pub const OCEAN_MIX: Transform = Transform::LatticeMerge(ocean_mix);

fn ocean_temperature(ctx: &mut LayerContext, x: i32, y: i32) -> i32 {
    let value = ctx
        .biome_noise()
        .noise(f64::from(x) / 8.0, f64::from(y) / 8.0, 0.0);
    if value > 0.4 {
        WARM_OCEAN
    } else if value > 0.2 {
        LUKEWARM_OCEAN
    } else if value < -0.4 {
        FROZEN_OCEAN
    } else if value < -0.2 {
        COLD_OCEAN
    } else {
        OCEAN
    }
}

fn ocean_mix(_: &mut LayerContext, lattice: Lattice) -> i32 {
    let land = lattice.center;
    let temperature = lattice.other;
    if !is_ocean(land) {
        return land;
    }

    // Extreme temperatures are softened near any land on the lattice.
    if lattice.around.iter().any(|&zone| !is_ocean(zone)) {
        match temperature {
            WARM_OCEAN => return LUKEWARM_OCEAN,
            FROZEN_OCEAN => return COLD_OCEAN,
            _ => {}
        }
    }

    if land == DEEP_OCEAN {
        match temperature {
            LUKEWARM_OCEAN => return DEEP_LUKEWARM_OCEAN,
            OCEAN => return DEEP_OCEAN,
            COLD_OCEAN => return DEEP_COLD_OCEAN,
            FROZEN_OCEAN => return DEEP_FROZEN_OCEAN,
            _ => {}
        }
    }
    temperature
}
