//! River layers: river seeds, river edges, smoothing and the river overlay.

use crate::area::{Cross, LayerContext, Transform};

use super::zones::{FROZEN_RIVER, MUSHROOM_FIELD_SHORE, MUSHROOM_FIELDS, RIVER, SNOWY_TUNDRA};
use super::{is_ocean, is_shallow_ocean};

/// Replaces land with a random river seed in `2..300001`.
pub const RIVER_INIT: Transform = Transform::Map(river_init);

/// Marks cells where the river seed parity changes as river.
pub const RIVER_EDGE: Transform = Transform::Plus(river_edge);

/// Removes single-cell noise along straight lines.
pub const SMOOTH: Transform = Transform::Plus(smooth);

/// Lays rivers from the second parent over the zones of the first.
pub const RIVER_MIX: Transform = Transform::Merge(river_mix);

/// Marker for "no river here" in the river chain.
const NO_RIVER: i32 = -1;

fn river_init(ctx: &mut LayerContext, zone: i32) -> i32 {
    if is_shallow_ocean(zone) {
        zone
    } else {
        ctx.next_random(299_999) + 2
    }
}

const fn river_filter(value: i32) -> i32 {
    if value >= 2 { 2 + (value & 1) } else { value }
}

fn river_edge(_: &mut LayerContext, n: Cross) -> i32 {
    let center = river_filter(n.center);
    if n.edges().into_iter().all(|zone| river_filter(zone) == center) {
        NO_RIVER
    } else {
        RIVER
    }
}

fn smooth(ctx: &mut LayerContext, n: Cross) -> i32 {
    let east_west = n.east == n.west;
    let north_south = n.north == n.south;
    match (east_west, north_south) {
        (true, true) => ctx.pick_of_2(n.west, n.north),
        (false, false) => n.center,
        (true, false) => n.west,
        (false, true) => n.north,
    }
}

fn river_mix(_: &mut LayerContext, zone: i32, river: i32) -> i32 {
    if is_ocean(zone) || river != RIVER {
        return zone;
    }
    match zone {
        SNOWY_TUNDRA => FROZEN_RIVER,
        MUSHROOM_FIELDS | MUSHROOM_FIELD_SHORE => MUSHROOM_FIELD_SHORE,
        _ => river & 0xFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::zones::{DEEP_OCEAN, OCEAN, WARM};

    fn cross(center: i32, north: i32, east: i32, south: i32, west: i32) -> Cross {
        Cross {
            north,
            east,
            south,
            west,
            center,
        }
    }

    #[test]
    fn river_init_seeds_land_only() {
        let mut ctx = LayerContext::new(16, 0, 100);
        for x in 0..100 {
            ctx.init_random(x, 0);
            let seed = river_init(&mut ctx, WARM);
            assert!((2..300_001).contains(&seed));
            assert_eq!(river_init(&mut ctx, OCEAN), OCEAN);
        }
    }

    #[test]
    fn river_templates_keep_zone_ids_apart() {
        assert_eq!(RIVER_EDGE.name(), "plus");
        assert_eq!(RIVER_MIX.name(), "merge");
        let mut ctx = LayerContext::new(16, 0, 1);
        let edge = river_edge(&mut ctx, cross(2, 2, 3, 2, 2));
        assert_eq!(river_mix(&mut ctx, WARM, edge), RIVER);
    }

    #[test]
    fn rivers_follow_parity_changes() {
        let mut ctx = LayerContext::new(16, 0, 1);
        assert_eq!(river_edge(&mut ctx, cross(4, 6, 8, 10, 12)), NO_RIVER);
        assert_eq!(river_edge(&mut ctx, cross(4, 6, 9, 10, 12)), RIVER);
        assert_eq!(river_edge(&mut ctx, cross(OCEAN, OCEAN, OCEAN, OCEAN, OCEAN)), NO_RIVER);
    }

    #[test]
    fn smooth_prefers_straight_lines() {
        let mut ctx = LayerContext::new(16, 0, 1000);
        ctx.init_random(0, 0);
        assert_eq!(smooth(&mut ctx, cross(9, 1, 2, 1, 3)), 1);
        assert_eq!(smooth(&mut ctx, cross(9, 1, 2, 3, 2)), 2);
        assert_eq!(smooth(&mut ctx, cross(9, 1, 2, 3, 4)), 9);
        assert!([1, 2].contains(&smooth(&mut ctx, cross(9, 1, 2, 1, 2))));
    }

    #[test]
    fn river_mix_keeps_oceans_and_special_shores() {
        let mut ctx = LayerContext::new(16, 0, 100);
        assert_eq!(river_mix(&mut ctx, DEEP_OCEAN, RIVER), DEEP_OCEAN);
        assert_eq!(river_mix(&mut ctx, WARM, NO_RIVER), WARM);
        assert_eq!(river_mix(&mut ctx, WARM, RIVER), RIVER);
        assert_eq!(river_mix(&mut ctx, SNOWY_TUNDRA, RIVER), FROZEN_RIVER);
        assert_eq!(river_mix(&mut ctx, MUSHROOM_FIELDS, RIVER), MUSHROOM_FIELD_SHORE);
    }
}
