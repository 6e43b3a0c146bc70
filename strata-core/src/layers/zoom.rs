//! Zoom layers: double the resolution of the parent.
//!
//! A parent cell `c` covers four children. The even-aligned child keeps `c`,
//! the two edge children pick between `c` and the neighbor in their
//! direction, and the diagonal child picks from all four cells. All four
//! children draw from the random seeded at the even-aligned child, so each
//! child consumes the draws of the ones before it.

use crate::area::{LayerContext, Transform, ZoomCell};

/// Zoom whose diagonal child takes the most common of the four cells.
pub const NORMAL: Transform = Transform::Zoom(normal);

/// Zoom whose diagonal child takes any of the four cells at random.
pub const FUZZY: Transform = Transform::Zoom(fuzzy);

fn normal(ctx: &mut LayerContext, cell: ZoomCell) -> i32 {
    zoom(ctx, cell, mode_or_random)
}

fn fuzzy(ctx: &mut LayerContext, cell: ZoomCell) -> i32 {
    zoom(ctx, cell, LayerContext::pick_of_4)
}

fn zoom(
    ctx: &mut LayerContext,
    cell: ZoomCell,
    diagonal: fn(&mut LayerContext, i32, i32, i32, i32) -> i32,
) -> i32 {
    let ZoomCell {
        origin,
        east,
        south,
        south_east,
        x_odd,
        y_odd,
    } = cell;

    if !x_odd && !y_odd {
        return origin;
    }
    let vertical = ctx.pick_of_2(origin, south);
    if !x_odd {
        return vertical;
    }
    let horizontal = ctx.pick_of_2(origin, east);
    if !y_odd {
        return horizontal;
    }
    diagonal(ctx, origin, east, south, south_east)
}

/// The value appearing most often among the four, or a random pick when two
/// pairs tie or all four differ.
pub fn mode_or_random(ctx: &mut LayerContext, a: i32, b: i32, c: i32, d: i32) -> i32 {
    if b == c && c == d {
        return b;
    }

    let a_wins = (a == b && (a == c || a == d || c != d))
        || (a == c && (a == d || b != d))
        || (a == d && b != c);
    if a_wins {
        return a;
    }
    if (b == c && a != d) || (b == d && a != c) {
        return b;
    }
    if c == d && a != b {
        return c;
    }
    ctx.pick_of_4(a, b, c, d)
}
