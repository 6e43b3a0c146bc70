//! Neighbor-sampling templates.
//!
//! A [`Transform`] is a sampling template tag carrying a pure rule function.
//! The template fixes how a queried coordinate maps into parent space and
//! which parent cells are read; the rule only turns those samples (plus cell
//! random draws) into a zone value. Evaluation lives in
//! [`AreaArena::get`](super::AreaArena::get).

use super::context::LayerContext;

/// Rule of a [`Transform::Generator`]: value from coordinates and random only.
pub type GeneratorRule = fn(&mut LayerContext, i32, i32) -> i32;
/// Rule reading a single parent sample.
pub type PointRule = fn(&mut LayerContext, i32) -> i32;
/// Rule reading the four diagonal neighbors and the center.
pub type CornerRule = fn(&mut LayerContext, Corners) -> i32;
/// Rule reading the four edge neighbors and the center.
pub type PlusRule = fn(&mut LayerContext, Cross) -> i32;
/// Rule reading the 2x2 parent block of a zoomed cell.
pub type ZoomRule = fn(&mut LayerContext, ZoomCell) -> i32;
/// Rule reading one sample of each of two parents.
pub type MergeRule = fn(&mut LayerContext, i32, i32) -> i32;
/// Rule reading a lattice of the first parent and the center of the second.
pub type LatticeRule = fn(&mut LayerContext, Lattice) -> i32;

/// A sampling template together with its rule.
///
/// | Template | Parents | Parent coordinate | Sampled offsets |
/// |---|---|---|---|
/// | `Generator` | 0 | - | - |
/// | `Map` | 1 | `x` | `(0,0)` |
/// | `ZoomSample` | 1 | `x - 1` | `(+1,+1)` |
/// | `Corner` | 1 | `x - 1` | see [`Corners::OFFSETS`] |
/// | `Plus` | 1 | `x - 1` | see [`Cross::OFFSETS`] |
/// | `Zoom` | 1 | `x >> 1` | `(0,0) (+1,0) (0,+1) (+1,+1)` |
/// | `Merge` | 2 | `x` | `(0,0)` on each |
/// | `LatticeMerge` | 2 | `x` | see [`Lattice`] |
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    /// Leaf layer.
    Generator(GeneratorRule),
    /// 1:1 recoloring of the parent value.
    Map(PointRule),
    /// 1:1 recoloring through the offset remap.
    ZoomSample(PointRule),
    /// Decisions from the diagonal neighborhood.
    Corner(CornerRule),
    /// Decisions from the edge neighborhood.
    Plus(PlusRule),
    /// Doubles the resolution of the parent.
    Zoom(ZoomRule),
    /// Blends two independent chains cell by cell.
    Merge(MergeRule),
    /// Blends two chains, looking around the first one.
    LatticeMerge(LatticeRule),
}

impl Transform {
    /// Number of parent areas this template reads.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Generator(_) => 0,
            Self::Map(_) | Self::ZoomSample(_) | Self::Corner(_) | Self::Plus(_) | Self::Zoom(_) => {
                1
            }
            Self::Merge(_) | Self::LatticeMerge(_) => 2,
        }
    }

    /// Template name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generator(_) => "generator",
            Self::Map(_) => "map",
            Self::ZoomSample(_) => "zoom_sample",
            Self::Corner(_) => "corner",
            Self::Plus(_) => "plus",
            Self::Zoom(_) => "zoom",
            Self::Merge(_) => "merge",
            Self::LatticeMerge(_) => "lattice_merge",
        }
    }

    /// Maps a queried coordinate (either axis) into parent space.
    ///
    /// Wraps at the ends of the `i32` range.
    #[must_use]
    pub const fn parent_coord(&self, v: i32) -> i32 {
        match self {
            Self::Generator(_) | Self::Map(_) | Self::Merge(_) | Self::LatticeMerge(_) => v,
            Self::ZoomSample(_) | Self::Corner(_) | Self::Plus(_) => v.wrapping_sub(1),
            Self::Zoom(_) => v >> 1,
        }
    }

    /// Cell the random is seeded from before the rule runs.
    ///
    /// Zoomed cells share the draws of their even-aligned sibling so the four
    /// children of one parent cell agree.
    #[must_use]
    pub const fn random_origin(&self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Self::Zoom(_) => (x & !1, y & !1),
            _ => (x, y),
        }
    }
}

/// Diagonal neighborhood handed to a [`CornerRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    /// Parent at `(+0, +2)`.
    pub sw: i32,
    /// Parent at `(+2, +2)`.
    pub se: i32,
    /// Parent at `(+2, +0)`.
    pub ne: i32,
    /// Parent at `(+0, +0)`.
    pub nw: i32,
    /// Parent at `(+1, +1)`.
    pub center: i32,
}

impl Corners {
    /// Offsets relative to the remapped parent coordinate, in field order.
    pub const OFFSETS: [(i32, i32); 5] = [(0, 2), (2, 2), (2, 0), (0, 0), (1, 1)];

    /// Reads the five cells through `at(dx, dy)`.
    pub fn sample(mut at: impl FnMut(i32, i32) -> i32) -> Self {
        let [sw, se, ne, nw, center] = Self::OFFSETS.map(|(dx, dy)| at(dx, dy));
        Self {
            sw,
            se,
            ne,
            nw,
            center,
        }
    }

    /// The four diagonal neighbors.
    #[must_use]
    pub const fn diagonals(&self) -> [i32; 4] {
        [self.sw, self.se, self.ne, self.nw]
    }
}

/// Edge neighborhood handed to a [`PlusRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cross {
    /// Parent at `(+1, +0)`.
    pub north: i32,
    /// Parent at `(+2, +1)`.
    pub east: i32,
    /// Parent at `(+1, +2)`.
    pub south: i32,
    /// Parent at `(+0, +1)`.
    pub west: i32,
    /// Parent at `(+1, +1)`.
    pub center: i32,
}

impl Cross {
    /// Offsets relative to the remapped parent coordinate, in field order.
    pub const OFFSETS: [(i32, i32); 5] = [(1, 0), (2, 1), (1, 2), (0, 1), (1, 1)];

    /// Reads the five cells through `at(dx, dy)`.
    pub fn sample(mut at: impl FnMut(i32, i32) -> i32) -> Self {
        let [north, east, south, west, center] = Self::OFFSETS.map(|(dx, dy)| at(dx, dy));
        Self {
            north,
            east,
            south,
            west,
            center,
        }
    }

    /// The four edge neighbors.
    #[must_use]
    pub const fn edges(&self) -> [i32; 4] {
        [self.north, self.east, self.south, self.west]
    }
}

/// The 2x2 parent block under a zoomed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomCell {
    /// Parent cell containing the queried cell.
    pub origin: i32,
    /// Parent cell one step along x.
    pub east: i32,
    /// Parent cell one step along y.
    pub south: i32,
    /// Parent cell one step along both axes.
    pub south_east: i32,
    /// Whether the queried x is odd.
    pub x_odd: bool,
    /// Whether the queried y is odd.
    pub y_odd: bool,
}

impl ZoomCell {
    /// Offsets relative to the remapped parent coordinate, in field order.
    pub const OFFSETS: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

    /// Reads the block through `at(dx, dy)` for the queried `(x, y)`.
    pub fn sample(x: i32, y: i32, mut at: impl FnMut(i32, i32) -> i32) -> Self {
        let [origin, east, south, south_east] = Self::OFFSETS.map(|(dx, dy)| at(dx, dy));
        Self {
            origin,
            east,
            south,
            south_east,
            x_odd: x & 1 == 1,
            y_odd: y & 1 == 1,
        }
    }
}

/// A lattice of the first parent around the cell, plus the second parent's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    /// First parent at the queried cell.
    pub center: i32,
    /// First parent on the lattice, row-major over [`Lattice::STEPS`] for x then y.
    pub around: [i32; 25],
    /// Second parent at the queried cell.
    pub other: i32,
}

impl Lattice {
    /// Offsets sampled along each axis.
    pub const STEPS: [i32; 5] = [-8, -4, 0, 4, 8];

    /// Reads the first parent through `first(dx, dy)` and sets `other`.
    pub fn sample(mut first: impl FnMut(i32, i32) -> i32, other: i32) -> Self {
        let center = first(0, 0);
        let mut around = [0; 25];
        for (i, dx) in Self::STEPS.into_iter().enumerate() {
            for (j, dy) in Self::STEPS.into_iter().enumerate() {
                around[i * 5 + j] = first(dx, dy);
            }
        }
        Self {
            center,
            around,
            other,
        }
    }
}
