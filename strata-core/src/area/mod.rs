//! The lazily evaluated, cache-bounded area pipeline.
//!
//! A pipeline is described by an [`AreaFactory`] recipe, realized into an
//! [`AreaArena`], and queried with [`AreaArena::get`]. Each stage owns a
//! [`LayerContext`] (layer seed, cell random, [`ZoneCache`]) and evaluates its
//! [`Transform`] on cache misses.

mod arena;
mod cache;
mod context;
mod factory;
mod transform;

pub use arena::{AreaArena, AreaId, ContextId, MAX_CACHE_CEILING};
pub use cache::{ZoneCache, pack_coords};
pub use context::LayerContext;
pub use factory::AreaFactory;
pub use transform::{
    CornerRule, Corners, Cross, GeneratorRule, Lattice, LatticeRule, MergeRule, PlusRule,
    PointRule, Transform, ZoomCell, ZoomRule,
};
