//! Owned DAG of memoized area nodes.
//!
//! Nodes and layer contexts live in flat vectors and refer to each other by
//! index, so one arena is the whole state of one generation task. An arena is
//! never shared between tasks; concurrent work builds one arena per worker.

use super::context::LayerContext;
use super::transform::{Corners, Cross, Lattice, Transform, ZoomCell};

/// Ceiling no derived area may exceed, however deep the pipeline.
pub const MAX_CACHE_CEILING: usize = 1024;

/// Growth factor of the ceiling from parent to child.
const CEILING_GROWTH: usize = 4;

/// Handle of an area node inside an [`AreaArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(u32);

impl AreaId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle of a layer context inside an [`AreaArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u32);

impl ContextId {
    /// Position of the context in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum Parents {
    None,
    One(AreaId),
    Two(AreaId, AreaId),
}

#[derive(Debug, Clone)]
struct AreaNode {
    context: ContextId,
    transform: Transform,
    parents: Parents,
    max_cache: usize,
}

/// Layer contexts and the area nodes built from them.
///
/// Equivalent to the set of vanilla `LazyArea`s realized from one
/// `AreaFactory` chain, with their `LazyAreaContext`s.
#[derive(Debug, Clone)]
pub struct AreaArena {
    world_seed: i64,
    contexts: Vec<LayerContext>,
    nodes: Vec<AreaNode>,
}

impl AreaArena {
    /// Creates an empty arena for one world seed.
    #[must_use]
    pub const fn new(world_seed: i64) -> Self {
        Self {
            world_seed,
            contexts: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// The world seed every context of this arena derives from.
    #[must_use]
    pub const fn world_seed(&self) -> i64 {
        self.world_seed
    }

    /// Number of area nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of layer contexts.
    #[must_use]
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Handles of every area, in creation order (parents before children).
    pub fn areas(&self) -> impl Iterator<Item = AreaId> + use<> {
        (0..self.nodes.len()).map(AreaId::from_index)
    }

    /// Adds a layer context for `salt`; leaf areas built from it get `max_cache`.
    ///
    /// # Panics
    ///
    /// Panics if `max_cache` is 0.
    pub fn add_context(&mut self, salt: i64, max_cache: usize) -> ContextId {
        let id = ContextId(self.contexts.len() as u32);
        self.contexts
            .push(LayerContext::new(max_cache, self.world_seed, salt));
        id
    }

    /// The context behind `id`.
    #[must_use]
    pub fn context(&self, id: ContextId) -> &LayerContext {
        &self.contexts[id.index()]
    }

    /// Context an area was created from.
    #[must_use]
    pub fn context_of(&self, area: AreaId) -> ContextId {
        self.nodes[area.index()].context
    }

    /// Creates a leaf area. Its ceiling is the context's base ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `transform` does not take zero parents.
    pub fn create_result(&mut self, context: ContextId, transform: Transform) -> AreaId {
        assert_arity(transform, 0);
        let max_cache = self.context(context).max_cache();
        self.push(context, transform, Parents::None, max_cache)
    }

    /// Creates a one-parent area with ceiling `min(1024, parent * 4)`.
    ///
    /// # Panics
    ///
    /// Panics if `transform` does not take exactly one parent.
    pub fn create_result_from(
        &mut self,
        context: ContextId,
        transform: Transform,
        parent: AreaId,
    ) -> AreaId {
        assert_arity(transform, 1);
        let max_cache = grow_ceiling(self.max_cache(parent));
        self.push(context, transform, Parents::One(parent), max_cache)
    }

    /// Creates a two-parent area with ceiling `min(1024, max(first, second) * 4)`.
    ///
    /// # Panics
    ///
    /// Panics if `transform` does not take exactly two parents.
    pub fn create_result_merged(
        &mut self,
        context: ContextId,
        transform: Transform,
        first: AreaId,
        second: AreaId,
    ) -> AreaId {
        assert_arity(transform, 2);
        let max_cache = grow_ceiling(self.max_cache(first).max(self.max_cache(second)));
        self.push(context, transform, Parents::Two(first, second), max_cache)
    }

    fn push(
        &mut self,
        context: ContextId,
        transform: Transform,
        parents: Parents,
        max_cache: usize,
    ) -> AreaId {
        let id = AreaId::from_index(self.nodes.len());
        self.nodes.push(AreaNode {
            context,
            transform,
            parents,
            max_cache,
        });
        id
    }

    /// Cache ceiling of an area.
    #[must_use]
    pub fn max_cache(&self, area: AreaId) -> usize {
        self.nodes[area.index()].max_cache
    }

    /// Overrides the cache ceiling of one area. Descendants keep theirs.
    ///
    /// # Panics
    ///
    /// Panics if `max_cache` is 0.
    pub fn set_max_cache(&mut self, area: AreaId, max_cache: usize) {
        assert!(max_cache >= 1, "cache ceiling must be at least 1");
        self.nodes[area.index()].max_cache = max_cache;
    }

    /// Drops every cached value in every context.
    pub fn clear_caches(&mut self) {
        self.contexts
            .iter_mut()
            .for_each(|context| context.cache.clear());
    }

    /// The zone value of `area` at `(x, y)`.
    ///
    /// Returns the cached value when present. Otherwise the parents are
    /// sampled through the area's template, the cell random is re-seeded, the
    /// rule runs and the result is cached under the area's ceiling. The value
    /// never depends on what was cached or evicted before.
    pub fn get(&mut self, area: AreaId, x: i32, y: i32) -> i32 {
        let node = &self.nodes[area.index()];
        let (context, transform, parents, max_cache) =
            (node.context, node.transform, node.parents, node.max_cache);

        if let Some(value) = self.contexts[context.index()].cache.get(area, x, y) {
            return value;
        }

        let value = self.compute(context, transform, parents, x, y);
        self.contexts[context.index()]
            .cache
            .insert(area, x, y, value, max_cache);
        value
    }

    fn compute(
        &mut self,
        context: ContextId,
        transform: Transform,
        parents: Parents,
        x: i32,
        y: i32,
    ) -> i32 {
        let px = transform.parent_coord(x);
        let py = transform.parent_coord(y);

        match (transform, parents) {
            (Transform::Generator(rule), Parents::None) => {
                self.seeded(context, transform, x, y, |ctx| rule(ctx, x, y))
            }
            (Transform::Map(rule), Parents::One(parent)) => {
                let value = self.get(parent, px, py);
                self.seeded(context, transform, x, y, |ctx| rule(ctx, value))
            }
            (Transform::ZoomSample(rule), Parents::One(parent)) => {
                let value = self.get(parent, px.wrapping_add(1), py.wrapping_add(1));
                self.seeded(context, transform, x, y, |ctx| rule(ctx, value))
            }
            (Transform::Corner(rule), Parents::One(parent)) => {
                let corners = Corners::sample(|dx, dy| {
                    self.get(parent, px.wrapping_add(dx), py.wrapping_add(dy))
                });
                self.seeded(context, transform, x, y, |ctx| rule(ctx, corners))
            }
            (Transform::Plus(rule), Parents::One(parent)) => {
                let cross = Cross::sample(|dx, dy| {
                    self.get(parent, px.wrapping_add(dx), py.wrapping_add(dy))
                });
                self.seeded(context, transform, x, y, |ctx| rule(ctx, cross))
            }
            (Transform::Zoom(rule), Parents::One(parent)) => {
                let cell = ZoomCell::sample(x, y, |dx, dy| {
                    self.get(parent, px.wrapping_add(dx), py.wrapping_add(dy))
                });
                self.seeded(context, transform, x, y, |ctx| rule(ctx, cell))
            }
            (Transform::Merge(rule), Parents::Two(first, second)) => {
                let a = self.get(first, px, py);
                let b = self.get(second, px, py);
                self.seeded(context, transform, x, y, |ctx| rule(ctx, a, b))
            }
            (Transform::LatticeMerge(rule), Parents::Two(first, second)) => {
                let other = self.get(second, px, py);
                let lattice = Lattice::sample(
                    |dx, dy| self.get(first, px.wrapping_add(dx), py.wrapping_add(dy)),
                    other,
                );
                self.seeded(context, transform, x, y, |ctx| rule(ctx, lattice))
            }
            (transform, parents) => unreachable!(
                "{} template wired to {parents:?}, arity is checked on creation",
                transform.name()
            ),
        }
    }

    fn seeded(
        &mut self,
        context: ContextId,
        transform: Transform,
        x: i32,
        y: i32,
        rule: impl FnOnce(&mut LayerContext) -> i32,
    ) -> i32 {
        let (rx, ry) = transform.random_origin(x, y);
        let ctx = &mut self.contexts[context.index()];
        ctx.init_random(rx, ry);
        rule(ctx)
    }
}

fn assert_arity(transform: Transform, parents: usize) {
    assert_eq!(
        transform.arity(),
        parents,
        "{} template takes {} parent(s), got {parents}",
        transform.name(),
        transform.arity()
    );
}

const fn grow_ceiling(parent: usize) -> usize {
    let grown = parent.saturating_mul(CEILING_GROWTH);
    if grown < MAX_CACHE_CEILING {
        grown
    } else {
        MAX_CACHE_CEILING
    }
}
