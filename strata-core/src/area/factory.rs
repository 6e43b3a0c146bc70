//! Deferred construction of area chains.
//!
//! An [`AreaFactory`] is a recipe: a salt, a transform and the recipes of its
//! parents. Nothing is allocated until [`AreaFactory::build`] realizes it into
//! an [`AreaArena`], parents first. Recipes hold no seed, so one recipe can be
//! shared by every worker and realized into each worker's own arena.

use super::arena::{AreaArena, AreaId};
use super::transform::Transform;

#[derive(Debug, Clone)]
enum Inputs {
    Source { max_cache: Option<usize> },
    One(Box<AreaFactory>),
    Two(Box<AreaFactory>, Box<AreaFactory>),
}

/// Recipe for one pipeline stage and everything beneath it.
#[derive(Debug, Clone)]
pub struct AreaFactory {
    salt: i64,
    transform: Transform,
    inputs: Inputs,
}

impl AreaFactory {
    /// A leaf stage.
    ///
    /// # Panics
    ///
    /// Panics if `transform` takes parents.
    #[must_use]
    pub fn source(salt: i64, transform: Transform) -> Self {
        assert_eq!(transform.arity(), 0, "{} is not a leaf", transform.name());
        Self {
            salt,
            transform,
            inputs: Inputs::Source { max_cache: None },
        }
    }

    /// Overrides the base ceiling of a leaf stage.
    ///
    /// # Panics
    ///
    /// Panics if this is not a leaf stage or `max_cache` is 0.
    #[must_use]
    pub fn with_max_cache(mut self, max_cache: usize) -> Self {
        assert!(max_cache >= 1, "cache ceiling must be at least 1");
        match &mut self.inputs {
            Inputs::Source { max_cache: slot } => *slot = Some(max_cache),
            _ => panic!("only leaf stages carry a base ceiling"),
        }
        self
    }

    /// A one-parent stage on top of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `transform` does not take exactly one parent.
    #[must_use]
    pub fn then(self, salt: i64, transform: Transform) -> Self {
        assert_eq!(transform.arity(), 1, "{} does not take one parent", transform.name());
        Self {
            salt,
            transform,
            inputs: Inputs::One(Box::new(self)),
        }
    }

    /// `count` stages of `transform` with salts `salt, salt + 1, ...`.
    #[must_use]
    pub fn repeat(self, salt: i64, transform: Transform, count: u32) -> Self {
        (0..count).fold(self, |chain, i| chain.then(salt + i64::from(i), transform))
    }

    /// A two-parent stage reading `self` first and `other` second.
    ///
    /// # Panics
    ///
    /// Panics if `transform` does not take exactly two parents.
    #[must_use]
    pub fn merge(self, other: Self, salt: i64, transform: Transform) -> Self {
        assert_eq!(transform.arity(), 2, "{} does not take two parents", transform.name());
        Self {
            salt,
            transform,
            inputs: Inputs::Two(Box::new(self), Box::new(other)),
        }
    }

    /// Salt of this stage.
    #[must_use]
    pub const fn salt(&self) -> i64 {
        self.salt
    }

    /// Number of stages in this recipe, shared sub-chains counted each time.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        1 + match &self.inputs {
            Inputs::Source { .. } => 0,
            Inputs::One(parent) => parent.stage_count(),
            Inputs::Two(first, second) => first.stage_count() + second.stage_count(),
        }
    }

    /// Realizes the recipe into `arena` and returns the top area.
    ///
    /// Every stage gets its own layer context. Leaf stages without an explicit
    /// ceiling use `leaf_cache`.
    pub fn build(&self, arena: &mut AreaArena, leaf_cache: usize) -> AreaId {
        let before = arena.len();
        let area = self.realize(arena, leaf_cache);
        log::debug!(
            "Realized {} areas (seed {}, leaf ceiling {leaf_cache})",
            arena.len() - before,
            arena.world_seed()
        );
        area
    }

    fn realize(&self, arena: &mut AreaArena, leaf_cache: usize) -> AreaId {
        match &self.inputs {
            Inputs::Source { max_cache } => {
                let context = arena.add_context(self.salt, max_cache.unwrap_or(leaf_cache));
                arena.create_result(context, self.transform)
            }
            Inputs::One(parent) => {
                let parent = parent.realize(arena, leaf_cache);
                let context = arena.add_context(self.salt, leaf_cache);
                arena.create_result_from(context, self.transform, parent)
            }
            Inputs::Two(first, second) => {
                let first = first.realize(arena, leaf_cache);
                let second = second.realize(arena, leaf_cache);
                let context = arena.add_context(self.salt, leaf_cache);
                arena.create_result_merged(context, self.transform, first, second)
            }
        }
    }
}
