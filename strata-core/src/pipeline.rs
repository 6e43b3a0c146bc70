//! The default zone stack and a convenience sampler over it.
//!
//! The stack follows the classic layered generator: a land/climate chain is
//! refined by repeated zooms, a river chain is derived from a copy of it, an
//! independent ocean-temperature chain runs beside them, and the three are
//! merged at the top.

use serde::Deserialize;
use strata_utils::range::InclusiveRange;
use thiserror::Error;

use crate::area::{AreaArena, AreaFactory, AreaId};
use crate::layers::climate::{ADD_SNOW, COOL_WARM_EDGE, HEAT_ICE_EDGE, INTRODUCE_SPECIAL};
use crate::layers::land::{
    ADD_DEEP_OCEAN, ADD_ISLAND, ADD_MUSHROOM_ISLAND, ISLAND, REMOVE_TOO_MUCH_OCEAN,
};
use crate::layers::ocean::{OCEAN_MIX, OCEAN_TEMPERATURE};
use crate::layers::river::{RIVER_EDGE, RIVER_INIT, RIVER_MIX, SMOOTH};
use crate::layers::zoom::{FUZZY, NORMAL};

/// Largest accepted zoom count for either chain.
pub const MAX_ZOOM: u32 = 8;

/// An error raised when stack settings are out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The leaf cache ceiling was 0.
    #[error("leaf cache ceiling must be at least 1")]
    ZeroLeafCache,
    /// The biome zoom count was outside `1..=MAX_ZOOM`.
    #[error("biome_size must be between 1 and {MAX_ZOOM}, got {0}")]
    BiomeSize(u32),
    /// The river zoom count was outside `1..=MAX_ZOOM`.
    #[error("river_size must be between 1 and {MAX_ZOOM}, got {0}")]
    RiverSize(u32),
}

/// Zoom counts of the zone and river chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Extra zooms applied to zones after the land chain.
    pub biome_size: u32,
    /// Extra zooms applied to the river chain.
    pub river_size: u32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            biome_size: 4,
            river_size: 4,
        }
    }
}

/// Knobs of the default zone stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    /// Cache ceiling of leaf areas.
    pub leaf_cache: usize,
    /// Zoom counts.
    pub zoom: ZoomSettings,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            leaf_cache: 25,
            zoom: ZoomSettings::default(),
        }
    }
}

impl StackSettings {
    /// Checks every knob against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first knob that is out of range.
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.leaf_cache == 0 {
            return Err(SettingsError::ZeroLeafCache);
        }
        let ZoomSettings {
            biome_size,
            river_size,
        } = self.zoom;
        if biome_size == 0 || biome_size > MAX_ZOOM {
            return Err(SettingsError::BiomeSize(biome_size));
        }
        if river_size == 0 || river_size > MAX_ZOOM {
            return Err(SettingsError::RiverSize(river_size));
        }
        Ok(())
    }
}

/// Island scatter refined into continents with climate bands.
#[must_use]
pub fn land_chain() -> AreaFactory {
    AreaFactory::source(1, ISLAND)
        .then(2000, FUZZY)
        .then(1, ADD_ISLAND)
        .then(2001, NORMAL)
        .then(2, ADD_ISLAND)
        .then(50, ADD_ISLAND)
        .then(70, ADD_ISLAND)
        .then(2, REMOVE_TOO_MUCH_OCEAN)
        .then(2, ADD_SNOW)
        .then(3, ADD_ISLAND)
        .then(2, COOL_WARM_EDGE)
        .then(2, HEAT_ICE_EDGE)
        .then(3, INTRODUCE_SPECIAL)
        .then(2002, NORMAL)
        .then(2003, NORMAL)
        .then(4, ADD_ISLAND)
        .then(5, ADD_MUSHROOM_ISLAND)
        .then(4, ADD_DEEP_OCEAN)
}

/// Ocean temperatures zoomed to the resolution of the finished zones.
#[must_use]
pub fn ocean_chain() -> AreaFactory {
    AreaFactory::source(2, OCEAN_TEMPERATURE).repeat(2001, NORMAL, 6)
}

/// River edges traced from random seeds planted on `land`.
#[must_use]
pub fn river_chain(land: AreaFactory, river_size: u32) -> AreaFactory {
    land.then(100, RIVER_INIT)
        .repeat(1000, NORMAL, 2)
        .repeat(1000, NORMAL, river_size)
        .then(1, RIVER_EDGE)
        .then(1000, SMOOTH)
}

/// The full zone stack for `settings`.
///
/// # Errors
///
/// Returns an error if `settings` do not validate.
pub fn zone_stack(settings: &StackSettings) -> Result<AreaFactory, SettingsError> {
    settings.validate()?;
    let land = land_chain();
    let rivers = river_chain(land.clone(), settings.zoom.river_size);

    let mut zones = land.repeat(1000, NORMAL, 2);
    for i in 0..settings.zoom.biome_size {
        zones = zones.then(1000 + i64::from(i), NORMAL);
        if i == 0 {
            zones = zones.then(3, ADD_ISLAND);
        }
    }

    Ok(zones
        .then(1000, SMOOTH)
        .merge(rivers, 100, RIVER_MIX)
        .merge(ocean_chain(), 100, OCEAN_MIX))
}

/// One realized zone stack: an arena and its top area.
///
/// A sampler is single-threaded state; concurrent callers realize one sampler
/// each from a shared [`AreaFactory`].
#[derive(Debug)]
pub struct ZoneSampler {
    arena: AreaArena,
    root: AreaId,
}

impl ZoneSampler {
    /// Realizes the default stack for `world_seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` do not validate.
    pub fn new(world_seed: i64, settings: &StackSettings) -> Result<Self, SettingsError> {
        let factory = zone_stack(settings)?;
        Ok(Self::from_factory(&factory, world_seed, settings.leaf_cache))
    }

    /// Realizes an arbitrary recipe for `world_seed`.
    #[must_use]
    pub fn from_factory(factory: &AreaFactory, world_seed: i64, leaf_cache: usize) -> Self {
        let mut arena = AreaArena::new(world_seed);
        let root = factory.build(&mut arena, leaf_cache);
        Self { arena, root }
    }

    /// The top area.
    #[must_use]
    pub const fn root(&self) -> AreaId {
        self.root
    }

    /// The arena holding the realized stack.
    #[must_use]
    pub const fn arena(&self) -> &AreaArena {
        &self.arena
    }

    /// Mutable access to the arena, e.g. to adjust ceilings.
    pub const fn arena_mut(&mut self) -> &mut AreaArena {
        &mut self.arena
    }

    /// Zone at `(x, y)`.
    pub fn sample(&mut self, x: i32, y: i32) -> i32 {
        self.arena.get(self.root, x, y)
    }

    /// Zones of a rectangle, row by row (`y` outer, `x` inner).
    ///
    /// Empty ranges are logged and collapse to their lower bound.
    pub fn fill(&mut self, x: InclusiveRange, y: InclusiveRange) -> Vec<i32> {
        let (xs, ys) = (x.resolve(), y.resolve());
        let mut zones = Vec::with_capacity(x.len() * y.len());
        for y in ys {
            for x in xs.clone() {
                zones.push(self.sample(x, y));
            }
        }
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{is_ocean, zones};

    #[test]
    fn defaults_validate() {
        let settings = StackSettings::default();
        assert_eq!(settings.leaf_cache, 25);
        assert_eq!(settings.zoom.biome_size, 4);
        assert_eq!(settings.zoom.river_size, 4);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn out_of_range_knobs_are_rejected() {
        let mut settings = StackSettings {
            leaf_cache: 0,
            ..StackSettings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroLeafCache));

        settings.leaf_cache = 1;
        settings.zoom.biome_size = 9;
        assert_eq!(settings.validate(), Err(SettingsError::BiomeSize(9)));

        settings.zoom.biome_size = 1;
        settings.zoom.river_size = 0;
        assert_eq!(settings.validate(), Err(SettingsError::RiverSize(0)));
        assert!(zone_stack(&settings).is_err());
    }

    #[test]
    fn stack_shape_follows_zoom_counts() {
        let land = land_chain().stage_count();
        assert_eq!(land, 18);
        assert_eq!(ocean_chain().stage_count(), 7);

        let settings = StackSettings::default();
        let Ok(stack) = zone_stack(&settings) else {
            panic!("default settings must build");
        };
        // zones: land + 2 + 4 zooms + island + smooth, rivers: land + 1 + 2 + 4 + 2,
        // oceans, and the two merges.
        let expected = (land + 8) + (land + 9) + 7 + 2;
        assert_eq!(stack.stage_count(), expected);
        assert_eq!(stack.salt(), 100);
    }

    #[test]
    fn sampler_is_deterministic_and_fills_row_major() {
        let settings = StackSettings::default();
        let Ok(mut a) = ZoneSampler::new(99, &settings) else {
            panic!("default settings must build");
        };
        let Ok(mut b) = ZoneSampler::new(99, &settings) else {
            panic!("default settings must build");
        };

        let region = a.fill(InclusiveRange::new(-4, 3), InclusiveRange::new(10, 12));
        assert_eq!(region.len(), 24);
        assert_eq!(region[0], b.sample(-4, 10));
        assert_eq!(region[9], b.sample(-3, 11));
        assert_eq!(region[23], b.sample(3, 12));
    }

    #[test]
    fn sampling_at_the_coordinate_limits_is_stable() {
        let settings = StackSettings::default();
        let Ok(mut sampler) = ZoneSampler::new(7, &settings) else {
            panic!("default settings must build");
        };
        let limits = [
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MIN),
            (i32::MIN, i32::MAX),
        ];
        let first: Vec<i32> = limits.iter().map(|&(x, y)| sampler.sample(x, y)).collect();
        let again: Vec<i32> = limits.iter().map(|&(x, y)| sampler.sample(x, y)).collect();
        assert_eq!(first, again);

        let Ok(mut fresh) = ZoneSampler::new(7, &settings) else {
            panic!("default settings must build");
        };
        assert_eq!(fresh.sample(i32::MAX, i32::MAX), first[0]);
    }

    #[test]
    fn sampled_zones_are_known_ids() {
        let Ok(mut sampler) = ZoneSampler::new(1234, &StackSettings::default()) else {
            panic!("default settings must build");
        };
        let region = sampler.fill(InclusiveRange::new(0, 63), InclusiveRange::new(0, 63));
        for zone in region {
            let base = zone & !zones::SPECIAL_MASK;
            assert!(
                is_ocean(zone)
                    || (zones::WARM..=zones::FREEZING).contains(&base)
                    || [
                        zones::RIVER,
                        zones::FROZEN_RIVER,
                        zones::MUSHROOM_FIELDS,
                        zones::MUSHROOM_FIELD_SHORE
                    ]
                    .contains(&zone),
                "unexpected zone {zone}"
            );
        }
    }
}
