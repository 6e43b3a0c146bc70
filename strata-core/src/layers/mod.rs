//! Standard layer rules of the classic layered zone generator.
//!
//! Each rule is exposed as a [`Transform`](crate::area::Transform) constant:
//! the sampling template is part of the rule's identity. Zone ids follow the
//! legacy numeric biome ids; before the climate stages, `1` simply means land.

pub mod climate;
pub mod land;
pub mod ocean;
pub mod river;
pub mod zoom;

/// Numeric zone ids produced by the standard layers.
pub mod zones {
    /// Shallow temperate ocean.
    pub const OCEAN: i32 = 0;
    /// Land, and later the warm climate band.
    pub const WARM: i32 = 1;
    /// Temperate climate band, buffering warm from cold.
    pub const TEMPERATE: i32 = 2;
    /// Cold climate band.
    pub const COLD: i32 = 3;
    /// Freezing climate band.
    pub const FREEZING: i32 = 4;
    /// River.
    pub const RIVER: i32 = 7;
    /// Frozen ocean.
    pub const FROZEN_OCEAN: i32 = 10;
    /// Frozen river.
    pub const FROZEN_RIVER: i32 = 11;
    /// Snowy tundra.
    pub const SNOWY_TUNDRA: i32 = 12;
    /// Mushroom island.
    pub const MUSHROOM_FIELDS: i32 = 14;
    /// Shore of a mushroom island.
    pub const MUSHROOM_FIELD_SHORE: i32 = 15;
    /// Deep temperate ocean.
    pub const DEEP_OCEAN: i32 = 24;
    /// Warm ocean.
    pub const WARM_OCEAN: i32 = 44;
    /// Lukewarm ocean.
    pub const LUKEWARM_OCEAN: i32 = 45;
    /// Cold ocean.
    pub const COLD_OCEAN: i32 = 46;
    /// Deep warm ocean.
    pub const DEEP_WARM_OCEAN: i32 = 47;
    /// Deep lukewarm ocean.
    pub const DEEP_LUKEWARM_OCEAN: i32 = 48;
    /// Deep cold ocean.
    pub const DEEP_COLD_OCEAN: i32 = 49;
    /// Deep frozen ocean.
    pub const DEEP_FROZEN_OCEAN: i32 = 50;

    /// Bits carrying the "special" variant flag added by the climate stage.
    pub const SPECIAL_MASK: i32 = 0xF00;

    /// Human readable name of a zone id, ignoring the special bits.
    #[must_use]
    pub const fn name(zone: i32) -> &'static str {
        match zone & !SPECIAL_MASK {
            OCEAN => "ocean",
            WARM => "warm",
            TEMPERATE => "temperate",
            COLD => "cold",
            FREEZING => "freezing",
            RIVER => "river",
            FROZEN_OCEAN => "frozen_ocean",
            FROZEN_RIVER => "frozen_river",
            SNOWY_TUNDRA => "snowy_tundra",
            MUSHROOM_FIELDS => "mushroom_fields",
            MUSHROOM_FIELD_SHORE => "mushroom_field_shore",
            DEEP_OCEAN => "deep_ocean",
            WARM_OCEAN => "warm_ocean",
            LUKEWARM_OCEAN => "lukewarm_ocean",
            COLD_OCEAN => "cold_ocean",
            DEEP_WARM_OCEAN => "deep_warm_ocean",
            DEEP_LUKEWARM_OCEAN => "deep_lukewarm_ocean",
            DEEP_COLD_OCEAN => "deep_cold_ocean",
            DEEP_FROZEN_OCEAN => "deep_frozen_ocean",
            _ => "unknown",
        }
    }
}

use zones::{
    COLD_OCEAN, DEEP_COLD_OCEAN, DEEP_FROZEN_OCEAN, DEEP_LUKEWARM_OCEAN, DEEP_OCEAN,
    DEEP_WARM_OCEAN, FROZEN_OCEAN, LUKEWARM_OCEAN, OCEAN, WARM_OCEAN,
};

/// Whether `zone` is one of the shallow oceans.
#[must_use]
pub const fn is_shallow_ocean(zone: i32) -> bool {
    matches!(
        zone,
        WARM_OCEAN | LUKEWARM_OCEAN | OCEAN | COLD_OCEAN | FROZEN_OCEAN
    )
}

/// Whether `zone` is any ocean, shallow or deep.
#[must_use]
pub const fn is_ocean(zone: i32) -> bool {
    is_shallow_ocean(zone)
        || matches!(
            zone,
            DEEP_WARM_OCEAN | DEEP_LUKEWARM_OCEAN | DEEP_OCEAN | DEEP_COLD_OCEAN | DEEP_FROZEN_OCEAN
        )
}
