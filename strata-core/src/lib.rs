//! Lazily evaluated, cache-bounded layered zone generation.
//!
//! - [`area`] - layer contexts, the shared cache, the node arena, sampling
//!   templates and factories
//! - [`layers`] - the standard layer rules
//! - [`pipeline`] - the default zone stack and [`ZoneSampler`](pipeline::ZoneSampler)
//!
//! ```
//! use strata_core::pipeline::{StackSettings, ZoneSampler};
//!
//! let mut sampler = ZoneSampler::new(42, &StackSettings::default())?;
//! let zone = sampler.sample(10, -20);
//! assert_eq!(zone, sampler.sample(10, -20));
//! # Ok::<(), strata_core::pipeline::SettingsError>(())
//! ```

pub mod area;
pub mod layers;
pub mod pipeline;
