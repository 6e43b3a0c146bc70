//! `strata`: samples the default zone stack over a region and reports it.
//!
//! Usage: `strata [config.json5]`. Logging is controlled with `RUST_LOG`.

mod config;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use strata_core::area::AreaFactory;
use strata_core::layers::zones;
use strata_core::pipeline::{ZoneSampler, zone_stack};
use strata_utils::range::InclusiveRange;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_CONFIG_PATH, StrataConfig};

fn main() -> Result<()> {
    init_tracing();

    let path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = StrataConfig::load(&path)?;

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("Failed to configure the worker pool")?;
    }

    let seed = config.world_seed();
    let settings = config.stack_settings();
    let factory = zone_stack(&settings)?;
    log::info!(
        "Zone stack ready: {} stages, seed {seed}, biome size {}, river size {}",
        factory.stage_count(),
        settings.zoom.biome_size,
        settings.zoom.river_size
    );

    let start = Instant::now();
    let region = sample_region(
        &factory,
        seed,
        settings.leaf_cache,
        config.region.x,
        config.region.z,
    );
    tracing::info!(
        "Sampled {} zones on {} threads in {:?}",
        region.len(),
        rayon::current_num_threads(),
        start.elapsed()
    );

    report(&region);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Samples `x` by `z` row by row. Each rayon job realizes its own arena.
#[tracing::instrument(level = "info", skip(factory, leaf_cache))]
fn sample_region(
    factory: &AreaFactory,
    seed: i64,
    leaf_cache: usize,
    x: InclusiveRange,
    z: InclusiveRange,
) -> Vec<i32> {
    let xs = x.resolve();
    let rows: Vec<Vec<i32>> = z
        .resolve()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map_init(
            || ZoneSampler::from_factory(factory, seed, leaf_cache),
            |sampler, row| xs.clone().map(|col| sampler.sample(col, row)).collect(),
        )
        .collect();
    rows.concat()
}

/// Logs the zone histogram and the MD5 fingerprint of the region.
fn report(region: &[i32]) {
    let mut counts: FxHashMap<&'static str, usize> = FxHashMap::default();
    let mut fingerprint = md5::Context::new();
    for &zone in region {
        *counts.entry(zones::name(zone)).or_default() += 1;
        fingerprint.consume(zone.to_le_bytes());
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (name, count) in counts {
        let share = count as f64 * 100.0 / region.len() as f64;
        tracing::info!("{name:>22} {count:>8} ({share:5.2}%)");
    }
    tracing::info!("Fingerprint {:x}", fingerprint.finalize());
}
