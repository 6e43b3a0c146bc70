#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use strata_core::pipeline::{StackSettings, ZoneSampler, zone_stack};
use strata_utils::range::InclusiveRange;

/// Sample a square region row by row, the way chunk generation walks it.
fn sample_square(sampler: &mut ZoneSampler, origin_x: i32, origin_y: i32, side: i32) {
    for y in origin_y..origin_y + side {
        for x in origin_x..origin_x + side {
            black_box(sampler.sample(x, y));
        }
    }
}

fn bench_realize_stack(c: &mut Criterion) {
    let settings = StackSettings::default();
    let Ok(factory) = zone_stack(&settings) else {
        panic!("default settings must build");
    };

    c.bench_function("zone_stack_realize", |b| {
        b.iter(|| ZoneSampler::from_factory(&factory, black_box(0), settings.leaf_cache));
    });
}

fn bench_cold_region(c: &mut Criterion) {
    let settings = StackSettings::default();
    let Ok(factory) = zone_stack(&settings) else {
        panic!("default settings must build");
    };

    let mut group = c.benchmark_group("zone_cold_region");
    for side in [16, 64] {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &side,
            |b, &side| {
                b.iter(|| {
                    let mut sampler =
                        ZoneSampler::from_factory(&factory, 0, settings.leaf_cache);
                    sample_square(&mut sampler, black_box(-side / 2), black_box(-side / 2), side);
                });
            },
        );
    }
    group.finish();
}

fn bench_warm_fill(c: &mut Criterion) {
    let Ok(mut sampler) = ZoneSampler::new(0, &StackSettings::default()) else {
        panic!("default settings must build");
    };
    let range = InclusiveRange::new(0, 31);
    sampler.fill(range, range);

    c.bench_function("zone_warm_fill_32x32", |b| {
        b.iter(|| black_box(sampler.fill(range, range)));
    });
}

fn bench_cramped_ceilings(c: &mut Criterion) {
    let Ok(factory) = zone_stack(&StackSettings::default()) else {
        panic!("default settings must build");
    };

    c.bench_function("zone_cold_region_ceiling_1_16x16", |b| {
        b.iter(|| {
            let mut sampler = ZoneSampler::from_factory(&factory, 0, 1);
            sample_square(&mut sampler, black_box(0), black_box(0), 16);
        });
    });
}

criterion_group!(
    benches,
    bench_realize_stack,
    bench_cold_region,
    bench_warm_fill,
    bench_cramped_ceilings
);
criterion_main!(benches);
