//! Dataset generation benchmarks.
//!
//! Measures pair enumeration alone (draining the edge iterator) and the full
//! path through the CSV writer into a discarding sink.
use std::io;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphgen_benches::params::{GenerateBenchParams, SEED};
use graphgen_core::GeneratorError;
use rand::{SeedableRng, rngs::SmallRng};

fn generate_impl(c: &mut Criterion) -> Result<(), GeneratorError> {
    let mut enumerate = c.benchmark_group("enumerate_edges");
    enumerate.sample_size(20);
    for params in GenerateBenchParams::grid() {
        let generator = params.generator()?;
        enumerate.bench_with_input(BenchmarkId::from_parameter(params), &generator, |b, generator| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                generator.edges(&mut rng).count()
            });
        });
    }
    enumerate.finish();

    let mut write = c.benchmark_group("write_csv");
    write.sample_size(10);
    for params in GenerateBenchParams::grid() {
        let generator = params.generator()?;
        write.bench_with_input(BenchmarkId::from_parameter(params), &generator, |b, generator| {
            b.iter(|| generator.write_to_writer(io::sink()));
        });
    }
    write.finish();
    Ok(())
}

fn generate(c: &mut Criterion) {
    if let Err(err) = generate_impl(c) {
        panic!("generate benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate);
criterion_main!(benches);
