//! Criterion benchmarks for the annealing assignment solver.
//!
//! Uses random value matrices so the numbers reflect solver overhead plus
//! `O(N)` scoring per evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_assign::assign::{AnnealConfig, ConfigurationSolver, ValueMatrix};

fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_single_pass");
    group.sample_size(20);

    for &n in &[10usize, 50, 200] {
        let mut rng = StdRng::seed_from_u64(42);
        let matrix = ValueMatrix::random(n, 0..=1000, &mut rng);
        let config = AnnealConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let mut solver = ConfigurationSolver::with_config(m, c.clone()).unwrap();
                    black_box(solver.run_search().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_slow_cooling(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_slow_cooling");
    group.sample_size(10);

    for &n in &[20usize, 100] {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = ValueMatrix::random(n, 0..=1000, &mut rng);
        let config = AnnealConfig::default()
            .with_cooling_rate(0.999)
            .with_distinct_swaps(true)
            .with_seed(7);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_r0.999", n), n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let mut solver = ConfigurationSolver::with_config(m, c.clone()).unwrap();
                    black_box(solver.run_search().unwrap())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_pass, bench_slow_cooling);
criterion_main!(benches);
