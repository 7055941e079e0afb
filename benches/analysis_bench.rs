//! Benchmarks for the game analysis queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use normal_form_analyzer::analysis::GameAnalyzer;
use normal_form_analyzer::games::prep::random_game;

fn nash_benchmark(c: &mut Criterion) {
    let game = random_game(&mut StdRng::seed_from_u64(42), &[4, 4, 4]);
    let analyzer = GameAnalyzer::new(&game);

    c.bench_function("nash_4x4x4", |b| {
        b.iter(|| black_box(analyzer.nash_equilibria()))
    });
}

fn pareto_benchmark(c: &mut Criterion) {
    let game = random_game(&mut StdRng::seed_from_u64(42), &[6, 6]);
    let analyzer = GameAnalyzer::new(&game);

    c.bench_function("pareto_6x6", |b| {
        b.iter(|| black_box(analyzer.pareto_optimal_profiles()))
    });
}

fn elimination_benchmark(c: &mut Criterion) {
    let game = random_game(&mut StdRng::seed_from_u64(42), &[8, 8]);
    let analyzer = GameAnalyzer::new(&game);

    c.bench_function("iesds_8x8", |b| {
        b.iter(|| black_box(analyzer.elimination_with_trace(true)))
    });
}

criterion_group!(benches, nash_benchmark, pareto_benchmark, elimination_benchmark);
criterion_main!(benches);
