//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ladder_rating::{
    Glicko2Engine, GlickoConfig, MatchOutcome, MatchResult, Opponent, PlayerPeriod, RatingState,
};

fn create_engine() -> Glicko2Engine {
    Glicko2Engine::new(GlickoConfig::default()).unwrap()
}

fn reference_period() -> Vec<MatchOutcome> {
    vec![
        MatchOutcome::win(Opponent::new(1400.0, 30.0).unwrap()),
        MatchOutcome::loss(Opponent::new(1550.0, 100.0).unwrap()),
        MatchOutcome::loss(Opponent::new(1700.0, 300.0).unwrap()),
    ]
}

fn busy_period(matches: usize) -> Vec<MatchOutcome> {
    (0..matches)
        .map(|i| {
            let opponent =
                Opponent::new(1300.0 + (i as f64 * 11.0) % 500.0, 40.0 + (i as f64 * 7.0) % 250.0)
                    .unwrap();
            let result = match i % 3 {
                0 => MatchResult::Win,
                1 => MatchResult::Draw,
                _ => MatchResult::Loss,
            };
            MatchOutcome::new(result, opponent)
        })
        .collect()
}

fn bench_reference_update(c: &mut Criterion) {
    let engine = create_engine();
    let prior = RatingState::new(1500.0, 200.0, 0.06).unwrap();
    let period = reference_period();

    c.bench_function("rate_reference_period", |b| {
        b.iter(|| black_box(engine.rate(&prior, &period)))
    });
}

fn bench_busy_period_update(c: &mut Criterion) {
    let engine = create_engine();
    let prior = RatingState::new(1500.0, 200.0, 0.06).unwrap();
    let period = busy_period(50);

    c.bench_function("rate_50_match_period", |b| {
        b.iter(|| black_box(engine.rate(&prior, &period)))
    });
}

fn bench_empty_period_update(c: &mut Criterion) {
    let engine = create_engine();
    let prior = RatingState::new(1500.0, 200.0, 0.06).unwrap();

    c.bench_function("rate_empty_period", |b| {
        b.iter(|| black_box(engine.rate(&prior, &[])))
    });
}

fn bench_population_update(c: &mut Criterion) {
    let engine = create_engine();
    let players: Vec<PlayerPeriod> = (0..100)
        .map(|i| PlayerPeriod {
            player_id: format!("player_{}", i),
            prior: RatingState::new(1400.0 + (i as f64 * 13.0) % 300.0, 150.0, 0.06).unwrap(),
            outcomes: busy_period(5),
        })
        .collect();

    c.bench_function("rate_all_100_players", |b| {
        b.iter(|| black_box(engine.rate_all(&players)))
    });
}

criterion_group!(
    benches,
    bench_reference_update,
    bench_busy_period_update,
    bench_empty_period_update,
    bench_population_update
);
criterion_main!(benches);
