//! Tally fold micro-benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duel_core::{tally, Card, CardId, RoundResult, TallyConfig, Winner};

fn five_round_log() -> Vec<RoundResult> {
    let card = |id: u32, power: i64| Card::new(CardId::new(id), format!("Card {id}"), power);

    [
        Winner::Player,
        Winner::Player,
        Winner::Enemy,
        Winner::Player,
        Winner::Enemy,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, winner)| {
        let n = i as u32 + 1;
        RoundResult::with_winner(n, winner, card(n * 2, 9), card(n * 2 + 1, 1))
    })
    .collect()
}

fn bench_tally(c: &mut Criterion) {
    let results = five_round_log();
    let config = TallyConfig::default();

    c.bench_function("tally_five_rounds", |b| {
        b.iter(|| tally(black_box(&results), black_box(&config)))
    });
}

criterion_group!(benches, bench_tally);
criterion_main!(benches);
