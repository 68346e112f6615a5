use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memory_match::deck;
use memory_match::{GameRng, GameSession, GridSize, MoveLimit, Selection};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for n in [2, 4, 10] {
        let size = GridSize::new(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = GameRng::new(42);
            b.iter(|| deck::generate(black_box(size), &mut rng));
        });
    }
    group.finish();
}

/// Play a 10x10 board to completion, matching every pair on sight.
fn bench_perfect_game(c: &mut Criterion) {
    let size = GridSize::new(10).unwrap();
    let dealt = deck::generate(size, &mut GameRng::new(42));
    let plan: Vec<_> = dealt
        .tiles()
        .iter()
        .filter_map(|t| dealt.partner(t.id).filter(|p| *p > t.id).map(|p| (t.id, p)))
        .collect();

    c.bench_function("perfect_game_10x10", |b| {
        b.iter(|| {
            let mut session = GameSession::new(dealt.clone(), MoveLimit::new(100).unwrap());
            let now = Instant::now();
            for &(first, second) in &plan {
                session.select_tile(first, now);
                let result = session.select_tile(second, now);
                debug_assert!(matches!(result, Selection::Matched(..)));
            }
            black_box(session.outcome())
        });
    });
}

criterion_group!(benches, bench_generate, bench_perfect_game);
criterion_main!(benches);
