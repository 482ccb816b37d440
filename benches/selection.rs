use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knucklebones::ai::{select_column, SelectionView};
use knucklebones::core::{DiceSource, Difficulty, GameConfig, SeededDice};
use knucklebones::grid::Grid;
use knucklebones::play::{MatchConfig, MatchRunner};
use knucklebones::rules::TurnEngine;
use knucklebones::scoring::total_score;

fn bench_select_column(c: &mut Criterion) {
    let own = Grid::from_faces([&[3, 5], &[1], &[6, 6]]);
    let enemy = Grid::from_faces([&[5, 5], &[2, 4, 1], &[]]);
    let mut dice = SeededDice::new(12345);

    let mut g = c.benchmark_group("select_column");
    for difficulty in Difficulty::ALL {
        g.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &difficulty,
            |b, &difficulty| {
                b.iter(|| {
                    let value = dice.roll_die();
                    let view = SelectionView::new(&own, &enemy, value);
                    black_box(select_column(difficulty, black_box(&view), &mut dice))
                })
            },
        );
    }
    g.finish();
}

fn bench_score(c: &mut Criterion) {
    let grid = Grid::from_faces([&[4, 4, 4], &[1, 2, 1], &[6, 5]]);

    c.bench_function("total_score", |b| {
        b.iter(|| black_box(total_score(black_box(&grid))))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = MatchConfig::new(Difficulty::Hard, Difficulty::Medium).with_games(1);
    let runner = MatchRunner::new(config);
    let mut seed = 0u64;

    c.bench_function("hard_vs_medium_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(runner.play_game(seed))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = TurnEngine::seeded(GameConfig::new().without_coin_flip(), 9);
    for _ in 0..12 {
        if engine.play_turn_with(Difficulty::Easy).is_err() {
            break;
        }
    }

    c.bench_function("state_snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(
    benches,
    bench_select_column,
    bench_score,
    bench_full_game,
    bench_snapshot
);
criterion_main!(benches);
