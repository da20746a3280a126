use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrocell::core::{can_place, drop_y, GameState, Matrix, PiecePosition};
use tetrocell::types::{CellColor, GameAction, Rotation, TetrominoKind};

fn bench_step_move(c: &mut Criterion) {
    let state = GameState::with_seed(12345);

    c.bench_function("step_move_left", |b| {
        b.iter(|| state.step(black_box(GameAction::MoveLeft), 0))
    });
}

fn bench_step_drop(c: &mut Criterion) {
    let state = GameState::with_seed(12345);

    c.bench_function("step_hard_drop", |b| {
        b.iter(|| state.step(black_box(GameAction::Drop), 0))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_2_rows", |b| {
        b.iter(|| {
            let mut board = Matrix::new(10, 20);
            // Fill bottom 2 rows
            for y in 18..20 {
                for x in 0..10 {
                    board.set(x, y, Some(CellColor::Cyan));
                }
            }
            let full: Vec<usize> = board.full_rows().into_iter().collect();
            board.clear_rows(&full)
        })
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let board = Matrix::new(10, 20);
    let pos = PiecePosition {
        x: 4,
        y: 10,
        rotation: Rotation::R1,
    };

    c.bench_function("can_place", |b| {
        b.iter(|| can_place(TetrominoKind::T, black_box(pos), &board))
    });
}

fn bench_drop_estimate(c: &mut Criterion) {
    let board = Matrix::new(10, 20);
    let pos = PiecePosition {
        x: 4,
        y: 0,
        rotation: Rotation::R0,
    };

    c.bench_function("drop_y_empty_board", |b| {
        b.iter(|| drop_y(TetrominoKind::I, black_box(pos), &board))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_seed(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(&state).snapshot()));
}

criterion_group!(
    benches,
    bench_step_move,
    bench_step_drop,
    bench_line_clear,
    bench_placement_check,
    bench_drop_estimate,
    bench_snapshot
);
criterion_main!(benches);
