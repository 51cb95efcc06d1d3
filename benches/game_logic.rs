use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{Board, FallingPiece, GameSnapshot, GameState, Ruleset, Tetrimino};
use blocktris::term::{FrameBuffer, GameView, Viewport};
use blocktris::types::{Cell, GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(Ruleset::modern(), 12345);
    state.start();

    c.bench_function("tick", |b| {
        b.iter(|| {
            if state.tick() == blocktris::core::TickOutcome::GameOver {
                state.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full: [Cell; 10] = [1; 10];
    let template = Board::from_rows(&[full; 4]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = template.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let t = Tetrimino::template(PieceKind::I);

    c.bench_function("rotate_cw", |b| b.iter(|| black_box(black_box(t).rotate_cw())));
}

fn bench_drop_distance(c: &mut Criterion) {
    let board = Board::from_rows(&[[1, 0, 1, 0, 1, 0, 1, 0, 1, 0]; 6]);
    let piece = FallingPiece::spawn(PieceKind::T, true);

    c.bench_function("drop_distance", |b| {
        b.iter(|| black_box(piece.drop_distance(black_box(&board))))
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_100_pieces", |b| {
        b.iter(|| {
            let mut state = GameState::new(Ruleset::modern(), black_box(7));
            state.start();
            for _ in 0..100 {
                state.apply_action(GameAction::HardDrop);
            }
            black_box(state.score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(Ruleset::modern(), 12345);
    state.start();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_drop_distance,
    bench_hard_drop_game,
    bench_render
);
criterion_main!(benches);
