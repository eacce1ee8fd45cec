use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameState};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{Block, Color, Command};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        let mut state = GameState::with_seed(12345);
        state.start();
        b.iter(|| {
            if state.game_over() {
                state = GameState::with_seed(12345);
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_advance_frame(c: &mut Criterion) {
    c.bench_function("advance_16ms", |b| {
        let mut state = GameState::with_seed(12345);
        state.start();
        b.iter(|| {
            if state.game_over() {
                state = GameState::with_seed(12345);
                state.start();
            }
            black_box(state.advance(black_box(16)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let block = Some(Block {
        color: Color(0x336699),
        piece_id: 1,
    });
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 20..24 {
                for col in 0..10 {
                    board.set(col, row, block);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_commands(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.apply_command(black_box(Command::MoveRight));
            state.apply_command(black_box(Command::RotateCw));
            state.apply_command(black_box(Command::MoveLeft));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 30);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            view.render_into(&state.snapshot(), Viewport::new(80, 30), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_advance_frame,
    bench_line_clear,
    bench_commands,
    bench_render
);
criterion_main!(benches);
