use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use tictactoe_engine::tictactoe::{Board, GameStatus, Mark, TicTacToeGameState, best_move};

fn bench_first_move_empty_board() {
    let board = Board::new();
    black_box(best_move(&board, Mark::X, Mark::X));
}

fn bench_single_move_mid_game() {
    let board = Board::from_cells([
        Mark::X,
        Mark::Empty,
        Mark::Empty,
        Mark::Empty,
        Mark::O,
        Mark::Empty,
        Mark::Empty,
        Mark::Empty,
        Mark::X,
    ]);
    black_box(best_move(&board, Mark::O, Mark::O));
}

fn bench_full_self_play_game() {
    let mut state = TicTacToeGameState::new();

    while state.status == GameStatus::InProgress {
        let Some(result) = best_move(&state.board, state.current_mark, state.current_mark) else {
            break;
        };
        let Some(index) = result.index else {
            break;
        };
        if state.place_mark(index).is_err() {
            break;
        }
    }

    black_box(state.status);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("first_move_empty_board", |b| {
        b.iter(bench_first_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
