use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, Difficulty, Mark, Outcome, calculate_move, evaluate};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_opening_move", |b| {
        b.iter(|| {
            let mut board = Board::new(3);
            calculate_move(Difficulty::Minimax, &mut board, Mark::X, Mark::O)
        });
    });
}

fn bench_minimax_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_midgame_move", |b| {
        let mut board = Board::new(3);
        let moves = [
            (1, 1, Mark::X),
            (0, 0, Mark::O),
            (2, 0, Mark::X),
            (0, 2, Mark::O),
        ];
        for (row, col, mark) in moves {
            board.set(row, col, mark).unwrap();
        }

        b.iter(|| {
            let mut board = board.clone();
            calculate_move(Difficulty::Minimax, &mut board, Mark::X, Mark::O)
        });
    });
}

fn bench_minimax_self_play(c: &mut Criterion) {
    c.bench_function("minimax_3x3_full_self_play", |b| {
        b.iter(|| {
            let mut board = Board::new(3);
            let mut current = Mark::X;

            while evaluate(&board) == Outcome::Ongoing {
                let opponent = current.opponent().unwrap();
                let pos = calculate_move(Difficulty::Minimax, &mut board, current, opponent)
                    .expect("ongoing game has moves");
                board.set(pos.row, pos.col, current).unwrap();
                current = opponent;
            }

            board
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_mid_game,
    bench_minimax_self_play
);
criterion_main!(benches);
