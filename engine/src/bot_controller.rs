use rand::prelude::IndexedRandom;

use crate::board::Board;
use crate::types::{Mark, Position};
use crate::win_detector::winning_line;

/// Strength tiers of the automated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Random,
    Heuristic,
    Minimax,
}

/// Picks a move for `bot_mark`. Returns `None` only when the board has no
/// empty cell; callers are expected not to ask for a move in that state.
/// Speculative placements made during the search are always undone, so the
/// board is unchanged when this returns.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> Option<Position> {
    match difficulty {
        Difficulty::Random => random_move(board),
        Difficulty::Heuristic => heuristic_move(board, bot_mark, opponent_mark),
        Difficulty::Minimax => minimax_move(board, bot_mark, opponent_mark),
    }
}

fn random_move(board: &Board) -> Option<Position> {
    board.available_moves().choose(&mut rand::rng()).copied()
}

/// One-ply lookahead: take an immediate win, otherwise block the opponent's
/// immediate win, otherwise play randomly. Deliberately blind to forks; the
/// weakness is what makes this the middle tier.
fn heuristic_move(board: &mut Board, bot_mark: Mark, opponent_mark: Mark) -> Option<Position> {
    if let Some(pos) = completing_move(board, bot_mark) {
        return Some(pos);
    }
    if let Some(pos) = completing_move(board, opponent_mark) {
        return Some(pos);
    }
    random_move(board)
}

/// First move in row-major order that would complete a line for `mark`.
fn completing_move(board: &mut Board, mark: Mark) -> Option<Position> {
    for pos in board.available_moves() {
        board.place(pos, mark);
        let wins = winning_line(board, mark).is_some();
        board.clear(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}

/// Exhaustive minimax over the full game tree. No pruning and no caching;
/// the board is small enough that full enumeration is fine.
fn minimax_move(board: &mut Board, bot_mark: Mark, opponent_mark: Mark) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        board.place(pos, bot_mark);
        let score = minimax(board, 0, false, bot_mark, opponent_mark);
        board.clear(pos);

        // Strictly greater keeps the first-found move on ties.
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    // Depth biases the engine toward the fastest win and the slowest loss.
    if winning_line(board, bot_mark).is_some() {
        return 10 - depth;
    }
    if winning_line(board, opponent_mark).is_some() {
        return depth - 10;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for pos in board.available_moves() {
            board.place(pos, bot_mark);
            let score = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board.clear(pos);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for pos in board.available_moves() {
            board.place(pos, opponent_mark);
            let score = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board.clear(pos);
            best_score = best_score.min(score);
        }
        best_score
    }
}
