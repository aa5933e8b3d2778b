use crate::board::Board;
use crate::types::{Mark, Outcome, Position};

/// Returns the first line fully occupied by `mark`, scanning rows
/// top-to-bottom, then columns left-to-right, then the main diagonal, then
/// the anti-diagonal. The scan order makes the reported line deterministic
/// when a board satisfies more than one.
pub fn winning_line(board: &Board, mark: Mark) -> Option<Vec<Position>> {
    let size = board.size();

    for row in 0..size {
        if (0..size).all(|col| board.get(row, col) == mark) {
            return Some((0..size).map(|col| Position::new(row, col)).collect());
        }
    }

    for col in 0..size {
        if (0..size).all(|row| board.get(row, col) == mark) {
            return Some((0..size).map(|row| Position::new(row, col)).collect());
        }
    }

    if (0..size).all(|i| board.get(i, i) == mark) {
        return Some((0..size).map(|i| Position::new(i, i)).collect());
    }

    if (0..size).all(|i| board.get(i, size - 1 - i) == mark) {
        return Some((0..size).map(|i| Position::new(i, size - 1 - i)).collect());
    }

    None
}

/// True iff every cell is occupied. Callers must check `winning_line` first:
/// a full board with a winning line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Combined terminal check. The win check dominates the draw check.
pub fn evaluate(board: &Board) -> Outcome {
    for mark in [Mark::X, Mark::O] {
        if let Some(line) = winning_line(board, mark) {
            return Outcome::Win { mark, line };
        }
    }
    if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
