use serde::{Deserialize, Serialize};
use tictactoe_engine::{
    Board, Difficulty, Mark, Outcome, PlaceError, Position, calculate_move, evaluate,
};

use crate::messages::{AiMove, MoveResponse};

const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Two,
    Single,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl BotDifficulty {
    fn to_engine(self) -> Difficulty {
        match self {
            BotDifficulty::Easy => Difficulty::Random,
            BotDifficulty::Medium => Difficulty::Heuristic,
            BotDifficulty::Hard => Difficulty::Minimax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

/// One live game. X is always the human side that moves first; in
/// single-player mode O is the bot.
pub struct GameSession {
    board: Board,
    current_turn: Mark,
    mode: Mode,
    difficulty: BotDifficulty,
    status: GameStatus,
}

impl GameSession {
    pub fn new(mode: Mode, difficulty: BotDifficulty) -> Self {
        Self {
            board: Board::new(BOARD_SIZE),
            current_turn: Mark::X,
            mode,
            difficulty,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies one move for the side to play, then (in single-player mode)
    /// lets the bot answer. Won and Drawn sessions accept no further moves.
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveResponse {
        if self.status != GameStatus::InProgress {
            return MoveResponse::rejected("finished");
        }
        if !self.board.in_bounds(row, col) {
            return MoveResponse::rejected("out_of_bounds");
        }

        let mover = self.current_turn;
        match self.board.set(row, col, mover) {
            Ok(()) => {}
            Err(PlaceError::Occupied) => return MoveResponse::rejected("occupied"),
            Err(PlaceError::InvalidMark) => unreachable!("current turn is always X or O"),
        }

        let mut outcome = evaluate(&self.board);
        self.record_outcome(&outcome);

        let mut ai_move = None;
        if self.status == GameStatus::InProgress {
            self.switch_turn();

            if self.mode == Mode::Single && self.current_turn == Mark::O {
                if let Some(pos) = self.play_bot_turn() {
                    ai_move = Some(AiMove {
                        row: pos.row,
                        col: pos.col,
                    });
                    outcome = evaluate(&self.board);
                    self.record_outcome(&outcome);
                    self.current_turn = Mark::X;
                }
            }
        }

        let win = match &outcome {
            Outcome::Win { line, .. } => line.iter().map(|pos| (pos.row, pos.col)).collect(),
            _ => Vec::new(),
        };

        MoveResponse {
            status: "ok",
            board: Some(self.render_board()),
            current: Some(mark_char(mover)),
            win: Some(win),
            draw: Some(outcome == Outcome::Draw),
            ai_move,
        }
    }

    fn play_bot_turn(&mut self) -> Option<Position> {
        let pos = calculate_move(
            self.difficulty.to_engine(),
            &mut self.board,
            Mark::O,
            Mark::X,
        )?;
        if self.board.set(pos.row, pos.col, Mark::O).is_err() {
            return None;
        }
        Some(pos)
    }

    fn record_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark, .. } => self.status = GameStatus::Won(*mark),
            Outcome::Draw => self.status = GameStatus::Drawn,
            Outcome::Ongoing => {}
        }
    }

    fn switch_turn(&mut self) {
        self.current_turn = if self.current_turn == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn render_board(&self) -> Vec<Vec<char>> {
        (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| mark_char(self.board.get(row, col)))
                    .collect()
            })
            .collect()
    }

    #[cfg(test)]
    fn preset(mode: Mode, difficulty: BotDifficulty, marks: &[(usize, usize, Mark)]) -> Self {
        let mut session = Self::new(mode, difficulty);
        for &(row, col, mark) in marks {
            session.board.set(row, col, mark).unwrap();
        }
        session
    }
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Empty => '.',
        Mark::X => 'X',
        Mark::O => 'O',
    }
}
