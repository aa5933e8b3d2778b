use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Failure modes of placing a mark. `InvalidMark` means an attempt to place
/// `Mark::Empty` and cannot happen through normal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    Occupied,
    InvalidMark,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::Occupied => write!(f, "cell is already marked"),
            PlaceError::InvalidMark => write!(f, "only X or O can be placed"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// Result of evaluating a board after a move. Derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win { mark: Mark, line: Vec<Position> },
    Draw,
}
