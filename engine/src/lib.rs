pub mod board;
pub mod bot_controller;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{Difficulty, calculate_move};
pub use types::{Mark, Outcome, PlaceError, Position};
pub use win_detector::{evaluate, is_draw, winning_line};
