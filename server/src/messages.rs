use serde::{Deserialize, Serialize};

use crate::session::{BotDifficulty, Mode};

#[derive(Debug, Default, Deserialize)]
pub struct NewGameRequest {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub difficulty: BotDifficulty,
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub status: &'static str,
    pub mode: Mode,
    pub difficulty: BotDifficulty,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiMove {
    pub row: usize,
    pub col: usize,
}

/// Reply to a `/move` request. Rejections carry only the status; accepted
/// moves carry the rendered board and the evaluation after the move (and
/// after the bot's answer, in single-player mode).
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Vec<char>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win: Option<Vec<(usize, usize)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_move: Option<AiMove>,
}

impl MoveResponse {
    pub fn rejected(status: &'static str) -> Self {
        Self {
            status,
            board: None,
            current: None,
            win: None,
            draw: None,
            ai_move: None,
        }
    }
}
