use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::{Difficulty, GameMode};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum GameModeKind {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl GameModeKind {
    pub fn with_difficulty(self, difficulty: Difficulty) -> GameMode {
        match self {
            GameModeKind::PlayerVsPlayer => GameMode::PlayerVsPlayer,
            GameModeKind::PlayerVsComputer => GameMode::PlayerVsBot(difficulty),
        }
    }
}

impl FromStr for GameModeKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameModeKind::PlayerVsPlayer),
            "pve" => Ok(GameModeKind::PlayerVsComputer),
            _ => Err(format!("Unknown mode '{}', expected pvp or pve", value)),
        }
    }
}
