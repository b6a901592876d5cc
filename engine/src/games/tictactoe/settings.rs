use serde::{Deserialize, Serialize};
use crate::config::Validate;
use super::types::{BotType, FirstPlayerMode, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub first_player: FirstPlayerMode,
    pub ai_mark: Mark,
    pub bot_type: BotType,
    pub seed: Option<u64>,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Random,
            ai_mark: Mark::X,
            bot_type: BotType::Minimax,
            seed: None,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.ai_mark == Mark::Empty {
            return Err("ai_mark must be X or O".to_string());
        }
        Ok(())
    }
}
