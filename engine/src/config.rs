use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::session::{PlayerKind, SessionConfig};
use crate::tictactoe::{BotType, Mark};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub bot_mark: Mark,
    pub bot_type: BotType,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsBot,
            bot_mark: Mark::O,
            bot_type: BotType::Minimax,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_mark == Mark::Empty {
            return Err("bot_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl GameConfig {
    /// A missing file yields the default config; unreadable or invalid
    /// content is an error.
    pub fn from_yaml_file(file_path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn to_yaml_file(&self, file_path: &str) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(file_path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }

    pub fn to_session_config(&self, seed: u64) -> SessionConfig {
        let bot = PlayerKind::Bot(self.bot_type);
        match self.mode {
            GameMode::HumanVsHuman => SessionConfig {
                x: PlayerKind::Human,
                o: PlayerKind::Human,
                seed,
            },
            GameMode::HumanVsBot if self.bot_mark == Mark::X => SessionConfig {
                x: bot,
                o: PlayerKind::Human,
                seed,
            },
            GameMode::HumanVsBot => SessionConfig {
                x: PlayerKind::Human,
                o: bot,
                seed,
            },
        }
    }
}
