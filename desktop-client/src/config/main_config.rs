use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::Difficulty;

use super::{ClientConfigManager, ConfigManager, GameModeKind, WindowConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path_override: Option<&str>) -> ClientConfigManager {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub last_mode: Option<GameModeKind>,
    pub difficulty: Difficulty,
    #[serde(default = "default_bot_move_delay_ms")]
    pub bot_move_delay_ms: u32,
    #[serde(default)]
    pub window: WindowConfig,
}

const DEFAULT_BOT_MOVE_DELAY_MS: u32 = 500;

fn default_bot_move_delay_ms() -> u32 {
    DEFAULT_BOT_MOVE_DELAY_MS
}

impl Config {
    const MAX_BOT_MOVE_DELAY_MS: u32 = 5000;
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > Self::MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                Self::MAX_BOT_MOVE_DELAY_MS
            ));
        }
        self.window.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_mode: None,
            difficulty: Difficulty::Medium,
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
            window: WindowConfig::default(),
        }
    }
}
