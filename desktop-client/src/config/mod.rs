mod game_mode;
mod main_config;
mod window_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use game_mode::GameModeKind;
pub use main_config::{Config, get_config_manager};
pub use window_config::WindowConfig;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;
