use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::tictactoe::GameMode;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";
pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: GameMode,
    /// Pause before the computer answers a human move.
    pub computer_delay_ms: u64,
    pub show_cell_numbers: bool,
}

impl Config {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            computer_delay_ms: 500,
            show_cell_numbers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("mode: human_vs_human"));
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_written_and_read_back_from_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        let config = Config {
            mode: GameMode::HumanVsComputer,
            computer_delay_ms: 0,
            show_cell_numbers: false,
        };

        manager.set_config(&config).unwrap();

        let reader = get_config_manager(Some(file_path.clone()));
        assert_eq!(reader.get_config(), Ok(config));

        let content_provider = FileContentConfigProvider::new(file_path.clone());
        let content = content_provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("mode: human_vs_computer"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_delay_too_long_is_invalid() {
        let config = Config {
            computer_delay_ms: MAX_COMPUTER_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
