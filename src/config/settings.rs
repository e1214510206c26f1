use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The feed the board reads when nothing else is configured.
pub const DEFAULT_FEED_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub board: BoardConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BoardConfig {
    pub url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            board: BoardConfig {
                url: DEFAULT_FEED_URL.to_string(),
            },
        }
    }
}

impl Settings {
    /// A missing config file is not an error; the fixed feed endpoint is
    /// the default.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let config_str = std::fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let settings: Settings = toml::from_str(&config_str)
            .context("Failed to parse config file")?;

        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, config_str)
            .context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".kanban"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let settings = Settings {
            board: BoardConfig {
                url: "https://feed.example.com/tickets".to_string(),
            },
        };

        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("https://feed.example.com/tickets"));

        let deserialized: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.board.url, "https://feed.example.com/tickets");
    }

    #[test]
    fn test_default_points_at_fixed_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.board.url, DEFAULT_FEED_URL);
    }
}
