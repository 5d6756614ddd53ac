//! Configuration file support for FlexFit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/flexfit/config.toml`.

use crate::{Error, Experience, Goal, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: PlanDefaults,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub data: DataConfig,
}

/// Values used when the command line leaves them out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanDefaults {
    #[serde(default)]
    pub experience: Experience,

    #[serde(default)]
    pub goal: Goal,

    #[serde(default = "default_minutes_per_session")]
    pub minutes_per_session: u32,

    #[serde(default = "default_owner_id")]
    pub owner_id: String,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            experience: Experience::default(),
            goal: Goal::default(),
            minutes_per_session: default_minutes_per_session(),
            owner_id: default_owner_id(),
        }
    }
}

/// Exercise catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir().join(".local/share"));
    base.join("flexfit")
}

fn default_minutes_per_session() -> u32 {
    45
}

fn default_owner_id() -> String {
    std::env::var("USER").unwrap_or_else(|_| "local".to_string())
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir().join(".config"));
        base.join("flexfit").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.defaults.minutes_per_session == 0 {
            return Err(Error::Config(
                "defaults.minutes_per_session must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Directory generated plans are saved under
    pub fn plans_dir(&self) -> PathBuf {
        self.data.data_dir.join("plans")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.experience, Experience::Beginner);
        assert_eq!(config.defaults.goal, Goal::GeneralFitness);
        assert_eq!(config.defaults.minutes_per_session, 45);
        assert!(config.catalog.path.is_none());
        assert!(config.plans_dir().ends_with("flexfit/plans"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.experience = Experience::Advanced;
        config.catalog.path = Some(PathBuf::from("/srv/exercises.json"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.experience, Experience::Advanced);
        assert_eq!(loaded.catalog.path, config.catalog.path);
        assert_eq!(loaded.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[defaults]
experience = "intermediate"
goal = "fat_loss"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.experience, Experience::Intermediate);
        assert_eq!(config.defaults.goal, Goal::FatLoss);
        assert_eq!(config.defaults.minutes_per_session, 45); // default
    }

    #[test]
    fn test_zero_minutes_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nminutes_per_session = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
