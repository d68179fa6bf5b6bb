use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    errors::TrackerError,
    utils::{
        paths,
        persistence::{ensure_dir, write_atomic},
    },
};

/// Target profit used for goal progress when no config file says otherwise.
pub const DEFAULT_GOAL: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
pub const DEFAULT_STORAGE_KEY: &str = "financial-tracker-data";
pub const DEFAULT_SAMPLE_DAYS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub goal_amount: Decimal,
    pub storage_key: String,
    pub sample_days: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            goal_amount: DEFAULT_GOAL,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            sample_days: DEFAULT_SAMPLE_DAYS,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.goal_amount <= Decimal::ZERO {
            return Err(TrackerError::Config(format!(
                "goal_amount must be positive, got {}",
                self.goal_amount
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(TrackerError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<TrackerConfig, TrackerError> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            TrackerConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<(), TrackerError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.goal_amount, dec!(1000));
        assert_eq!(config.storage_key, "financial-tracker-data");
        assert_eq!(config.sample_days, 30);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = TrackerConfig {
            goal_amount: dec!(2500),
            ..TrackerConfig::default()
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"goal_amount":"500"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.goal_amount, dec!(500));
        assert_eq!(config.sample_days, DEFAULT_SAMPLE_DAYS);
    }

    #[test]
    fn non_positive_goal_is_rejected() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"goal_amount":"0"}"#).unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::Config(_))));
    }
}
