use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".profit_tracker";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that relocates all tracker files.
pub const HOME_ENV: &str = "PROFIT_TRACKER_HOME";

/// Returns the application data directory, defaulting to `~/.profit_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Data file for a storage key, e.g. `financial-tracker-data.json`.
pub fn data_file_in(base: &std::path::Path, storage_key: &str) -> PathBuf {
    base.join(format!("{}.json", storage_key))
}
