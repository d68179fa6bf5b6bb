use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::DailyRecord,
    errors::Result,
    utils::{
        paths,
        persistence::{ensure_dir, write_atomic},
    },
};

use super::RecordRepository;

/// Keeps the record list in a single pretty-printed JSON file named after the
/// storage key.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(base_dir: &Path, storage_key: &str) -> Result<Self> {
        ensure_dir(base_dir)?;
        Ok(Self {
            path: paths::data_file_in(base_dir, storage_key),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> Vec<DailyRecord> {
        if !self.path.exists() {
            return Vec::new();
        }
        match load_records_from_path(&self.path) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored records unreadable; starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[DailyRecord]) -> Result<()> {
        save_records_to_path(records, &self.path)
    }
}

pub fn save_records_to_path(records: &[DailyRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    write_atomic(path, &json)
}

pub fn load_records_from_path(path: &Path) -> Result<Vec<DailyRecord>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
