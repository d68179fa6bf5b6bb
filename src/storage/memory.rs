use std::sync::{Mutex, PoisonError};

use crate::{domain::DailyRecord, errors::Result};

use super::RecordRepository;

/// Process-local repository for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<DailyRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DailyRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Copy of whatever was saved last.
    pub fn snapshot(&self) -> Vec<DailyRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RecordRepository for MemoryRepository {
    fn load(&self) -> Vec<DailyRecord> {
        self.snapshot()
    }

    fn save(&self, records: &[DailyRecord]) -> Result<()> {
        let mut guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = records.to_vec();
        Ok(())
    }
}
