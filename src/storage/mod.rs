pub mod csv_codec;
pub mod json_backend;
pub mod memory;

use crate::{domain::DailyRecord, errors::Result};

/// Durable home for the raw record list.
///
/// `load` never fails: missing or unreadable data is reported as an empty list.
/// `save` replaces everything previously stored.
pub trait RecordRepository: Send + Sync {
    fn load(&self) -> Vec<DailyRecord>;
    fn save(&self, records: &[DailyRecord]) -> Result<()>;
}

pub use csv_codec::{export_csv, parse_csv, write_csv, ParsedImport, HEADERS};
pub use json_backend::{load_records_from_path, save_records_to_path, JsonFileRepository};
pub use memory::MemoryRepository;
