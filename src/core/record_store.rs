use std::io::{Read, Write};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    config::TrackerConfig,
    domain::{DailyRecord, FieldName, NewRecord, RecordField, RecordId},
    errors::{Result, TrackerError},
    ledger::{sample_records, Dashboard, Report},
    storage::{csv_codec, RecordRepository},
};

/// Outcome of a CSV import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub imported: usize,
    /// Rows skipped because their date column was blank.
    pub dropped: usize,
}

/// Owns the raw record list and writes it through to the repository after
/// every mutation. Derived views are computed on demand and never cached.
pub struct RecordStore {
    records: Vec<DailyRecord>,
    repository: Box<dyn RecordRepository>,
    config: TrackerConfig,
}

impl RecordStore {
    /// Loads whatever the repository holds; unreadable data starts an empty store.
    pub fn open(repository: Box<dyn RecordRepository>, config: TrackerConfig) -> Self {
        let records = repository.load();
        tracing::debug!(records = records.len(), "record store opened");
        Self {
            records,
            repository,
            config,
        }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn goal(&self) -> Decimal {
        self.config.goal_amount
    }

    pub fn get(&self, id: &RecordId) -> Option<&DailyRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Finds a record by full id or by an unambiguous id prefix.
    pub fn resolve_id(&self, needle: &str) -> Result<RecordId> {
        let needle = needle.trim();
        if needle.is_empty() {
            return Err(TrackerError::InvalidInput("record id is empty".into()));
        }
        if let Some(record) = self.records.iter().find(|r| r.id.as_str() == needle) {
            return Ok(record.id.clone());
        }
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.as_str().starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record.id.clone()),
            (Some(_), Some(_)) => Err(TrackerError::InvalidInput(format!(
                "id prefix `{}` matches more than one record",
                needle
            ))),
            (None, _) => Err(TrackerError::RecordNotFound(needle.to_string())),
        }
    }

    pub fn add(&mut self, fields: NewRecord) -> RecordId {
        let record = DailyRecord::new(fields);
        let id = record.id.clone();
        self.records.push(record);
        self.persist();
        id
    }

    pub fn update(&mut self, id: &RecordId, field: RecordField) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| TrackerError::RecordNotFound(id.to_string()))?;
        record.apply(field);
        self.persist();
        Ok(())
    }

    /// Manual edit from raw text; numeric columns fall back to zero.
    pub fn update_field(&mut self, id: &RecordId, field: &str, raw: &str) -> Result<()> {
        let name: FieldName = field.parse()?;
        self.update(id, name.coerce(raw))
    }

    pub fn delete(&mut self, id: &RecordId) -> Result<DailyRecord> {
        let position = self
            .records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| TrackerError::RecordNotFound(id.to_string()))?;
        let removed = self.records.remove(position);
        self.persist();
        Ok(removed)
    }

    pub fn replace_all(&mut self, records: Vec<DailyRecord>) {
        tracing::info!(records = records.len(), "replacing all records");
        self.records = records;
        self.persist();
    }

    pub fn clear(&mut self) {
        tracing::info!(records = self.records.len(), "clearing all records");
        self.replace_all(Vec::new());
    }

    /// Replaces the contents with `sample_days` of demo data ending today.
    pub fn load_sample(&mut self) {
        self.load_sample_ending(Local::now().date_naive());
    }

    pub fn load_sample_ending(&mut self, today: NaiveDate) {
        let mut rng = rand::thread_rng();
        let sample = sample_records(self.config.sample_days, today, &mut rng);
        self.replace_all(sample);
    }

    /// Appends the rows of a CSV document. A document that cannot be parsed
    /// leaves the store untouched.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportReport> {
        let parsed = csv_codec::parse_csv(reader)?;
        let report = ImportReport {
            imported: parsed.records.len(),
            dropped: parsed.dropped,
        };
        if parsed.dropped > 0 {
            tracing::info!(dropped = parsed.dropped, "skipped rows without a date");
        }
        if !parsed.records.is_empty() {
            self.records.extend(parsed.records);
            self.persist();
        }
        tracing::info!(imported = report.imported, "csv import finished");
        Ok(report)
    }

    pub fn export_csv(&self) -> Result<String> {
        csv_codec::export_csv(&self.report().daily)
    }

    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        csv_codec::write_csv(writer, &self.report().daily)
    }

    pub fn report(&self) -> Report {
        Report::build(&self.records, self.goal())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_daily(&self.report().daily, self.goal())
    }

    /// Save failures are logged; the in-memory list stays authoritative.
    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.records) {
            tracing::warn!(error = %err, "failed to persist records");
        }
    }
}
