#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use profit_tracker::{
    config::TrackerConfig,
    domain::{DailyRecord, NewRecord},
    storage::JsonFileRepository,
    RecordStore,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A store backed by a JSON file in its own temporary directory.
pub fn file_store() -> (RecordStore, PathBuf) {
    let base = temp_dir();
    let config = TrackerConfig::default();
    let repository =
        JsonFileRepository::new(&base, &config.storage_key).expect("create json repository");
    (RecordStore::open(Box::new(repository), config), base)
}

/// Deterministic records on consecutive days, with amounts varying by index.
pub fn records(count: usize) -> Vec<DailyRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| {
            let date = start + Duration::days(idx as i64);
            DailyRecord::new(NewRecord {
                date: date.format("%Y-%m-%d").to_string(),
                new_customers: (idx % 9) as u32 + 1,
                revenue: Decimal::new(1_000 + (idx as i64 * 137) % 9_000, 2),
                returning_customers: (idx % 4) as u32,
                repeat_revenue: Decimal::new((idx as i64 * 71) % 4_000, 2),
                ads_cost: Decimal::new(500 + (idx as i64 * 53) % 6_000, 2),
            })
        })
        .collect()
}

/// Same as `records` but in a scrambled order.
pub fn shuffled_records(count: usize) -> Vec<DailyRecord> {
    let mut list = records(count);
    let len = list.len();
    for idx in 0..len {
        list.swap(idx, (idx * 7 + 3) % len);
    }
    list
}
