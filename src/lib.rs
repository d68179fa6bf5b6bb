#![doc(test(attr(deny(warnings))))]

//! Profit Tracker records daily storefront metrics and rolls them up into
//! running totals, weekly and monthly summaries, with CSV import and export.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::{ImportReport, RecordStore};
pub use errors::{Result, TrackerError};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Profit Tracker tracing initialized.");
    });
}
