pub mod coerce;
pub mod common;
pub mod record;
pub mod summary;

pub use common::RecordId;
pub use record::{DailyRecord, FieldName, NewRecord, RecordField};
pub use summary::{ComputedDailyRecord, MonthlySummary, PeriodTotals, WeeklySummary};
