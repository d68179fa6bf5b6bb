//! The aggregation pipeline: raw records to daily, weekly and monthly views.
//!
//! Every function here is pure. Callers recompute from the full record list
//! after each mutation.

pub mod daily;
pub mod dashboard;
pub mod monthly;
pub mod report;
pub mod sample;
pub mod weekly;

pub use daily::{compute_daily, progress_percent, PROGRESS_CEILING};
pub use dashboard::{Dashboard, ProgressBand, GOAL_MET_PERCENT};
pub use monthly::{compute_monthly, WEEKS_PER_MONTH};
pub use report::Report;
pub use sample::sample_records;
pub use weekly::{compute_weekly, DAYS_PER_WEEK};
