use rust_decimal::Decimal;
use serde::Serialize;

use super::{compute_daily, compute_monthly, compute_weekly};
use crate::domain::{ComputedDailyRecord, DailyRecord, MonthlySummary, WeeklySummary};

/// All three aggregation levels computed from one snapshot of the records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub daily: Vec<ComputedDailyRecord>,
    pub weekly: Vec<WeeklySummary>,
    pub monthly: Vec<MonthlySummary>,
}

impl Report {
    /// Runs the full pipeline; nothing is reused from earlier calls.
    pub fn build(records: &[DailyRecord], goal: Decimal) -> Self {
        let daily = compute_daily(records, goal);
        let weekly = compute_weekly(&daily);
        let monthly = compute_monthly(&weekly);
        tracing::debug!(
            days = daily.len(),
            weeks = weekly.len(),
            months = monthly.len(),
            "recomputed report"
        );
        Self {
            daily,
            weekly,
            monthly,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}
