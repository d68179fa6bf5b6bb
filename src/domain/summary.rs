use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::Serialize;

use super::record::DailyRecord;

/// A raw record enriched with its derived profit figures.
///
/// Recomputed on every read and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedDailyRecord {
    #[serde(flatten)]
    pub record: DailyRecord,
    pub net_profit: Decimal,
    pub cumulative_profit: Decimal,
    pub progress_percent: Decimal,
}

impl ComputedDailyRecord {
    pub fn date(&self) -> &str {
        &self.record.date
    }
}

/// Field-wise sums shared by weekly and monthly roll-ups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub new_customers: u64,
    pub revenue: Decimal,
    pub returning_customers: u64,
    pub repeat_revenue: Decimal,
    pub ads_cost: Decimal,
    pub net_profit: Decimal,
}

impl PeriodTotals {
    pub fn from_day(day: &ComputedDailyRecord) -> Self {
        Self {
            new_customers: u64::from(day.record.new_customers),
            revenue: day.record.revenue,
            returning_customers: u64::from(day.record.returning_customers),
            repeat_revenue: day.record.repeat_revenue,
            ads_cost: day.record.ads_cost,
            net_profit: day.net_profit,
        }
    }
}

/// Field-wise sum, saturating at the numeric limits.
impl AddAssign for PeriodTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.new_customers = self.new_customers.saturating_add(rhs.new_customers);
        self.revenue = self.revenue.saturating_add(rhs.revenue);
        self.returning_customers = self
            .returning_customers
            .saturating_add(rhs.returning_customers);
        self.repeat_revenue = self.repeat_revenue.saturating_add(rhs.repeat_revenue);
        self.ads_cost = self.ads_cost.saturating_add(rhs.ads_cost);
        self.net_profit = self.net_profit.saturating_add(rhs.net_profit);
    }
}

impl Add for PeriodTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for PeriodTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Roll-up of one chunk of up to seven consecutive daily records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_number: usize,
    #[serde(flatten)]
    pub totals: PeriodTotals,
    pub date_range: String,
}

/// Roll-up of one chunk of up to four consecutive weekly summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month_number: usize,
    pub month: String,
    #[serde(flatten)]
    pub totals: PeriodTotals,
}
