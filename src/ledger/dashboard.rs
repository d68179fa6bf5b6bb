use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::ComputedDailyRecord;

use super::daily::percent_of;

/// Goal-met threshold used by displays. Independent of the 999 stored ceiling.
pub const GOAL_MET_PERCENT: Decimal = Decimal::ONE_HUNDRED;
const HALFWAY_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Display bucket for a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressBand {
    GoalMet,
    Halfway,
    Behind,
}

impl ProgressBand {
    pub fn classify(percent: Decimal) -> Self {
        if percent >= GOAL_MET_PERCENT {
            ProgressBand::GoalMet
        } else if percent >= HALFWAY_PERCENT {
            ProgressBand::Halfway
        } else {
            ProgressBand::Behind
        }
    }
}

/// Headline figures across every tracked day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub days_tracked: usize,
    pub total_revenue: Decimal,
    pub total_ads_cost: Decimal,
    pub total_profit: Decimal,
    pub total_customers: u64,
    /// Return on ad spend; absent when nothing was spent.
    pub roas: Option<Decimal>,
    pub margin_percent: Decimal,
    pub avg_customers_per_day: Decimal,
    /// Progress toward the goal, clamped to 100 for display.
    pub goal_progress: Decimal,
}

impl Dashboard {
    pub fn from_daily(daily: &[ComputedDailyRecord], goal: Decimal) -> Self {
        let days_tracked = daily.len();
        let total_revenue = daily.iter().fold(Decimal::ZERO, |acc, d| {
            acc.saturating_add(d.record.revenue)
                .saturating_add(d.record.repeat_revenue)
        });
        let total_ads_cost = daily
            .iter()
            .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d.record.ads_cost));
        let total_profit = daily
            .last()
            .map(|d| d.cumulative_profit)
            .unwrap_or(Decimal::ZERO);
        let total_customers: u64 = daily
            .iter()
            .map(|d| u64::from(d.record.new_customers) + u64::from(d.record.returning_customers))
            .sum();

        let roas = if total_ads_cost <= Decimal::ZERO {
            None
        } else {
            total_revenue.checked_div(total_ads_cost)
        };
        let margin_percent = if total_revenue <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            percent_of(total_profit, total_revenue)
        };
        let avg_customers_per_day = if days_tracked == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(total_customers) / Decimal::from(days_tracked as u64)
        };
        let goal_progress = if goal <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            percent_of(total_profit, goal).min(GOAL_MET_PERCENT)
        };

        Self {
            days_tracked,
            total_revenue,
            total_ads_cost,
            total_profit,
            total_customers,
            roas,
            margin_percent,
            avg_customers_per_day,
            goal_progress,
        }
    }

    pub fn band(&self) -> ProgressBand {
        ProgressBand::classify(self.goal_progress)
    }
}
