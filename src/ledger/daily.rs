use rust_decimal::Decimal;

use crate::domain::{ComputedDailyRecord, DailyRecord};

/// Upper bound stored in `progress_percent`; display code applies its own clamp.
pub const PROGRESS_CEILING: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `min(cumulative / goal * 100, 999)`. A non-positive goal yields zero progress
/// rather than a division failure.
pub fn progress_percent(cumulative: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percent_of(cumulative, goal).min(PROGRESS_CEILING)
}

/// `value / whole * 100`, saturating toward the sign of `value` when the
/// result leaves the `Decimal` range. `whole` must be positive.
pub(crate) fn percent_of(value: Decimal, whole: Decimal) -> Decimal {
    match value.checked_div(whole) {
        Some(ratio) => ratio.saturating_mul(HUNDRED),
        None if value.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Orders records by date and attaches net, cumulative and goal figures.
///
/// The sort is stable, so records sharing a date keep their input order.
pub fn compute_daily(records: &[DailyRecord], goal: Decimal) -> Vec<ComputedDailyRecord> {
    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut cumulative = Decimal::ZERO;
    sorted
        .into_iter()
        .map(|record| {
            let net_profit = record.net_profit();
            cumulative = cumulative.saturating_add(net_profit);
            ComputedDailyRecord {
                record: record.clone(),
                net_profit,
                cumulative_profit: cumulative,
                progress_percent: progress_percent(cumulative, goal),
            }
        })
        .collect()
}
