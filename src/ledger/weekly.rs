use crate::domain::{ComputedDailyRecord, PeriodTotals, WeeklySummary};
use crate::utils::format::short_date_label;

/// Number of daily records rolled into one week.
pub const DAYS_PER_WEEK: usize = 7;

/// Chunks chronologically ordered days into weeks of seven records.
///
/// Weeks count records, not calendar days: gaps in the dates are not filled,
/// and the last week may hold fewer than seven records.
pub fn compute_weekly(daily: &[ComputedDailyRecord]) -> Vec<WeeklySummary> {
    daily
        .chunks(DAYS_PER_WEEK)
        .enumerate()
        .map(|(idx, chunk)| WeeklySummary {
            week_number: idx + 1,
            totals: chunk.iter().map(PeriodTotals::from_day).sum(),
            date_range: date_range(chunk),
        })
        .collect()
}

fn date_range(chunk: &[ComputedDailyRecord]) -> String {
    let first = chunk.first().map(|d| d.date()).unwrap_or_default();
    let last = chunk.last().map(|d| d.date()).unwrap_or_default();
    format!("{} – {}", short_date_label(first), short_date_label(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyRecord, NewRecord};
    use crate::ledger::daily::compute_daily;
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn days(count: usize) -> Vec<ComputedDailyRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records: Vec<DailyRecord> = (0..count)
            .map(|idx| {
                let date = start + Duration::days(idx as i64);
                let mut fields = NewRecord::on(date.format("%Y-%m-%d").to_string());
                fields.new_customers = 2;
                fields.revenue = dec!(10.50);
                fields.ads_cost = dec!(3);
                DailyRecord::new(fields)
            })
            .collect();
        compute_daily(&records, dec!(1000))
    }

    #[test]
    fn ten_days_make_two_weeks() {
        let weeks = compute_weekly(&days(10));
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[1].week_number, 2);
        assert_eq!(weeks[0].totals.new_customers, 14);
        assert_eq!(weeks[1].totals.new_customers, 6);
        assert_eq!(weeks[0].totals.revenue, dec!(73.50));
        assert_eq!(weeks[1].totals.net_profit, dec!(22.50));
        assert_eq!(weeks[0].date_range, "Jan 1 – Jan 7");
        assert_eq!(weeks[1].date_range, "Jan 8 – Jan 10");
    }

    #[test]
    fn single_record_week_repeats_the_date() {
        let weeks = compute_weekly(&days(8));
        assert_eq!(weeks[1].date_range, "Jan 8 – Jan 8");
    }

    #[test]
    fn week_count_is_ceiling_of_days() {
        for count in [0usize, 1, 6, 7, 8, 14, 15, 30] {
            assert_eq!(compute_weekly(&days(count)).len(), count.div_ceil(DAYS_PER_WEEK));
        }
    }
}
