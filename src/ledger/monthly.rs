use crate::domain::{MonthlySummary, WeeklySummary};

/// Number of weekly summaries rolled into one month.
pub const WEEKS_PER_MONTH: usize = 4;

/// Chunks weekly summaries into months of four weeks.
///
/// Months are sums of the weekly sums, so each month equals the total of its
/// weeks exactly.
pub fn compute_monthly(weekly: &[WeeklySummary]) -> Vec<MonthlySummary> {
    weekly
        .chunks(WEEKS_PER_MONTH)
        .enumerate()
        .map(|(idx, chunk)| {
            let month_number = idx + 1;
            MonthlySummary {
                month_number,
                month: format!("Month {}", month_number),
                totals: chunk.iter().map(|week| week.totals).sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PeriodTotals;
    use rust_decimal::Decimal;

    fn week(number: usize, profit: i64) -> WeeklySummary {
        WeeklySummary {
            week_number: number,
            totals: PeriodTotals {
                new_customers: 1,
                net_profit: Decimal::from(profit),
                ..PeriodTotals::default()
            },
            date_range: String::new(),
        }
    }

    #[test]
    fn groups_four_weeks_per_month() {
        let weeks: Vec<WeeklySummary> = (1..=9).map(|n| week(n, n as i64)).collect();
        let months = compute_monthly(&weeks);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].month, "Month 1");
        assert_eq!(months[2].month_number, 3);
        assert_eq!(months[0].totals.net_profit, Decimal::from(1 + 2 + 3 + 4));
        assert_eq!(months[1].totals.net_profit, Decimal::from(5 + 6 + 7 + 8));
        assert_eq!(months[2].totals.net_profit, Decimal::from(9));
        assert_eq!(months[2].totals.new_customers, 1);
    }

    #[test]
    fn partial_month_is_kept() {
        let weeks = vec![week(1, 10), week(2, -4)];
        let months = compute_monthly(&weeks);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].totals.net_profit, Decimal::from(6));
    }

    #[test]
    fn no_weeks_no_months() {
        assert!(compute_monthly(&[]).is_empty());
    }
}
