mod common;

use profit_tracker::{
    domain::{ComputedDailyRecord, DailyRecord, NewRecord, PeriodTotals, RecordId},
    ledger::{compute_daily, compute_monthly, compute_weekly, Dashboard, Report},
    storage::{export_csv, parse_csv},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const GOAL: Decimal = dec!(1000);

fn fold_days(days: &[ComputedDailyRecord]) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for day in days {
        totals.new_customers += u64::from(day.record.new_customers);
        totals.revenue += day.record.revenue;
        totals.returning_customers += u64::from(day.record.returning_customers);
        totals.repeat_revenue += day.record.repeat_revenue;
        totals.ads_cost += day.record.ads_cost;
        totals.net_profit += day.net_profit;
    }
    totals
}

#[test]
fn two_day_scenario_orders_and_accumulates() {
    let mut later = NewRecord::on("2024-01-02");
    later.revenue = dec!(100);
    later.ads_cost = dec!(40);
    let mut earlier = NewRecord::on("2024-01-01");
    earlier.revenue = dec!(50);
    earlier.ads_cost = dec!(10);

    let daily = compute_daily(&[DailyRecord::new(later), DailyRecord::new(earlier)], GOAL);
    let summary: Vec<(&str, Decimal, Decimal, Decimal)> = daily
        .iter()
        .map(|d| (d.date(), d.net_profit, d.cumulative_profit, d.progress_percent))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2024-01-01", dec!(40), dec!(40), dec!(4.0)),
            ("2024-01-02", dec!(60), dec!(100), dec!(10.0)),
        ]
    );
}

#[test]
fn daily_output_preserves_length_and_order() {
    for count in [0, 1, 5, 13, 31, 60] {
        let input = common::shuffled_records(count);
        let daily = compute_daily(&input, GOAL);
        assert_eq!(daily.len(), input.len());
        assert!(daily.windows(2).all(|pair| pair[0].date() <= pair[1].date()));
    }
}

#[test]
fn ties_keep_relative_input_order() {
    let input: Vec<DailyRecord> = ["x", "y", "z"]
        .into_iter()
        .zip(["2024-05-02", "2024-05-01", "2024-05-02"])
        .map(|(id, date)| DailyRecord::with_id(RecordId::from(id), NewRecord::on(date)))
        .collect();
    let ids: Vec<String> = compute_daily(&input, GOAL)
        .into_iter()
        .map(|d| d.record.id.to_string())
        .collect();
    assert_eq!(ids, vec!["y", "x", "z"]);
}

#[test]
fn cumulative_is_prefix_sum_of_net_profit() {
    let daily = compute_daily(&common::shuffled_records(45), GOAL);
    let mut running = Decimal::ZERO;
    for day in &daily {
        assert_eq!(
            day.net_profit,
            day.record.revenue + day.record.repeat_revenue - day.record.ads_cost
        );
        running += day.net_profit;
        assert_eq!(day.cumulative_profit, running);
    }
}

#[test]
fn roll_ups_neither_drop_nor_duplicate_days() {
    for count in [0usize, 1, 6, 7, 8, 27, 28, 29, 57, 100] {
        let report = Report::build(&common::records(count), GOAL);
        assert_eq!(report.weekly.len(), count.div_ceil(7));
        assert_eq!(report.monthly.len(), report.weekly.len().div_ceil(4));

        for (week, days) in report.weekly.iter().zip(report.daily.chunks(7)) {
            assert_eq!(week.totals, fold_days(days));
        }

        let everything = fold_days(&report.daily);
        let weekly: PeriodTotals = report.weekly.iter().map(|w| w.totals).sum();
        let monthly: PeriodTotals = report.monthly.iter().map(|m| m.totals).sum();
        assert_eq!(weekly, everything);
        assert_eq!(monthly, everything);
    }
}

#[test]
fn each_month_is_the_sum_of_its_weeks() {
    let daily = compute_daily(&common::records(70), GOAL);
    let weekly = compute_weekly(&daily);
    let monthly = compute_monthly(&weekly);
    assert_eq!(monthly.len(), 3);
    for ((month, weeks), days) in monthly.iter().zip(weekly.chunks(4)).zip(daily.chunks(28)) {
        let mut expected = PeriodTotals::default();
        for week in weeks {
            expected.new_customers += week.totals.new_customers;
            expected.revenue += week.totals.revenue;
            expected.returning_customers += week.totals.returning_customers;
            expected.repeat_revenue += week.totals.repeat_revenue;
            expected.ads_cost += week.totals.ads_cost;
            expected.net_profit += week.totals.net_profit;
        }
        assert_eq!(month.totals, expected);
        assert_eq!(month.totals, fold_days(days));
    }
}

#[test]
fn ten_days_make_two_weeks_and_one_month() {
    let report = Report::build(&common::records(10), GOAL);
    assert_eq!(report.weekly.len(), 2);
    assert_eq!(report.weekly[0].date_range, "Jan 1 – Jan 7");
    assert_eq!(report.weekly[1].date_range, "Jan 8 – Jan 10");
    assert_eq!(report.monthly.len(), 1);
    assert_eq!(report.monthly[0].month, "Month 1");
}

#[test]
fn chunking_counts_records_not_calendar_days() {
    let dates = [
        "2024-01-01", "2024-01-03", "2024-01-09", "2024-01-10", "2024-01-20", "2024-02-01",
        "2024-02-02", "2024-02-15",
    ];
    let input: Vec<DailyRecord> = dates
        .iter()
        .map(|date| DailyRecord::new(NewRecord::on(*date)))
        .collect();
    let weekly = compute_weekly(&compute_daily(&input, GOAL));
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].date_range, "Jan 1 – Feb 2");
    assert_eq!(weekly[1].date_range, "Feb 15 – Feb 15");
}

#[test]
fn empty_input_is_empty_everywhere() {
    let report = Report::build(&[], GOAL);
    assert!(report.is_empty());
    assert!(report.weekly.is_empty());
    assert!(report.monthly.is_empty());
}

#[test]
fn amounts_at_the_decimal_limit_saturate_instead_of_panicking() {
    let document = "Date,New Customers,Revenue,Returning Customers,Repeat Revenue,Ads Cost,Net Profit,Cumulative Profit,Progress %\n\
        2024-01-01,1,70000000000000000000000000000,0,70000000000000000000000000000,0\n\
        2024-01-02,0,0,0,0,70000000000000000000000000000";
    let parsed = parse_csv(document.as_bytes()).expect("parse document");
    assert_eq!(parsed.records.len(), 2);

    let report = Report::build(&parsed.records, GOAL);
    assert_eq!(report.daily[0].net_profit, Decimal::MAX);
    assert_eq!(report.daily[0].progress_percent, dec!(999));
    assert_eq!(report.daily[1].net_profit, dec!(-70000000000000000000000000000));
    assert_eq!(report.weekly[0].totals.revenue, dec!(70000000000000000000000000000));
    assert_eq!(
        report.weekly[0].totals.net_profit,
        report.daily[1].cumulative_profit
    );
    assert_eq!(report.monthly[0].totals, report.weekly[0].totals);

    let dashboard = Dashboard::from_daily(&report.daily, GOAL);
    assert_eq!(dashboard.goal_progress, dec!(100));
    assert!(export_csv(&report.daily).is_ok());
}
