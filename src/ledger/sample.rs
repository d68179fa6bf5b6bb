use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::{DailyRecord, NewRecord};

/// Amount between `low` and `high` cents, exclusive of `high`, as currency.
fn cents<R: Rng>(rng: &mut R, low: i64, high: i64) -> Decimal {
    Decimal::new(rng.gen_range(low..high), 2)
}

/// Builds `days` consecutive demo records ending on `today`.
pub fn sample_records<R: Rng>(
    days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DailyRecord> {
    let Some(start) = days
        .checked_sub(1)
        .and_then(|back| today.checked_sub_signed(Duration::days(back as i64)))
    else {
        return Vec::new();
    };

    (0..days)
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset as i64)))
        .map(|date| {
            DailyRecord::new(NewRecord {
                date: date.format("%Y-%m-%d").to_string(),
                new_customers: rng.gen_range(2..=16),
                revenue: cents(rng, 2_000, 10_000),
                returning_customers: rng.gen_range(0..=7),
                repeat_revenue: cents(rng, 0, 4_000),
                ads_cost: cents(rng, 1_000, 6_000),
            })
        })
        .collect()
}
