//! Text formatting for amounts, percentages and dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero and pads to exactly `places` fraction digits.
pub fn fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}

/// `$1,234.50`, `-$12.00`.
pub fn format_currency(value: Decimal) -> String {
    let text = fixed(value, 2);
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
    let grouped = group_thousands(whole);
    if negative && !(whole.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0')) {
        format!("-${}.{}", grouped, fraction)
    } else {
        format!("${}.{}", grouped, fraction)
    }
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place followed by `%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}

/// `"Jan 1"` for an ISO date; unparseable text is returned unchanged.
pub fn short_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Default file name for an export taken on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("financial-tracker-{}.csv", today.format("%Y-%m-%d"))
}
