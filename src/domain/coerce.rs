//! Lenient numeric parsing: anything that is not a usable number becomes zero.
//!
//! Form input, manual edits, CSV columns and persisted JSON all go through these
//! helpers so a bad value never rejects a record.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a currency amount, returning zero for empty or non-numeric text.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a customer count. Negative or fractional values are not counts and
/// become zero; `"5.00"` is accepted as `5`.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return value;
    }
    let amount = parse_amount(trimmed);
    if amount.is_sign_negative() || !amount.fract().is_zero() {
        return 0;
    }
    amount.to_u32().unwrap_or(0)
}

fn amount_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => parse_amount(&number.to_string()),
        Value::String(text) => parse_amount(text),
        _ => Decimal::ZERO,
    }
}

fn count_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(number) => parse_count(&number.to_string()),
        Value::String(text) => parse_count(text),
        _ => 0,
    }
}

/// Serde adapter for amounts stored by older or hand-edited files.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(amount_from_value).unwrap_or_default())
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(count_from_value).unwrap_or_default())
}
