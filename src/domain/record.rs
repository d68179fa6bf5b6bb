use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce::{lenient_amount, lenient_count, parse_amount, parse_count};
use super::common::RecordId;
use crate::errors::TrackerError;

/// One day's raw metrics, exactly as persisted.
///
/// `date` is kept as ISO `YYYY-MM-DD` text and is the only sort key. Dates are
/// not unique; two records may share a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: RecordId,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub new_customers: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub revenue: Decimal,
    #[serde(default, deserialize_with = "lenient_count")]
    pub returning_customers: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub repeat_revenue: Decimal,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub ads_cost: Decimal,
}

impl DailyRecord {
    pub fn new(fields: NewRecord) -> Self {
        Self::with_id(RecordId::generate(), fields)
    }

    pub fn with_id(id: RecordId, fields: NewRecord) -> Self {
        Self {
            id,
            date: fields.date,
            new_customers: fields.new_customers,
            revenue: fields.revenue,
            returning_customers: fields.returning_customers,
            repeat_revenue: fields.repeat_revenue,
            ads_cost: fields.ads_cost,
        }
    }

    /// `revenue + repeat_revenue - ads_cost`, from this record's own fields only.
    /// Saturates at the `Decimal` range instead of overflowing.
    pub fn net_profit(&self) -> Decimal {
        self.revenue
            .saturating_add(self.repeat_revenue)
            .saturating_sub(self.ads_cost)
    }

    pub fn apply(&mut self, field: RecordField) {
        match field {
            RecordField::Date(date) => self.date = date,
            RecordField::NewCustomers(value) => self.new_customers = value,
            RecordField::Revenue(value) => self.revenue = value,
            RecordField::ReturningCustomers(value) => self.returning_customers = value,
            RecordField::RepeatRevenue(value) => self.repeat_revenue = value,
            RecordField::AdsCost(value) => self.ads_cost = value,
        }
    }
}

/// Field values for a record that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecord {
    pub date: String,
    pub new_customers: u32,
    pub revenue: Decimal,
    pub returning_customers: u32,
    pub repeat_revenue: Decimal,
    pub ads_cost: Decimal,
}

impl NewRecord {
    pub fn on(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Builds a record from raw form text, coercing every numeric field.
    pub fn from_raw(
        date: &str,
        new_customers: &str,
        revenue: &str,
        returning_customers: &str,
        repeat_revenue: &str,
        ads_cost: &str,
    ) -> Self {
        Self {
            date: date.trim().to_string(),
            new_customers: parse_count(new_customers),
            revenue: parse_amount(revenue),
            returning_customers: parse_count(returning_customers),
            repeat_revenue: parse_amount(repeat_revenue),
            ads_cost: parse_amount(ads_cost),
        }
    }
}

/// Names the editable columns of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Date,
    NewCustomers,
    Revenue,
    ReturningCustomers,
    RepeatRevenue,
    AdsCost,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Date,
        FieldName::NewCustomers,
        FieldName::Revenue,
        FieldName::ReturningCustomers,
        FieldName::RepeatRevenue,
        FieldName::AdsCost,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Date => "date",
            FieldName::NewCustomers => "newCustomers",
            FieldName::Revenue => "revenue",
            FieldName::ReturningCustomers => "returningCustomers",
            FieldName::RepeatRevenue => "repeatRevenue",
            FieldName::AdsCost => "adsCost",
        }
    }

    /// Coerces raw edit text into a typed value for this column.
    pub fn coerce(&self, raw: &str) -> RecordField {
        match self {
            FieldName::Date => RecordField::Date(raw.trim().to_string()),
            FieldName::NewCustomers => RecordField::NewCustomers(parse_count(raw)),
            FieldName::Revenue => RecordField::Revenue(parse_amount(raw)),
            FieldName::ReturningCustomers => RecordField::ReturningCustomers(parse_count(raw)),
            FieldName::RepeatRevenue => RecordField::RepeatRevenue(parse_amount(raw)),
            FieldName::AdsCost => RecordField::AdsCost(parse_amount(raw)),
        }
    }
}

impl FromStr for FieldName {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        FieldName::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| TrackerError::UnknownField(s.to_string()))
    }
}

/// A single in-place edit of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordField {
    Date(String),
    NewCustomers(u32),
    Revenue(Decimal),
    ReturningCustomers(u32),
    RepeatRevenue(Decimal),
    AdsCost(Decimal),
}
