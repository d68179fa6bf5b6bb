//! CSV export of computed daily rows and lenient import of raw records.
//!
//! Exported documents look like:
//! ```csv
//! Date,New Customers,Revenue,Returning Customers,Repeat Revenue,Ads Cost,Net Profit,Cumulative Profit,Progress %
//! 2024-01-01,5,120.00,2,30.00,40.00,110.00,110.00,11.0%
//! ```
//! Only the first six columns are read back; derived columns are always
//! recomputed.

use std::io::{Read, Write};

use csv::{QuoteStyle, Terminator, Trim};

use crate::{
    domain::{
        coerce::{parse_amount, parse_count},
        ComputedDailyRecord, DailyRecord, NewRecord,
    },
    errors::{Result, TrackerError},
    utils::format::fixed,
};

pub const HEADERS: [&str; 9] = [
    "Date",
    "New Customers",
    "Revenue",
    "Returning Customers",
    "Repeat Revenue",
    "Ads Cost",
    "Net Profit",
    "Cumulative Profit",
    "Progress %",
];

/// Records parsed from an import document, plus how many rows had no date.
#[derive(Debug, Clone, Default)]
pub struct ParsedImport {
    pub records: Vec<DailyRecord>,
    pub dropped: usize,
}

fn export_row(day: &ComputedDailyRecord) -> [String; 9] {
    let record = &day.record;
    [
        record.date.clone(),
        record.new_customers.to_string(),
        fixed(record.revenue, 2),
        record.returning_customers.to_string(),
        fixed(record.repeat_revenue, 2),
        fixed(record.ads_cost, 2),
        fixed(day.net_profit, 2),
        fixed(day.cumulative_profit, 2),
        format!("{}%", fixed(day.progress_percent, 1)),
    ]
}

/// Renders the export document. Rows are `\n`-separated with no trailing newline.
pub fn export_csv(daily: &[ComputedDailyRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());
    writer.write_record(HEADERS).map_err(csv_io)?;
    for day in daily {
        writer.write_record(export_row(day)).map_err(csv_io)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| TrackerError::Io(err.into_error()))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|err| TrackerError::InvalidInput(err.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Writes the export document to `writer`.
pub fn write_csv<W: Write>(writer: &mut W, daily: &[ComputedDailyRecord]) -> Result<()> {
    let text = export_csv(daily)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn csv_io(err: csv::Error) -> TrackerError {
    TrackerError::Io(err.into())
}

/// Parses an import document.
///
/// The first line is a header and is skipped. Columns are taken by position
/// with no quote handling; numeric columns that do not parse become zero and
/// rows whose date is blank are dropped. Any structural failure (unreadable
/// input, invalid UTF-8) fails the whole document.
pub fn parse_csv<R: Read>(reader: R) -> Result<ParsedImport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = ParsedImport::default();
    for row in csv_reader.records() {
        let row = row?;
        let column = |idx: usize| row.get(idx).unwrap_or("");
        let date = column(0).trim();
        if date.is_empty() {
            parsed.dropped += 1;
            continue;
        }
        parsed.records.push(DailyRecord::new(NewRecord {
            date: date.to_string(),
            new_customers: parse_count(column(1)),
            revenue: parse_amount(column(2)),
            returning_customers: parse_count(column(3)),
            repeat_revenue: parse_amount(column(4)),
            ads_cost: parse_amount(column(5)),
        }));
    }
    Ok(parsed)
}
