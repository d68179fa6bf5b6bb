use colored::Colorize;
use rust_decimal::Decimal;

use super::table::{Table, TableColumn};
use crate::{
    domain::{ComputedDailyRecord, MonthlySummary, WeeklySummary},
    ledger::{Dashboard, ProgressBand},
    utils::format::{fixed, format_currency, format_percent},
};

fn money(value: Decimal, colour: bool) -> String {
    let text = format_currency(value);
    if !colour {
        text
    } else if value.is_sign_negative() && !value.is_zero() {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

fn progress(value: Decimal, colour: bool) -> String {
    let text = format_percent(value);
    if !colour {
        return text;
    }
    match ProgressBand::classify(value) {
        ProgressBand::GoalMet => text.green().to_string(),
        ProgressBand::Halfway => text.yellow().to_string(),
        ProgressBand::Behind => text.red().to_string(),
    }
}

pub fn daily_table(daily: &[ComputedDailyRecord], colour: bool) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::right("New"),
        TableColumn::right("Revenue"),
        TableColumn::right("Returning"),
        TableColumn::right("Repeat Rev"),
        TableColumn::right("Ads Cost"),
        TableColumn::right("Net Profit"),
        TableColumn::right("Cumulative"),
        TableColumn::right("Progress"),
    ]);
    for day in daily {
        let record = &day.record;
        table.push(vec![
            short_id(record.id.as_str()),
            record.date.clone(),
            record.new_customers.to_string(),
            format_currency(record.revenue),
            record.returning_customers.to_string(),
            format_currency(record.repeat_revenue),
            format_currency(record.ads_cost),
            money(day.net_profit, colour),
            money(day.cumulative_profit, colour),
            progress(day.progress_percent, colour),
        ]);
    }
    table.render()
}

pub fn weekly_table(weekly: &[WeeklySummary], colour: bool) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Week"),
        TableColumn::left("Dates"),
        TableColumn::right("New"),
        TableColumn::right("Revenue"),
        TableColumn::right("Returning"),
        TableColumn::right("Repeat Rev"),
        TableColumn::right("Ads Cost"),
        TableColumn::right("Net Profit"),
    ]);
    for week in weekly {
        let totals = &week.totals;
        table.push(vec![
            format!("Week {}", week.week_number),
            week.date_range.clone(),
            totals.new_customers.to_string(),
            format_currency(totals.revenue),
            totals.returning_customers.to_string(),
            format_currency(totals.repeat_revenue),
            format_currency(totals.ads_cost),
            money(totals.net_profit, colour),
        ]);
    }
    table.render()
}

pub fn monthly_table(monthly: &[MonthlySummary], colour: bool) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("New"),
        TableColumn::right("Revenue"),
        TableColumn::right("Returning"),
        TableColumn::right("Repeat Rev"),
        TableColumn::right("Ads Cost"),
        TableColumn::right("Net Profit"),
    ]);
    for month in monthly {
        let totals = &month.totals;
        table.push(vec![
            month.month.clone(),
            totals.new_customers.to_string(),
            format_currency(totals.revenue),
            totals.returning_customers.to_string(),
            format_currency(totals.repeat_revenue),
            format_currency(totals.ads_cost),
            money(totals.net_profit, colour),
        ]);
    }
    table.render()
}

pub fn dashboard_lines(dashboard: &Dashboard, goal: Decimal, colour: bool) -> String {
    let roas = dashboard
        .roas
        .map(|value| format!("{}x", fixed(value, 2)))
        .unwrap_or_else(|| "—".to_string());
    [
        format!(
            "Goal ({}):        {}",
            format_currency(goal),
            progress(dashboard.goal_progress, colour)
        ),
        format!("Days tracked:        {}", dashboard.days_tracked),
        format!(
            "Total revenue:       {}",
            format_currency(dashboard.total_revenue)
        ),
        format!(
            "Total ads cost:      {}",
            format_currency(dashboard.total_ads_cost)
        ),
        format!("ROAS:                {}", roas),
        format!(
            "Net profit:          {}",
            money(dashboard.total_profit, colour)
        ),
        format!(
            "Margin:              {}",
            format_percent(dashboard.margin_percent)
        ),
        format!("Total customers:     {}", dashboard.total_customers),
        format!(
            "Avg customers/day:   {}",
            fixed(dashboard.avg_customers_per_day, 1)
        ),
    ]
    .join("\n")
}

/// First block of a UUID is enough to tell rows apart on screen.
fn short_id(id: &str) -> String {
    id.split('-').next().unwrap_or(id).to_string()
}
