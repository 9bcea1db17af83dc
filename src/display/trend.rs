//! Trend display formatting
//!
//! Income and expense per period as a table with relative bars.

use std::fmt::Display;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{format_amount, format_bar, format_title};
use crate::metrics::PeriodBucket;

const BAR_WIDTH: usize = 16;

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Expense share")]
    bar: String,
}

/// Format period buckets, oldest first, under `title`
pub fn format_trend<K: Display>(title: &str, buckets: &[PeriodBucket<K>], symbol: &str) -> String {
    let mut output = format_title(title);

    if buckets.is_empty() {
        output.push_str("No transactions recorded yet.\n");
        return output;
    }

    let max_expense = buckets
        .iter()
        .map(|b| b.totals.expense.as_f64())
        .fold(0.0_f64, f64::max);

    let rows = buckets.iter().map(|bucket| TrendRow {
        period: bucket.key.to_string(),
        income: format_amount(bucket.totals.income, symbol),
        expense: format_amount(bucket.totals.expense, symbol),
        net: format_amount(bucket.totals.net(), symbol),
        bar: format_bar(bucket.totals.expense.as_f64(), max_expense, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));

    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{aggregate_by_day, aggregate_by_month};
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_empty_trend() {
        let buckets = aggregate_by_day(&[]);
        let output = format_trend("Daily Trend", &buckets, "¥");
        assert!(output.contains("No transactions recorded yet."));
    }

    #[test]
    fn test_daily_trend_rows() {
        let txns = vec![
            Transaction::income(Money::from_units(250000), date(6, 1)),
            Transaction::expense(Money::from_units(80000), date(6, 1)),
            Transaction::expense(Money::from_units(3500), date(6, 2)),
        ];
        let output = format_trend("Daily Trend", &aggregate_by_day(&txns), "¥");

        assert!(output.contains("2025-06-01"));
        assert!(output.contains("2025-06-02"));
        assert!(output.contains("¥170,000"));
        assert!(output.contains("-¥3,500"));
        assert!(output.contains("████████████████"));
    }

    #[test]
    fn test_monthly_trend_uses_month_keys() {
        let txns = vec![
            Transaction::expense(Money::from_units(100), date(5, 20)),
            Transaction::expense(Money::from_units(200), date(6, 3)),
        ];
        let output = format_trend("Monthly Trend", &aggregate_by_month(&txns), "¥");
        let may = output.find("2025-05").unwrap();
        let june = output.find("2025-06").unwrap();
        assert!(may < june);
    }
}
