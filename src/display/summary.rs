//! Balance summary formatting

use super::report::{format_amount, format_bar, format_percentage, format_title};
use crate::metrics::PeriodTotals;
use crate::models::Money;

const BAR_WIDTH: usize = 20;

/// Total balance and the all-time income/expense split
pub fn format_summary(balance: Money, totals: &PeriodTotals, symbol: &str) -> String {
    let mut output = format_title("Summary");

    output.push_str(&format!("Total balance: {}\n", format_amount(balance, symbol)));
    output.push('\n');

    let (income_pct, expense_pct) = totals.share();
    output.push_str(&format!(
        "Income   {:>14}  {} {}\n",
        format_amount(totals.income, symbol),
        format_bar(income_pct, 100.0, BAR_WIDTH),
        format_percentage(income_pct)
    ));
    output.push_str(&format!(
        "Expense  {:>14}  {} {}\n",
        format_amount(totals.expense, symbol),
        format_bar(expense_pct, 100.0, BAR_WIDTH),
        format_percentage(expense_pct)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{income_expense_totals, total_balance};
    use crate::models::Transaction;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_scenario() {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let txns = vec![
            Transaction::income(Money::from_units(250000), d1),
            Transaction::expense(Money::from_units(80000), d1),
            Transaction::expense(Money::from_units(3500), d2),
        ];

        let output = format_summary(total_balance(&txns), &income_expense_totals(&txns), "¥");
        assert!(output.contains("Total balance: ¥166,500"));
        assert!(output.contains("¥250,000"));
        assert!(output.contains("¥83,500"));
        assert!(output.contains("75%"));
        assert!(output.contains("25%"));
    }

    #[test]
    fn test_summary_empty_ledger() {
        let output = format_summary(Money::zero(), &PeriodTotals::default(), "¥");
        assert!(output.contains("Total balance: ¥0"));
        assert!(output.contains("0.0%"));
    }
}
