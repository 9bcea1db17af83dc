//! CSV Export functionality
//!
//! Exports the ledger and its day or month buckets as spreadsheet-friendly
//! CSV. Amounts are written as plain integers.

use std::fmt::Display;
use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::metrics::PeriodBucket;
use crate::models::Transaction;

fn export_error(e: csv::Error) -> KakeiboError {
    KakeiboError::Export(e.to_string())
}

/// Export transactions to CSV in the order given
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> KakeiboResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ID", "Date", "Kind", "Amount", "Signed Amount", "Memo"])
        .map_err(export_error)?;

    for txn in transactions {
        wtr.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.amount.units().to_string(),
            txn.signed_amount().units().to_string(),
            txn.memo.clone(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    Ok(())
}

/// Export period buckets (day or month) to CSV, oldest first
pub fn export_buckets_csv<K: Display, W: Write>(
    buckets: &[PeriodBucket<K>],
    writer: W,
) -> KakeiboResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Period", "Income", "Expense", "Net"])
        .map_err(export_error)?;

    for bucket in buckets {
        wtr.write_record([
            bucket.key.to_string(),
            bucket.totals.income.units().to_string(),
            bucket.totals.expense.units().to_string(),
            bucket.totals.net().units().to_string(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{aggregate_by_day, aggregate_by_month};
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Vec<Transaction> {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        vec![
            Transaction::income(Money::from_units(250000), d1).with_memo("Salary"),
            Transaction::expense(Money::from_units(80000), d1).with_memo("Rent, June"),
            Transaction::expense(Money::from_units(3500), d2),
        ]
    }

    #[test]
    fn test_export_transactions_csv() {
        let mut output = Vec::new();
        export_transactions_csv(&sample(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines[0], "ID,Date,Kind,Amount,Signed Amount,Memo");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with(",2025-06-01,Income,250000,250000,Salary"));
        // Commas in memos are quoted
        assert!(lines[2].ends_with(",Expense,80000,-80000,\"Rent, June\""));
    }

    #[test]
    fn test_export_day_buckets_csv() {
        let mut output = Vec::new();
        export_buckets_csv(&aggregate_by_day(&sample()), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_str,
            "Period,Income,Expense,Net\n2025-06-01,250000,80000,170000\n2025-06-02,0,3500,-3500\n"
        );
    }

    #[test]
    fn test_export_month_buckets_csv() {
        let mut output = Vec::new();
        export_buckets_csv(&aggregate_by_month(&sample()), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert!(csv_str.contains("2025-06,250000,83500,166500"));
    }
}
