//! Period aggregation
//!
//! Buckets transactions by calendar day or calendar month for trend charts,
//! and provides the signed per-day and whole-ledger totals used by the
//! calendar and the headline balance.
//!
//! Buckets are keyed in a `BTreeMap`, so output order depends only on the key
//! and never on the order transactions were recorded in.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, MonthKey, Transaction, TransactionKind};

/// Number of day buckets shown by the daily trend
pub const DAILY_TREND_DAYS: usize = 7;

/// Number of month buckets shown by the monthly trend
pub const MONTHLY_TREND_MONTHS: usize = 6;

/// Separate income and expense sums for a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub income: Money,
    pub expense: Money,
}

impl PeriodTotals {
    /// Sum the given transactions
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();
        for txn in transactions {
            totals.record(txn);
        }
        totals
    }

    /// Add one transaction to the matching side
    pub fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// Income and expense as percentages of their combined total
    ///
    /// Both are 0 when nothing has been recorded.
    pub fn share(&self) -> (f64, f64) {
        let total = self.income.as_f64() + self.expense.as_f64();
        if total == 0.0 {
            return (0.0, 0.0);
        }
        (
            self.income.as_f64() / total * 100.0,
            self.expense.as_f64() / total * 100.0,
        )
    }
}

/// Totals for one period, keyed by the period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodBucket<K> {
    pub key: K,
    #[serde(flatten)]
    pub totals: PeriodTotals,
}

/// A calendar-day bucket
pub type DayBucket = PeriodBucket<NaiveDate>;

/// A calendar-month bucket
pub type MonthBucket = PeriodBucket<MonthKey>;

fn aggregate_by<K, F>(transactions: &[Transaction], key_of: F) -> Vec<PeriodBucket<K>>
where
    K: Ord + Copy,
    F: Fn(&Transaction) -> K,
{
    let mut buckets: BTreeMap<K, PeriodTotals> = BTreeMap::new();
    for txn in transactions {
        buckets.entry(key_of(txn)).or_default().record(txn);
    }

    buckets
        .into_iter()
        .map(|(key, totals)| PeriodBucket { key, totals })
        .collect()
}

/// One bucket per distinct date, oldest first
pub fn aggregate_by_day(transactions: &[Transaction]) -> Vec<DayBucket> {
    aggregate_by(transactions, |txn| txn.date)
}

/// One bucket per distinct year-month, oldest first
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthBucket> {
    aggregate_by(transactions, |txn| MonthKey::of(txn.date))
}

/// The most recent `n` buckets, still oldest first
pub fn trend_window<K>(buckets: &[PeriodBucket<K>], n: usize) -> &[PeriodBucket<K>] {
    &buckets[buckets.len().saturating_sub(n)..]
}

/// Day buckets for the daily trend chart
pub fn daily_trend(transactions: &[Transaction], days: usize) -> Vec<DayBucket> {
    trend_window(&aggregate_by_day(transactions), days).to_vec()
}

/// Month buckets for the monthly comparison chart
pub fn monthly_trend(transactions: &[Transaction], months: usize) -> Vec<MonthBucket> {
    trend_window(&aggregate_by_month(transactions), months).to_vec()
}

/// Signed sum of the transactions on `date`, 0 when there are none
pub fn net_for_date(transactions: &[Transaction], date: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|txn| txn.date == date)
        .map(Transaction::signed_amount)
        .sum()
}

/// Whether anything was recorded on `date`
pub fn has_records_on(transactions: &[Transaction], date: NaiveDate) -> bool {
    transactions.iter().any(|txn| txn.date == date)
}

/// Income minus expense over the whole ledger
pub fn total_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Whole-ledger income and expense sums
pub fn income_expense_totals(transactions: &[Transaction]) -> PeriodTotals {
    PeriodTotals::from_transactions(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(units: i64, on: NaiveDate) -> Transaction {
        Transaction::income(Money::from_units(units), on)
    }

    fn expense(units: i64, on: NaiveDate) -> Transaction {
        Transaction::expense(Money::from_units(units), on)
    }

    fn june_ledger() -> Vec<Transaction> {
        vec![
            income(250000, date(2025, 6, 1)),
            expense(80000, date(2025, 6, 1)),
            expense(3500, date(2025, 6, 2)),
        ]
    }

    fn mixed_ledger() -> Vec<Transaction> {
        vec![
            expense(1200, date(2025, 3, 14)),
            income(300000, date(2025, 1, 25)),
            expense(4800, date(2024, 12, 31)),
            income(5000, date(2025, 3, 14)),
            expense(64000, date(2025, 1, 27)),
            expense(700, date(2025, 3, 2)),
            income(300000, date(2025, 2, 25)),
        ]
    }

    #[test]
    fn test_june_scenario() {
        let txns = june_ledger();

        assert_eq!(total_balance(&txns).units(), 166500);
        assert_eq!(net_for_date(&txns, date(2025, 6, 1)).units(), 170000);
        assert_eq!(net_for_date(&txns, date(2025, 6, 2)).units(), -3500);
        assert_eq!(net_for_date(&txns, date(2025, 6, 3)), Money::zero());

        let days = aggregate_by_day(&txns);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].key, date(2025, 6, 1));
        assert_eq!(days[0].totals.income.units(), 250000);
        assert_eq!(days[0].totals.expense.units(), 80000);
        assert_eq!(days[1].totals.expense.units(), 3500);
    }

    #[test]
    fn test_month_buckets_are_chronological() {
        let months = aggregate_by_month(&mixed_ledger());
        let keys: Vec<String> = months.iter().map(|b| b.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-02", "2025-03"]);

        let march = &months[3].totals;
        assert_eq!(march.income.units(), 5000);
        assert_eq!(march.expense.units(), 1900);
        assert_eq!(march.net().units(), 3100);
    }

    #[test]
    fn test_bucket_sums_match_ledger_totals() {
        let txns = mixed_ledger();
        let totals = income_expense_totals(&txns);

        let day_income: Money = aggregate_by_day(&txns).iter().map(|b| b.totals.income).sum();
        let day_expense: Money = aggregate_by_day(&txns).iter().map(|b| b.totals.expense).sum();
        let month_income: Money = aggregate_by_month(&txns).iter().map(|b| b.totals.income).sum();
        let month_expense: Money = aggregate_by_month(&txns)
            .iter()
            .map(|b| b.totals.expense)
            .sum();

        assert_eq!(totals.income.units(), 605000);
        assert_eq!(totals.expense.units(), 70700);
        assert_eq!(day_income, totals.income);
        assert_eq!(day_expense, totals.expense);
        assert_eq!(month_income, totals.income);
        assert_eq!(month_expense, totals.expense);
        assert_eq!(totals.net(), total_balance(&txns));
    }

    #[test]
    fn test_aggregation_is_order_insensitive_and_idempotent() {
        let txns = mixed_ledger();
        let days = aggregate_by_day(&txns);
        let months = aggregate_by_month(&txns);

        assert_eq!(days, aggregate_by_day(&txns));
        assert_eq!(months, aggregate_by_month(&txns));

        let mut shuffled = txns.clone();
        shuffled.reverse();
        shuffled.swap(0, 3);
        shuffled.rotate_left(2);
        assert_eq!(days, aggregate_by_day(&shuffled));
        assert_eq!(months, aggregate_by_month(&shuffled));
        assert_eq!(total_balance(&txns), total_balance(&shuffled));
    }

    #[test]
    fn test_daily_trend_keeps_last_seven_days() {
        let start = date(2025, 5, 25);
        // Recorded newest first to make sure ordering comes from the keys
        let txns: Vec<Transaction> = (0..10)
            .rev()
            .map(|i| expense(100 * (i + 1), start + Duration::days(i)))
            .collect();

        let all = aggregate_by_day(&txns);
        assert_eq!(all.len(), 10);

        let trend = daily_trend(&txns, DAILY_TREND_DAYS);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].key, start + Duration::days(3));
        assert_eq!(trend[6].key, start + Duration::days(9));
        assert!(trend.windows(2).all(|w| w[0].key < w[1].key));
        assert_eq!(trend[6].totals.expense.units(), 1000);
    }

    #[test]
    fn test_monthly_trend_keeps_last_six_months() {
        let txns: Vec<Transaction> = (1..=9)
            .map(|m| income(1000 * m as i64, date(2025, m, 10)))
            .collect();

        let trend = monthly_trend(&txns, MONTHLY_TREND_MONTHS);
        let keys: Vec<String> = trend.iter().map(|b| b.key.to_string()).collect();
        assert_eq!(
            keys,
            vec!["2025-04", "2025-05", "2025-06", "2025-07", "2025-08", "2025-09"]
        );
    }

    #[test]
    fn test_totals_saturate_on_hand_edited_amounts() {
        let on = date(2025, 6, 1);
        let txns = vec![income(i64::MAX, on), income(i64::MAX, on)];

        assert_eq!(total_balance(&txns).units(), i64::MAX);
        assert_eq!(income_expense_totals(&txns).income.units(), i64::MAX);
        assert_eq!(aggregate_by_day(&txns)[0].totals.income.units(), i64::MAX);
        assert_eq!(net_for_date(&txns, on).units(), i64::MAX);

        let drained = vec![expense(i64::MAX, on), expense(i64::MAX, on)];
        assert_eq!(total_balance(&drained).units(), i64::MIN);
        assert_eq!(income_expense_totals(&drained).net().units(), -i64::MAX);
    }

    #[test]
    fn test_trend_window_shorter_than_n() {
        let days = aggregate_by_day(&june_ledger());
        assert_eq!(trend_window(&days, 7).len(), 2);
        assert!(trend_window(&days, 0).is_empty());
        assert_eq!(trend_window(&days, usize::MAX).len(), 2);
        assert!(daily_trend(&[], 7).is_empty());
    }

    #[test]
    fn test_has_records_on_includes_zero_net_days() {
        let on = date(2025, 6, 5);
        let txns = vec![income(500, on), expense(500, on)];
        assert!(has_records_on(&txns, on));
        assert_eq!(net_for_date(&txns, on), Money::zero());
        assert!(!has_records_on(&txns, on + Duration::days(1)));
    }

    #[test]
    fn test_share() {
        let totals = income_expense_totals(&[income(750, date(2025, 1, 1)), expense(250, date(2025, 1, 2))]);
        assert_eq!(totals.share(), (75.0, 25.0));
        assert_eq!(PeriodTotals::default().share(), (0.0, 0.0));
    }

    #[test]
    fn test_bucket_serialization_flattens_totals() {
        let months = aggregate_by_month(&june_ledger());
        let json = serde_json::to_value(&months[0]).unwrap();
        assert_eq!(json["key"], "2025-06");
        assert_eq!(json["income"], 250000);
        assert_eq!(json["expense"], 83500);
    }
}
