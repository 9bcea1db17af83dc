//! Ledger snapshot
//!
//! An owned, insertion-ordered copy of every transaction. The store hands one
//! out; the metrics functions only ever borrow its slice.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// All recorded transactions, oldest entry first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Borrow the transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append an entry; ledgers only grow
    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_push_preserves_insertion_order() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let first = Transaction::income(Money::from_units(1), date);
        let second = Transaction::expense(Money::from_units(2), date);

        let mut ledger = Ledger::default();
        assert!(ledger.is_empty());
        ledger.push(first.clone());
        ledger.push(second.clone());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions(), &[first, second]);
    }
}
