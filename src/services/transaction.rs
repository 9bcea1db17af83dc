//! Transaction service
//!
//! Business logic for recording income and expenses and for reading the
//! ledger back in filtered form.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Ledger, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only transactions on or after `start`
    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only transactions on or before `end`
    pub fn to_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Return at most `limit` transactions
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub memo: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction and persist the ledger
    pub fn create(&self, input: CreateTransactionInput) -> KakeiboResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.date);

        if let Some(memo) = input.memo {
            txn.memo = memo.trim().to_string();
        }

        txn.validate()?;

        self.storage.transactions.append(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, kind = %txn.kind, amount = txn.amount.units(), date = %txn.date, "recorded transaction");
        Ok(txn)
    }

    /// Find a transaction by ID string
    pub fn find(&self, identifier: &str) -> KakeiboResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// Get a transaction by ID string, failing when it does not exist
    pub fn get(&self, identifier: &str) -> KakeiboResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| KakeiboError::transaction_not_found(identifier))
    }

    /// Every transaction in insertion order
    pub fn ledger(&self) -> KakeiboResult<Ledger> {
        self.storage.transactions.snapshot()
    }

    /// List transactions newest first with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> KakeiboResult<Vec<Transaction>> {
        let start = filter.start_date.unwrap_or(NaiveDate::MIN);
        let end = filter.end_date.unwrap_or(NaiveDate::MAX);

        let mut transactions = self.storage.transactions.get_by_date_range(start, end)?;

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Number of recorded transactions
    pub fn count(&self) -> KakeiboResult<usize> {
        self.storage.transactions.count()
    }
}

/// Today in local time, used when no date is given
pub fn default_date() -> NaiveDate {
    Local::now().date_naive()
}
