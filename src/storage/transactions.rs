//! Transaction repository for JSON storage
//!
//! Keeps the append-only ledger in memory in insertion order and mirrors it to
//! transactions.json.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::KakeiboError;
use crate::models::{Ledger, Transaction};

use super::file_io::{load_document, save_document};

/// On-disk layout of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), KakeiboError> {
        let file_data: TransactionData = load_document(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = file_data.transactions;
        debug!(count = data.len(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        save_document(&self.path, &file_data)
    }

    /// Append a transaction to the end of the ledger
    pub fn append(&self, txn: Transaction) -> Result<(), KakeiboError> {
        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|existing| existing.id == txn.id) {
            return Err(KakeiboError::Storage(format!(
                "Transaction {} is already recorded",
                txn.id
            )));
        }

        data.push(txn);
        Ok(())
    }

    /// Snapshot of every transaction, in insertion order
    pub fn snapshot(&self) -> Result<Ledger, KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(Ledger::new(data.clone()))
    }

    /// Find a transaction by full UUID or short `txn-` prefix
    pub fn find(&self, id: &str) -> Result<Option<Transaction>, KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut matches = data.iter().filter(|txn| txn.id.matches_short(id));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(KakeiboError::Validation(format!(
                "Transaction ID '{}' is ambiguous; use more characters",
                id
            ))),
        }
    }

    /// Transactions dated within `start..=end`, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Number of recorded transactions
    pub fn count(&self) -> Result<usize, KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
