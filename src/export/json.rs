//! JSON Export functionality
//!
//! Exports the goal, the ledger, and everything derived from them as one
//! versioned JSON document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::metrics::{
    aggregate_by_day, aggregate_by_month, compute_projection, total_balance, DayBucket,
    MonthBucket, ProjectionOutcome,
};
use crate::models::{BudgetGoal, Money, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date the derived figures were computed for
    pub as_of: NaiveDate,

    pub goal: BudgetGoal,

    /// Ledger in insertion order
    pub transactions: Vec<Transaction>,

    pub total_balance: Money,
    pub daily: Vec<DayBucket>,
    pub monthly: Vec<MonthBucket>,
    pub projection: ProjectionOutcome,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Build the export from a goal and ledger snapshot
    pub fn new(goal: BudgetGoal, transactions: Vec<Transaction>, today: NaiveDate) -> Self {
        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            total_balance: total_balance(&transactions),
            daily: aggregate_by_day(&transactions),
            monthly: aggregate_by_month(&transactions),
            projection: compute_projection(&goal, &transactions, today),
            goal,
            transactions,
            metadata,
        }
    }
}

/// Export everything to pretty-printed JSON
pub fn export_full_json<W: Write>(export: &FullExport, writer: &mut W) -> KakeiboResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KakeiboError::Export(e.to_string()))?;
    Ok(())
}
