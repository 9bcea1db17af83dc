//! Errors surfaced by the ledger
//!
//! Everything a command can fail with funnels into [`KakeiboError`]. Bad user
//! input is always `Validation`, so the CLI can tell a typo apart from a
//! damaged data file or a failing disk.

use std::path::Path;

use thiserror::Error;

use crate::models::{
    GoalValidationError, MoneyParseError, MonthParseError, TransactionValidationError,
};

#[derive(Error, Debug)]
pub enum KakeiboError {
    /// Unreadable or inconsistent settings
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// An amount, date, month or goal field the user typed was rejected
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A ledger or goal document exists but does not parse
    #[error("Data file {path} is damaged: {reason}")]
    DamagedData { path: String, reason: String },

    #[error("Export error: {0}")]
    Export(String),

    /// Lock poisoning and other repository failures
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KakeiboError {
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    pub fn damaged_data(path: &Path, reason: impl ToString) -> Self {
        Self::DamagedData {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for KakeiboError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KakeiboError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Rejected input from the model layer becomes a `Validation` error
macro_rules! rejected_input {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for KakeiboError {
                fn from(err: $source) -> Self {
                    Self::Validation(err.to_string())
                }
            }
        )+
    };
}

rejected_input!(
    MoneyParseError,
    MonthParseError,
    TransactionValidationError,
    GoalValidationError,
);

pub type KakeiboResult<T> = Result<T, KakeiboError>;
