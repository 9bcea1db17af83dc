//! Transaction model
//!
//! A ledger entry: an income or an expense of a non-negative amount on a
//! calendar date. Entries are never edited once recorded; the sign of an
//! amount is derived from its kind whenever it is needed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Apply this kind's sign to an amount
    pub fn sign(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "収入" => Ok(Self::Income),
            "expense" | "out" | "支出" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction kind: {}", other)),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Unsigned amount
    pub amount: Money,

    /// Free-text label
    #[serde(default)]
    pub memo: String,

    /// Calendar date the transaction belongs to
    pub date: NaiveDate,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            memo: String::new(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Create an income entry
    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, date)
    }

    /// Create an expense entry
    pub fn expense(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, amount, date)
    }

    /// Builder-style memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// +amount for income, -amount for expense
    pub fn signed_amount(&self) -> Money {
        self.kind.sign(self.amount)
    }

    /// Validate the transaction before it enters the ledger
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.amount.exceeds_entry_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.signed_amount().format_signed()
        )?;
        if !self.memo.is_empty() {
            write!(f, " ({})", self.memo)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount must not be negative (got {}); choose income or expense instead",
                amount
            ),
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} is larger than the maximum of {}",
                amount,
                Money::MAX_ENTRY
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::income(Money::from_units(250000), june(1));
        let expense = Transaction::expense(Money::from_units(80000), june(1));

        assert_eq!(income.signed_amount().units(), 250000);
        assert_eq!(expense.signed_amount().units(), -80000);
        // Stored amount keeps its sign
        assert_eq!(expense.amount.units(), 80000);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let txn = Transaction::expense(Money::from_units(-100), june(2));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_units(-100)))
        );
        assert!(Transaction::expense(Money::zero(), june(2)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_amounts() {
        let at_limit = Transaction::income(Money::MAX_ENTRY, june(2));
        assert!(at_limit.validate().is_ok());

        let huge = Money::from_units(i64::MAX);
        assert_eq!(
            Transaction::income(huge, june(2)).validate(),
            Err(TransactionValidationError::AmountTooLarge(huge))
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!("支出".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(Money::from_units(3500), june(2)).with_memo("Lunch");
        assert_eq!(txn.to_string(), "2025-06-02 Expense -3,500 (Lunch)");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::income(Money::from_units(1000), june(3)).with_memo("Gift");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
        assert!(json.contains("\"date\":\"2025-06-03\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
