//! Core data models for Kakeibo
//!
//! Transactions, the savings goal, the ledger snapshot, and the small value
//! types (money, IDs, month keys) they are built from.

pub mod goal;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use goal::{BudgetGoal, GoalField, GoalValidationError};
pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
