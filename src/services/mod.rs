//! Service layer for Kakeibo
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation before anything is written.

pub mod goal;
pub mod transaction;

pub use goal::{GoalService, GoalUpdate};
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
