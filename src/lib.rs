//! Kakeibo - household ledger with savings-goal budget projections
//!
//! This library keeps an append-only ledger of income and expense entries plus
//! a single savings goal, and derives spending guidance from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, the goal, month keys)
//! - `metrics`: Pure projection and aggregation engine
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `kakeibo` binary
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
//! use kakeibo::metrics::compute_projection;
//! use kakeibo::storage::Storage;
//!
//! let paths = KakeiboPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let ledger = storage.transactions.snapshot()?;
//! let outcome = compute_projection(&storage.goal.get()?, ledger.transactions(), today);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
