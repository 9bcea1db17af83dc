//! Storage layer for Kakeibo
//!
//! Two JSON documents under the data directory: the append-only ledger in
//! transactions.json and the savings goal in goal.json. Writes are atomic.

pub mod file_io;
pub mod goal;
pub mod init;
pub mod transactions;

pub use file_io::{load_document, save_document};
pub use goal::GoalRepository;
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KakeiboPaths,
    pub transactions: TransactionRepository,
    pub goal: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KakeiboPaths) -> Result<Self, KakeiboError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            goal: GoalRepository::new(paths.goal_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), KakeiboError> {
        self.transactions.load()?;
        self.goal.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), KakeiboError> {
        self.transactions.save()?;
        self.goal.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
