//! Path management for Kakeibo
//!
//! ## Path Resolution Order
//!
//! 1. `KAKEIBO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`, e.g.
//!    `~/.config/kakeibo` on Linux or `%APPDATA%\kakeibo` on Windows

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::KakeiboError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KAKEIBO_DATA_DIR";

const APP_DIR_NAME: &str = "kakeibo";

/// Manages all paths used by Kakeibo
#[derive(Debug, Clone)]
pub struct KakeiboPaths {
    base_dir: PathBuf,
}

impl KakeiboPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KakeiboError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create KakeiboPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the ledger documents
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Path to goal.json
    pub fn goal_file(&self) -> PathBuf {
        self.data_dir().join("goal.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), KakeiboError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KakeiboError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KakeiboError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Kakeibo has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, KakeiboError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| KakeiboError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
