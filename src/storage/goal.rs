//! Goal repository for JSON storage
//!
//! Holds the single savings goal record in goal.json.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::KakeiboError;
use crate::models::BudgetGoal;

use super::file_io::{load_document, save_document};

/// On-disk layout of goal.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goal: BudgetGoal,
}

/// Repository for the savings goal
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<BudgetGoal>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetGoal::default()),
        }
    }

    /// Load the goal from disk
    pub fn load(&self) -> Result<(), KakeiboError> {
        let file_data: GoalData = load_document(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = file_data.goal;
        debug!(configured = data.is_configured(), "loaded goal");
        Ok(())
    }

    /// Save the goal to disk
    pub fn save(&self) -> Result<(), KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = GoalData { goal: data.clone() };
        save_document(&self.path, &file_data)
    }

    /// Current goal value
    pub fn get(&self) -> Result<BudgetGoal, KakeiboError> {
        let data = self.data.read().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Replace the goal
    pub fn set(&self, goal: BudgetGoal) -> Result<(), KakeiboError> {
        let mut data = self.data.write().map_err(|e| {
            KakeiboError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = goal;
        Ok(())
    }
}
