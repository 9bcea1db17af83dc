//! Goal service
//!
//! Reads and updates the savings goal. Updates are partial: only the fields
//! given are changed.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{BudgetGoal, Money};
use crate::storage::Storage;

/// Service for the savings goal
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Partial update for the goal
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub balance: Option<Money>,
    pub target_amount: Option<Money>,
    pub target_date: Option<NaiveDate>,
    pub monthly_income: Option<Money>,
    /// Remove the target date
    pub clear_target_date: bool,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.balance.is_none()
            && self.target_amount.is_none()
            && self.target_date.is_none()
            && self.monthly_income.is_none()
            && !self.clear_target_date
    }

    fn apply(&self, goal: &mut BudgetGoal) {
        if let Some(balance) = self.balance {
            goal.balance = balance;
        }
        if let Some(target) = self.target_amount {
            goal.target_amount = target;
        }
        if self.clear_target_date {
            goal.target_date = None;
        }
        if let Some(date) = self.target_date {
            goal.target_date = Some(date);
        }
        if let Some(income) = self.monthly_income {
            goal.monthly_income = Some(income);
        }
    }
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current goal
    pub fn get(&self) -> KakeiboResult<BudgetGoal> {
        self.storage.goal.get()
    }

    /// Apply a partial update, validate it, and persist the result
    pub fn update(&self, update: GoalUpdate) -> KakeiboResult<BudgetGoal> {
        if update.target_date.is_some() && update.clear_target_date {
            return Err(KakeiboError::Validation(
                "Cannot set and clear the target date at the same time".into(),
            ));
        }

        let mut goal = self.storage.goal.get()?;
        update.apply(&mut goal);

        goal.validate()?;

        self.storage.goal.set(goal.clone())?;
        self.storage.goal.save()?;

        info!(configured = goal.is_configured(), "updated goal");
        Ok(goal)
    }
}
