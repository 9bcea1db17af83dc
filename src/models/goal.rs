//! Savings goal model
//!
//! The single goal record drives budget projections: how much is saved now,
//! how much should be saved, by when, and what comes in each month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A goal field that must be set before a projection can be made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalField {
    TargetDate,
    MonthlyIncome,
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetDate => write!(f, "target date"),
            Self::MonthlyIncome => write!(f, "monthly income"),
        }
    }
}

/// The user's savings goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetGoal {
    /// Amount saved so far
    #[serde(default)]
    pub balance: Money,

    /// Amount the user wants to have saved
    #[serde(default)]
    pub target_amount: Money,

    /// Date by which the target should be reached
    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// Expected income per month; zero counts as unset
    #[serde(default)]
    pub monthly_income: Option<Money>,
}

impl BudgetGoal {
    pub fn new(
        balance: Money,
        target_amount: Money,
        target_date: Option<NaiveDate>,
        monthly_income: Option<Money>,
    ) -> Self {
        Self {
            balance,
            target_amount,
            target_date,
            monthly_income,
        }
    }

    /// Monthly income, if set to something other than zero
    pub fn effective_monthly_income(&self) -> Option<Money> {
        self.monthly_income.filter(|income| !income.is_zero())
    }

    /// Fields still missing before a projection can be computed
    pub fn missing_fields(&self) -> Vec<GoalField> {
        let mut missing = Vec::new();
        if self.target_date.is_none() {
            missing.push(GoalField::TargetDate);
        }
        if self.effective_monthly_income().is_none() {
            missing.push(GoalField::MonthlyIncome);
        }
        missing
    }

    /// Whether both the target date and monthly income are set
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Amount still to save, never negative
    pub fn remaining_to_target(&self) -> Money {
        let remaining = self.target_amount - self.balance;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Validate amounts before the goal is stored
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        let fields = [
            ("balance", Some(self.balance)),
            ("target amount", Some(self.target_amount)),
            ("monthly income", self.monthly_income),
        ];
        for (name, value) in fields {
            if let Some(amount) = value {
                if amount.is_negative() {
                    return Err(GoalValidationError::NegativeAmount {
                        field: name,
                        amount,
                    });
                }
                if amount.exceeds_entry_limit() {
                    return Err(GoalValidationError::AmountTooLarge {
                        field: name,
                        amount,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NegativeAmount { field: &'static str, amount: Money },
    AmountTooLarge { field: &'static str, amount: Money },
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount { field, amount } => {
                write!(f, "Goal {} must not be negative (got {})", field, amount)
            }
            Self::AmountTooLarge { field, amount } => write!(
                f,
                "Goal {} {} is larger than the maximum of {}",
                field,
                amount,
                Money::MAX_ENTRY
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}
