//! Budget projection
//!
//! Turns the savings goal and the ledger into spending guidance: how much has
//! to be put aside each month to reach the target on time, and how much is
//! left to spend per month, per day, and for the rest of the current month.
//!
//! Two month lengths are in play on purpose. Durations (months to target, the
//! per-day allowance) use a flat 30 days; the "rest of this month" figures use
//! the real length of the current calendar month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::aggregate::PeriodTotals;
use super::dates::{ceil_div, days_between, APPROX_DAYS_PER_MONTH};
use crate::models::{BudgetGoal, GoalField, Money, MonthKey, Transaction};

/// Spending guidance derived from a fully configured goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// 30-day months until the target date, at least 1
    pub months_to_target: i64,
    /// Days until the target date, at least 1
    pub days_to_target: i64,
    /// Amount still to save, at least 0
    pub need_to_save_total: Money,
    pub need_to_save_per_month: f64,
    /// Income left each month after saving, at least 0
    pub available_per_month: f64,
    pub available_per_day: f64,
    pub this_month_expenses: Money,
    pub this_month_income: Money,
    /// Negative when this month's spending already exceeds the allowance
    pub remaining_this_month: f64,
    /// Days left in the current month, today included
    pub remaining_days_in_month: u32,
    pub remaining_daily_budget: f64,
}

impl Projection {
    /// Spending this month has passed the monthly allowance
    pub fn is_over_budget(&self) -> bool {
        self.remaining_this_month < 0.0
    }

    /// How far over the allowance this month is, 0 when within it
    pub fn overspend(&self) -> f64 {
        if self.is_over_budget() {
            self.remaining_this_month.abs()
        } else {
            0.0
        }
    }

    /// Whole units spendable per day for the rest of the month, when there is
    /// anything left to spend
    pub fn daily_hint(&self) -> Option<i64> {
        if self.remaining_days_in_month > 0 && self.remaining_this_month > 0.0 {
            Some(self.remaining_daily_budget.floor() as i64)
        } else {
            None
        }
    }

    /// Remaining daily budget rounded down and floored at zero
    pub fn display_daily_budget(&self) -> i64 {
        (self.remaining_daily_budget.floor() as i64).max(0)
    }

    /// Flat per-day allowance rounded down
    pub fn display_available_per_day(&self) -> i64 {
        self.available_per_day.floor() as i64
    }
}

/// Result of a projection request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectionOutcome {
    Ready(Projection),
    /// The goal lacks a target date or monthly income
    InsufficientData { missing: Vec<GoalField> },
}

impl ProjectionOutcome {
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            Self::Ready(projection) => Some(projection),
            Self::InsufficientData { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Compute the budget projection for `today`
///
/// Returns [`ProjectionOutcome::InsufficientData`] when the goal has no target
/// date or no (non-zero) monthly income. Every divisor is clamped so the
/// result is always finite.
pub fn compute_projection(
    goal: &BudgetGoal,
    transactions: &[Transaction],
    today: NaiveDate,
) -> ProjectionOutcome {
    let (target_date, monthly_income) =
        match (goal.target_date, goal.effective_monthly_income()) {
            (Some(date), Some(income)) => (date, income),
            _ => {
                return ProjectionOutcome::InsufficientData {
                    missing: goal.missing_fields(),
                }
            }
        };

    let days_until_target = days_between(today, target_date);
    let months_to_target = ceil_div(days_until_target, APPROX_DAYS_PER_MONTH).max(1);
    let days_to_target = days_until_target.max(1);

    let need_to_save_total = goal.remaining_to_target();
    let need_to_save_per_month = need_to_save_total.as_f64() / months_to_target as f64;

    let available_per_month = (monthly_income.as_f64() - need_to_save_per_month).max(0.0);
    let available_per_day = available_per_month / APPROX_DAYS_PER_MONTH as f64;

    let month = MonthKey::of(today);
    let this_month = PeriodTotals::from_transactions(
        transactions.iter().filter(|txn| month.contains(txn.date)),
    );

    let remaining_this_month = available_per_month - this_month.expense.as_f64();

    let remaining_days_in_month =
        (i64::from(month.days_in_month()) - i64::from(today.day()) + 1).max(0) as u32;
    let remaining_daily_budget = if remaining_days_in_month > 0 {
        remaining_this_month / f64::from(remaining_days_in_month)
    } else {
        0.0
    };

    ProjectionOutcome::Ready(Projection {
        months_to_target,
        days_to_target,
        need_to_save_total,
        need_to_save_per_month,
        available_per_month,
        available_per_day,
        this_month_expenses: this_month.expense,
        this_month_income: this_month.income,
        remaining_this_month,
        remaining_days_in_month,
        remaining_daily_budget,
    })
}
