//! Projection display formatting
//!
//! Renders the budget projection as a list of labelled figures followed by an
//! overspend alert or a daily spending hint.

use super::report::{format_amount, format_figure, format_title};
use crate::metrics::{Projection, ProjectionOutcome};
use crate::models::{BudgetGoal, GoalField};

/// Format the projection outcome for the terminal
pub fn format_projection(outcome: &ProjectionOutcome, symbol: &str) -> String {
    match outcome {
        ProjectionOutcome::Ready(projection) => format_projection_report(projection, symbol),
        ProjectionOutcome::InsufficientData { missing } => format_insufficient_data(missing),
    }
}

fn format_insufficient_data(missing: &[GoalField]) -> String {
    let fields: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
    let mut output = format_title("Budget Projection");
    output.push_str("Complete your goal settings (target date and monthly income) to see a projection.\n");
    output.push_str(&format!("Missing: {}\n", fields.join(", ")));
    output.push_str("Run 'kakeibo goal set --date YYYY-MM-DD --income AMOUNT'.\n");
    output
}

fn format_projection_report(p: &Projection, symbol: &str) -> String {
    let mut output = format_title("Budget Projection");

    let rows = [
        (
            "Available per month",
            format_figure(p.available_per_month, symbol),
            format!(
                "save {} a month to reach the target",
                format_figure(p.need_to_save_per_month, symbol)
            ),
        ),
        (
            "Available per day",
            format_figure(p.display_available_per_day() as f64, symbol),
            "monthly allowance over 30 days".to_string(),
        ),
        (
            "Left this month",
            format_figure(p.remaining_this_month, symbol),
            format!("{} days remaining", p.remaining_days_in_month),
        ),
        (
            "Per day from today",
            format_figure(p.display_daily_budget() as f64, symbol),
            "what is left over the days remaining".to_string(),
        ),
        (
            "Spent this month",
            format_amount(p.this_month_expenses, symbol),
            String::new(),
        ),
        (
            "Earned this month",
            format_amount(p.this_month_income, symbol),
            String::new(),
        ),
        (
            "Time to target",
            format!("{} months", p.months_to_target),
            format!("{} days", p.days_to_target),
        ),
        (
            "Still to save",
            format_amount(p.need_to_save_total, symbol),
            String::new(),
        ),
    ];

    let value_width = rows.iter().map(|(_, v, _)| v.chars().count()).max().unwrap_or(0);
    for (label, value, note) in &rows {
        let line = format!("{:<20} {:>width$}", label, value, width = value_width);
        if note.is_empty() {
            output.push_str(&format!("{}\n", line));
        } else {
            output.push_str(&format!("{}  ({})\n", line, note));
        }
    }

    if p.is_over_budget() {
        output.push('\n');
        output.push_str(&format!(
            "⚠ Over this month's budget by {}\n",
            format_figure(p.overspend(), symbol)
        ));
    }

    if let Some(hint) = p.daily_hint() {
        output.push('\n');
        output.push_str(&format!(
            "{} days left this month, {} a day to spend\n",
            p.remaining_days_in_month,
            format_figure(hint as f64, symbol)
        ));
    }

    output
}

/// Format the goal record
pub fn format_goal(goal: &BudgetGoal, symbol: &str) -> String {
    let mut output = format_title("Savings Goal");

    output.push_str(&format!("Balance:        {}\n", format_amount(goal.balance, symbol)));
    output.push_str(&format!(
        "Target amount:  {}\n",
        format_amount(goal.target_amount, symbol)
    ));
    output.push_str(&format!(
        "Target date:    {}\n",
        goal.target_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    ));
    output.push_str(&format!(
        "Monthly income: {}\n",
        goal.effective_monthly_income()
            .map(|m| format_amount(m, symbol))
            .unwrap_or_else(|| "(not set)".to_string())
    ));
    output.push_str(&format!(
        "Still to save:  {}\n",
        format_amount(goal.remaining_to_target(), symbol)
    ));

    output
}
