//! CLI commands for summaries and projections
//!
//! Every report reads a snapshot of the ledger and hands it to the metrics
//! engine together with the date to treat as today.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_calendar, format_projection, format_summary, format_trend};
use crate::error::KakeiboResult;
use crate::metrics::{
    compute_projection, daily_trend, income_expense_totals, month_calendar, monthly_trend,
    total_balance,
};
use crate::models::MonthKey;
use crate::services::{GoalService, TransactionService};
use crate::storage::Storage;

/// Trend subcommands
#[derive(Subcommand, Debug)]
pub enum TrendCommands {
    /// Income and expense per day
    Daily(TrendArgs),
    /// Income and expense per month
    Monthly(TrendArgs),
}

/// Window options shared by both trends
#[derive(Args, Debug)]
pub struct TrendArgs {
    /// Number of most recent periods to show (defaults to the configured window)
    #[arg(short, long, conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Show every period
    #[arg(long)]
    pub all: bool,
}

impl TrendArgs {
    /// Number of trailing periods to keep; `--all` keeps everything
    fn window(&self, default: usize) -> usize {
        if self.all {
            usize::MAX
        } else {
            self.limit.unwrap_or(default)
        }
    }
}

/// Arguments for `kakeibo calendar`
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle `kakeibo summary`
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> KakeiboResult<()> {
    let ledger = TransactionService::new(storage).ledger()?;
    let transactions = ledger.transactions();

    print!(
        "{}",
        format_summary(
            total_balance(transactions),
            &income_expense_totals(transactions),
            &settings.currency_symbol
        )
    );
    Ok(())
}

/// Handle `kakeibo projection`
pub fn handle_projection_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
) -> KakeiboResult<()> {
    let goal = GoalService::new(storage).get()?;
    let ledger = TransactionService::new(storage).ledger()?;

    let outcome = compute_projection(&goal, ledger.transactions(), today);
    debug!(%today, insufficient = outcome.is_insufficient(), "computed projection");

    print!("{}", format_projection(&outcome, &settings.currency_symbol));
    Ok(())
}

/// Handle `kakeibo trend`
pub fn handle_trend_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TrendCommands,
) -> KakeiboResult<()> {
    let ledger = TransactionService::new(storage).ledger()?;
    let symbol = &settings.currency_symbol;

    let output = match cmd {
        TrendCommands::Daily(args) => {
            let days = args.window(settings.daily_trend_days);
            format_trend("Daily Trend", &daily_trend(ledger.transactions(), days), symbol)
        }
        TrendCommands::Monthly(args) => {
            let months = args.window(settings.monthly_trend_months);
            format_trend("Monthly Trend", &monthly_trend(ledger.transactions(), months), symbol)
        }
    };

    print!("{}", output);
    Ok(())
}

/// Handle `kakeibo calendar`
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    args: CalendarArgs,
    today: NaiveDate,
) -> KakeiboResult<()> {
    let month = match args.month {
        Some(s) => MonthKey::parse(&s)?,
        None => MonthKey::of(today),
    };

    let ledger = TransactionService::new(storage).ledger()?;
    let calendar = month_calendar(
        ledger.transactions(),
        month,
        today,
        settings.first_day_of_week,
    );

    print!(
        "{}",
        format_calendar(
            &calendar,
            settings.first_day_of_week,
            &settings.currency_symbol
        )
    );
    Ok(())
}
