//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, CsvTable, ExportArgs, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{
    handle_calendar_command, handle_projection_command, handle_summary_command,
    handle_trend_command, CalendarArgs, TrendArgs, TrendCommands,
};
pub use transaction::{
    handle_add_command, handle_list_command, handle_show_command, AddArgs, ListArgs, ShowArgs,
};

use chrono::NaiveDate;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> KakeiboResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        KakeiboError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a whole-unit amount argument
pub fn parse_amount(s: &str) -> KakeiboResult<Money> {
    Ok(Money::parse(s)?)
}
