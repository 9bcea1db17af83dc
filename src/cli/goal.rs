//! CLI commands for the savings goal

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::format_goal;
use crate::error::{KakeiboError, KakeiboResult};
use crate::services::{GoalService, GoalUpdate};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Show the current goal
    Show,

    /// Update one or more goal fields
    Set {
        /// Amount saved so far
        #[arg(long, allow_negative_numbers = true)]
        balance: Option<String>,

        /// Amount to have saved by the target date
        #[arg(long, allow_negative_numbers = true)]
        target: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_date")]
        date: Option<String>,

        /// Expected income per month
        #[arg(long, allow_negative_numbers = true)]
        income: Option<String>,

        /// Remove the target date
        #[arg(long)]
        clear_date: bool,
    },
}

/// Handle goal commands
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> KakeiboResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Show => {
            print!("{}", format_goal(&service.get()?, &settings.currency_symbol));
        }
        GoalCommands::Set {
            balance,
            target,
            date,
            income,
            clear_date,
        } => {
            let update = GoalUpdate {
                balance: balance.as_deref().map(parse_amount).transpose()?,
                target_amount: target.as_deref().map(parse_amount).transpose()?,
                target_date: date.as_deref().map(parse_date).transpose()?,
                monthly_income: income.as_deref().map(parse_amount).transpose()?,
                clear_target_date: clear_date,
            };

            if update.is_empty() {
                return Err(KakeiboError::Validation(
                    "Nothing to update. Pass --balance, --target, --date, --income or --clear-date"
                        .into(),
                ));
            }

            let goal = service.update(update)?;
            println!("Goal updated.");
            println!();
            print!("{}", format_goal(&goal, &settings.currency_symbol));
        }
    }

    Ok(())
}
