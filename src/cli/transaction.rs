//! CLI commands for recording, listing and inspecting transactions

use chrono::NaiveDate;
use clap::Args;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::{
    format_transaction_added, format_transaction_details, format_transaction_register,
};
use crate::error::KakeiboResult;
use crate::models::TransactionKind;
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Arguments for `kakeibo add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// income or expense
    pub kind: TransactionKind,

    /// Amount in whole currency units, e.g. 3500 or 250,000
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Free-form note
    #[arg(short, long)]
    pub memo: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `kakeibo list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for `kakeibo show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Transaction ID, with or without the `txn-` prefix
    pub id: String,
}

/// Handle `kakeibo add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> KakeiboResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(s) => parse_date(&s)?,
        None => today,
    };

    let service = TransactionService::new(storage);
    let txn = service.create(CreateTransactionInput {
        kind: args.kind,
        amount,
        date,
        memo: args.memo,
    })?;

    println!("{}", format_transaction_added(&txn, &settings.currency_symbol));
    Ok(())
}

/// Handle `kakeibo list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> KakeiboResult<()> {
    let mut filter = TransactionFilter::new().limit(args.limit);
    if let Some(from) = args.from {
        filter = filter.from_date(parse_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.to_date(parse_date(&to)?);
    }

    let service = TransactionService::new(storage);
    let transactions = service.list(filter)?;

    print!(
        "{}",
        format_transaction_register(
            &transactions,
            &settings.currency_symbol,
            &settings.date_format
        )
    );

    let total = service.count()?;
    if transactions.len() < total {
        println!("Showing {} of {} transactions.", transactions.len(), total);
    }

    Ok(())
}

/// Handle `kakeibo show`
pub fn handle_show_command(
    storage: &Storage,
    settings: &Settings,
    args: ShowArgs,
) -> KakeiboResult<()> {
    let txn = TransactionService::new(storage).get(&args.id)?;

    print!(
        "{}",
        format_transaction_details(&txn, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
