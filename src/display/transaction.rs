//! Transaction display formatting
//!
//! Register view of the ledger, rendered with `tabled`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{format_amount, truncate};
use crate::models::Transaction;

const MEMO_WIDTH: usize = 30;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Memo")]
    memo: String,
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| RegisterRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: txn.kind.to_string(),
        amount: format_amount(txn.signed_amount(), symbol),
        memo: truncate(&txn.memo, MEMO_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// One-line confirmation after a transaction is recorded
pub fn format_transaction_added(txn: &Transaction, symbol: &str) -> String {
    let mut line = format!(
        "Recorded {} {} of {} on {}",
        txn.kind.to_string().to_lowercase(),
        txn.id,
        format_amount(txn.amount, symbol),
        txn.date.format("%Y-%m-%d")
    );
    if !txn.memo.is_empty() {
        line.push_str(&format!(" ({})", txn.memo));
    }
    line
}

/// Full detail view of a single transaction
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Kind:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(txn.signed_amount(), symbol)
    ));
    if !txn.memo.is_empty() {
        output.push_str(&format!("Memo:        {}\n", txn.memo));
    }
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
