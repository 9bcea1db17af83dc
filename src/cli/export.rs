//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::{csv, json, yaml};
use crate::metrics::{aggregate_by_day, aggregate_by_month};
use crate::services::{GoalService, TransactionService};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (one table, see --table)
    Csv,
    /// JSON (goal, ledger and derived figures)
    Json,
    /// YAML (same content as JSON, human-readable)
    Yaml,
}

/// Which table a CSV export contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CsvTable {
    Transactions,
    Daily,
    Monthly,
}

/// Arguments for `kakeibo export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table to write for CSV exports
    #[arg(long, value_enum, default_value = "transactions")]
    pub table: CsvTable,
}

fn open_output(output: Option<&PathBuf>) -> KakeiboResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                KakeiboError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Handle `kakeibo export`
pub fn handle_export_command(
    storage: &Storage,
    args: ExportArgs,
    today: NaiveDate,
) -> KakeiboResult<()> {
    let ledger = TransactionService::new(storage).ledger()?;
    let mut writer = open_output(args.output.as_ref())?;

    match args.format {
        ExportFormat::Csv => match args.table {
            CsvTable::Transactions => {
                csv::export_transactions_csv(ledger.transactions(), &mut writer)?
            }
            CsvTable::Daily => {
                csv::export_buckets_csv(&aggregate_by_day(ledger.transactions()), &mut writer)?
            }
            CsvTable::Monthly => {
                csv::export_buckets_csv(&aggregate_by_month(ledger.transactions()), &mut writer)?
            }
        },
        ExportFormat::Json | ExportFormat::Yaml => {
            let goal = GoalService::new(storage).get()?;
            let export = json::FullExport::new(goal, ledger.into_transactions(), today);
            if args.format == ExportFormat::Json {
                json::export_full_json(&export, &mut writer)?;
            } else {
                yaml::export_full_yaml(&export, &mut writer)?;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), format = ?args.format, "export written");
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}
