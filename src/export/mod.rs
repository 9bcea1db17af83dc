//! Export module for Kakeibo
//!
//! - CSV: transactions and day/month buckets (spreadsheet-compatible)
//! - JSON: full versioned export including derived figures
//! - YAML: the same full export, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_buckets_csv, export_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
