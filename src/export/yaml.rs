//! YAML Export functionality
//!
//! Same document as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::json::FullExport;

/// Export everything to YAML with a short header comment
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> KakeiboResult<()> {
    writeln!(writer, "# Kakeibo export")
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KakeiboError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}
