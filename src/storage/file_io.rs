//! Loading and saving the ledger's JSON documents
//!
//! Each data file holds one pretty-printed JSON document. A file that does not
//! exist yet loads as the empty document. Saves are staged next to the target
//! and renamed over it, so an interrupted save leaves the previous ledger in
//! place.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{KakeiboError, KakeiboResult};

const STAGING_SUFFIX: &str = ".tmp";

/// Load a document, or its empty form when the file has not been created yet
pub fn load_document<T>(path: &Path) -> KakeiboResult<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no document yet, starting empty");
            return Ok(T::default());
        }
        Err(e) => {
            return Err(KakeiboError::Storage(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| KakeiboError::damaged_data(path, e))
}

/// Replace a document on disk with `doc`
pub fn save_document<T: Serialize>(path: &Path, doc: &T) -> KakeiboResult<()> {
    let mut bytes = serde_json::to_vec_pretty(doc)?;
    bytes.push(b'\n');

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            KakeiboError::Storage(format!("Cannot create {}: {}", dir.display(), e))
        })?;
    }

    let staged = staging_path(path);
    write_synced(&staged, &bytes)
        .and_then(|()| fs::rename(&staged, path))
        .map_err(|e| {
            let _ = fs::remove_file(&staged);
            KakeiboError::Storage(format!("Cannot save {}: {}", path.display(), e))
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "saved document");
    Ok(())
}

/// Sibling path the next save is written to before the rename
fn staging_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entries() -> Vec<Transaction> {
        let on = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        vec![
            Transaction::income(Money::from_units(250000), on).with_memo("Salary"),
            Transaction::expense(Money::from_units(80000), on).with_memo("Rent"),
        ]
    }

    #[test]
    fn test_missing_document_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        let loaded: Vec<Transaction> = load_document(&path).unwrap();
        assert!(loaded.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load_keeps_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("transactions.json");

        save_document(&path, &entries()).unwrap();
        let loaded: Vec<Transaction> = load_document(&path).unwrap();
        assert_eq!(loaded, entries());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n]\n"));
        assert!(!temp_dir.path().join("data").join("transactions.json.tmp").exists());
    }

    #[test]
    fn test_staging_path_keeps_extension() {
        assert_eq!(
            staging_path(Path::new("/data/goal.json")),
            PathBuf::from("/data/goal.json.tmp")
        );
    }

    #[test]
    fn test_damaged_document_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goal.json");
        fs::write(&path, "{\"goal\": ").unwrap();

        let err = load_document::<Vec<Transaction>>(&path).unwrap_err();
        assert!(matches!(err, KakeiboError::DamagedData { .. }));
        assert!(err.to_string().contains("goal.json"));
    }
}
