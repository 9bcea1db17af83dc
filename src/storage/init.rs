//! Storage initialization
//!
//! Handles first-run setup: directories plus empty ledger and goal documents.

use tracing::info;

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

use super::file_io::save_document;

/// Initialize storage for a fresh installation
///
/// Existing documents are left untouched, so running it twice is harmless.
pub fn initialize_storage(paths: &KakeiboPaths) -> Result<(), KakeiboError> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        save_document(
            &paths.transactions_file(),
            &serde_json::json!({ "transactions": [] }),
        )?;
        info!(path = %paths.transactions_file().display(), "created empty ledger");
    }

    if !paths.goal_file().exists() {
        save_document(&paths.goal_file(), &serde_json::json!({ "goal": {} }))?;
        info!(path = %paths.goal_file().display(), "created empty goal");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_loadable_documents() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        assert!(paths.transactions_file().exists());
        assert!(paths.goal_file().exists());

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(!storage.goal.get().unwrap().is_configured());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.goal_file(), r#"{"goal": {"target_amount": 5}}"#).unwrap();

        initialize_storage(&paths).unwrap();

        let contents = std::fs::read_to_string(paths.goal_file()).unwrap();
        assert!(contents.contains("\"target_amount\": 5"));
    }
}
