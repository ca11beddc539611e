//! Bill attachment storage
//!
//! Copies a bill file into the uploads directory and hands back the stored
//! file name as an opaque reference. File contents are never inspected.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SplitError, SplitResult};

/// Stores attached bill files under a single uploads directory
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    uploads_dir: PathBuf,
}

impl AttachmentStore {
    /// Create an attachment store rooted at the given directory
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// Directory the attachments are copied into
    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Copy a bill into the uploads directory
    ///
    /// Returns `None` for a blank path. An existing upload with the same file
    /// name is overwritten.
    pub fn store(&self, source: &str) -> SplitResult<Option<String>> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(None);
        }

        let source_path = Path::new(source);
        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| SplitError::Attachment(format!("Not a file path: {}", source)))?;

        if !source_path.is_file() {
            return Err(SplitError::Attachment(format!(
                "Bill file not found: {}",
                source_path.display()
            )));
        }

        fs::create_dir_all(&self.uploads_dir).map_err(|e| {
            SplitError::Attachment(format!("Failed to create uploads directory: {}", e))
        })?;

        let destination = self.uploads_dir.join(&file_name);
        fs::copy(source_path, &destination)
            .map_err(|e| SplitError::Attachment(format!("Failed to save bill: {}", e)))?;

        tracing::debug!(file = %file_name, "stored bill attachment");
        Ok(Some(file_name))
    }

    /// Resolve a stored reference back to its path
    pub fn path_of(&self, reference: &str) -> PathBuf {
        self.uploads_dir.join(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_blank_path_stores_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = AttachmentStore::new(temp_dir.path().join("uploads"));

        assert_eq!(store.store("  ").unwrap(), None);
        assert!(!store.uploads_dir().exists());
    }

    #[test]
    fn test_store_copies_file() {
        let temp_dir = TempDir::new().unwrap();
        let bill = temp_dir.path().join("receipt.txt");
        fs::write(&bill, "milk 3.50").unwrap();

        let store = AttachmentStore::new(temp_dir.path().join("uploads"));
        let reference = store.store(bill.to_str().unwrap()).unwrap().unwrap();

        assert_eq!(reference, "receipt.txt");
        assert_eq!(fs::read_to_string(store.path_of(&reference)).unwrap(), "milk 3.50");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = AttachmentStore::new(temp_dir.path().join("uploads"));
        let missing = temp_dir.path().join("nope.png");

        let err = store.store(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SplitError::Attachment(_)));
    }
}
