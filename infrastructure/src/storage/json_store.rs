//! JSON answers checkpoint

use solver_application::{AnswerRecord, ResultStore, StoreError};
use std::path::{Path, PathBuf};

/// Answers file written as a pretty-printed JSON array.
///
/// Every save rewrites the file through a temporary sibling and a rename, so
/// an interrupted write never leaves a truncated checkpoint behind.
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl ResultStore for JsonResultStore {
    fn load(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(answers).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonResultStore::new(dir.path().join("answers.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("answers.json");
        let store = JsonResultStore::new(&path);

        let answers = vec![AnswerRecord::new("4"), AnswerRecord::new("Paris")];
        store.save(&answers).unwrap();

        assert_eq!(store.load().unwrap(), answers);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""output": "Paris""#));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "[{\"output\": ").unwrap();

        let result = JsonResultStore::new(&path).load();
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_save_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        let store = JsonResultStore::new(&path);

        store.save(&[AnswerRecord::new("ü = 2π")]).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("ü = 2π"));
    }
}
