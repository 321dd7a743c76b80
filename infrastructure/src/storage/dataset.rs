//! Dataset loading

use solver_application::StoreError;
use solver_domain::Problem;
use std::path::Path;

/// Read a file that must contain a JSON array.
pub fn load_json_array(path: &Path) -> Result<Vec<serde_json::Value>, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    match value {
        serde_json::Value::Array(items) => Ok(items),
        _ => Err(StoreError::Malformed {
            path: path.display().to_string(),
            message: "expected a JSON array of objects".to_string(),
        }),
    }
}

/// Read a problem dataset (`[{"input": ..., "domain"?: ..., "output"?: ...}]`).
pub fn load_problems(path: &Path) -> Result<Vec<Problem>, StoreError> {
    load_json_array(path)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| StoreError::Malformed {
                path: path.display().to_string(),
                message: format!("item {}: {}", index, e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_domain::DomainTag;

    #[test]
    fn test_load_problems() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev.json");
        std::fs::write(
            &path,
            r#"[
                {"input": "What is 2+2?", "domain": "math", "output": "4"},
                {"input": "Who wrote Hamlet?"}
            ]"#,
        )
        .unwrap();

        let problems = load_problems(&path).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].domain, Some(DomainTag::Math));
        assert_eq!(problems[0].expected.as_deref(), Some("4"));
        assert!(problems[1].domain.is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_problems(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_non_array_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obj.json");
        std::fs::write(&path, r#"{"input": "x"}"#).unwrap();

        assert!(matches!(
            load_json_array(&path),
            Err(StoreError::Malformed { .. })
        ));
    }
}
