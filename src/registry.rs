//! Standardized case storage.
//!
//! Cases are stored one per file as pretty-printed JSON under a directory
//! (by default `data/standardized/`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Case;
use crate::validation::validate_case;

/// Default directory for standardized cases.
pub const DEFAULT_CASES_DIR: &str = "data/standardized/";

/// Validates `case` and writes it to `dir/{name}.json`.
///
/// Creates `dir` if needed and returns the written path. Invalid cases are
/// rejected before anything touches the filesystem.
pub fn save_case(case: &Case, name: &str, dir: impl AsRef<Path>) -> Result<PathBuf> {
    validate_case(case)?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, serde_json::to_string_pretty(case)?)?;

    tracing::info!(case = %case.case_id, path = %path.display(), "saved standardized case");
    Ok(path)
}

/// Reads a standardized case file.
pub fn load_case(path: impl AsRef<Path>) -> Result<Case> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Lists `*.json` files in `dir`, sorted. A missing directory lists nothing.
pub fn list_cases(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Job, Operation};

    fn sample_case() -> Case {
        Case::new("Stored").with_job(
            Job::new("J1").with_operation(
                Operation::new("O1")
                    .with_machine("M1", 2.0)
                    .with_unavailable_machine("M2"),
            ),
        )
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = save_case(&sample_case(), "Stored", &target).unwrap();
        assert_eq!(path, target.join("Stored.json"));
        assert_eq!(load_case(&path).unwrap(), sample_case());
    }

    #[test]
    fn test_save_rejects_invalid_case() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_case(&Case::new("Empty"), "Empty", dir.path()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!dir.path().join("Empty.json").exists());
    }

    #[test]
    fn test_list_cases_sorted_json_only() {
        let dir = tempfile::tempdir().unwrap();
        save_case(&sample_case(), "b", dir.path()).unwrap();
        save_case(&sample_case(), "a", dir.path()).unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();

        let names: Vec<String> = list_cases(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_cases(dir.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_case(&path), Err(Error::Json(_))));
    }
}
