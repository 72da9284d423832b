//! Guarantees every supported locale document exists.

use std::path::Path;

use super::document::{
    Document,
    create_document,
    render_document,
};
use super::error::StoreError;
use crate::types::LanguageCode;

/// Create `{output_dir}/{code}.json` as an empty object for every supported
/// code that has no file yet.
///
/// Existing files are never opened for writing, so repeated calls are no-ops.
///
/// # Errors
/// Fails on the first directory or file that cannot be created.
pub fn ensure_store(output_dir: &Path) -> Result<(), StoreError> {
    let empty = render_document(&Document::new(), 0)?;
    let mut created = Vec::new();

    for code in LanguageCode::ALL {
        let path = output_dir.join(code.file_name());
        if path.exists() {
            continue;
        }

        std::fs::create_dir_all(output_dir).map_err(|e| StoreError::io(output_dir, e))?;
        if create_document(&path, &empty)? {
            created.push(code.as_str());
        }
    }

    if !created.is_empty() {
        tracing::debug!(dir = %output_dir.display(), ?created, "Created empty locale documents");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[rstest]
    fn creates_one_empty_file_per_code() {
        let temp_dir = TempDir::new().unwrap();

        ensure_store(temp_dir.path()).unwrap();

        assert_that!(
            file_names(temp_dir.path()),
            elements_are![
                eq("en-us.json"),
                eq("ja-jp.json"),
                eq("ru-ru.json"),
                eq("zh-cn.json"),
                eq("zh-tw.json")
            ]
        );
        for code in LanguageCode::ALL {
            let text = fs::read_to_string(temp_dir.path().join(code.file_name())).unwrap();
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value, serde_json::json!({}));
        }
    }

    #[rstest]
    fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src").join("i18n").join("locales");

        ensure_store(&nested).unwrap();

        assert_that!(file_names(&nested), len(eq(5)));
    }

    #[rstest]
    fn second_call_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        ensure_store(temp_dir.path()).unwrap();
        let path = temp_dir.path().join("en-us.json");
        fs::write(&path, r#"{"translation": {"a": "b"}}"#).unwrap();
        let before: Vec<String> = LanguageCode::ALL
            .iter()
            .map(|code| fs::read_to_string(temp_dir.path().join(code.file_name())).unwrap())
            .collect();

        ensure_store(temp_dir.path()).unwrap();

        let after: Vec<String> = LanguageCode::ALL
            .iter()
            .map(|code| fs::read_to_string(temp_dir.path().join(code.file_name())).unwrap())
            .collect();
        assert_eq!(before, after);
    }

    #[rstest]
    fn leaves_malformed_files_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zh-cn.json");
        fs::write(&path, "{ broken").unwrap();

        ensure_store(temp_dir.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[rstest]
    fn fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("locales");
        fs::write(&blocker, "not a directory").unwrap();

        let result = ensure_store(&blocker);

        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
