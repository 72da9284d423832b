//! Applying a translation set across all locale documents.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::document::{
    Document,
    read_document,
    render_document,
    write_document,
};
use super::error::StoreError;
use super::initializer::ensure_store;
use super::key::normalize;
use super::writer::{
    get_nested,
    set_nested,
};
use crate::config::StoreSettings;
use crate::types::{
    LanguageCode,
    TranslationSet,
};

/// Outcome of writing one language.
#[derive(Debug)]
pub enum LanguageStatus {
    Updated { key: String, path: PathBuf },
    Failed { path: PathBuf, error: StoreError },
}

impl LanguageStatus {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

impl fmt::Display for LanguageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { key, path } => write!(f, "Updated {key} in {}", path.display()),
            Self::Failed { path, error } => write!(f, "Error updating {}: {error}", path.display()),
        }
    }
}

/// Per-language results of one `apply` call, in language order.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub statuses: BTreeMap<LanguageCode, LanguageStatus>,
}

impl ApplyReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.statuses.values().any(|status| !status.is_success())
    }

    /// Status messages keyed by language tag.
    #[must_use]
    pub fn into_messages(self) -> BTreeMap<String, String> {
        self.statuses
            .into_iter()
            .map(|(code, status)| (code.as_str().to_string(), status.to_string()))
            .collect()
    }
}

/// The set of locale documents under one output directory.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    output_dir: PathBuf,
    settings: StoreSettings,
}

impl LocaleStore {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, settings: StoreSettings) -> Self {
        Self { output_dir: output_dir.into(), settings }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn document_path(&self, code: LanguageCode) -> PathBuf {
        self.output_dir.join(code.file_name())
    }

    /// Key path for `key`, rooted under the configured namespace.
    #[must_use]
    pub fn key_path(&self, key: &str) -> Vec<String> {
        normalize(key, &self.settings.key_separator, &self.settings.root_namespace)
    }

    /// Create any missing locale documents.
    ///
    /// # Errors
    /// Directory or file creation failures.
    pub fn ensure(&self) -> Result<(), StoreError> {
        ensure_store(&self.output_dir)
    }

    /// Write each supported entry of `translations` under `key`.
    ///
    /// Unsupported language codes are skipped without an entry in the report.
    /// A failure for one language is recorded and does not stop the others.
    ///
    /// # Errors
    /// Only store initialization failures; per-language failures are in the report.
    pub fn apply(
        &self,
        key: &str,
        translations: &TranslationSet,
    ) -> Result<ApplyReport, StoreError> {
        self.ensure()?;

        let path = self.key_path(key);
        let mut report = ApplyReport::default();

        for (lang, text) in translations {
            let Ok(code) = lang.parse::<LanguageCode>() else {
                tracing::debug!(lang = %lang, key, "Skipping unsupported language");
                continue;
            };

            let file_path = self.document_path(code);
            let status = match self.write_one(&file_path, &path, text) {
                Ok(()) => LanguageStatus::Updated { key: key.to_string(), path: file_path },
                Err(error) => {
                    tracing::warn!(lang = %code, key, %error, "Failed to update locale document");
                    LanguageStatus::Failed { path: file_path, error }
                }
            };
            report.statuses.insert(code, status);
        }

        Ok(report)
    }

    /// Current value at `key` for every supported language.
    ///
    /// Unreadable documents report `None` like absent keys.
    #[must_use]
    pub fn get(&self, key: &str) -> BTreeMap<LanguageCode, Option<Value>> {
        let path = self.key_path(key);

        LanguageCode::ALL
            .into_iter()
            .map(|code| {
                let value = read_document(&self.document_path(code), self.settings.on_malformed)
                    .ok()
                    .and_then(|document| get_nested(&document, &path).cloned());
                (code, value)
            })
            .collect()
    }

    fn write_one(&self, file_path: &Path, path: &[String], text: &str) -> Result<(), StoreError> {
        let mut document: Document = read_document(file_path, self.settings.on_malformed)?;
        let value = Value::String(text.to_string());
        set_nested(&mut document, path, value, self.settings.on_conflict)?;
        let contents = render_document(&document, self.settings.indent)?;
        write_document(file_path, &contents)
    }
}

/// Apply `translations` under `key` with default settings.
///
/// `output_dir` defaults to the current directory. Returns a status message
/// per supported language present in `translations`.
///
/// # Errors
/// Store initialization failures.
pub fn apply_translation_set(
    key: &str,
    translations: &TranslationSet,
    output_dir: Option<&Path>,
) -> Result<BTreeMap<String, String>, StoreError> {
    let output_dir = output_dir.unwrap_or_else(|| Path::new("."));
    let store = LocaleStore::new(output_dir, StoreSettings::default());
    Ok(store.apply(key, translations)?.into_messages())
}
