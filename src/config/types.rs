use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Largest accepted indentation width for locale documents.
const MAX_INDENT: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "rootNamespace")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What to do when an intermediate key already holds a non-object value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictPolicy {
    /// Replace the value with an empty object and keep descending.
    #[default]
    Overwrite,
    /// Fail the write for that language.
    Reject,
}

/// What to do when an existing locale document is not a valid JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedPolicy {
    /// Start over from an empty document; the old content is lost on save.
    #[default]
    Reset,
    /// Report an error for that language and leave the file untouched.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Directory holding `{code}.json`. The command line `--dir` wins over this.
    pub output_dir: Option<String>,

    pub key_separator: String,

    /// Top-level segment every key is rooted under.
    pub root_namespace: String,

    /// Spaces per indentation level when writing documents.
    pub indent: usize,

    pub on_conflict: ConflictPolicy,
    pub on_malformed: MalformedPolicy,
}

impl StoreSettings {
    /// # Errors
    /// - Empty separator or namespace
    /// - Namespace containing the separator
    /// - Indentation out of range
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.root_namespace.is_empty() {
            errors.push(ValidationError::new(
                "rootNamespace",
                "The namespace cannot be empty. Example: \"translation\"",
            ));
        } else if !self.key_separator.is_empty()
            && self.root_namespace.contains(self.key_separator.as_str())
        {
            errors.push(ValidationError::new(
                "rootNamespace",
                format!(
                    "The namespace '{}' must not contain the key separator '{}'",
                    self.root_namespace, self.key_separator
                ),
            ));
        }

        if self.indent > MAX_INDENT {
            errors.push(ValidationError::new(
                "indent",
                format!("Indentation must be between 0 and {MAX_INDENT}, got {}", self.indent),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            key_separator: ".".to_string(),
            root_namespace: "translation".to_string(),
            indent: 2,
            on_conflict: ConflictPolicy::default(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}
