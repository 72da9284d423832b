//! Batch input for the `import` command.
//!
//! A batch is a JSON object mapping translation keys to translation sets:
//!
//! ```json
//! {
//!   "settings.sync.title": { "en-us": "Sync", "ja-jp": "同期" },
//!   "settings.sync.empty": { "en-us": "Nothing to sync" }
//! }
//! ```

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::types::TranslationSet;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to parse batch: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Batch must be a JSON object of translation keys")]
    NotAnObject,

    #[error("Invalid translations for '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// Parse a batch, keeping the keys in document order.
pub fn parse_batch(text: &str) -> Result<Vec<(String, TranslationSet)>, BatchError> {
    let Value::Object(entries) = serde_json::from_str::<Value>(text)? else {
        return Err(BatchError::NotAnObject);
    };

    entries.into_iter().map(|(key, value)| parse_entry(key, value)).collect()
}

fn parse_entry(key: String, value: Value) -> Result<(String, TranslationSet), BatchError> {
    let Value::Object(map) = value else {
        return Err(BatchError::InvalidEntry {
            key,
            reason: "expected an object of language code to text".to_string(),
        });
    };

    let translations = to_translation_set(&key, map)?;
    Ok((key, translations))
}

fn to_translation_set(key: &str, map: Map<String, Value>) -> Result<TranslationSet, BatchError> {
    map.into_iter()
        .map(|(lang, text)| match text {
            Value::String(text) => Ok((lang, text)),
            other => Err(BatchError::InvalidEntry {
                key: key.to_string(),
                reason: format!("value for '{lang}' must be a string, got {other}"),
            }),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_keeps_document_order() {
        let text = r#"{
            "z.last": {"en-us": "Z"},
            "a.first": {"en-us": "A", "ja-jp": "エー"}
        }"#;

        let batch = parse_batch(text).unwrap();

        let keys: Vec<&str> = batch.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["z.last", "a.first"]);
        assert_that!(batch[1].1.get("ja-jp"), some(eq(&"エー".to_string())));
    }

    #[rstest]
    fn parse_empty_batch() {
        assert_that!(parse_batch("{}").unwrap(), is_empty());
    }

    #[rstest]
    #[case("[]")]
    #[case("\"text\"")]
    fn parse_rejects_non_object(#[case] text: &str) {
        assert!(matches!(parse_batch(text), Err(BatchError::NotAnObject)));
    }

    #[rstest]
    fn parse_rejects_invalid_json() {
        assert!(matches!(parse_batch("{ nope"), Err(BatchError::Parse(_))));
    }

    #[rstest]
    #[case(r#"{"a": "flat"}"#, "expected an object")]
    #[case(r#"{"a": {"en-us": 1}}"#, "must be a string")]
    fn parse_rejects_invalid_entries(#[case] text: &str, #[case] reason: &str) {
        let error = parse_batch(text).unwrap_err();

        assert_that!(error.to_string(), all![contains_substring("'a'"), contains_substring(reason)]);
    }
}
