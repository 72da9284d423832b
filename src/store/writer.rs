//! Nested key writes on locale documents.

use serde_json::{
    Map,
    Value,
};

use super::error::WriteError;
use crate::config::ConflictPolicy;

/// Set `value` at `path` inside `document`, creating intermediate objects as needed.
///
/// Sibling keys at every level are left untouched. The leaf is replaced
/// unconditionally, whatever it held before. A non-object value at an
/// intermediate segment is handled according to `policy`.
///
/// # Examples
/// ```
/// use i18n_store::config::ConflictPolicy;
/// use i18n_store::store::set_nested;
/// use serde_json::{json, Map};
///
/// let mut document = Map::new();
/// set_nested(&mut document, &["translation", "a", "b"], json!("x"), ConflictPolicy::Overwrite)
///     .unwrap();
/// assert_eq!(serde_json::Value::Object(document), json!({"translation": {"a": {"b": "x"}}}));
/// ```
pub fn set_nested<S: AsRef<str>>(
    document: &mut Map<String, Value>,
    path: &[S],
    value: Value,
    policy: ConflictPolicy,
) -> Result<(), WriteError> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err(WriteError::EmptyPath);
    };

    let mut current = document;
    for (depth, segment) in parents.iter().enumerate() {
        let slot = current
            .entry(segment.as_ref())
            .or_insert_with(|| Value::Object(Map::new()));

        if !slot.is_object() {
            let found = value_kind(slot);
            let conflict_path = join_segments(path, depth + 1);
            match policy {
                ConflictPolicy::Reject => {
                    return Err(WriteError::Conflict { path: conflict_path, found });
                }
                ConflictPolicy::Overwrite => {
                    tracing::debug!(path = %conflict_path, found, "Replacing non-object value");
                    *slot = Value::Object(Map::new());
                }
            }
        }

        current = match slot {
            Value::Object(map) => map,
            other => {
                return Err(WriteError::Conflict {
                    path: join_segments(path, depth + 1),
                    found: value_kind(other),
                });
            }
        };
    }

    current.insert(leaf.as_ref().to_string(), value);
    Ok(())
}

/// Look up the value at `path`, if every segment resolves.
#[must_use]
pub fn get_nested<'a, S: AsRef<str>>(
    document: &'a Map<String, Value>,
    path: &[S],
) -> Option<&'a Value> {
    let (leaf, parents) = path.split_last()?;

    let mut current = document;
    for segment in parents {
        current = current.get(segment.as_ref())?.as_object()?;
    }

    current.get(leaf.as_ref())
}

fn join_segments<S: AsRef<str>>(path: &[S], len: usize) -> String {
    path.iter().take(len).map(AsRef::as_ref).collect::<Vec<_>>().join(".")
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
