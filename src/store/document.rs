//! Reading and writing locale documents on disk.

use std::io::{
    ErrorKind,
    Write,
};
use std::path::Path;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{
    Map,
    Value,
};
use tempfile::{
    Builder,
    NamedTempFile,
};

use super::error::StoreError;
use crate::config::MalformedPolicy;

/// A parsed locale document: always a JSON object at the root.
pub type Document = Map<String, Value>;

/// Read the document at `path`.
///
/// A missing file yields an empty document. Content that is not a JSON
/// object is either discarded or reported, depending on `policy`.
pub fn read_document(path: &Path, policy: MalformedPolicy) -> Result<Document, StoreError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let reason = match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(document)) => return Ok(document),
        Ok(_) => "root is not an object".to_string(),
        Err(e) => e.to_string(),
    };

    match policy {
        MalformedPolicy::Reset => {
            tracing::warn!(path = %path.display(), %reason, "Discarding malformed locale document");
            Ok(Document::new())
        }
        MalformedPolicy::Fail => Err(StoreError::Malformed { path: path.to_path_buf(), reason }),
    }
}

/// Serialize `document` with `indent` spaces per level and a trailing newline.
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn render_document(document: &Document, indent: usize) -> Result<String, StoreError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| StoreError::Serialize(serde_json::Error::custom(e)))
}

/// Replace the file at `path` with `contents`.
///
/// The contents go to a temporary file in the same directory first and are
/// then renamed into place, so readers see either the old or the new file.
pub fn write_document(path: &Path, contents: &str) -> Result<(), StoreError> {
    let file = stage(path, contents)?;
    file.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), "Wrote locale document");
    Ok(())
}

/// Install `contents` at `path` only if nothing exists there yet.
///
/// Returns `false` when the file already existed and was left untouched.
pub fn create_document(path: &Path, contents: &str) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }

    let file = stage(path, contents)?;
    match file.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(StoreError::io(path, e.error)),
    }
}

fn stage(path: &Path, contents: &str) -> Result<NamedTempFile, StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|metadata| metadata.permissions());

    let mut builder = Builder::new();
    if existing.is_none() {
        default_permissions(&mut builder);
    }
    let mut file = builder.tempfile_in(dir).map_err(|e| StoreError::io(dir, e))?;
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| StoreError::io(file.path(), e))?;
    }
    file.write_all(contents.as_bytes()).map_err(|e| StoreError::io(file.path(), e))?;
    file.as_file().sync_all().map_err(|e| StoreError::io(file.path(), e))?;

    Ok(file)
}

/// New documents get the mode a plain `create` would give them (0666 minus umask)
/// instead of the owner-only mode of temporary files.
#[cfg(unix)]
fn default_permissions(builder: &mut Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;

    builder.permissions(std::fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn default_permissions(_builder: &mut Builder<'_, '_>) {}
