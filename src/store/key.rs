//! Translation key normalization.

/// Split `key` on `separator` and root the result under `root`.
///
/// The root is prepended unless the first segment already equals it, so
/// `translation.a.b` and `a.b` both resolve to `["translation", "a", "b"]`.
/// Empty segments are kept as-is.
///
/// # Examples
/// ```
/// use i18n_store::store::normalize;
///
/// assert_eq!(normalize("a.b", ".", "translation"), ["translation", "a", "b"]);
/// assert_eq!(normalize("translation.a", ".", "translation"), ["translation", "a"]);
/// ```
#[must_use]
pub fn normalize(key: &str, separator: &str, root: &str) -> Vec<String> {
    let mut segments: Vec<String> = key.split(separator).map(str::to_string).collect();

    if segments.first().map(String::as_str) != Some(root) {
        segments.insert(0, root.to_string());
    }

    segments
}
