//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    StoreSettings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".i18n-store.json";

/// ディレクトリから設定を読み込む
///
/// `.i18n-store.json` ファイルを探して読み込む
///
/// # Arguments
/// * `dir` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub fn load_from_dir(dir: &Path) -> Result<Option<StoreSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// 指定されたファイルから設定を読み込む
///
/// ファイルが存在しない場合はエラーになる
pub fn load_from_file(config_path: &Path) -> Result<StoreSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: StoreSettings = serde_json::from_str(&content)?;

    Ok(settings)
}

/// 設定を読み込んでバリデーションする
///
/// `explicit` が指定されていればそのファイルを、なければ `search_dir` の
/// `.i18n-store.json` を使う。どちらもなければデフォルト設定。
pub fn resolve(explicit: Option<&Path>, search_dir: &Path) -> Result<StoreSettings, ConfigError> {
    let settings = match explicit {
        Some(path) => load_from_file(path)?,
        None => load_from_dir(search_dir)?.unwrap_or_default(),
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ConflictPolicy;

    /// `load_from_dir`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"keySeparator": "/"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        assert_eq!(settings.unwrap().key_separator, "/");
    }

    /// `load_from_dir`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_dir_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON パースエラー
    #[rstest]
    fn test_load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `resolve`: 明示的なファイルが優先される
    #[rstest]
    fn test_resolve_prefers_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"indent": 4}"#).unwrap();
        let explicit = temp_dir.path().join("custom.json");
        fs::write(&explicit, r#"{"onConflict": "reject"}"#).unwrap();

        let settings = resolve(Some(&explicit), temp_dir.path()).unwrap();

        assert_that!(settings.on_conflict, eq(ConflictPolicy::Reject));
        assert_that!(settings.indent, eq(2));
    }

    /// `resolve`: 明示的なファイルが存在しない場合はエラー
    #[rstest]
    fn test_resolve_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = resolve(Some(&temp_dir.path().join("missing.json")), temp_dir.path());

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    /// `resolve`: バリデーションエラー
    #[rstest]
    fn test_resolve_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"rootNamespace": ""}"#).unwrap();

        let result = resolve(None, temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(ref errors)) if errors.len() == 1));
    }

    /// `resolve`: 設定ファイルがなければデフォルト
    #[rstest]
    fn test_resolve_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings = resolve(None, temp_dir.path()).unwrap();

        assert_that!(settings, eq(&StoreSettings::default()));
    }
}
