//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::Path;

use serde_json::Value;

use crate::types::TranslationSet;

/// テスト用の TranslationSet を作成する
///
/// # Arguments
/// * `entries` - 言語コードと翻訳テキストの組
pub(crate) fn translations(entries: &[(&str, &str)]) -> TranslationSet {
    entries.iter().map(|(lang, text)| ((*lang).to_string(), (*text).to_string())).collect()
}

/// ロケールファイルを読み込んで JSON としてパースする
pub(crate) fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
