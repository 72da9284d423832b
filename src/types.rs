//! Core types used throughout the project.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A supported translation target locale.
///
/// The set is closed: every locale store holds exactly one document per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageCode {
    /// English (United States).
    EnUs,
    /// Chinese (Simplified).
    ZhCn,
    /// Japanese.
    JaJp,
    /// Russian.
    RuRu,
    /// Chinese (Traditional).
    ZhTw,
}

impl LanguageCode {
    /// All supported locales in file-creation order.
    pub const ALL: [Self; 5] = [Self::EnUs, Self::ZhCn, Self::JaJp, Self::RuRu, Self::ZhTw];

    /// Locale tag as used in file names (e.g. `en-us`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-us",
            Self::ZhCn => "zh-cn",
            Self::JaJp => "ja-jp",
            Self::RuRu => "ru-ru",
            Self::ZhTw => "zh-tw",
        }
    }

    /// File name of the locale document (e.g. `en-us.json`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    /// Matches tags exactly; `en-US` and `en_us` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Language code → translated text, as supplied by a translation provider.
///
/// Keys are plain strings because providers may send codes outside the supported set.
pub type TranslationSet = BTreeMap<String, String>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en-us", LanguageCode::EnUs)]
    #[case("zh-cn", LanguageCode::ZhCn)]
    #[case("ja-jp", LanguageCode::JaJp)]
    #[case("ru-ru", LanguageCode::RuRu)]
    #[case("zh-tw", LanguageCode::ZhTw)]
    fn parse_supported_codes(#[case] input: &str, #[case] expected: LanguageCode) {
        assert_that!(input.parse::<LanguageCode>(), ok(eq(&expected)));
        assert_that!(expected.to_string(), eq(input));
    }

    #[rstest]
    #[case("fr-fr")]
    #[case("en-US")]
    #[case("en_us")]
    #[case("")]
    fn parse_unsupported_codes(#[case] input: &str) {
        let result = input.parse::<LanguageCode>();

        assert_that!(result, err(eq(&UnsupportedLanguage(input.to_string()))));
    }

    #[rstest]
    fn file_name_uses_tag() {
        assert_that!(LanguageCode::JaJp.file_name(), eq("ja-jp.json"));
    }
}
