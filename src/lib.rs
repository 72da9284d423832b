//! i18n-store
//!
//! Writes translated interface strings into nested per-language JSON dictionaries.
//! A translation provider hands over a key and a language → text mapping;
//! [`store::LocaleStore`] merges it into `{output_dir}/{code}.json`.

pub mod batch;
pub mod config;
pub mod store;
mod test_utils;
pub mod types;

pub use store::{
    LocaleStore,
    apply_translation_set,
    ensure_store,
};
pub use types::{
    LanguageCode,
    TranslationSet,
};
