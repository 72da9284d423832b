//! Per-language JSON locale documents and the operations that write them.
/// Translation set orchestration
mod apply;
/// Document I/O
mod document;
mod error;
/// Locale store initializer
mod initializer;
/// Key normalization
mod key;
/// Nested key writer
mod writer;

pub use apply::{
    ApplyReport,
    LanguageStatus,
    LocaleStore,
    apply_translation_set,
};
pub use document::{
    Document,
    read_document,
    render_document,
    write_document,
};
pub use error::{
    StoreError,
    WriteError,
};
pub use initializer::ensure_store;
pub use key::normalize;
pub use writer::{
    get_nested,
    set_nested,
};
