//! Store settings and their loading from `.i18n-store.json`.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
    load_from_file,
    resolve,
};
pub use types::{
    ConfigError,
    ConflictPolicy,
    MalformedPolicy,
    StoreSettings,
    ValidationError,
};
