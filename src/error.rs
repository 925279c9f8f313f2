use std::path::PathBuf;
use thiserror::Error;

/// Invalid locale configuration detected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one supported locale is required")]
    NoLocales,

    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("locale '{0}' is listed more than once")]
    DuplicateLocale(String),

    #[error("default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),

    #[error("invalid cookie name: '{0}'")]
    InvalidCookieName(String),
}

/// Failure to load a translation dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a root that is not an object
    #[error("invalid dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
