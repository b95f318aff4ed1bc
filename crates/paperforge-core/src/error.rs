//! Quiz-file loading errors.
//!
//! Loading is the only fallible surface of this crate. Once a paper is in
//! memory, generation never returns an error; malformed content degrades
//! to the closest renderable output instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or parsing quiz files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, or its shape does not match a quiz paper.
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The file is not valid JSON, or its shape does not match a quiz paper.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The extension is neither `.toml` nor `.json`.
    #[error("unsupported quiz file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Directory loading was pointed at something that is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}
