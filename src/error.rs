//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for apidocs-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the documentation corpus fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Corpus file not found at the expected path.
    #[error("Documentation corpus not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The corpus file exists but could not be read.
    #[error("Failed to read corpus at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus file is not a valid docs-parser JSON document.
    #[error("Failed to parse corpus at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Corpus JSON given in memory is malformed.
    #[error("Malformed corpus JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Two modules share a name, which breaks result identity.
    #[error("Duplicate module '{name}' in corpus")]
    DuplicateModule { name: String },
}

/// Error returned when reading a configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
