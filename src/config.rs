//! Search tuning options and their TOML configuration file.

use crate::error::ConfigError;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config directory.
const APP_DIR: &str = "apidocs-search";

/// Tunable parameters of the matcher and aggregator.
///
/// Every key is optional in the config file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Maximum per-field match cost (0 = exact, 1 = anything) a value may have to count.
    pub threshold: f64,
    /// Maximum number of ranked results returned.
    pub limit: usize,
    /// Queries shorter than this many characters return nothing.
    pub min_query_len: usize,
    /// Character offset in a field where a match is expected to start.
    pub location: usize,
    /// How many characters away from `location` a match may drift before the
    /// proximity penalty alone reaches a cost of 1.
    pub distance: usize,
    /// Number of query results kept in the LRU cache (0 disables caching).
    pub cache_size: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            limit: 5,
            min_query_len: 3,
            location: 0,
            distance: 100,
            cache_size: 64,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load options from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional: when it
    /// does not exist the built-in defaults are returned.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (PathBuf::from(expand_tilde(path).as_ref()), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let options = Self::from_toml(&content, &path)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), options);
        Ok(options)
    }
}

/// `$XDG_CONFIG_HOME/apidocs-search/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
