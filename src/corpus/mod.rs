//! The immutable documentation corpus and its loader.
//!
//! A [`Corpus`] is constructed once (usually from `electron-api.json`) and then
//! only ever borrowed. Search structures hold `&Corpus` references, so the
//! borrow checker enforces that the corpus outlives every candidate pointing
//! back into it.

mod model;

pub use model::{
    ConstructorMethod, EventRecord, MethodRecord, ModuleKind, ModuleRecord, ParameterRecord,
    PropertyRecord, TypeDescriptor, TypeInformation,
};

use crate::error::LoadError;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

/// An ordered, read-only collection of module records with unique names.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    modules: Vec<ModuleRecord>,
}

impl Corpus {
    /// Build a corpus from already-parsed records, rejecting duplicate names.
    pub fn from_modules(modules: Vec<ModuleRecord>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.name.as_str()) {
                return Err(LoadError::DuplicateModule {
                    name: module.name.clone(),
                });
            }
        }
        Ok(Self { modules })
    }

    /// Parse a docs-parser JSON array held in memory.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let modules: Vec<ModuleRecord> = serde_json::from_str(json)?;
        Self::from_modules(modules)
    }

    /// Load and parse a docs-parser JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let start = Instant::now();

        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let modules: Vec<ModuleRecord> =
            serde_json::from_str(&content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let corpus = Self::from_modules(modules)?;

        tracing::info!(
            "Loaded {} documentation modules from {} in {:?}",
            corpus.len(),
            path.display(),
            start.elapsed()
        );

        Ok(corpus)
    }

    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// Look up a module by exact name.
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|module| module.name == name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
