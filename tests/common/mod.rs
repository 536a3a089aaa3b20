//! Shared test fixtures for integration tests.
//!
//! The sample corpus in `tests/fixtures/electron-api.json` is a trimmed copy of
//! the docs-parser output: one module, class, structure and element each, with
//! constructors, union-typed properties and nested parameter objects.

use apidocs_search::Corpus;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn fixture_path() -> PathBuf {
    project_root().join("tests/fixtures/electron-api.json")
}

/// The sample corpus, loaded from disk the same way the binary loads it.
#[fixture]
pub fn corpus() -> Corpus {
    Corpus::load(&fixture_path()).expect("sample corpus should load")
}

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Not every integration test crate writes files
pub struct TempWorkspace {
    temp: TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn create_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }
}

#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}
