pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod render;
pub mod search;

pub use config::SearchOptions;
pub use corpus::{Corpus, ModuleKind, ModuleRecord};
pub use error::{ConfigError, LoadError, Result};
pub use search::{Category, Hit, RankedHit, Searcher, Suggestion};
