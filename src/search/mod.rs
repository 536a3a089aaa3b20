//! Fuzzy, multi-field search over the documentation corpus.
//!
//! This module flattens the corpus into candidate pools, scores each pool with
//! a bitap matcher over weighted fields, and merges the pools into one ranked
//! list.

// Module declarations
pub(crate) mod bitap;
pub(crate) mod candidate;
pub(crate) mod fields;
pub(crate) mod matcher;
pub(crate) mod rank;
pub(crate) mod searcher;
pub(crate) mod suggest;

// Public re-exports (used via lib.rs)
pub use candidate::{
    CandidateIndex, EventCandidate, MethodCandidate, MethodRef, PropertyCandidate,
    extract_events, extract_methods, extract_properties,
};
pub use fields::{Field, Scorable};
pub use matcher::{FuzzyMatcher, Scored};
pub use rank::{Category, Hit, RankedHit, rank};
pub use searcher::Searcher;
pub use suggest::{Suggestion, suggest_modules};
