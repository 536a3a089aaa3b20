//! The query entry point: a candidate index plus an optional result cache.

use super::candidate::CandidateIndex;
use super::rank::{RankedHit, rank};
use super::suggest::{Suggestion, suggest_modules};
use crate::config::SearchOptions;
use crate::corpus::Corpus;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

/// Searches one immutable corpus.
///
/// Interactive callers re-run the search on every keystroke, and editing a
/// query often revisits a previous state, so ranked results are kept in a
/// small LRU cache. Results are a pure function of the query, so a cached
/// entry is always identical to a fresh evaluation.
pub struct Searcher<'c> {
    corpus: &'c Corpus,
    index: CandidateIndex<'c>,
    options: SearchOptions,
    cache: Option<Mutex<LruCache<String, Vec<RankedHit<'c>>>>>,
}

impl std::fmt::Debug for Searcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("modules", &self.corpus.len())
            .field("options", &self.options)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl<'c> Searcher<'c> {
    pub fn new(corpus: &'c Corpus, options: SearchOptions) -> Self {
        let cache = NonZeroUsize::new(options.cache_size).map(|size| Mutex::new(LruCache::new(size)));
        Self {
            corpus,
            index: CandidateIndex::build(corpus),
            options,
            cache,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// Rank the corpus against `query`, returning at most `options.limit` hits.
    pub fn search(&self, query: &str) -> Vec<RankedHit<'c>> {
        let Some(cache) = &self.cache else {
            return rank(&self.index, query, &self.options);
        };

        // A poisoned lock only means another search panicked mid-update; the
        // cached values themselves are still complete.
        if let Some(hits) = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(query)
        {
            tracing::trace!("Cache hit for {:?}", query);
            return hits.clone();
        }

        let hits = rank(&self.index, query, &self.options);
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(query.to_string(), hits.clone());
        hits
    }

    /// Module names close to `query`, for when a search comes back empty.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion<'c>> {
        suggest_modules(self.corpus, query)
    }
}
