//! "Did you mean" suggestions for queries that matched nothing.

use crate::corpus::{Corpus, ModuleRecord};
use rapidfuzz::distance::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a module name to be suggested.
const MIN_SIMILARITY: f64 = 0.8;

/// Maximum number of suggestions offered.
const MAX_SUGGESTIONS: usize = 5;

/// A module name similar to the query, with its similarity score.
#[derive(Debug, Clone, Copy)]
pub struct Suggestion<'c> {
    pub module: &'c ModuleRecord,
    /// Similarity from 0.0 to 1.0, higher is better.
    pub score: f64,
}

/// Module names resembling `query`, most similar first.
///
/// Comparison is case-insensitive. Suggestions are independent of the ranked
/// search results and never change them.
pub fn suggest_modules<'c>(corpus: &'c Corpus, query: &str) -> Vec<Suggestion<'c>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion<'c>> = corpus
        .modules()
        .iter()
        .map(|module| Suggestion {
            module,
            score: jaro_winkler::similarity(query.chars(), module.name.to_lowercase().chars()),
        })
        .filter(|s| s.score > MIN_SIMILARITY)
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ModuleKind;
    use assert2::{check, let_assert};

    fn corpus() -> Corpus {
        Corpus::from_modules(vec![
            ModuleRecord::new("BrowserWindow", ModuleKind::Class),
            ModuleRecord::new("BrowserView", ModuleKind::Class),
            ModuleRecord::new("clipboard", ModuleKind::Module),
        ])
        .unwrap()
    }

    #[test]
    fn test_typo_suggests_module() {
        let corpus = corpus();
        let suggestions = suggest_modules(&corpus, "browsrwindw");
        let_assert!(Some(first) = suggestions.first());
        check!(first.module.name == "BrowserWindow");
        check!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_unrelated_query_suggests_nothing() {
        let corpus = corpus();
        check!(suggest_modules(&corpus, "zzzzz").is_empty());
        check!(suggest_modules(&corpus, "   ").is_empty());
    }
}
