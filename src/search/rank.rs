//! Cross-category aggregation of scored candidates into one ranked list.

use super::bitap::BitapOptions;
use super::candidate::{CandidateIndex, EventCandidate, MethodCandidate, PropertyCandidate};
use super::matcher::{FuzzyMatcher, Scored};
use crate::config::SearchOptions;
use crate::corpus::{ModuleKind, ModuleRecord};
use std::borrow::Cow;
use std::fmt;

/// The category a result came from. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Module,
    Event,
    Method,
    Property,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Event => "event",
            Self::Method => "method",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched candidate of any category.
#[derive(Debug, Clone, Copy)]
pub enum Hit<'c> {
    Module(&'c ModuleRecord),
    Event(EventCandidate<'c>),
    Method(MethodCandidate<'c>),
    Property(PropertyCandidate<'c>),
}

impl<'c> Hit<'c> {
    pub fn category(&self) -> Category {
        match self {
            Self::Module(_) => Category::Module,
            Self::Event(_) => Category::Event,
            Self::Method(_) => Category::Method,
            Self::Property(_) => Category::Property,
        }
    }

    /// The module the hit belongs to (the module itself for module hits).
    pub fn module(&self) -> &'c ModuleRecord {
        match self {
            Self::Module(module) => *module,
            Self::Event(c) => c.module,
            Self::Method(c) => c.module,
            Self::Property(c) => c.module,
        }
    }

    /// Display name, with `new <Module>()` substituted for constructors.
    pub fn name(&self) -> Cow<'c, str> {
        match self {
            Self::Module(module) => Cow::Borrowed(&module.name),
            Self::Event(c) => Cow::Borrowed(&c.event.name),
            Self::Method(c) => c.label(),
            Self::Property(c) => Cow::Borrowed(&c.property.name),
        }
    }

    /// Display description. Module hits show their kind instead.
    pub fn description(&self) -> Option<Cow<'c, str>> {
        match self {
            Self::Module(_) => None,
            Self::Event(c) => Some(Cow::Borrowed(c.event.description.trim())),
            Self::Method(c) => Some(c.display_description()),
            Self::Property(c) => Some(Cow::Borrowed(c.property.description.trim())),
        }
    }

    /// The module kind, for module hits.
    pub fn kind(&self) -> Option<ModuleKind> {
        match self {
            Self::Module(module) => Some(module.kind),
            _ => None,
        }
    }

    /// Stable identity of the hit: the module name for modules, otherwise
    /// `<module>_<category>_<item>` with `constructor` for unnamed methods.
    pub fn identity_key(&self) -> String {
        let item = match self {
            Self::Module(module) => return module.name.clone(),
            Self::Event(c) => c.event.name.as_str(),
            Self::Method(c) => c.identity_name(),
            Self::Property(c) => c.property.name.as_str(),
        };
        format!("{}_{}_{}", self.module().name, self.category(), item)
    }
}

/// A hit with its score; lower scores rank first.
#[derive(Debug, Clone, Copy)]
pub struct RankedHit<'c> {
    pub score: f64,
    pub hit: Hit<'c>,
}

fn tag<'c, T>(scored: Vec<Scored<T>>, wrap: fn(T) -> Hit<'c>) -> impl Iterator<Item = RankedHit<'c>> {
    scored.into_iter().map(move |s| RankedHit {
        score: s.score,
        hit: wrap(s.item),
    })
}

/// Evaluate `query` against every pool and return the best `options.limit`
/// hits, lowest score first.
///
/// Queries shorter than `options.min_query_len` characters (including the
/// empty query) produce no hits. Equal scores keep category order (module,
/// event, method, property) and, within a category, pool order.
pub fn rank<'c>(
    index: &CandidateIndex<'c>,
    query: &str,
    options: &SearchOptions,
) -> Vec<RankedHit<'c>> {
    if query.is_empty() || query.chars().count() < options.min_query_len {
        return Vec::new();
    }

    let matcher = FuzzyMatcher::new(query, BitapOptions::from(options));
    let modules: Vec<&'c ModuleRecord> = index.modules.iter().collect();

    let module_hits = matcher.score_pool(&modules);
    let event_hits = matcher.score_pool(&index.events);
    let method_hits = matcher.score_pool(&index.methods);
    let property_hits = matcher.score_pool(&index.properties);

    tracing::trace!(
        "Query {:?}: {} modules, {} events, {} methods, {} properties matched",
        query,
        module_hits.len(),
        event_hits.len(),
        method_hits.len(),
        property_hits.len()
    );

    let mut ranked: Vec<RankedHit<'c>> = tag(module_hits, Hit::Module)
        .chain(tag(event_hits, Hit::Event))
        .chain(tag(method_hits, Hit::Method))
        .chain(tag(property_hits, Hit::Property))
        .collect();

    // `sort_by` is stable, so ties keep the concatenation order above.
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked.truncate(options.limit);
    ranked
}
