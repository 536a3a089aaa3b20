//! Flattening of the corpus into per-category candidate pools.
//!
//! Every candidate borrows both its own record and the module that owns it,
//! so a candidate can never outlive the corpus nor point at a module that is
//! not part of it.

use crate::corpus::{
    ConstructorMethod, Corpus, EventRecord, MethodRecord, ModuleRecord, PropertyRecord,
};
use std::borrow::Cow;

/// An event paired with its owning module.
#[derive(Debug, Clone, Copy)]
pub struct EventCandidate<'c> {
    pub module: &'c ModuleRecord,
    pub event: &'c EventRecord,
}

/// Either a regular named method or a class constructor.
#[derive(Debug, Clone, Copy)]
pub enum MethodRef<'c> {
    Named(&'c MethodRecord),
    Constructor(&'c ConstructorMethod),
}

/// A method (or constructor) paired with its owning module.
#[derive(Debug, Clone, Copy)]
pub struct MethodCandidate<'c> {
    pub module: &'c ModuleRecord,
    pub method: MethodRef<'c>,
}

impl<'c> MethodCandidate<'c> {
    /// The method name, or `None` for a constructor.
    pub fn name(&self) -> Option<&'c str> {
        match self.method {
            MethodRef::Named(method) => Some(&method.name),
            MethodRef::Constructor(_) => None,
        }
    }

    /// The method's own description, if it has a non-empty one.
    pub fn description(&self) -> Option<&'c str> {
        let description = match self.method {
            MethodRef::Named(method) => Some(method.description.as_str()),
            MethodRef::Constructor(ctor) => ctor.description.as_deref(),
        };
        description.filter(|d| !d.trim().is_empty())
    }

    /// Display name: the method name, or `new <Module>()` for constructors.
    pub fn label(&self) -> Cow<'c, str> {
        match self.name() {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Owned(format!("new {}()", self.module.name)),
        }
    }

    /// Display description, falling back to `<Module> Constructor`.
    pub fn display_description(&self) -> Cow<'c, str> {
        match self.description() {
            Some(description) => Cow::Borrowed(description.trim()),
            None => Cow::Owned(format!("{} Constructor", self.module.name)),
        }
    }

    /// The item part of the result identity key.
    pub fn identity_name(&self) -> &'c str {
        match self.name() {
            Some(name) if !name.is_empty() => name,
            _ => "constructor",
        }
    }
}

/// A property paired with its owning module.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCandidate<'c> {
    pub module: &'c ModuleRecord,
    pub property: &'c PropertyRecord,
}

/// Event pool: for each module, `events` then `instanceEvents`.
pub fn extract_events(corpus: &Corpus) -> Vec<EventCandidate<'_>> {
    corpus
        .modules()
        .iter()
        .flat_map(|module| {
            module
                .events
                .iter()
                .chain(&module.instance_events)
                .map(move |event| EventCandidate { module, event })
        })
        .collect()
}

/// Method pool: for each module, `methods`, `instanceMethods`, `staticMethods`
/// and finally the constructor, if any.
pub fn extract_methods(corpus: &Corpus) -> Vec<MethodCandidate<'_>> {
    corpus
        .modules()
        .iter()
        .flat_map(|module| {
            module
                .methods
                .iter()
                .chain(&module.instance_methods)
                .chain(&module.static_methods)
                .map(MethodRef::Named)
                .chain(module.constructor_method.iter().map(MethodRef::Constructor))
                .map(move |method| MethodCandidate { module, method })
        })
        .collect()
}

/// Property pool: for each module, `properties`, `instanceProperties`, then
/// `staticProperties`.
pub fn extract_properties(corpus: &Corpus) -> Vec<PropertyCandidate<'_>> {
    corpus
        .modules()
        .iter()
        .flat_map(|module| {
            module
                .properties
                .iter()
                .chain(&module.instance_properties)
                .chain(&module.static_properties)
                .map(move |property| PropertyCandidate { module, property })
        })
        .collect()
}

/// The four candidate pools of a corpus, extracted once and reused for every
/// query. The corpus is immutable, so the pools never go stale.
#[derive(Debug, Clone)]
pub struct CandidateIndex<'c> {
    pub modules: &'c [ModuleRecord],
    pub events: Vec<EventCandidate<'c>>,
    pub methods: Vec<MethodCandidate<'c>>,
    pub properties: Vec<PropertyCandidate<'c>>,
}

impl<'c> CandidateIndex<'c> {
    pub fn build(corpus: &'c Corpus) -> Self {
        let index = Self {
            modules: corpus.modules(),
            events: extract_events(corpus),
            methods: extract_methods(corpus),
            properties: extract_properties(corpus),
        };

        tracing::debug!(
            "Built candidate index: {} modules, {} events, {} methods, {} properties",
            index.modules.len(),
            index.events.len(),
            index.methods.len(),
            index.properties.len()
        );

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{ModuleKind, ParameterRecord, TypeInformation};
    use assert2::{check, let_assert};

    fn method(name: &str) -> MethodRecord {
        MethodRecord {
            name: name.to_string(),
            signature: "()".to_string(),
            description: format!("Calls {}.", name),
            parameters: Vec::new(),
        }
    }

    fn event(name: &str) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    fn property(name: &str) -> PropertyRecord {
        PropertyRecord {
            name: name.to_string(),
            description: String::new(),
            required: true,
            ty: TypeInformation::named("String"),
        }
    }

    fn window_corpus() -> Corpus {
        let mut window = ModuleRecord::new("BrowserWindow", ModuleKind::Class);
        window.static_methods = vec![method("getAllWindows")];
        window.instance_methods = vec![method("loadURL"), method("close")];
        window.constructor_method = Some(ConstructorMethod {
            signature: "([options])".to_string(),
            description: None,
            parameters: vec![ParameterRecord {
                name: "options".to_string(),
                description: String::new(),
                required: false,
                ty: TypeInformation::object(vec![property("width")]),
            }],
        });
        window.instance_events = vec![event("closed")];
        window.instance_properties = vec![property("id")];
        window.static_properties = vec![property("defaultTitle")];

        let mut app = ModuleRecord::new("app", ModuleKind::Module);
        app.methods = vec![method("quit")];
        app.events = vec![event("ready")];
        app.properties = vec![property("name")];

        Corpus::from_modules(vec![app, window]).unwrap()
    }

    #[test]
    fn test_event_pool_order() {
        let corpus = window_corpus();
        let events = extract_events(&corpus);
        let names: Vec<(&str, &str)> = events
            .iter()
            .map(|c| (c.module.name.as_str(), c.event.name.as_str()))
            .collect();
        check!(names == [("app", "ready"), ("BrowserWindow", "closed")]);
    }

    #[test]
    fn test_method_pool_order_ends_with_constructor() {
        let corpus = window_corpus();
        let methods = extract_methods(&corpus);
        let labels: Vec<String> = methods.iter().map(|c| c.label().into_owned()).collect();
        check!(
            labels
                == [
                    "quit",
                    "loadURL",
                    "close",
                    "getAllWindows",
                    "new BrowserWindow()"
                ]
        );
        let_assert!(Some(last) = methods.last());
        check!(matches!(last.method, MethodRef::Constructor(_)));
    }

    #[test]
    fn test_property_pool_order() {
        let corpus = window_corpus();
        let properties = extract_properties(&corpus);
        let names: Vec<&str> = properties
            .iter()
            .map(|c| c.property.name.as_str())
            .collect();
        check!(names == ["name", "id", "defaultTitle"]);
    }

    #[test]
    fn test_constructor_synthesized_labels() {
        let corpus = window_corpus();
        let methods = extract_methods(&corpus);
        let_assert!(Some(ctor) = methods.last());

        check!(ctor.name().is_none());
        check!(ctor.label() == "new BrowserWindow()");
        check!(ctor.display_description() == "BrowserWindow Constructor");
        check!(ctor.identity_name() == "constructor");
    }

    #[test]
    fn test_constructor_keeps_own_description() {
        let module = ModuleRecord::new("Notification", ModuleKind::Class);
        let ctor = ConstructorMethod {
            description: Some("  Creates a new notification.\n".to_string()),
            ..ConstructorMethod::default()
        };
        let candidate = MethodCandidate {
            module: &module,
            method: MethodRef::Constructor(&ctor),
        };
        check!(candidate.display_description() == "Creates a new notification.");
    }

    #[test]
    fn test_candidate_index_sizes() {
        let corpus = window_corpus();
        let index = CandidateIndex::build(&corpus);
        check!(index.modules.len() == 2);
        check!(index.events.len() == 2);
        check!(index.methods.len() == 5);
        check!(index.properties.len() == 3);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::default();
        let index = CandidateIndex::build(&corpus);
        check!(index.modules.is_empty());
        check!(index.events.is_empty());
        check!(index.methods.is_empty());
        check!(index.properties.is_empty());
    }
}
