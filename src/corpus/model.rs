//! Typed records for the docs-parser JSON format.
//!
//! Field names follow the camelCase keys emitted by the Electron docs parser.
//! Child collections may be missing or `null` in the source; both deserialize
//! as empty.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The kind of documentation container a module record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ModuleKind {
    Module,
    Class,
    Structure,
    Element,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::Class => "Class",
            Self::Structure => "Structure",
            Self::Element => "Element",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented module, class, structure or element with its members.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_events: Vec<EventRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<MethodRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_methods: Vec<MethodRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub static_methods: Vec<MethodRecord>,
    #[serde(default)]
    pub constructor_method: Option<ConstructorMethod>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<PropertyRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_properties: Vec<PropertyRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub static_properties: Vec<PropertyRecord>,
}

impl ModuleRecord {
    /// Create an empty record of the given kind. Mostly useful for building
    /// corpora in code.
    pub fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            events: Vec::new(),
            instance_events: Vec::new(),
            methods: Vec::new(),
            instance_methods: Vec::new(),
            static_methods: Vec::new(),
            constructor_method: None,
            properties: Vec::new(),
            instance_properties: Vec::new(),
            static_properties: Vec::new(),
        }
    }
}

/// An event emitted by a module or by instances of a class.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterRecord>,
}

/// A named method with its documentation.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub signature: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterRecord>,
}

/// The reduced shape used for class constructors: no name, usually no description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConstructorMethod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub signature: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<ParameterRecord>,
}

/// A method or event parameter. Object-typed parameters nest further
/// properties through their type information.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub ty: TypeInformation,
}

/// A documented property. Like parameters, object-typed properties nest.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub ty: TypeInformation,
}

/// Type information shared by parameters, properties and union members.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeInformation {
    #[serde(default)]
    pub collection: bool,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub descriptor: TypeDescriptor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<PropertyRecord>,
}

impl TypeInformation {
    /// A plain named type such as `String` or `WebContents`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            collection: false,
            descriptor: TypeDescriptor::Named(name.into()),
            properties: Vec::new(),
        }
    }

    /// An `Object` type carrying the given nested properties.
    pub fn object(properties: Vec<PropertyRecord>) -> Self {
        Self {
            collection: false,
            descriptor: TypeDescriptor::Named("Object".to_string()),
            properties,
        }
    }
}

/// Either a single type name or a union of inner types.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Named(String),
    Union(Vec<TypeInformation>),
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::Named(String::new())
    }
}

impl TypeDescriptor {
    /// The type name, if this is not a union.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    /// Union members; empty for named types.
    pub fn members(&self) -> &[TypeInformation] {
        match self {
            Self::Named(_) => &[],
            Self::Union(members) => members,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member.descriptor)?;
                    if member.collection {
                        f.write_str("[]")?;
                    }
                }
                Ok(())
            }
        }
    }
}
