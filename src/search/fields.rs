//! Weighted, typed field accessors for each candidate category.
//!
//! Each category visits its matchable text in a fixed order, tagging every
//! value with the [`Field`] it came from. Sequence fields (parameters, nested
//! properties) yield one value per element, so the best element decides the
//! field's contribution.

use super::candidate::{EventCandidate, MethodCandidate, MethodRef, PropertyCandidate};
use crate::corpus::{ModuleRecord, ParameterRecord, PropertyRecord};

/// A matchable field and its weight in the candidate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ModuleName,
    Name,
    Description,
    ParameterName,
    ParameterPropertyName,
    ParameterNestedPropertyName,
    Type,
    TypePropertyName,
    TypeNestedPropertyName,
}

impl Field {
    pub fn weight(self) -> f64 {
        match self {
            Self::ModuleName => 0.7,
            Self::Name => 0.5,
            Self::Description => 0.3,
            Self::ParameterName
            | Self::ParameterPropertyName
            | Self::ParameterNestedPropertyName
            | Self::Type
            | Self::TypePropertyName
            | Self::TypeNestedPropertyName => 0.1,
        }
    }

    /// The documentation path this field reads, for logs and diagnostics.
    pub fn path(self) -> &'static str {
        match self {
            Self::ModuleName => "name",
            Self::Name => "name",
            Self::Description => "description",
            Self::ParameterName => "parameters[].name",
            Self::ParameterPropertyName => "parameters[].properties[].name",
            Self::ParameterNestedPropertyName => "parameters[].properties[].properties[].name",
            Self::Type => "type",
            Self::TypePropertyName => "type.properties[].name",
            Self::TypeNestedPropertyName => "type.properties[].properties[].name",
        }
    }
}

/// Something the fuzzy matcher can score.
pub trait Scorable<'c> {
    /// Call `visit` once for every present field value, in configuration order.
    /// Absent values (such as a constructor's name) are simply not visited.
    fn visit_fields(&self, visit: &mut dyn FnMut(Field, &'c str));
}

impl<'c> Scorable<'c> for &'c ModuleRecord {
    fn visit_fields(&self, visit: &mut dyn FnMut(Field, &'c str)) {
        visit(Field::ModuleName, &self.name);
    }
}

impl<'c> Scorable<'c> for EventCandidate<'c> {
    fn visit_fields(&self, visit: &mut dyn FnMut(Field, &'c str)) {
        visit(Field::Name, &self.event.name);
        visit(Field::Description, &self.event.description);
        visit_parameters(&self.event.parameters, visit);
    }
}

impl<'c> Scorable<'c> for MethodCandidate<'c> {
    fn visit_fields(&self, visit: &mut dyn FnMut(Field, &'c str)) {
        if let Some(name) = self.name() {
            visit(Field::Name, name);
        }
        if let Some(description) = self.description() {
            visit(Field::Description, description);
        }
        let parameters = match self.method {
            MethodRef::Named(method) => &method.parameters,
            MethodRef::Constructor(ctor) => &ctor.parameters,
        };
        visit_parameters(parameters, visit);
    }
}

impl<'c> Scorable<'c> for PropertyCandidate<'c> {
    fn visit_fields(&self, visit: &mut dyn FnMut(Field, &'c str)) {
        let property = self.property;
        visit(Field::Name, &property.name);
        visit(Field::Description, &property.description);
        if let Some(name) = property.ty.descriptor.name() {
            visit(Field::Type, name);
        }

        // Only union members carry properties under the type itself.
        let members = property.ty.descriptor.members();
        for member in members {
            for nested in &member.properties {
                visit(Field::TypePropertyName, &nested.name);
            }
        }
        for member in members {
            for nested in &member.properties {
                visit_property_names(&nested.ty.properties, Field::TypeNestedPropertyName, visit);
            }
        }
    }
}

/// Parameter names, then their properties' names, then one level deeper.
fn visit_parameters<'c>(parameters: &'c [ParameterRecord], visit: &mut dyn FnMut(Field, &'c str)) {
    for parameter in parameters {
        visit(Field::ParameterName, &parameter.name);
    }
    for parameter in parameters {
        visit_property_names(&parameter.ty.properties, Field::ParameterPropertyName, visit);
    }
    for parameter in parameters {
        for property in &parameter.ty.properties {
            visit_property_names(
                &property.ty.properties,
                Field::ParameterNestedPropertyName,
                visit,
            );
        }
    }
}

fn visit_property_names<'c>(
    properties: &'c [PropertyRecord],
    field: Field,
    visit: &mut dyn FnMut(Field, &'c str),
) {
    for property in properties {
        visit(field, &property.name);
    }
}
