//! Mapping from specification properties to Rust field types

use std::collections::HashSet;

use log::warn;

use crate::naming::{property_short_name, type_ident};
use crate::spec::{Property, Specification};

/// The shape of a generated field, before it is wrapped in `Option`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Scalar or list of scalars, literal or intrinsic
    Value,
    Json,
    ValueMap,
    JsonMap,
    /// A list of the global `Tag` type
    Tags,
    /// A single property type, by full name
    Nested(String),
    NestedList(String),
    NestedMap(String),
}

impl FieldType {
    /// Full name of a property type referenced through a singular edge
    pub fn singular_target(&self) -> Option<&str> {
        match self {
            FieldType::Nested(target) => Some(target),
            _ => None,
        }
    }

    pub fn uses_btree_map(&self) -> bool {
        matches!(
            self,
            FieldType::ValueMap | FieldType::JsonMap | FieldType::NestedMap(_)
        )
    }

    /// Rust type as written inside `Option<...>`
    ///
    /// `module` is the submodule holding the owner's property types, or
    /// `None` when the field is emitted inside that submodule.
    pub fn render(&self, module: Option<&str>, boxed: bool) -> String {
        let path = |full: &str| {
            let ident = type_ident(property_short_name(full));
            match module {
                Some(module) => format!("{}::{}", module, ident),
                None => ident,
            }
        };
        match self {
            FieldType::Value => "Value".to_string(),
            FieldType::Json => "Json".to_string(),
            FieldType::ValueMap => "BTreeMap<String, Value>".to_string(),
            FieldType::JsonMap => "BTreeMap<String, Json>".to_string(),
            FieldType::Tags => "Vec<Tag>".to_string(),
            FieldType::Nested(full) if boxed => format!("Box<{}>", path(full)),
            FieldType::Nested(full) => path(full),
            FieldType::NestedList(full) => format!("Vec<{}>", path(full)),
            FieldType::NestedMap(full) => format!("BTreeMap<String, {}>", path(full)),
        }
    }
}

/// Resolve a property type reference made from within `owner` (a resource type name)
fn resolve(spec: &Specification, owner: &str, name: &str) -> Option<String> {
    let local = format!("{}.{}", owner, name);
    if spec.property_types.contains_key(&local) {
        Some(local)
    } else {
        None
    }
}

pub fn classify(spec: &Specification, owner: &str, property: &Property) -> FieldType {
    if property.is_polymorphic() {
        return FieldType::Json;
    }
    if let Some(primitive) = &property.primitive_type {
        return if primitive == "Json" {
            FieldType::Json
        } else {
            FieldType::Value
        };
    }

    let primitive_item = property.primitive_item_type.as_deref();
    let item = property.item_type.as_deref();
    match property.property_type.as_deref() {
        Some("List") => match (primitive_item, item) {
            (Some("Json"), _) => FieldType::Json,
            (Some(_), _) => FieldType::Value,
            (None, Some(item)) => match resolve(spec, owner, item) {
                Some(full) => FieldType::NestedList(full),
                None if item == "Tag" => FieldType::Tags,
                None => unknown(owner, item),
            },
            (None, None) => FieldType::Json,
        },
        Some("Map") => match (primitive_item, item) {
            (Some("Json"), _) => FieldType::JsonMap,
            (Some(_), _) => FieldType::ValueMap,
            (None, Some(item)) => match resolve(spec, owner, item) {
                Some(full) => FieldType::NestedMap(full),
                None => unknown(owner, item),
            },
            (None, None) => FieldType::Json,
        },
        Some(name) => match resolve(spec, owner, name) {
            Some(full) => FieldType::Nested(full),
            None => unknown(owner, name),
        },
        None => FieldType::Json,
    }
}

fn unknown(owner: &str, name: &str) -> FieldType {
    warn!("{} references unknown property type {}, using Json", owner, name);
    FieldType::Json
}

/// Whether `from` can reach `to` by following singular nested fields
pub fn reaches(spec: &Specification, owner: &str, from: &str, to: &str) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![from.to_string()];
    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(property_type) = spec.property_types.get(&current) else {
            continue;
        };
        for property in property_type.properties.values() {
            if let FieldType::Nested(next) = classify(spec, owner, property) {
                stack.push(next);
            }
        }
    }
    false
}
