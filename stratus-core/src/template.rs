//! Template - A CloudFormation template and its sections

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::dynamic::DynResource;
use crate::error::{TemplateError, TemplateResult};
use crate::format::{self, EncodeConfig, TemplateFormat};
use crate::json::Json;
use crate::registry::ResourceRegistry;
use crate::resource::{Resource, ResourceProperties};
use crate::validate::{self, ValidationError};
use crate::value::Value;

pub const FORMAT_VERSION: &str = "2010-09-09";

/// `Transform` is either a single macro name or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transform {
    Single(String),
    Multiple(Vec<String>),
}

impl Transform {
    pub fn names(&self) -> Vec<&str> {
        match self {
            Transform::Single(name) => vec![name.as_str()],
            Transform::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Parameter {
    /// e.g. "String", "Number", "List<AWS::EC2::Subnet::Id>"
    #[serde(rename = "Type")]
    pub parameter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Json>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_echo: Option<Json>,
}

impl Parameter {
    pub fn new(parameter_type: impl Into<String>) -> Self {
        Self {
            parameter_type: parameter_type.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Output {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            description: None,
            value: value.into(),
            export: None,
            condition: None,
        }
    }

    pub fn with_export(mut self, name: impl Into<Value>) -> Self {
        self.export = Some(Export { name: name.into() });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Export {
    pub name: Value,
}

/// Resources keyed by logical ID
#[derive(Debug, Clone, Default)]
pub struct Resources(BTreeMap<String, Box<dyn DynResource>>);

impl Resources {
    pub fn insert<P: ResourceProperties>(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource<P>,
    ) -> Option<Box<dyn DynResource>> {
        self.insert_boxed(logical_id, Box::new(resource))
    }

    pub fn insert_boxed(
        &mut self,
        logical_id: impl Into<String>,
        resource: Box<dyn DynResource>,
    ) -> Option<Box<dyn DynResource>> {
        self.0.insert(logical_id.into(), resource)
    }

    pub fn get(&self, logical_id: &str) -> Option<&dyn DynResource> {
        self.0.get(logical_id).map(Box::as_ref)
    }

    pub fn get_mut(&mut self, logical_id: &str) -> Option<&mut Box<dyn DynResource>> {
        self.0.get_mut(logical_id)
    }

    pub fn remove(&mut self, logical_id: &str) -> Option<Box<dyn DynResource>> {
        self.0.remove(logical_id)
    }

    pub fn contains(&self, logical_id: &str) -> bool {
        self.0.contains_key(logical_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn DynResource)> {
        self.0.iter().map(|(id, r)| (id.as_str(), r.as_ref()))
    }

    pub fn logical_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Typed view of one resource, `None` if absent or of another type
    pub fn get_as<P: ResourceProperties>(&self, logical_id: &str) -> Option<&Resource<P>> {
        self.get(logical_id).and_then(|r| r.downcast_ref::<P>())
    }

    pub fn of_type<P: ResourceProperties>(&self) -> impl Iterator<Item = (&str, &Resource<P>)> {
        self.0
            .iter()
            .filter_map(|(id, r)| r.downcast_ref::<P>().map(|typed| (id.as_str(), typed)))
    }
}

impl Serialize for Resources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (logical_id, resource) in &self.0 {
            let envelope = resource.to_json().map_err(serde::ser::Error::custom)?;
            map.serialize_entry(logical_id, &envelope)?;
        }
        map.end()
    }
}

/// A CloudFormation template
#[derive(Debug, Clone, Default, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion", skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    #[serde(rename = "Transform", skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Metadata", skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Json>,
    #[serde(rename = "Parameters", skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(rename = "Mappings", skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Json>,
    #[serde(rename = "Conditions", skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, Value>,
    #[serde(rename = "Rules", skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Json>,
    #[serde(rename = "Resources")]
    pub resources: Resources,
    #[serde(rename = "Outputs", skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Output>,
    /// Top-level sections without a typed model, such as `Hooks`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Json>,
}

#[derive(Deserialize)]
struct RawTemplate {
    #[serde(rename = "AWSTemplateFormatVersion", default)]
    format_version: Option<String>,
    #[serde(rename = "Transform", default)]
    transform: Option<Transform>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "Metadata", default)]
    metadata: BTreeMap<String, Json>,
    #[serde(rename = "Parameters", default)]
    parameters: BTreeMap<String, Parameter>,
    #[serde(rename = "Mappings", default)]
    mappings: BTreeMap<String, Json>,
    #[serde(rename = "Conditions", default)]
    conditions: BTreeMap<String, Value>,
    #[serde(rename = "Rules", default)]
    rules: BTreeMap<String, Json>,
    #[serde(rename = "Resources", default)]
    resources: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "Outputs", default)]
    outputs: BTreeMap<String, Output>,
    #[serde(flatten)]
    extra: BTreeMap<String, Json>,
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: Some(FORMAT_VERSION.to_string()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_resource<P: ResourceProperties>(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource<P>,
    ) -> &mut Self {
        self.resources.insert(logical_id, resource);
        self
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, parameter: Parameter) -> &mut Self {
        self.parameters.insert(name.into(), parameter);
        self
    }

    pub fn add_condition(&mut self, name: impl Into<String>, condition: Value) -> &mut Self {
        self.conditions.insert(name.into(), condition);
        self
    }

    pub fn add_output(&mut self, name: impl Into<String>, output: Output) -> &mut Self {
        self.outputs.insert(name.into(), output);
        self
    }

    /// Typed access to one resource
    pub fn resource<P: ResourceProperties>(&self, logical_id: &str) -> TemplateResult<&Resource<P>> {
        let resource = self
            .resources
            .get(logical_id)
            .ok_or_else(|| TemplateError::not_found(logical_id))?;
        resource
            .downcast_ref::<P>()
            .ok_or_else(|| TemplateError::type_mismatch(logical_id, P::TYPE_NAME, resource.type_name()))
    }

    pub fn resource_mut<P: ResourceProperties>(
        &mut self,
        logical_id: &str,
    ) -> TemplateResult<&mut Resource<P>> {
        let resource = self
            .resources
            .get_mut(logical_id)
            .ok_or_else(|| TemplateError::not_found(logical_id))?;
        let actual = resource.type_name().to_string();
        resource
            .downcast_mut::<P>()
            .ok_or_else(|| TemplateError::type_mismatch(logical_id, P::TYPE_NAME, actual))
    }

    pub fn resources_of_type<P: ResourceProperties>(
        &self,
    ) -> impl Iterator<Item = (&str, &Resource<P>)> {
        self.resources.of_type::<P>()
    }

    /// Build a template from a parsed document, decoding resources through the registry
    pub fn from_value(raw: serde_json::Value, registry: &ResourceRegistry) -> TemplateResult<Self> {
        let raw: RawTemplate = serde_json::from_value(raw)?;
        for key in raw.extra.keys() {
            warn!("Keeping unrecognized template section {} as untyped JSON", key);
        }

        let mut resources = Resources::default();
        for (logical_id, envelope) in raw.resources {
            let resource = registry.decode(&logical_id, envelope)?;
            resources.insert_boxed(logical_id, resource);
        }

        Ok(Self {
            format_version: raw.format_version,
            transform: raw.transform,
            description: raw.description,
            metadata: raw.metadata,
            parameters: raw.parameters,
            mappings: raw.mappings,
            conditions: raw.conditions,
            rules: raw.rules,
            resources,
            outputs: raw.outputs,
            extra: raw.extra,
        })
    }

    pub fn from_json(text: &str, registry: &ResourceRegistry) -> TemplateResult<Self> {
        Self::from_value(format::parse_json(text)?, registry)
    }

    pub fn from_yaml(text: &str, registry: &ResourceRegistry) -> TemplateResult<Self> {
        Self::from_value(format::parse_yaml(text)?, registry)
    }

    pub fn parse(
        text: &str,
        template_format: TemplateFormat,
        registry: &ResourceRegistry,
    ) -> TemplateResult<Self> {
        match template_format {
            TemplateFormat::Json => Self::from_json(text, registry),
            TemplateFormat::Yaml => Self::from_yaml(text, registry),
        }
    }

    /// Read a template file, picking the format from its extension
    pub fn open(path: impl AsRef<Path>, registry: &ResourceRegistry) -> TemplateResult<Self> {
        let path = path.as_ref();
        let template_format = TemplateFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        Self::parse(&text, template_format, registry)
    }

    pub fn to_value(&self) -> TemplateResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> TemplateResult<String> {
        self.to_json_with(&EncodeConfig::default())
    }

    pub fn to_json_with(&self, config: &EncodeConfig) -> TemplateResult<String> {
        format::to_json_string(self, config)
    }

    pub fn to_yaml(&self) -> TemplateResult<String> {
        format::to_yaml_string(self)
    }

    pub fn to_format(&self, template_format: TemplateFormat) -> TemplateResult<String> {
        match template_format {
            TemplateFormat::Json => self.to_json(),
            TemplateFormat::Yaml => self.to_yaml(),
        }
    }

    /// Check that every reference in the template points at something that exists
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors = validate::validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
