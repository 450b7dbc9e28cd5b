//! Template text formats
//!
//! JSON output is pretty-printed according to [`EncodeConfig`]. YAML input
//! may use the CloudFormation short-form tags (`!Ref`, `!Sub`, ...); they are
//! expanded to the long form on parse, so a document read from YAML is the
//! same `serde_json::Value` it would be if written in JSON.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_yaml::value::TaggedValue;

use crate::error::{TemplateError, TemplateResult};
use crate::value::{
    CONDITION, FN_AND, FN_BASE64, FN_CIDR, FN_EQUALS, FN_FIND_IN_MAP, FN_GET_ATT, FN_GET_AZS,
    FN_IF, FN_IMPORT_VALUE, FN_JOIN, FN_NOT, FN_OR, FN_SELECT, FN_SPLIT, FN_SUB, REF,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// `.json` and `.template` are JSON, `.yaml` and `.yml` are YAML
    pub fn from_path(path: &Path) -> TemplateResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "json" | "template" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(TemplateError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for TemplateFormat {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TemplateError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Output configuration for JSON templates
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Number of spaces for indentation (default: 2)
    pub indent_size: usize,
    /// Use tabs instead of spaces
    pub use_tabs: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
        }
    }
}

impl EncodeConfig {
    pub fn indent_string(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }
}

pub fn to_json_string<T: Serialize + ?Sized>(
    value: &T,
    config: &EncodeConfig,
) -> TemplateResult<String> {
    let indent = config.indent_string();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn to_yaml_string<T: Serialize + ?Sized>(value: &T) -> TemplateResult<String> {
    Ok(serde_yaml::to_string(value)?)
}

pub fn parse_json(text: &str) -> TemplateResult<serde_json::Value> {
    Ok(serde_json::from_str(text)?)
}

/// Parse YAML into a JSON document, expanding short-form intrinsic tags
pub fn parse_yaml(text: &str) -> TemplateResult<serde_json::Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    yaml_to_json(yaml)
}

/// Long-form function key for a short-form tag name (without the `!`)
pub fn short_form_function(tag: &str) -> Option<&'static str> {
    let function = match tag {
        "Ref" => REF,
        "Condition" => CONDITION,
        "GetAtt" => FN_GET_ATT,
        "Sub" => FN_SUB,
        "Join" => FN_JOIN,
        "Select" => FN_SELECT,
        "Split" => FN_SPLIT,
        "ImportValue" => FN_IMPORT_VALUE,
        "Cidr" => FN_CIDR,
        "FindInMap" => FN_FIND_IN_MAP,
        "Equals" => FN_EQUALS,
        "Base64" => FN_BASE64,
        "GetAZs" => FN_GET_AZS,
        "If" => FN_IF,
        "Not" => FN_NOT,
        "And" => FN_AND,
        "Or" => FN_OR,
        _ => return None,
    };
    Some(function)
}

fn yaml_to_json(value: serde_yaml::Value) -> TemplateResult<serde_json::Value> {
    use serde_yaml::Value as Yaml;

    let json = match value {
        Yaml::Null => serde_json::Value::Null,
        Yaml::Bool(b) => serde_json::Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into()
            } else if let Some(u) = n.as_u64() {
                u.into()
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| TemplateError::UnsupportedYaml(format!("number {}", n)))?
            }
        }
        Yaml::String(s) => serde_json::Value::String(s),
        Yaml::Sequence(items) => serde_json::Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<TemplateResult<Vec<_>>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            serde_json::Value::Object(object)
        }
        Yaml::Tagged(tagged) => expand_short_form(*tagged)?,
    };
    Ok(json)
}

fn mapping_key(key: serde_yaml::Value) -> TemplateResult<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        other => Err(TemplateError::UnsupportedYaml(format!(
            "mapping key {:?}",
            other
        ))),
    }
}

fn expand_short_form(tagged: TaggedValue) -> TemplateResult<serde_json::Value> {
    let tag = tagged.tag.to_string();
    let name = tag.trim_start_matches('!');
    let function = short_form_function(name)
        .ok_or_else(|| TemplateError::UnsupportedYaml(format!("unknown tag !{}", name)))?;

    let mut object = serde_json::Map::new();
    object.insert(function.to_string(), yaml_to_json(tagged.value)?);
    Ok(serde_json::Value::Object(object))
}
