//! Rust identifiers for CloudFormation names

use anyhow::{Result, bail};
use heck::ToSnakeCase;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// Names a generated type must not shadow
const TAKEN_TYPE_NAMES: &[&str] = &[
    "BTreeMap",
    "Box",
    "CloudFormationType",
    "Default",
    "Deserialize",
    "Json",
    "Option",
    "ResourceProperties",
    "Result",
    "Serialize",
    "String",
    "Tag",
    "Value",
    "Vec",
];

fn escape(ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", ident)
    } else {
        ident
    }
}

/// `TopicName` -> `topic_name`, `Type` -> `r#type`
pub fn field_ident(property_name: &str) -> String {
    escape(property_name.to_snake_case())
}

/// `SecurityGroup` -> `security_group`
pub fn module_ident(resource_name: &str) -> String {
    escape(resource_name.to_snake_case())
}

/// Struct name for a resource or property type short name
pub fn type_ident(short_name: &str) -> String {
    let ident: String = short_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if TAKEN_TYPE_NAMES.contains(&ident.as_str()) {
        format!("{}Property", ident)
    } else {
        escape(ident)
    }
}

/// Split `AWS::SNS::Topic` into its three parts
pub fn split_type_name(type_name: &str) -> Result<(&str, &str, &str)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    match parts.as_slice() {
        [vendor, service, resource] => Ok((*vendor, *service, *resource)),
        _ => bail!("Invalid type name format: {}", type_name),
    }
}

/// Output file stem for a resource type: `AWS::SNS::Topic` -> `sns`
pub fn service_module(type_name: &str) -> Result<String> {
    let (vendor, service, _) = split_type_name(type_name)?;
    let module = if vendor == "AWS" {
        service.to_snake_case()
    } else {
        format!("{}_{}", vendor.to_snake_case(), service.to_snake_case())
    };
    Ok(escape(module))
}

/// Short name of a property type: `AWS::SNS::Topic.Subscription` -> `Subscription`
pub fn property_short_name(full_name: &str) -> &str {
    full_name
        .split_once('.')
        .map(|(_, short)| short)
        .unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ident() {
        assert_eq!(field_ident("TopicName"), "topic_name");
        assert_eq!(field_ident("VPCId"), "vpc_id");
        assert_eq!(field_ident("Type"), "r#type");
        assert_eq!(field_ident("Self"), "self_");
        assert_eq!(field_ident("Ipv6CidrBlock"), "ipv6_cidr_block");
    }

    #[test]
    fn test_type_ident() {
        assert_eq!(type_ident("Subscription"), "Subscription");
        assert_eq!(type_ident("Value"), "ValueProperty");
        assert_eq!(type_ident("Tag"), "TagProperty");
    }

    #[test]
    fn test_service_module() {
        assert_eq!(service_module("AWS::SNS::Topic").unwrap(), "sns");
        assert_eq!(service_module("AWS::AutoScaling::AutoScalingGroup").unwrap(), "auto_scaling");
        assert_eq!(service_module("Alexa::ASK::Skill").unwrap(), "alexa_ask");
        assert!(service_module("Tag").is_err());
    }

    #[test]
    fn test_module_ident() {
        assert_eq!(module_ident("VPC"), "vpc");
        assert_eq!(module_ident("SecurityGroup"), "security_group");
    }

    #[test]
    fn test_property_short_name() {
        assert_eq!(property_short_name("AWS::SNS::Topic.Subscription"), "Subscription");
        assert_eq!(property_short_name("Tag"), "Tag");
    }
}
