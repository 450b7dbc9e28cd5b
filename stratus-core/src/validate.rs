//! Reference validation
//!
//! Walks every resource, condition and output and checks that `Ref`,
//! `Fn::GetAtt`, `Fn::Sub` variables, `DependsOn` entries and condition names
//! point at something declared in the template.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::pseudo;
use crate::template::Template;
use crate::value::{CONDITION, FN_GET_ATT, FN_IF, FN_SUB, REF};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{location}: Ref to unknown resource or parameter '{target}'")]
    UnknownRef { location: String, target: String },

    #[error("{location}: Fn::GetAtt on unknown resource '{target}'")]
    UnknownGetAtt { location: String, target: String },

    #[error("{location}: Fn::Sub variable '${{{target}}}' does not resolve")]
    UnknownSubVariable { location: String, target: String },

    #[error("{location}: DependsOn unknown resource '{target}'")]
    UnknownDependency { location: String, target: String },

    #[error("{location}: unknown condition '{target}'")]
    UnknownCondition { location: String, target: String },
}

struct Checker<'a> {
    template: &'a Template,
    errors: Vec<ValidationError>,
}

impl<'a> Checker<'a> {
    fn is_resource(&self, name: &str) -> bool {
        self.template.resources.contains(name)
    }

    fn is_referenceable(&self, name: &str) -> bool {
        self.is_resource(name)
            || self.template.parameters.contains_key(name)
            || pseudo::is_pseudo_parameter(name)
    }

    fn check_condition(&mut self, location: &str, name: &str) {
        if !self.template.conditions.contains_key(name) {
            self.errors.push(ValidationError::UnknownCondition {
                location: location.to_string(),
                target: name.to_string(),
            });
        }
    }

    fn walk(&mut self, location: &str, value: &serde_json::Value) {
        match value {
            serde_json::Value::Array(items) => {
                for item in items {
                    self.walk(location, item);
                }
            }
            serde_json::Value::Object(object) => {
                if object.len() == 1 {
                    if let Some((key, arg)) = object.iter().next() {
                        if self.check_intrinsic(location, key, arg) {
                            return;
                        }
                    }
                }
                for item in object.values() {
                    self.walk(location, item);
                }
            }
            _ => {}
        }
    }

    /// Returns true when the arguments have been fully handled
    fn check_intrinsic(&mut self, location: &str, function: &str, arg: &serde_json::Value) -> bool {
        match (function, arg) {
            (REF, serde_json::Value::String(target)) => {
                if !self.is_referenceable(target) {
                    self.errors.push(ValidationError::UnknownRef {
                        location: location.to_string(),
                        target: target.clone(),
                    });
                }
                true
            }
            (CONDITION, serde_json::Value::String(name)) => {
                self.check_condition(location, name);
                true
            }
            (FN_GET_ATT, _) => {
                let target = match arg {
                    serde_json::Value::String(dotted) => dotted.split('.').next(),
                    serde_json::Value::Array(items) => items.first().and_then(|v| v.as_str()),
                    _ => None,
                };
                if let Some(target) = target {
                    if !self.is_resource(target) {
                        self.errors.push(ValidationError::UnknownGetAtt {
                            location: location.to_string(),
                            target: target.to_string(),
                        });
                    }
                }
                if let serde_json::Value::Array(items) = arg {
                    for item in items.iter().skip(1) {
                        self.walk(location, item);
                    }
                }
                true
            }
            (FN_SUB, serde_json::Value::String(template)) => {
                self.check_sub(location, template, &BTreeSet::new());
                true
            }
            (FN_SUB, serde_json::Value::Array(items)) => {
                if let [serde_json::Value::String(template), serde_json::Value::Object(vars)] =
                    items.as_slice()
                {
                    let locals = vars.keys().map(String::as_str).collect();
                    self.check_sub(location, template, &locals);
                    for item in vars.values() {
                        self.walk(location, item);
                    }
                    return true;
                }
                false
            }
            (FN_IF, serde_json::Value::Array(items)) => {
                if let Some(name) = items.first().and_then(|v| v.as_str()) {
                    self.check_condition(location, name);
                }
                for item in items.iter().skip(1) {
                    self.walk(location, item);
                }
                true
            }
            _ => false,
        }
    }

    fn check_sub(&mut self, location: &str, template: &str, locals: &BTreeSet<&str>) {
        for variable in sub_variables(template) {
            let known = if locals.contains(variable) {
                true
            } else if let Some((resource, _attribute)) = variable.split_once('.') {
                self.is_resource(resource)
            } else {
                self.is_referenceable(variable)
            };
            if !known {
                self.errors.push(ValidationError::UnknownSubVariable {
                    location: location.to_string(),
                    target: variable.to_string(),
                });
            }
        }
    }
}

/// Variable names in a `Fn::Sub` template; `${!Literal}` escapes are skipped
pub fn sub_variables(template: &str) -> Vec<&str> {
    let mut variables = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = after[..end].trim();
        if !name.starts_with('!') && !name.is_empty() {
            variables.push(name);
        }
        rest = &after[end + 1..];
    }
    variables
}

/// Collect every unresolved reference in the template
pub fn validate(template: &Template) -> Vec<ValidationError> {
    let mut checker = Checker {
        template,
        errors: Vec::new(),
    };

    for (name, condition) in &template.conditions {
        let location = format!("Conditions.{}", name);
        match serde_json::to_value(condition) {
            Ok(doc) => checker.walk(&location, &doc),
            Err(e) => log::warn!("Skipping {}: {}", location, e),
        }
    }

    for (logical_id, resource) in template.resources.iter() {
        let location = format!("Resources.{}", logical_id);
        let attributes = resource.attributes();

        for dependency in &attributes.depends_on {
            if !checker.is_resource(dependency) {
                checker.errors.push(ValidationError::UnknownDependency {
                    location: location.clone(),
                    target: dependency.clone(),
                });
            }
        }
        if let Some(condition) = &attributes.condition {
            checker.check_condition(&location, condition);
        }

        match resource.to_json() {
            Ok(envelope) => {
                if let Some(properties) = envelope.get("Properties") {
                    checker.walk(&location, properties);
                }
            }
            Err(e) => log::warn!("Skipping {}: {}", location, e),
        }
    }

    for (name, output) in &template.outputs {
        let location = format!("Outputs.{}", name);
        if let Some(condition) = &output.condition {
            checker.check_condition(&location, condition);
        }
        match serde_json::to_value(output) {
            Ok(doc) => checker.walk(&location, &doc),
            Err(e) => log::warn!("Skipping {}: {}", location, e),
        }
    }

    checker.errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResourceRegistry;
    use crate::resource::tests::Topic;
    use serde_json::json;

    fn template(doc: serde_json::Value) -> Template {
        let registry = ResourceRegistry::new().with::<Topic>();
        Template::from_value(doc, &registry).unwrap()
    }

    #[test]
    fn test_sub_variables() {
        assert_eq!(
            sub_variables("arn:${AWS::Partition}:s3:::${Bucket}/${!Literal}"),
            vec!["AWS::Partition", "Bucket"]
        );
        assert_eq!(sub_variables("${Db.Endpoint.Address}:${Port"), vec!["Db.Endpoint.Address"]);
        assert!(sub_variables("plain").is_empty());
    }

    #[test]
    fn test_valid_template() {
        let template = template(json!({
            "Parameters": {"Env": {"Type": "String"}},
            "Conditions": {"IsProd": {"Fn::Equals": [{"Ref": "Env"}, "prod"]}},
            "Resources": {
                "A": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": {"Fn::Sub": "${AWS::StackName}-${Env}"}}},
                "B": {
                    "Type": "Custom::Thing",
                    "Condition": "IsProd",
                    "DependsOn": "A",
                    "Properties": {
                        "Arn": {"Ref": "A"},
                        "Name": {"Fn::GetAtt": ["A", "TopicName"]},
                        "Size": {"Fn::If": ["IsProd", 3, {"Ref": "AWS::NoValue"}]},
                        "Url": {"Fn::Sub": ["${Local}/${A.TopicName}", {"Local": {"Ref": "Env"}}]}
                    }
                }
            },
            "Outputs": {"Arn": {"Value": {"Ref": "A"}, "Condition": "IsProd"}}
        }));
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let template = template(json!({
            "Resources": {
                "A": {
                    "Type": "Custom::Thing",
                    "DependsOn": ["Missing"],
                    "Condition": "Nope",
                    "Properties": {
                        "X": {"Ref": "Ghost"},
                        "Y": {"Fn::GetAtt": "Phantom.Arn"},
                        "Z": {"Fn::Sub": "${Unknown}"},
                        "W": {"Fn::Not": [{"Condition": "AlsoNope"}]}
                    }
                }
            },
            "Outputs": {"Out": {"Value": {"Ref": "Elsewhere"}}}
        }));
        let errors = template.validate().unwrap_err();

        let expected = vec![
            ValidationError::UnknownDependency {
                location: "Resources.A".to_string(),
                target: "Missing".to_string(),
            },
            ValidationError::UnknownCondition {
                location: "Resources.A".to_string(),
                target: "Nope".to_string(),
            },
        ];
        assert_eq!(&errors[..2], &expected[..]);
        assert_eq!(errors.len(), 7);
        assert!(errors.contains(&ValidationError::UnknownRef {
            location: "Outputs.Out".to_string(),
            target: "Elsewhere".to_string(),
        }));
        assert!(errors.contains(&ValidationError::UnknownGetAtt {
            location: "Resources.A".to_string(),
            target: "Phantom".to_string(),
        }));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::UnknownSubVariable {
            location: "Resources.A".to_string(),
            target: "Bucket".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resources.A: Fn::Sub variable '${Bucket}' does not resolve"
        );
    }
}
