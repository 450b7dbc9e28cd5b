//! The global `Tag` property type

use serde::{Deserialize, Serialize};

use crate::resource::CloudFormationType;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value,
    #[serde(rename = "Value")]
    pub value: Value,
}

impl Tag {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CloudFormationType for Tag {
    const TYPE_NAME: &'static str = "Tag";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_wire_shape() {
        let tag = Tag::new("env", Value::reference("Env"));
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"Key": "env", "Value": {"Ref": "Env"}})
        );
        assert_eq!(tag.cloudformation_type(), "Tag");
    }

    #[test]
    fn test_tag_rejects_unknown_keys() {
        let result: Result<Tag, _> =
            serde_json::from_value(json!({"Key": "a", "Value": "b", "Other": 1}));
        assert!(result.is_err());
    }
}
