//! CloudFormation Resource Specification input model
//!
//! See https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/cfn-resource-specification-format.html

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Specification {
    #[serde(default)]
    pub resource_specification_version: Option<String>,
    /// Keyed by "AWS::SNS::Topic.Subscription", plus global types such as "Tag"
    #[serde(default)]
    pub property_types: BTreeMap<String, PropertyType>,
    #[serde(default)]
    pub resource_types: BTreeMap<String, ResourceType>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyType {
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceType {
    pub documentation: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
}

/// A `Fn::GetAtt` attribute of a resource type
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    pub primitive_type: Option<String>,
    #[serde(rename = "Type")]
    pub attribute_type: Option<String>,
    pub primitive_item_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Property {
    pub documentation: Option<String>,
    pub primitive_type: Option<String>,
    /// "List", "Map" or the name of a property type
    #[serde(rename = "Type")]
    pub property_type: Option<String>,
    pub item_type: Option<String>,
    pub primitive_item_type: Option<String>,
    pub primitive_types: Option<Vec<String>>,
    pub primitive_item_types: Option<Vec<String>>,
    pub item_types: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
    pub update_type: Option<String>,
    pub duplicates_allowed: Option<bool>,
}

impl Property {
    /// True when the property accepts more than one shape
    pub fn is_polymorphic(&self) -> bool {
        self.primitive_types.is_some()
            || self.primitive_item_types.is_some()
            || self.item_types.is_some()
            || self.types.is_some()
    }
}

impl Specification {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Property types declared under a resource type, keyed by their full name
    pub fn property_types_of<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a PropertyType)> + 'a {
        self.property_types.iter().filter_map(move |(name, property_type)| {
            name.split_once('.')
                .filter(|(owner, _)| *owner == resource_type)
                .map(|_| (name.as_str(), property_type))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specification() {
        let spec = Specification::from_json(
            r#"{
                "ResourceSpecificationVersion": "1.0.0",
                "PropertyTypes": {
                    "AWS::SNS::Topic.Subscription": {
                        "Properties": {
                            "Endpoint": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"}
                        }
                    },
                    "Tag": {"Properties": {}}
                },
                "ResourceTypes": {
                    "AWS::SNS::Topic": {
                        "Attributes": {"TopicName": {"PrimitiveType": "String"}},
                        "Properties": {
                            "Subscription": {"Type": "List", "ItemType": "Subscription", "DuplicatesAllowed": true}
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(spec.resource_specification_version.as_deref(), Some("1.0.0"));
        let topic = &spec.resource_types["AWS::SNS::Topic"];
        assert_eq!(topic.properties["Subscription"].item_type.as_deref(), Some("Subscription"));
        assert!(!topic.properties["Subscription"].required);

        let owned: Vec<_> = spec.property_types_of("AWS::SNS::Topic").map(|(n, _)| n).collect();
        assert_eq!(owned, vec!["AWS::SNS::Topic.Subscription"]);
    }

    #[test]
    fn test_polymorphic() {
        let property = Property {
            primitive_types: Some(vec!["String".into(), "Long".into()]),
            ..Default::default()
        };
        assert!(property.is_polymorphic());
        assert!(!Property::default().is_polymorphic());
    }
}
