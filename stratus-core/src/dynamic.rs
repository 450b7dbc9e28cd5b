//! Type-erased resources
//!
//! A template holds resources of many types in one map. [`DynResource`] is
//! the object-safe view shared by every typed [`Resource<P>`] and by
//! [`CustomResource`], the fallback for types with no generated record.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::json::Json;
use crate::resource::{EnvelopeRef, RawEnvelope, Resource, ResourceAttributes, ResourceProperties};

pub trait DynResource: Any + Debug + Send + Sync {
    fn type_name(&self) -> &str;
    fn attributes(&self) -> &ResourceAttributes;
    fn attributes_mut(&mut self) -> &mut ResourceAttributes;
    /// The full envelope as a JSON document
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;
    fn clone_box(&self) -> Box<dyn DynResource>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn DynResource> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl dyn DynResource {
    pub fn downcast_ref<P: ResourceProperties>(&self) -> Option<&Resource<P>> {
        self.as_any().downcast_ref::<Resource<P>>()
    }

    pub fn downcast_mut<P: ResourceProperties>(&mut self) -> Option<&mut Resource<P>> {
        self.as_any_mut().downcast_mut::<Resource<P>>()
    }

    pub fn as_custom(&self) -> Option<&CustomResource> {
        self.as_any().downcast_ref::<CustomResource>()
    }
}

impl<P: ResourceProperties> DynResource for Resource<P> {
    fn type_name(&self) -> &str {
        P::TYPE_NAME
    }

    fn attributes(&self) -> &ResourceAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ResourceAttributes {
        &mut self.attributes
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn clone_box(&self) -> Box<dyn DynResource> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A resource whose type has no generated record
///
/// Used for `Custom::*`, `AWS::CloudFormation::CustomResource` and any type
/// missing from the registry. Properties are kept as untyped documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomResource {
    pub type_name: String,
    pub properties: BTreeMap<String, Json>,
    pub attributes: ResourceAttributes,
}

impl CustomResource {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// `Custom::*` or `AWS::CloudFormation::CustomResource`
    pub fn is_custom_type(type_name: &str) -> bool {
        type_name.starts_with("Custom::") || type_name == "AWS::CloudFormation::CustomResource"
    }
}

impl Serialize for CustomResource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeRef {
            type_name: &self.type_name,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomResource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<BTreeMap<String, Json>>::deserialize(deserializer)?;
        let (type_name, properties, attributes) = raw.into_parts();
        Ok(Self {
            type_name,
            properties: properties.unwrap_or_default(),
            attributes,
        })
    }
}

impl DynResource for CustomResource {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attributes(&self) -> &ResourceAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut ResourceAttributes {
        &mut self.attributes
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn clone_box(&self) -> Box<dyn DynResource> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::tests::Topic;
    use serde_json::json;

    #[test]
    fn test_downcast_typed_resource() {
        let boxed: Box<dyn DynResource> = Box::new(Resource::new(Topic {
            topic_name: Some("t".into()),
            ..Default::default()
        }));
        assert_eq!(boxed.type_name(), "AWS::SNS::Topic");
        let topic = boxed.downcast_ref::<Topic>().unwrap();
        assert_eq!(topic.properties.topic_name, Some("t".into()));
        assert!(boxed.as_custom().is_none());
    }

    #[test]
    fn test_clone_box() {
        let boxed: Box<dyn DynResource> =
            Box::new(Resource::new(Topic::default()).with_condition("IsProd"));
        let cloned = boxed.clone();
        assert_eq!(cloned.attributes().condition.as_deref(), Some("IsProd"));
    }

    #[test]
    fn test_custom_resource_round_trip() {
        let doc = json!({
            "Type": "Custom::Seeder",
            "Properties": {"ServiceToken": {"Fn::GetAtt": ["Fn", "Arn"]}, "Count": 3},
            "DependsOn": ["Table"]
        });
        let custom: CustomResource = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(custom.type_name, "Custom::Seeder");
        assert_eq!(custom.properties["Count"], Json(json!(3)));
        assert_eq!(custom.to_json().unwrap(), doc);
    }

    #[test]
    fn test_custom_resource_rejects_unknown_envelope_key() {
        let result: Result<CustomResource, _> =
            serde_json::from_value(json!({"Type": "Custom::X", "Propertys": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_custom_type() {
        assert!(CustomResource::is_custom_type("Custom::Thing"));
        assert!(CustomResource::is_custom_type("AWS::CloudFormation::CustomResource"));
        assert!(!CustomResource::is_custom_type("AWS::SNS::Topic"));
    }
}
