//! Resource - The generic CloudFormation resource envelope
//!
//! A resource is written as
//! `{"Type": ..., "Properties": {...}, "DependsOn": [...], "DeletionPolicy": ..., ...}`.
//! The properties record only knows its own fields; the sibling keys live in
//! [`ResourceAttributes`] and are lifted in and out of the envelope here.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::json::Json;
use crate::policies::{CreationPolicy, DeletionPolicy, UpdatePolicy, UpdateReplacePolicy};

/// A record with a CloudFormation type identifier
pub trait CloudFormationType {
    /// e.g. "AWS::SNS::Topic" or "AWS::SNS::Topic.Subscription"
    const TYPE_NAME: &'static str;

    fn cloudformation_type(&self) -> &'static str {
        Self::TYPE_NAME
    }
}

/// Marker for the `Properties` record of a top-level resource type
pub trait ResourceProperties:
    CloudFormationType
    + Serialize
    + DeserializeOwned
    + Clone
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
{
}

/// Side channels written next to `Properties` in the envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceAttributes {
    #[serde(rename = "DependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Json>>,
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "UpdatePolicy", skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<UpdatePolicy>,
    #[serde(rename = "CreationPolicy", skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,
}

impl ResourceAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A typed resource: properties plus envelope attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    pub fn with_depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.attributes.depends_on.push(logical_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        self.attributes
            .metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.attributes.update_replace_policy = Some(policy);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.attributes.update_policy = Some(policy);
        self
    }

    pub fn with_creation_policy(mut self, policy: CreationPolicy) -> Self {
        self.attributes.creation_policy = Some(policy);
        self
    }
}

impl<P: ResourceProperties> From<P> for Resource<P> {
    fn from(properties: P) -> Self {
        Self::new(properties)
    }
}

#[derive(Serialize)]
pub(crate) struct EnvelopeRef<'a, P> {
    #[serde(rename = "Type")]
    pub type_name: &'a str,
    #[serde(rename = "Properties")]
    pub properties: &'a P,
    #[serde(flatten)]
    pub attributes: &'a ResourceAttributes,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl From<DependsOn> for Vec<String> {
    fn from(depends_on: DependsOn) -> Self {
        match depends_on {
            DependsOn::One(id) => vec![id],
            DependsOn::Many(ids) => ids,
        }
    }
}

/// Wire form of an envelope, with every allowed key listed
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawEnvelope<P> {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Properties", default)]
    pub properties: Option<P>,
    #[serde(rename = "DependsOn", default)]
    depends_on: Option<DependsOn>,
    #[serde(rename = "Metadata", default)]
    metadata: Option<BTreeMap<String, Json>>,
    #[serde(rename = "DeletionPolicy", default)]
    deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "UpdateReplacePolicy", default)]
    update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "Condition", default)]
    condition: Option<String>,
    #[serde(rename = "UpdatePolicy", default)]
    update_policy: Option<UpdatePolicy>,
    #[serde(rename = "CreationPolicy", default)]
    creation_policy: Option<CreationPolicy>,
}

impl<P> RawEnvelope<P> {
    pub fn into_parts(self) -> (String, Option<P>, ResourceAttributes) {
        let attributes = ResourceAttributes {
            depends_on: self.depends_on.map(Vec::from).unwrap_or_default(),
            metadata: self.metadata,
            deletion_policy: self.deletion_policy,
            update_replace_policy: self.update_replace_policy,
            condition: self.condition,
            update_policy: self.update_policy,
            creation_policy: self.creation_policy,
        };
        (self.type_name, self.properties, attributes)
    }
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeRef {
            type_name: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<P>::deserialize(deserializer)?;
        let (type_name, properties, attributes) = raw.into_parts();
        if type_name != P::TYPE_NAME {
            return Err(de::Error::custom(format!(
                "resource type mismatch: expected {}, got {}",
                P::TYPE_NAME,
                type_name
            )));
        }
        Ok(Self {
            properties: properties.unwrap_or_default(),
            attributes,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Topic {
        #[serde(rename = "TopicName", skip_serializing_if = "Option::is_none")]
        pub topic_name: Option<Value>,
        #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
        pub display_name: Option<Value>,
    }

    impl CloudFormationType for Topic {
        const TYPE_NAME: &'static str = "AWS::SNS::Topic";
    }

    impl ResourceProperties for Topic {}

    #[test]
    fn test_encode_minimal() {
        let resource = Resource::new(Topic::default());
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({"Type": "AWS::SNS::Topic", "Properties": {}})
        );
    }

    #[test]
    fn test_encode_lifts_side_channels() {
        let resource = Resource::new(Topic {
            topic_name: Some("my-topic".into()),
            ..Default::default()
        })
        .with_depends_on("Queue")
        .with_deletion_policy(DeletionPolicy::Retain)
        .with_update_replace_policy(UpdateReplacePolicy::Retain)
        .with_condition("IsProd")
        .with_metadata("Owner", json!("platform"));

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::SNS::Topic",
                "Properties": {"TopicName": "my-topic"},
                "DependsOn": ["Queue"],
                "Metadata": {"Owner": "platform"},
                "DeletionPolicy": "Retain",
                "UpdateReplacePolicy": "Retain",
                "Condition": "IsProd"
            })
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let doc = json!({
            "Type": "AWS::SNS::Topic",
            "Properties": {"TopicName": "t", "DisplayName": {"Ref": "Name"}},
            "DependsOn": ["A", "B"],
            "UpdatePolicy": {"AutoScalingReplacingUpdate": {"WillReplace": true}},
            "CreationPolicy": {"ResourceSignal": {"Count": 1}}
        });
        let resource: Resource<Topic> = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(resource.attributes.depends_on, vec!["A", "B"]);
        assert_eq!(resource.properties.display_name, Some(Value::reference("Name")));
        assert_eq!(serde_json::to_value(&resource).unwrap(), doc);
    }

    #[test]
    fn test_decode_missing_side_channels_keep_defaults() {
        let resource: Resource<Topic> =
            serde_json::from_value(json!({"Type": "AWS::SNS::Topic", "Properties": {}})).unwrap();
        assert!(resource.attributes.is_empty());
    }

    #[test]
    fn test_decode_missing_or_null_properties() {
        let missing: Resource<Topic> =
            serde_json::from_value(json!({"Type": "AWS::SNS::Topic"})).unwrap();
        assert_eq!(missing.properties, Topic::default());

        let null: Resource<Topic> =
            serde_json::from_value(json!({"Type": "AWS::SNS::Topic", "Properties": null})).unwrap();
        assert_eq!(null.properties, Topic::default());
    }

    #[test]
    fn test_decode_depends_on_single_string() {
        let resource: Resource<Topic> = serde_json::from_value(
            json!({"Type": "AWS::SNS::Topic", "DependsOn": "Queue"}),
        )
        .unwrap();
        assert_eq!(resource.attributes.depends_on, vec!["Queue"]);
    }

    #[test]
    fn test_empty_depends_on_is_omitted() {
        let resource: Resource<Topic> = serde_json::from_value(
            json!({"Type": "AWS::SNS::Topic", "Properties": {}, "DependsOn": []}),
        )
        .unwrap();
        assert!(resource.attributes.depends_on.is_empty());
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({"Type": "AWS::SNS::Topic", "Properties": {}})
        );
    }

    #[test]
    fn test_decode_rejects_unknown_envelope_key() {
        let result: Result<Resource<Topic>, _> = serde_json::from_value(
            json!({"Type": "AWS::SNS::Topic", "Properties": {}, "Bogus": 1}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_property() {
        let result: Result<Resource<Topic>, _> = serde_json::from_value(
            json!({"Type": "AWS::SNS::Topic", "Properties": {"Nope": "x"}}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_type_mismatch() {
        let err = serde_json::from_value::<Resource<Topic>>(
            json!({"Type": "AWS::SQS::Queue", "Properties": {}}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("type mismatch"));
    }

    #[test]
    fn test_decode_rejects_invalid_value_shape() {
        let result: Result<Resource<Topic>, _> = serde_json::from_value(
            json!({"Type": "AWS::SNS::Topic", "Properties": {"TopicName": {"Ref": "A", "X": 1}}}),
        );
        assert!(result.is_err());
    }
}
