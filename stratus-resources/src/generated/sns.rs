//! SNS resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::SNS::Subscription
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-subscription.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subscription {
    /// DeliveryPolicy (required: false, update type: Mutable)
    #[serde(rename = "DeliveryPolicy", skip_serializing_if = "Option::is_none")]
    pub delivery_policy: Option<Json>,
    /// Endpoint (required: false, update type: Immutable)
    #[serde(rename = "Endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    /// FilterPolicy (required: false, update type: Mutable)
    #[serde(rename = "FilterPolicy", skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<Json>,
    /// Protocol (required: true, update type: Immutable)
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value>,
    /// RawMessageDelivery (required: false, update type: Mutable)
    #[serde(rename = "RawMessageDelivery", skip_serializing_if = "Option::is_none")]
    pub raw_message_delivery: Option<Value>,
    /// Region (required: false, update type: Mutable)
    #[serde(rename = "Region", skip_serializing_if = "Option::is_none")]
    pub region: Option<Value>,
    /// TopicArn (required: true, update type: Immutable)
    #[serde(rename = "TopicArn", skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<Value>,
}

impl CloudFormationType for Subscription {
    const TYPE_NAME: &'static str = "AWS::SNS::Subscription";
}

impl ResourceProperties for Subscription {}

/// AWS::SNS::Topic
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Topic {
    /// ContentBasedDeduplication (required: false, update type: Mutable)
    #[serde(rename = "ContentBasedDeduplication", skip_serializing_if = "Option::is_none")]
    pub content_based_deduplication: Option<Value>,
    /// DisplayName (required: false, update type: Mutable)
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Value>,
    /// FifoTopic (required: false, update type: Immutable)
    #[serde(rename = "FifoTopic", skip_serializing_if = "Option::is_none")]
    pub fifo_topic: Option<Value>,
    /// KmsMasterKeyId (required: false, update type: Mutable)
    #[serde(rename = "KmsMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value>,
    /// Subscription (required: false, update type: Mutable)
    #[serde(rename = "Subscription", skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Vec<topic::Subscription>>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// TopicName (required: false, update type: Immutable)
    #[serde(rename = "TopicName", skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<Value>,
}

impl CloudFormationType for Topic {
    const TYPE_NAME: &'static str = "AWS::SNS::Topic";
}

impl ResourceProperties for Topic {}

pub mod topic {
    use super::*;

    /// AWS::SNS::Topic.Subscription
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-subscription.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Subscription {
        /// Endpoint (required: true, update type: Mutable)
        #[serde(rename = "Endpoint", skip_serializing_if = "Option::is_none")]
        pub endpoint: Option<Value>,
        /// Protocol (required: true, update type: Mutable)
        #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
        pub protocol: Option<Value>,
    }

    impl CloudFormationType for Subscription {
        const TYPE_NAME: &'static str = "AWS::SNS::Topic.Subscription";
    }
}
