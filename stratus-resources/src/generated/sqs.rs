//! SQS resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::SQS::Queue
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sqs-queues.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Queue {
    /// DelaySeconds (required: false, update type: Mutable)
    #[serde(rename = "DelaySeconds", skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<Value>,
    /// FifoQueue (required: false, update type: Immutable)
    #[serde(rename = "FifoQueue", skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<Value>,
    /// MessageRetentionPeriod (required: false, update type: Mutable)
    #[serde(rename = "MessageRetentionPeriod", skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<Value>,
    /// QueueName (required: false, update type: Immutable)
    #[serde(rename = "QueueName", skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<Value>,
    /// RedrivePolicy (required: false, update type: Mutable)
    #[serde(rename = "RedrivePolicy", skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<Json>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// VisibilityTimeout (required: false, update type: Mutable)
    #[serde(rename = "VisibilityTimeout", skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<Value>,
}

impl CloudFormationType for Queue {
    const TYPE_NAME: &'static str = "AWS::SQS::Queue";
}

impl ResourceProperties for Queue {}
