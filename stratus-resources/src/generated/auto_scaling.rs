//! AutoScaling resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::AutoScaling::AutoScalingGroup
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-as-group.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingGroup {
    /// AutoScalingGroupName (required: false, update type: Immutable)
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<Value>,
    /// DesiredCapacity (required: false, update type: Mutable)
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<Value>,
    /// LaunchTemplate (required: false, update type: Mutable)
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<auto_scaling_group::LaunchTemplateSpecification>,
    /// MaxSize (required: true, update type: Mutable)
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Value>,
    /// MetricsCollection (required: false, update type: Mutable)
    #[serde(rename = "MetricsCollection", skip_serializing_if = "Option::is_none")]
    pub metrics_collection: Option<Vec<auto_scaling_group::MetricsCollection>>,
    /// MinSize (required: true, update type: Mutable)
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<auto_scaling_group::TagProperty>>,
    /// VPCZoneIdentifier (required: false, update type: Mutable)
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<Value>,
}

impl CloudFormationType for AutoScalingGroup {
    const TYPE_NAME: &'static str = "AWS::AutoScaling::AutoScalingGroup";
}

impl ResourceProperties for AutoScalingGroup {}

pub mod auto_scaling_group {
    use super::*;

    /// AWS::AutoScaling::AutoScalingGroup.LaunchTemplateSpecification
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-autoscaling-autoscalinggroup-launchtemplatespecification.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct LaunchTemplateSpecification {
        /// LaunchTemplateId (required: false, update type: Mutable)
        #[serde(rename = "LaunchTemplateId", skip_serializing_if = "Option::is_none")]
        pub launch_template_id: Option<Value>,
        /// LaunchTemplateName (required: false, update type: Mutable)
        #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
        pub launch_template_name: Option<Value>,
        /// Version (required: true, update type: Mutable)
        #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
        pub version: Option<Value>,
    }

    impl CloudFormationType for LaunchTemplateSpecification {
        const TYPE_NAME: &'static str = "AWS::AutoScaling::AutoScalingGroup.LaunchTemplateSpecification";
    }

    /// AWS::AutoScaling::AutoScalingGroup.MetricsCollection
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-as-metricscollection.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct MetricsCollection {
        /// Granularity (required: true, update type: Mutable)
        #[serde(rename = "Granularity", skip_serializing_if = "Option::is_none")]
        pub granularity: Option<Value>,
        /// Metrics (required: false, update type: Mutable)
        #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
        pub metrics: Option<Value>,
    }

    impl CloudFormationType for MetricsCollection {
        const TYPE_NAME: &'static str = "AWS::AutoScaling::AutoScalingGroup.MetricsCollection";
    }

    /// AWS::AutoScaling::AutoScalingGroup.TagProperty
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-as-tags.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct TagProperty {
        /// Key (required: true, update type: Mutable)
        #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
        pub key: Option<Value>,
        /// PropagateAtLaunch (required: true, update type: Mutable)
        #[serde(rename = "PropagateAtLaunch", skip_serializing_if = "Option::is_none")]
        pub propagate_at_launch: Option<Value>,
        /// Value (required: true, update type: Mutable)
        #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
        pub value: Option<Value>,
    }

    impl CloudFormationType for TagProperty {
        const TYPE_NAME: &'static str = "AWS::AutoScaling::AutoScalingGroup.TagProperty";
    }
}
