//! IAM resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::IAM::Role
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Role {
    /// AssumeRolePolicyDocument (required: true, update type: Mutable)
    #[serde(rename = "AssumeRolePolicyDocument", skip_serializing_if = "Option::is_none")]
    pub assume_role_policy_document: Option<Json>,
    /// Description (required: false, update type: Mutable)
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// ManagedPolicyArns (required: false, update type: Mutable)
    #[serde(rename = "ManagedPolicyArns", skip_serializing_if = "Option::is_none")]
    pub managed_policy_arns: Option<Value>,
    /// MaxSessionDuration (required: false, update type: Mutable)
    #[serde(rename = "MaxSessionDuration", skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<Value>,
    /// Path (required: false, update type: Immutable)
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    /// PermissionsBoundary (required: false, update type: Mutable)
    #[serde(rename = "PermissionsBoundary", skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<Value>,
    /// Policies (required: false, update type: Mutable)
    #[serde(rename = "Policies", skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<role::Policy>>,
    /// RoleName (required: false, update type: Immutable)
    #[serde(rename = "RoleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationType for Role {
    const TYPE_NAME: &'static str = "AWS::IAM::Role";
}

impl ResourceProperties for Role {}

pub mod role {
    use super::*;

    /// AWS::IAM::Role.Policy
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-policy.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Policy {
        /// PolicyDocument (required: true, update type: Mutable)
        #[serde(rename = "PolicyDocument", skip_serializing_if = "Option::is_none")]
        pub policy_document: Option<Json>,
        /// PolicyName (required: true, update type: Mutable)
        #[serde(rename = "PolicyName", skip_serializing_if = "Option::is_none")]
        pub policy_name: Option<Value>,
    }

    impl CloudFormationType for Policy {
        const TYPE_NAME: &'static str = "AWS::IAM::Role.Policy";
    }
}
