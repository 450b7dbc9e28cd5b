//! CloudFormation resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::CloudFormation::WaitConditionHandle
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-waitconditionhandle.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaitConditionHandle {}

impl CloudFormationType for WaitConditionHandle {
    const TYPE_NAME: &'static str = "AWS::CloudFormation::WaitConditionHandle";
}

impl ResourceProperties for WaitConditionHandle {}
