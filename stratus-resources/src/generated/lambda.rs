//! Lambda resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::Lambda::Function
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-function.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    /// Code (required: true, update type: Mutable)
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<function::Code>,
    /// Description (required: false, update type: Mutable)
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Environment (required: false, update type: Mutable)
    #[serde(rename = "Environment", skip_serializing_if = "Option::is_none")]
    pub environment: Option<function::Environment>,
    /// FunctionName (required: false, update type: Immutable)
    #[serde(rename = "FunctionName", skip_serializing_if = "Option::is_none")]
    pub function_name: Option<Value>,
    /// Handler (required: false, update type: Mutable)
    #[serde(rename = "Handler", skip_serializing_if = "Option::is_none")]
    pub handler: Option<Value>,
    /// MemorySize (required: false, update type: Mutable)
    #[serde(rename = "MemorySize", skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Value>,
    /// Role (required: true, update type: Mutable)
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    /// Runtime (required: false, update type: Mutable)
    #[serde(rename = "Runtime", skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Timeout (required: false, update type: Mutable)
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value>,
}

impl CloudFormationType for Function {
    const TYPE_NAME: &'static str = "AWS::Lambda::Function";
}

impl ResourceProperties for Function {}

pub mod function {
    use super::*;

    /// AWS::Lambda::Function.Code
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-code.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Code {
        /// S3Bucket (required: false, update type: Mutable)
        #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
        pub s3_bucket: Option<Value>,
        /// S3Key (required: false, update type: Mutable)
        #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
        pub s3_key: Option<Value>,
        /// S3ObjectVersion (required: false, update type: Mutable)
        #[serde(rename = "S3ObjectVersion", skip_serializing_if = "Option::is_none")]
        pub s3_object_version: Option<Value>,
        /// ZipFile (required: false, update type: Mutable)
        #[serde(rename = "ZipFile", skip_serializing_if = "Option::is_none")]
        pub zip_file: Option<Value>,
    }

    impl CloudFormationType for Code {
        const TYPE_NAME: &'static str = "AWS::Lambda::Function.Code";
    }

    /// AWS::Lambda::Function.Environment
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-environment.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Environment {
        /// Variables (required: false, update type: Mutable)
        #[serde(rename = "Variables", skip_serializing_if = "Option::is_none")]
        pub variables: Option<BTreeMap<String, Value>>,
    }

    impl CloudFormationType for Environment {
        const TYPE_NAME: &'static str = "AWS::Lambda::Function.Environment";
    }
}
