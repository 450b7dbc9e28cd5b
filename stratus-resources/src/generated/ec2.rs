//! EC2 resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::EC2::SecurityGroup
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityGroup {
    /// GroupDescription (required: true, update type: Immutable)
    #[serde(rename = "GroupDescription", skip_serializing_if = "Option::is_none")]
    pub group_description: Option<Value>,
    /// GroupName (required: false, update type: Immutable)
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<Value>,
    /// SecurityGroupEgress (required: false, update type: Mutable)
    #[serde(rename = "SecurityGroupEgress", skip_serializing_if = "Option::is_none")]
    pub security_group_egress: Option<Vec<security_group::Egress>>,
    /// SecurityGroupIngress (required: false, update type: Mutable)
    #[serde(rename = "SecurityGroupIngress", skip_serializing_if = "Option::is_none")]
    pub security_group_ingress: Option<Vec<security_group::Ingress>>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// VpcId (required: false, update type: Immutable)
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<Value>,
}

impl CloudFormationType for SecurityGroup {
    const TYPE_NAME: &'static str = "AWS::EC2::SecurityGroup";
}

impl ResourceProperties for SecurityGroup {}

pub mod security_group {
    use super::*;

    /// AWS::EC2::SecurityGroup.Egress
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule-1.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Egress {
        /// CidrIp (required: false, update type: Mutable)
        #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
        pub cidr_ip: Option<Value>,
        /// Description (required: false, update type: Mutable)
        #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
        pub description: Option<Value>,
        /// DestinationSecurityGroupId (required: false, update type: Mutable)
        #[serde(rename = "DestinationSecurityGroupId", skip_serializing_if = "Option::is_none")]
        pub destination_security_group_id: Option<Value>,
        /// FromPort (required: false, update type: Mutable)
        #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
        pub from_port: Option<Value>,
        /// IpProtocol (required: true, update type: Mutable)
        #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
        pub ip_protocol: Option<Value>,
        /// ToPort (required: false, update type: Mutable)
        #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
        pub to_port: Option<Value>,
    }

    impl CloudFormationType for Egress {
        const TYPE_NAME: &'static str = "AWS::EC2::SecurityGroup.Egress";
    }

    /// AWS::EC2::SecurityGroup.Ingress
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Ingress {
        /// CidrIp (required: false, update type: Mutable)
        #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
        pub cidr_ip: Option<Value>,
        /// Description (required: false, update type: Mutable)
        #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
        pub description: Option<Value>,
        /// FromPort (required: false, update type: Mutable)
        #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
        pub from_port: Option<Value>,
        /// IpProtocol (required: true, update type: Mutable)
        #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
        pub ip_protocol: Option<Value>,
        /// SourceSecurityGroupId (required: false, update type: Mutable)
        #[serde(rename = "SourceSecurityGroupId", skip_serializing_if = "Option::is_none")]
        pub source_security_group_id: Option<Value>,
        /// ToPort (required: false, update type: Mutable)
        #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
        pub to_port: Option<Value>,
    }

    impl CloudFormationType for Ingress {
        const TYPE_NAME: &'static str = "AWS::EC2::SecurityGroup.Ingress";
    }
}

/// AWS::EC2::Subnet
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-subnet.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subnet {
    /// AvailabilityZone (required: false, update type: Immutable)
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<Value>,
    /// CidrBlock (required: false, update type: Immutable)
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value>,
    /// MapPublicIpOnLaunch (required: false, update type: Mutable)
    #[serde(rename = "MapPublicIpOnLaunch", skip_serializing_if = "Option::is_none")]
    pub map_public_ip_on_launch: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// VpcId (required: true, update type: Immutable)
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<Value>,
}

impl CloudFormationType for Subnet {
    const TYPE_NAME: &'static str = "AWS::EC2::Subnet";
}

impl ResourceProperties for Subnet {}

/// AWS::EC2::VPC
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VPC {
    /// CidrBlock (required: false, update type: Immutable)
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value>,
    /// EnableDnsHostnames (required: false, update type: Mutable)
    #[serde(rename = "EnableDnsHostnames", skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<Value>,
    /// EnableDnsSupport (required: false, update type: Mutable)
    #[serde(rename = "EnableDnsSupport", skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<Value>,
    /// InstanceTenancy (required: false, update type: Mutable)
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationType for VPC {
    const TYPE_NAME: &'static str = "AWS::EC2::VPC";
}

impl ResourceProperties for VPC {}
