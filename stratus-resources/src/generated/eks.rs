//! EKS resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};

/// AWS::EKS::Cluster
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-eks-cluster.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cluster {
    /// EncryptionConfig (required: false, update type: Immutable)
    #[serde(rename = "EncryptionConfig", skip_serializing_if = "Option::is_none")]
    pub encryption_config: Option<Vec<cluster::EncryptionConfig>>,
    /// KubernetesNetworkConfig (required: false, update type: Immutable)
    #[serde(rename = "KubernetesNetworkConfig", skip_serializing_if = "Option::is_none")]
    pub kubernetes_network_config: Option<cluster::KubernetesNetworkConfig>,
    /// Logging (required: false, update type: Mutable)
    #[serde(rename = "Logging", skip_serializing_if = "Option::is_none")]
    pub logging: Option<cluster::Logging>,
    /// Name (required: false, update type: Immutable)
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// ResourcesVpcConfig (required: true, update type: Mutable)
    #[serde(rename = "ResourcesVpcConfig", skip_serializing_if = "Option::is_none")]
    pub resources_vpc_config: Option<cluster::ResourcesVpcConfig>,
    /// RoleArn (required: true, update type: Immutable)
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Value>,
    /// Tags (required: false, update type: Mutable)
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Version (required: false, update type: Mutable)
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

impl CloudFormationType for Cluster {
    const TYPE_NAME: &'static str = "AWS::EKS::Cluster";
}

impl ResourceProperties for Cluster {}

pub mod cluster {
    use super::*;

    /// AWS::EKS::Cluster.ClusterLogging
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-clusterlogging.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct ClusterLogging {
        /// EnabledTypes (required: false, update type: Mutable)
        #[serde(rename = "EnabledTypes", skip_serializing_if = "Option::is_none")]
        pub enabled_types: Option<Vec<LoggingTypeConfig>>,
    }

    impl CloudFormationType for ClusterLogging {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.ClusterLogging";
    }

    /// AWS::EKS::Cluster.EncryptionConfig
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-encryptionconfig.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct EncryptionConfig {
        /// Provider (required: false, update type: Immutable)
        #[serde(rename = "Provider", skip_serializing_if = "Option::is_none")]
        pub provider: Option<Provider>,
        /// Resources (required: false, update type: Immutable)
        #[serde(rename = "Resources", skip_serializing_if = "Option::is_none")]
        pub resources: Option<Value>,
    }

    impl CloudFormationType for EncryptionConfig {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.EncryptionConfig";
    }

    /// AWS::EKS::Cluster.KubernetesNetworkConfig
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-kubernetesnetworkconfig.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct KubernetesNetworkConfig {
        /// IpFamily (required: false, update type: Immutable)
        #[serde(rename = "IpFamily", skip_serializing_if = "Option::is_none")]
        pub ip_family: Option<Value>,
        /// ServiceIpv4Cidr (required: false, update type: Immutable)
        #[serde(rename = "ServiceIpv4Cidr", skip_serializing_if = "Option::is_none")]
        pub service_ipv4_cidr: Option<Value>,
    }

    impl CloudFormationType for KubernetesNetworkConfig {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.KubernetesNetworkConfig";
    }

    /// AWS::EKS::Cluster.Logging
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-logging.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Logging {
        /// ClusterLogging (required: false, update type: Mutable)
        #[serde(rename = "ClusterLogging", skip_serializing_if = "Option::is_none")]
        pub cluster_logging: Option<ClusterLogging>,
    }

    impl CloudFormationType for Logging {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.Logging";
    }

    /// AWS::EKS::Cluster.LoggingTypeConfig
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-loggingtypeconfig.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct LoggingTypeConfig {
        /// Type (required: false, update type: Mutable)
        #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
        pub r#type: Option<Value>,
    }

    impl CloudFormationType for LoggingTypeConfig {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.LoggingTypeConfig";
    }

    /// AWS::EKS::Cluster.Provider
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-provider.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Provider {
        /// KeyArn (required: false, update type: Immutable)
        #[serde(rename = "KeyArn", skip_serializing_if = "Option::is_none")]
        pub key_arn: Option<Value>,
    }

    impl CloudFormationType for Provider {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.Provider";
    }

    /// AWS::EKS::Cluster.ResourcesVpcConfig
    ///
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-eks-cluster-resourcesvpcconfig.html
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct ResourcesVpcConfig {
        /// EndpointPrivateAccess (required: false, update type: Mutable)
        #[serde(rename = "EndpointPrivateAccess", skip_serializing_if = "Option::is_none")]
        pub endpoint_private_access: Option<Value>,
        /// EndpointPublicAccess (required: false, update type: Mutable)
        #[serde(rename = "EndpointPublicAccess", skip_serializing_if = "Option::is_none")]
        pub endpoint_public_access: Option<Value>,
        /// PublicAccessCidrs (required: false, update type: Mutable)
        #[serde(rename = "PublicAccessCidrs", skip_serializing_if = "Option::is_none")]
        pub public_access_cidrs: Option<Value>,
        /// SecurityGroupIds (required: false, update type: Mutable)
        #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
        pub security_group_ids: Option<Value>,
        /// SubnetIds (required: true, update type: Mutable)
        #[serde(rename = "SubnetIds", skip_serializing_if = "Option::is_none")]
        pub subnet_ids: Option<Value>,
    }

    impl CloudFormationType for ResourcesVpcConfig {
        const TYPE_NAME: &'static str = "AWS::EKS::Cluster.ResourcesVpcConfig";
    }
}
