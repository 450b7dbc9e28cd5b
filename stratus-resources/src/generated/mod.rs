//! Generated CloudFormation resource types
//!
//! Auto-generated from CloudFormation resource specification 154.0.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::ResourceRegistry;

pub mod auto_scaling;
pub mod cloud_formation;
pub mod ec2;
pub mod eks;
pub mod iam;
pub mod lambda;
pub mod sns;
pub mod sqs;

/// Register every generated resource type
pub fn register_all(registry: &mut ResourceRegistry) {
    registry
        .register::<auto_scaling::AutoScalingGroup>()
        .register::<cloud_formation::WaitConditionHandle>()
        .register::<ec2::SecurityGroup>()
        .register::<ec2::Subnet>()
        .register::<ec2::VPC>()
        .register::<eks::Cluster>()
        .register::<iam::Role>()
        .register::<lambda::Function>()
        .register::<sns::Subscription>()
        .register::<sns::Topic>()
        .register::<sqs::Queue>();
}
