//! Stratus Resources
//!
//! Generated CloudFormation resource types and the registry that decodes them.
//!
//! ## Module Structure
//!
//! - `generated` - Auto-generated resource and property types, one module per
//!   service, from the pinned specification excerpt in `specs/`

pub mod generated;

pub use generated::{auto_scaling, cloud_formation, ec2, eks, iam, lambda, sns, sqs};

use std::path::Path;

use stratus_core::{ResourceRegistry, Template, TemplateResult};

/// A registry with every generated resource type registered
pub fn registry() -> ResourceRegistry {
    let mut registry = ResourceRegistry::new();
    generated::register_all(&mut registry);
    registry
}

/// Parse a JSON template, decoding known resource types into typed records
pub fn parse_json(text: &str) -> TemplateResult<Template> {
    Template::from_json(text, &registry())
}

/// Parse a YAML template, short-form intrinsics included
pub fn parse_yaml(text: &str) -> TemplateResult<Template> {
    Template::from_yaml(text, &registry())
}

/// Read a template file, picking JSON or YAML from its extension
pub fn open(path: impl AsRef<Path>) -> TemplateResult<Template> {
    Template::open(path, &registry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stratus_core::policies::{
        AutoScalingCreationPolicy, AutoScalingReplacingUpdate, AutoScalingRollingUpdate,
        ResourceSignal,
    };
    use stratus_core::{
        CreationPolicy, DeletionPolicy, Json, Resource, Tag, TemplateError, UpdatePolicy,
        UpdateReplacePolicy, Value,
    };

    const SNS_TEMPLATE: &str = include_str!("../testdata/sns-topic.json");
    const EKS_TEMPLATE: &str = include_str!("../testdata/eks-cluster.yaml");
    const SPECIFICATION: &str = include_str!("../specs/resource-specification.json");

    fn sns_template() -> Template {
        let mut template = Template::new();
        template.add_resource(
            "MyTopic",
            Resource::new(sns::Topic {
                topic_name: Some("my-topic".into()),
                ..Default::default()
            }),
        );
        template.add_resource(
            "MyTopicSubscription",
            Resource::new(sns::Subscription {
                endpoint: Some("ops@example.com".into()),
                protocol: Some("email".into()),
                topic_arn: Some(Value::reference("MyTopic")),
                ..Default::default()
            }),
        );
        template
    }

    #[test]
    fn test_registry_covers_specification() {
        let spec: serde_json::Value = serde_json::from_str(SPECIFICATION).unwrap();
        let mut expected: Vec<&str> = spec["ResourceTypes"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        expected.sort_unstable();
        assert_eq!(registry().type_names(), expected);
    }

    #[test]
    fn test_sns_scenario() {
        let doc = sns_template().to_value().unwrap();
        assert_eq!(
            doc["Resources"]["MyTopic"]["Properties"]["TopicName"],
            json!("my-topic")
        );
        assert_eq!(
            doc["Resources"]["MyTopicSubscription"]["Properties"]["TopicArn"],
            json!({"Ref": "MyTopic"})
        );

        let expected: serde_json::Value = serde_json::from_str(SNS_TEMPLATE).unwrap();
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_sns_parse_typed() {
        let template = parse_json(SNS_TEMPLATE).unwrap();
        let subscription = template
            .resource::<sns::Subscription>("MyTopicSubscription")
            .unwrap();
        assert_eq!(
            subscription.properties.topic_arn,
            Some(Value::reference("MyTopic"))
        );
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_eks_yaml_template() {
        let template = parse_yaml(EKS_TEMPLATE).unwrap();
        assert_eq!(template.resources.len(), 8);
        assert!(template.validate().is_ok());

        let cluster = template.resource::<eks::Cluster>("ControlPlane").unwrap();
        assert_eq!(cluster.attributes.depends_on, vec!["ServiceRole"]);
        assert_eq!(
            cluster.properties.role_arn,
            Some(Value::get_att("ServiceRole", "Arn"))
        );
        let vpc_config = cluster.properties.resources_vpc_config.as_ref().unwrap();
        assert_eq!(
            vpc_config.subnet_ids,
            Some(Value::list([
                Value::reference("SubnetPublicA"),
                Value::reference("SubnetPublicB"),
            ]))
        );
        let logging = cluster.properties.logging.as_ref().unwrap();
        let enabled = logging
            .cluster_logging
            .as_ref()
            .and_then(|c| c.enabled_types.as_ref())
            .unwrap();
        assert_eq!(enabled[1].r#type, Some("audit".into()));

        let subnet = template.resource::<ec2::Subnet>("SubnetPublicA").unwrap();
        assert_eq!(
            subnet.properties.cidr_block,
            Some(Value::select(
                0,
                Value::cidr(Value::get_att("VPC", "CidrBlock"), 4, 13)
            ))
        );

        let role = template.resource::<iam::Role>("ServiceRole").unwrap();
        let policy = role.properties.assume_role_policy_document.as_ref().unwrap();
        assert_eq!(policy["Statement"][0]["Action"], json!(["sts:AssumeRole"]));

        let nodes = template
            .resource::<auto_scaling::AutoScalingGroup>("NodeGroup")
            .unwrap();
        let rolling = nodes
            .attributes
            .update_policy
            .as_ref()
            .and_then(|p| p.auto_scaling_rolling_update.as_ref())
            .unwrap();
        assert_eq!(rolling.pause_time, Some("PT5M".into()));
        assert_eq!(
            nodes.properties.tags.as_ref().unwrap()[0].propagate_at_launch,
            Some(Value::Bool(true))
        );

        assert!(template
            .resource::<cloud_formation::WaitConditionHandle>("ClusterReadyHandle")
            .is_ok());
    }

    #[test]
    fn test_eks_round_trip_through_json() {
        let template = parse_yaml(EKS_TEMPLATE).unwrap();
        let first = template.to_value().unwrap();
        let reparsed = parse_json(&template.to_json().unwrap()).unwrap();
        assert_eq!(reparsed.to_value().unwrap(), first);

        assert_eq!(
            first["Resources"]["SubnetPublicA"]["Properties"]["CidrBlock"],
            json!({"Fn::Select": [0, {"Fn::Cidr": [{"Fn::GetAtt": ["VPC", "CidrBlock"]}, 4, 13]}]})
        );
        assert_eq!(
            first["Resources"]["ClusterReadyHandle"],
            json!({"Type": "AWS::CloudFormation::WaitConditionHandle", "Properties": {}})
        );
    }

    #[test]
    fn test_nested_property_records_are_strict() {
        let err = parse_json(
            r#"{"Resources": {"MyTopic": {
                "Type": "AWS::SNS::Topic",
                "Properties": {"Subscription": [{"Endpoint": "a", "Protocol": "sqs", "Bogus": 1}]}
            }}}"#,
        )
        .unwrap_err();
        assert!(
            matches!(err, TemplateError::InvalidResource { ref logical_id, .. } if logical_id == "MyTopic")
        );
    }

    #[test]
    fn test_lambda_environment_and_tags() {
        let function = lambda::Function {
            code: Some(lambda::function::Code {
                zip_file: Some("exports.handler = async () => {}".into()),
                ..Default::default()
            }),
            environment: Some(lambda::function::Environment {
                variables: Some(
                    [("TABLE".to_string(), Value::reference("Table"))]
                        .into_iter()
                        .collect(),
                ),
            }),
            role: Some(Value::get_att("Role", "Arn")),
            tags: Some(vec![Tag::new("team", "platform")]),
            ..Default::default()
        };
        let resource = Resource::new(function).with_deletion_policy(DeletionPolicy::Retain);

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::Lambda::Function",
                "Properties": {
                    "Code": {"ZipFile": "exports.handler = async () => {}"},
                    "Environment": {"Variables": {"TABLE": {"Ref": "Table"}}},
                    "Role": {"Fn::GetAtt": ["Role", "Arn"]},
                    "Tags": [{"Key": "team", "Value": "platform"}]
                },
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn test_iam_inline_policy_document() {
        let role = iam::Role {
            assume_role_policy_document: Some(Json(json!({"Version": "2012-10-17", "Statement": []}))),
            policies: Some(vec![iam::role::Policy {
                policy_document: Some(Json(json!({"Statement": [{"Effect": "Allow", "Action": "s3:GetObject", "Resource": "*"}]}))),
                policy_name: Some("read".into()),
            }]),
            ..Default::default()
        };
        let doc = serde_json::to_value(Resource::new(role)).unwrap();
        assert_eq!(doc["Properties"]["Policies"][0]["PolicyName"], json!("read"));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.json");
        std::fs::write(&path, SNS_TEMPLATE).unwrap();
        let template = open(&path).unwrap();
        assert!(template.resource::<sns::Topic>("MyTopic").is_ok());

        let unsupported = dir.path().join("stack.txt");
        std::fs::write(&unsupported, SNS_TEMPLATE).unwrap();
        assert!(matches!(
            open(&unsupported),
            Err(TemplateError::UnsupportedFormat(_))
        ));
    }

    fn populated_cluster() -> Resource<eks::Cluster> {
        Resource::new(eks::Cluster {
            name: Some(Value::sub("${AWS::StackName}-cluster")),
            version: Some("1.29".into()),
            role_arn: Some(Value::get_att("ClusterRole", "Arn")),
            encryption_config: Some(vec![eks::cluster::EncryptionConfig {
                provider: Some(eks::cluster::Provider {
                    key_arn: Some(Value::if_then_else(
                        "HasEncryptionKey",
                        Value::reference("KmsKeyArn"),
                        Value::reference("AWS::NoValue"),
                    )),
                }),
                resources: Some(Value::List(vec!["secrets".into()])),
            }]),
            kubernetes_network_config: Some(eks::cluster::KubernetesNetworkConfig {
                ip_family: Some("ipv4".into()),
                ..Default::default()
            }),
            logging: Some(eks::cluster::Logging {
                cluster_logging: Some(eks::cluster::ClusterLogging {
                    enabled_types: Some(vec![
                        eks::cluster::LoggingTypeConfig {
                            r#type: Some("api".into()),
                        },
                        eks::cluster::LoggingTypeConfig {
                            r#type: Some("audit".into()),
                        },
                    ]),
                }),
            }),
            resources_vpc_config: Some(eks::cluster::ResourcesVpcConfig {
                endpoint_private_access: Some(true.into()),
                endpoint_public_access: Some(false.into()),
                subnet_ids: Some(Value::List(vec![
                    Value::reference("SubnetA"),
                    Value::reference("SubnetB"),
                ])),
                security_group_ids: Some(Value::split(",", Value::import_value("shared-sgs"))),
                ..Default::default()
            }),
            tags: Some(vec![Tag::new("team", "platform")]),
        })
        .with_depends_on("ClusterRole")
        .with_depends_on("SubnetA")
        .with_metadata("Owner", json!({"team": "platform", "oncall": ["a", "b"]}))
        .with_deletion_policy(DeletionPolicy::Snapshot)
        .with_update_replace_policy(UpdateReplacePolicy::Retain)
        .with_condition("IsProd")
        .with_update_policy(UpdatePolicy {
            auto_scaling_replacing_update: Some(AutoScalingReplacingUpdate {
                will_replace: Some(true.into()),
            }),
            auto_scaling_rolling_update: Some(AutoScalingRollingUpdate {
                max_batch_size: Some(2.into()),
                pause_time: Some("PT5M".into()),
                wait_on_resource_signals: Some(true.into()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .with_creation_policy(CreationPolicy {
            auto_scaling_creation_policy: Some(AutoScalingCreationPolicy {
                min_successful_instances_percent: Some(75.into()),
            }),
            resource_signal: Some(ResourceSignal {
                count: Some(3.into()),
                timeout: Some("PT15M".into()),
            }),
        })
    }

    #[test]
    fn test_typed_record_survives_encode_decode() {
        let cluster = populated_cluster();

        let encoded = serde_json::to_value(&cluster).unwrap();
        let decoded: Resource<eks::Cluster> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, cluster);

        let role = Resource::new(iam::Role {
            assume_role_policy_document: Some(Json::new(json!({
                "Version": "2012-10-17",
                "Statement": [{"Effect": "Allow", "Principal": {"Service": "eks.amazonaws.com"}, "Action": "sts:AssumeRole"}]
            }))),
            policies: Some(vec![iam::role::Policy {
                policy_name: Some("logs".into()),
                policy_document: Some(Json::new(json!({"Statement": []}))),
            }]),
            max_session_duration: Some(3600.into()),
            ..Default::default()
        })
        .with_metadata("Reviewed", json!({"by": "security", "approved": false}));

        let encoded = serde_json::to_value(&role).unwrap();
        let decoded: Resource<iam::Role> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, role);
    }

    #[test]
    fn test_typed_record_survives_template_text() {
        let cluster = populated_cluster();
        let mut template = Template::new();
        template.add_resource("Cluster", cluster.clone());

        let from_json = parse_json(&template.to_json().unwrap()).unwrap();
        assert_eq!(from_json.resource::<eks::Cluster>("Cluster").unwrap(), &cluster);

        let from_yaml = parse_yaml(&template.to_yaml().unwrap()).unwrap();
        assert_eq!(from_yaml.resource::<eks::Cluster>("Cluster").unwrap(), &cluster);
    }
}
