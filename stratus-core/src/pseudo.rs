//! Pseudo parameters predefined by CloudFormation
//!
//! Use with `Value::reference`, e.g. `Value::reference(pseudo::REGION)`.

pub const ACCOUNT_ID: &str = "AWS::AccountId";
pub const NOTIFICATION_ARNS: &str = "AWS::NotificationARNs";
pub const NO_VALUE: &str = "AWS::NoValue";
pub const PARTITION: &str = "AWS::Partition";
pub const REGION: &str = "AWS::Region";
pub const STACK_ID: &str = "AWS::StackId";
pub const STACK_NAME: &str = "AWS::StackName";
pub const URL_SUFFIX: &str = "AWS::URLSuffix";

pub const ALL: [&str; 8] = [
    ACCOUNT_ID,
    NOTIFICATION_ARNS,
    NO_VALUE,
    PARTITION,
    REGION,
    STACK_ID,
    STACK_NAME,
    URL_SUFFIX,
];

pub fn is_pseudo_parameter(name: &str) -> bool {
    ALL.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pseudo_parameter() {
        assert!(is_pseudo_parameter("AWS::Region"));
        assert!(is_pseudo_parameter(NO_VALUE));
        assert!(!is_pseudo_parameter("AWS::Bogus"));
        assert!(!is_pseudo_parameter("MyBucket"));
    }
}
