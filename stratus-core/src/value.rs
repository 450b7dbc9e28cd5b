//! Value - CloudFormation scalar leaves and intrinsic functions
//!
//! Every scalar property in a template is either a literal or one of the
//! intrinsic functions. Literals serialize as themselves, intrinsics as a
//! single-key object (`{"Ref": "MyTopic"}`).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number};

pub const REF: &str = "Ref";
pub const CONDITION: &str = "Condition";
pub const FN_AND: &str = "Fn::And";
pub const FN_BASE64: &str = "Fn::Base64";
pub const FN_CIDR: &str = "Fn::Cidr";
pub const FN_EQUALS: &str = "Fn::Equals";
pub const FN_FIND_IN_MAP: &str = "Fn::FindInMap";
pub const FN_GET_ATT: &str = "Fn::GetAtt";
pub const FN_GET_AZS: &str = "Fn::GetAZs";
pub const FN_IF: &str = "Fn::If";
pub const FN_IMPORT_VALUE: &str = "Fn::ImportValue";
pub const FN_JOIN: &str = "Fn::Join";
pub const FN_NOT: &str = "Fn::Not";
pub const FN_OR: &str = "Fn::Or";
pub const FN_SELECT: &str = "Fn::Select";
pub const FN_SPLIT: &str = "Fn::Split";
pub const FN_SUB: &str = "Fn::Sub";

/// Error raised when a document does not match any `Value` shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("null is not a valid value")]
    Null,

    #[error("integer {0} does not fit in a signed 64-bit value")]
    IntegerOutOfRange(u64),

    #[error("object with keys [{}] is not an intrinsic function", keys.join(", "))]
    NotIntrinsic { keys: Vec<String> },

    #[error("unknown intrinsic function '{0}'")]
    UnknownFunction(String),

    #[error("{function} expects {expected} arguments, got {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid arguments for {function}: expected {expected}")]
    InvalidArgument {
        function: String,
        expected: &'static str,
    },
}

impl ValueError {
    fn invalid(function: &str, expected: &'static str) -> Self {
        Self::InvalidArgument {
            function: function.to_string(),
            expected,
        }
    }
}

/// A scalar-or-expression leaf
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Bool(bool),
    List(Vec<Value>),
    Intrinsic(Box<Intrinsic>),
}

/// CloudFormation intrinsic functions
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    Ref(String),
    GetAtt {
        logical_id: String,
        attribute: Value,
    },
    /// `values` is a literal list or an intrinsic that yields one
    Join {
        delimiter: String,
        values: Value,
    },
    Sub {
        template: String,
        variables: Option<BTreeMap<String, Value>>,
    },
    ImportValue(Value),
    Select {
        index: Value,
        list: Value,
    },
    Split {
        delimiter: String,
        source: Value,
    },
    Cidr {
        ip_block: Value,
        count: Value,
        cidr_bits: Value,
    },
    FindInMap {
        map_name: Value,
        top_level_key: Value,
        second_level_key: Value,
    },
    Equals(Value, Value),
    Base64(Value),
    GetAzs(Value),
    If {
        condition: String,
        if_true: Value,
        if_false: Value,
    },
    Not(Value),
    And(Vec<Value>),
    Or(Vec<Value>),
    /// Reference to a named condition, used inside the condition functions
    Condition(String),
}

impl Intrinsic {
    /// Wire name of the function (e.g. "Fn::GetAtt")
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => REF,
            Intrinsic::GetAtt { .. } => FN_GET_ATT,
            Intrinsic::Join { .. } => FN_JOIN,
            Intrinsic::Sub { .. } => FN_SUB,
            Intrinsic::ImportValue(_) => FN_IMPORT_VALUE,
            Intrinsic::Select { .. } => FN_SELECT,
            Intrinsic::Split { .. } => FN_SPLIT,
            Intrinsic::Cidr { .. } => FN_CIDR,
            Intrinsic::FindInMap { .. } => FN_FIND_IN_MAP,
            Intrinsic::Equals(_, _) => FN_EQUALS,
            Intrinsic::Base64(_) => FN_BASE64,
            Intrinsic::GetAzs(_) => FN_GET_AZS,
            Intrinsic::If { .. } => FN_IF,
            Intrinsic::Not(_) => FN_NOT,
            Intrinsic::And(_) => FN_AND,
            Intrinsic::Or(_) => FN_OR,
            Intrinsic::Condition(_) => CONDITION,
        }
    }

    /// Parse a single-key object into an intrinsic function
    pub fn from_object(object: Map<String, serde_json::Value>) -> Result<Self, ValueError> {
        if object.len() != 1 {
            return Err(ValueError::NotIntrinsic {
                keys: object.keys().cloned().collect(),
            });
        }
        let Some((function, arg)) = object.into_iter().next() else {
            return Err(ValueError::NotIntrinsic { keys: Vec::new() });
        };
        let name = function.as_str();

        let intrinsic = match name {
            REF => Intrinsic::Ref(expect_string(name, arg)?),
            CONDITION => Intrinsic::Condition(expect_string(name, arg)?),
            FN_GET_ATT => match arg {
                serde_json::Value::String(dotted) => {
                    let (logical_id, attribute) = dotted
                        .split_once('.')
                        .ok_or_else(|| ValueError::invalid(name, "\"LogicalId.Attribute\""))?;
                    Intrinsic::GetAtt {
                        logical_id: logical_id.to_string(),
                        attribute: Value::String(attribute.to_string()),
                    }
                }
                other => {
                    let [logical_id, attribute] = args(name, other)?;
                    Intrinsic::GetAtt {
                        logical_id: expect_string(name, logical_id)?,
                        attribute: Value::try_from(attribute)?,
                    }
                }
            },
            FN_JOIN => {
                let [delimiter, values] = args(name, arg)?;
                Intrinsic::Join {
                    delimiter: expect_string(name, delimiter)?,
                    values: Value::try_from(values)?,
                }
            }
            FN_SUB => match arg {
                serde_json::Value::String(template) => Intrinsic::Sub {
                    template,
                    variables: None,
                },
                other => {
                    let [template, variables] = args(name, other)?;
                    let serde_json::Value::Object(variables) = variables else {
                        return Err(ValueError::invalid(name, "a variable map"));
                    };
                    let variables = variables
                        .into_iter()
                        .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                        .collect::<Result<BTreeMap<_, _>, _>>()?;
                    Intrinsic::Sub {
                        template: expect_string(name, template)?,
                        variables: Some(variables),
                    }
                }
            },
            FN_IMPORT_VALUE => Intrinsic::ImportValue(Value::try_from(arg)?),
            FN_SELECT => {
                let [index, list] = args(name, arg)?;
                Intrinsic::Select {
                    index: Value::try_from(index)?,
                    list: Value::try_from(list)?,
                }
            }
            FN_SPLIT => {
                let [delimiter, source] = args(name, arg)?;
                Intrinsic::Split {
                    delimiter: expect_string(name, delimiter)?,
                    source: Value::try_from(source)?,
                }
            }
            FN_CIDR => {
                let [ip_block, count, cidr_bits] = args(name, arg)?;
                Intrinsic::Cidr {
                    ip_block: Value::try_from(ip_block)?,
                    count: Value::try_from(count)?,
                    cidr_bits: Value::try_from(cidr_bits)?,
                }
            }
            FN_FIND_IN_MAP => {
                let [map_name, top_level_key, second_level_key] = args(name, arg)?;
                Intrinsic::FindInMap {
                    map_name: Value::try_from(map_name)?,
                    top_level_key: Value::try_from(top_level_key)?,
                    second_level_key: Value::try_from(second_level_key)?,
                }
            }
            FN_EQUALS => {
                let [left, right] = args(name, arg)?;
                Intrinsic::Equals(Value::try_from(left)?, Value::try_from(right)?)
            }
            FN_BASE64 => Intrinsic::Base64(Value::try_from(arg)?),
            FN_GET_AZS => Intrinsic::GetAzs(Value::try_from(arg)?),
            FN_IF => {
                let [condition, if_true, if_false] = args(name, arg)?;
                Intrinsic::If {
                    condition: expect_string(name, condition)?,
                    if_true: Value::try_from(if_true)?,
                    if_false: Value::try_from(if_false)?,
                }
            }
            FN_NOT => {
                let [condition] = args(name, arg)?;
                Intrinsic::Not(Value::try_from(condition)?)
            }
            FN_AND => Intrinsic::And(list(name, arg)?),
            FN_OR => Intrinsic::Or(list(name, arg)?),
            other => return Err(ValueError::UnknownFunction(other.to_string())),
        };
        Ok(intrinsic)
    }
}

fn expect_string(function: &str, value: serde_json::Value) -> Result<String, ValueError> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        _ => Err(ValueError::invalid(function, "a string")),
    }
}

fn args<const N: usize>(
    function: &str,
    value: serde_json::Value,
) -> Result<[serde_json::Value; N], ValueError> {
    let serde_json::Value::Array(items) = value else {
        return Err(ValueError::invalid(function, "a list"));
    };
    <[serde_json::Value; N]>::try_from(items).map_err(|items| ValueError::Arity {
        function: function.to_string(),
        expected: N,
        found: items.len(),
    })
}

fn list(function: &str, value: serde_json::Value) -> Result<Vec<Value>, ValueError> {
    let serde_json::Value::Array(items) = value else {
        return Err(ValueError::invalid(function, "a list"));
    };
    items.into_iter().map(Value::try_from).collect()
}

fn number(n: Number) -> Result<Value, ValueError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    if let Some(u) = n.as_u64() {
        return Err(ValueError::IntegerOutOfRange(u));
    }
    Ok(Value::Double(n.as_f64().unwrap_or(f64::NAN)))
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        match raw {
            serde_json::Value::Null => Err(ValueError::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => number(n),
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(object) => Intrinsic::from_object(object).map(Value::from),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(raw).map_err(de::Error::custom)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::List(items) => items.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let name = self.name();
        match self {
            Intrinsic::Ref(id) | Intrinsic::Condition(id) => map.serialize_entry(name, id)?,
            Intrinsic::GetAtt {
                logical_id,
                attribute,
            } => map.serialize_entry(name, &(logical_id, attribute))?,
            Intrinsic::Join { delimiter, values } => {
                map.serialize_entry(name, &(delimiter, values))?
            }
            Intrinsic::Sub {
                template,
                variables: None,
            } => map.serialize_entry(name, template)?,
            Intrinsic::Sub {
                template,
                variables: Some(variables),
            } => map.serialize_entry(name, &(template, variables))?,
            Intrinsic::ImportValue(v) | Intrinsic::Base64(v) | Intrinsic::GetAzs(v) => {
                map.serialize_entry(name, v)?
            }
            Intrinsic::Select { index, list } => map.serialize_entry(name, &(index, list))?,
            Intrinsic::Split { delimiter, source } => {
                map.serialize_entry(name, &(delimiter, source))?
            }
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => map.serialize_entry(name, &(ip_block, count, cidr_bits))?,
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => map.serialize_entry(name, &(map_name, top_level_key, second_level_key))?,
            Intrinsic::Equals(left, right) => map.serialize_entry(name, &(left, right))?,
            Intrinsic::If {
                condition,
                if_true,
                if_false,
            } => map.serialize_entry(name, &(condition, if_true, if_false))?,
            Intrinsic::Not(condition) => {
                map.serialize_entry(name, std::slice::from_ref(condition))?
            }
            Intrinsic::And(conditions) | Intrinsic::Or(conditions) => {
                map.serialize_entry(name, conditions)?
            }
        }
        map.end()
    }
}

impl Value {
    /// `{"Ref": logical_id}`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into()).into()
    }

    /// `{"Fn::GetAtt": [logical_id, attribute]}`
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<Value>) -> Self {
        Intrinsic::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
        .into()
    }

    /// `{"Fn::Join": [delimiter, values]}`
    pub fn join(delimiter: impl Into<String>, values: impl Into<Value>) -> Self {
        Intrinsic::Join {
            delimiter: delimiter.into(),
            values: values.into(),
        }
        .into()
    }

    /// `{"Fn::Sub": template}`
    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: None,
        }
        .into()
    }

    /// `{"Fn::Sub": [template, variables]}`
    pub fn sub_with(template: impl Into<String>, variables: BTreeMap<String, Value>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: Some(variables),
        }
        .into()
    }

    pub fn import_value(name: impl Into<Value>) -> Self {
        Intrinsic::ImportValue(name.into()).into()
    }

    pub fn select(index: impl Into<Value>, list: impl Into<Value>) -> Self {
        Intrinsic::Select {
            index: index.into(),
            list: list.into(),
        }
        .into()
    }

    pub fn split(delimiter: impl Into<String>, source: impl Into<Value>) -> Self {
        Intrinsic::Split {
            delimiter: delimiter.into(),
            source: source.into(),
        }
        .into()
    }

    pub fn cidr(
        ip_block: impl Into<Value>,
        count: impl Into<Value>,
        cidr_bits: impl Into<Value>,
    ) -> Self {
        Intrinsic::Cidr {
            ip_block: ip_block.into(),
            count: count.into(),
            cidr_bits: cidr_bits.into(),
        }
        .into()
    }

    pub fn find_in_map(
        map_name: impl Into<Value>,
        top_level_key: impl Into<Value>,
        second_level_key: impl Into<Value>,
    ) -> Self {
        Intrinsic::FindInMap {
            map_name: map_name.into(),
            top_level_key: top_level_key.into(),
            second_level_key: second_level_key.into(),
        }
        .into()
    }

    pub fn equals(left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Intrinsic::Equals(left.into(), right.into()).into()
    }

    pub fn base64(value: impl Into<Value>) -> Self {
        Intrinsic::Base64(value.into()).into()
    }

    /// `{"Fn::GetAZs": region}`; an empty region means the stack's region
    pub fn get_azs(region: impl Into<Value>) -> Self {
        Intrinsic::GetAzs(region.into()).into()
    }

    pub fn if_then_else(
        condition: impl Into<String>,
        if_true: impl Into<Value>,
        if_false: impl Into<Value>,
    ) -> Self {
        Intrinsic::If {
            condition: condition.into(),
            if_true: if_true.into(),
            if_false: if_false.into(),
        }
        .into()
    }

    pub fn not(condition: impl Into<Value>) -> Self {
        Intrinsic::Not(condition.into()).into()
    }

    pub fn and(conditions: Vec<Value>) -> Self {
        Intrinsic::And(conditions).into()
    }

    pub fn or(conditions: Vec<Value>) -> Self {
        Intrinsic::Or(conditions).into()
    }

    /// `{"Condition": name}`
    pub fn condition(name: impl Into<String>) -> Self {
        Intrinsic::Condition(name.into()).into()
    }

    /// Build a literal list from anything convertible to values
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }
}

impl From<Intrinsic> for Value {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(Box::new(intrinsic))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::Bool(b) => write!(f, "{}", b),
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}
