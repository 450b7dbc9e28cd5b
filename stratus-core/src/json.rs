//! Untyped JSON documents for properties without a fixed schema

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A free-form JSON document (policy documents, `PrimitiveType: Json`, polymorphic properties)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub serde_json::Value);

impl Json {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Serialize any value into an untyped document
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self)
    }

    /// Decode the document into a concrete type
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<Json> for serde_json::Value {
    fn from(json: Json) -> Self {
        json.0
    }
}

impl Deref for Json {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Json {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_is_transparent() {
        let doc = json!({"Version": "2012-10-17", "Statement": []});
        let parsed: Json = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(parsed["Version"], "2012-10-17");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), doc);
    }

    #[test]
    fn test_to_typed() {
        #[derive(Deserialize)]
        struct Policy {
            #[serde(rename = "Version")]
            version: String,
        }

        let doc = Json::new(json!({"Version": "2012-10-17"}));
        let policy: Policy = doc.to_typed().unwrap();
        assert_eq!(policy.version, "2012-10-17");
    }
}
