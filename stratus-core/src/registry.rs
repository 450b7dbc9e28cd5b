//! Registry of typed resource decoders, keyed by CloudFormation type name

use std::collections::HashMap;

use log::{debug, warn};

use crate::dynamic::{CustomResource, DynResource};
use crate::error::{TemplateError, TemplateResult};
use crate::resource::{Resource, ResourceProperties};

type DecodeFn = fn(serde_json::Value) -> Result<Box<dyn DynResource>, serde_json::Error>;

fn decode_typed<P: ResourceProperties>(
    raw: serde_json::Value,
) -> Result<Box<dyn DynResource>, serde_json::Error> {
    let resource: Resource<P> = serde_json::from_value(raw)?;
    Ok(Box::new(resource))
}

/// Maps type names to decoders for their `Resource<P>`
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P: ResourceProperties>(&mut self) -> &mut Self {
        self.decoders.insert(P::TYPE_NAME, decode_typed::<P>);
        self
    }

    pub fn with<P: ResourceProperties>(mut self) -> Self {
        self.register::<P>();
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.decoders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decode one resource envelope
    ///
    /// Registered types decode into their typed `Resource<P>`; anything else
    /// becomes a [`CustomResource`].
    pub fn decode(
        &self,
        logical_id: &str,
        raw: serde_json::Value,
    ) -> TemplateResult<Box<dyn DynResource>> {
        let type_name = raw
            .get("Type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| TemplateError::MissingType(logical_id.to_string()))?
            .to_string();

        let invalid = |source| TemplateError::InvalidResource {
            logical_id: logical_id.to_string(),
            type_name: type_name.clone(),
            source,
        };

        match self.decoders.get(type_name.as_str()) {
            Some(decode) => {
                debug!("Decoding {} as {}", logical_id, type_name);
                decode(raw).map_err(invalid)
            }
            None => {
                if !CustomResource::is_custom_type(&type_name) {
                    warn!(
                        "Unknown resource type {} for {}, keeping it untyped",
                        type_name, logical_id
                    );
                }
                let custom: CustomResource = serde_json::from_value(raw).map_err(invalid)?;
                Ok(Box::new(custom))
            }
        }
    }
}
