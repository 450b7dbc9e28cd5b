//! Stratus Core
//!
//! CloudFormation template model: intrinsic values, the generic resource
//! envelope, a decoder registry and JSON/YAML template I/O

pub mod dynamic;
pub mod error;
pub mod format;
pub mod json;
pub mod policies;
pub mod pseudo;
pub mod registry;
pub mod resource;
pub mod tag;
pub mod template;
pub mod validate;
pub mod value;

pub use dynamic::{CustomResource, DynResource};
pub use error::{TemplateError, TemplateResult};
pub use format::{EncodeConfig, TemplateFormat};
pub use json::Json;
pub use policies::{CreationPolicy, DeletionPolicy, UpdatePolicy, UpdateReplacePolicy};
pub use registry::ResourceRegistry;
pub use resource::{CloudFormationType, Resource, ResourceAttributes, ResourceProperties};
pub use tag::Tag;
pub use template::{Output, Parameter, Template, Transform};
pub use validate::ValidationError;
pub use value::{Intrinsic, Value, ValueError};
