//! CloudFormation Resource Specification to Rust code generator
//!
//! Reads the AWS resource specification JSON and emits one Rust module per
//! service, with strict optional-field records for every resource and
//! property type.

pub mod generate;
pub mod naming;
pub mod spec;
pub mod types;

pub use generate::{Filter, GeneratedFile, generate};
pub use spec::Specification;
