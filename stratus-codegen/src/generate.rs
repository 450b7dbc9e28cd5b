//! Rust source generation
//!
//! One file per service. Resources are emitted at the top of the file and
//! their property types in a submodule named after the resource:
//!
//! ```text
//! sns.rs
//!   pub struct Topic { pub subscription: Option<Vec<topic::Subscription>>, .. }
//!   pub mod topic { pub struct Subscription { .. } }
//! ```
//!
//! `mod.rs` declares the service modules and a `register_all` function.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Result, bail};
use log::{debug, info};

use crate::naming::{
    field_ident, module_ident, property_short_name, service_module, split_type_name, type_ident,
};
use crate::spec::{Property, Specification};
use crate::types::{classify, reaches};

const INDENT: &str = "    ";

/// Selects which resource types to generate; empty means everything
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Service names such as "SNS" or "EC2", case-insensitive
    pub services: Vec<String>,
    pub type_names: Vec<String>,
}

impl Filter {
    pub fn matches(&self, type_name: &str) -> bool {
        let service_ok = self.services.is_empty()
            || split_type_name(type_name)
                .map(|(_, service, _)| self.services.iter().any(|s| s.eq_ignore_ascii_case(service)))
                .unwrap_or(false);
        let type_ok = self.type_names.is_empty() || self.type_names.iter().any(|t| t == type_name);
        service_ok && type_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

/// Generate every service file plus `mod.rs`
pub fn generate(spec: &Specification, filter: &Filter) -> Result<Vec<GeneratedFile>> {
    let mut services: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for type_name in spec.resource_types.keys() {
        if filter.matches(type_name) {
            services
                .entry(service_module(type_name)?)
                .or_default()
                .push(type_name);
        }
    }
    if services.is_empty() {
        bail!("No resource types matched the filter");
    }

    let version = spec
        .resource_specification_version
        .as_deref()
        .unwrap_or("unknown");
    info!(
        "Generating {} services from specification {}",
        services.len(),
        version
    );

    let mut files = Vec::new();
    let mut registrations = Vec::new();
    for (module, type_names) in &services {
        let (_, service, _) = split_type_name(type_names[0])?;
        let mut code = header(&format!("{} resource types", service), version);
        code.push_str("#![allow(unused_imports)]\n\n");
        code.push_str("use std::collections::BTreeMap;\n\n");
        code.push_str("use serde::{Deserialize, Serialize};\n");
        code.push_str(
            "use stratus_core::{CloudFormationType, Json, ResourceProperties, Tag, Value};\n",
        );

        for type_name in type_names {
            debug!("Generating {}", type_name);
            let (_, _, resource) = split_type_name(type_name)?;
            code.push('\n');
            code.push_str(&generate_resource(spec, type_name)?);
            registrations.push(format!("{}::{}", module, type_ident(resource)));
        }

        files.push(GeneratedFile {
            name: format!("{}.rs", module),
            contents: code,
        });
    }

    files.push(GeneratedFile {
        name: "mod.rs".to_string(),
        contents: generate_mod(services.keys(), &registrations, version),
    });
    Ok(files)
}

fn header(title: &str, version: &str) -> String {
    format!(
        r#"//! {}
//!
//! Auto-generated from CloudFormation resource specification {}
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

"#,
        title, version
    )
}

fn generate_mod<'a>(
    modules: impl Iterator<Item = &'a String>,
    registrations: &[String],
    version: &str,
) -> String {
    let mut code = header("Generated CloudFormation resource types", version);
    code.push_str("use stratus_core::ResourceRegistry;\n\n");
    for module in modules {
        code.push_str(&format!("pub mod {};\n", module));
    }
    code.push_str("\n/// Register every generated resource type\n");
    code.push_str("pub fn register_all(registry: &mut ResourceRegistry) {\n");
    code.push_str("    registry");
    for registration in registrations {
        code.push_str(&format!("\n        .register::<{}>()", registration));
    }
    code.push_str(";\n}\n");
    code
}

/// A resource struct followed by its property-type submodule
fn generate_resource(spec: &Specification, type_name: &str) -> Result<String> {
    let Some(resource_type) = spec.resource_types.get(type_name) else {
        bail!("Unknown resource type: {}", type_name);
    };
    let (_, _, resource) = split_type_name(type_name)?;
    let module = module_ident(resource);
    let property_types: Vec<_> = spec.property_types_of(type_name).collect();

    let mut code = render_struct(
        &StructSpec {
            spec,
            owner: type_name,
            full_name: type_name,
            ident: type_ident(resource),
            documentation: resource_type.documentation.as_deref(),
            properties: &resource_type.properties,
            module: Some(module.as_str()),
            is_resource: true,
        },
        "",
    )?;

    if !property_types.is_empty() {
        code.push_str(&format!("\npub mod {} {{\n{}use super::*;\n", module, INDENT));
        for (full_name, property_type) in property_types {
            code.push('\n');
            code.push_str(&render_struct(
                &StructSpec {
                    spec,
                    owner: type_name,
                    full_name,
                    ident: type_ident(property_short_name(full_name)),
                    documentation: property_type.documentation.as_deref(),
                    properties: &property_type.properties,
                    module: None,
                    is_resource: false,
                },
                INDENT,
            )?);
        }
        code.push_str("}\n");
    }

    Ok(code)
}

struct StructSpec<'a> {
    spec: &'a Specification,
    owner: &'a str,
    full_name: &'a str,
    ident: String,
    documentation: Option<&'a str>,
    properties: &'a BTreeMap<String, Property>,
    /// Path prefix for property types referenced from this struct
    module: Option<&'a str>,
    is_resource: bool,
}

fn render_struct(def: &StructSpec<'_>, indent: &str) -> Result<String> {
    let mut code = String::new();
    code.push_str(&format!("{}/// {}\n", indent, def.full_name));
    if let Some(documentation) = def.documentation {
        code.push_str(&format!("{}///\n", indent));
        code.push_str(&format!(
            "{}/// See: {}\n",
            indent,
            documentation.replace('\n', " ")
        ));
    }
    code.push_str(&format!(
        "{}#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n",
        indent
    ));
    code.push_str(&format!("{}#[serde(deny_unknown_fields)]\n", indent));

    if def.properties.is_empty() {
        code.push_str(&format!("{}pub struct {} {{}}\n", indent, def.ident));
    } else {
        code.push_str(&format!("{}pub struct {} {{\n", indent, def.ident));
        let mut seen = HashSet::new();
        for (name, property) in def.properties {
            let field = field_ident(name);
            if !seen.insert(field.clone()) {
                bail!("Duplicate field name {} in {}", field, def.full_name);
            }

            let field_type = classify(def.spec, def.owner, property);
            let boxed = !def.is_resource
                && field_type
                    .singular_target()
                    .is_some_and(|target| reaches(def.spec, def.owner, target, def.full_name));
            let rust_type = field_type.render(def.module, boxed);

            code.push_str(&format!("{}{}/// {}\n", indent, INDENT, field_doc(name, property)));
            code.push_str(&format!(
                "{}{}#[serde(rename = \"{}\", skip_serializing_if = \"Option::is_none\")]\n",
                indent, INDENT, name
            ));
            code.push_str(&format!(
                "{}{}pub {}: Option<{}>,\n",
                indent, INDENT, field, rust_type
            ));
        }
        code.push_str(&format!("{}}}\n", indent));
    }

    code.push('\n');
    code.push_str(&format!(
        "{}impl CloudFormationType for {} {{\n",
        indent, def.ident
    ));
    code.push_str(&format!(
        "{}{}const TYPE_NAME: &'static str = \"{}\";\n",
        indent, INDENT, def.full_name
    ));
    code.push_str(&format!("{}}}\n", indent));

    if def.is_resource {
        code.push('\n');
        code.push_str(&format!(
            "{}impl ResourceProperties for {} {{}}\n",
            indent, def.ident
        ));
    }

    Ok(code)
}

fn field_doc(name: &str, property: &Property) -> String {
    match &property.update_type {
        Some(update_type) => format!(
            "{} (required: {}, update type: {})",
            name, property.required, update_type
        ),
        None => format!("{} (required: {})", name, property.required),
    }
}
