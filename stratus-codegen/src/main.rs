//! CloudFormation Resource Specification to Stratus Code Generator
//!
//! Usage:
//!   # Generate from stdin
//!   curl -s https://d1uauaxba7bl26.cloudfront.net/latest/gzip/CloudFormationResourceSpecification.json \
//!     | gunzip | stratus-codegen --service SNS --output src/generated
//!
//!   # Generate from file
//!   stratus-codegen --spec specs/resource-specification.json --output src/generated

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stratus_codegen::{Filter, Specification, generate};

#[derive(Parser, Debug)]
#[command(name = "stratus-codegen")]
#[command(about = "Generate Stratus resource types from the CloudFormation resource specification")]
struct Args {
    /// Resource specification file (reads from stdin if not specified)
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output directory (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Only generate these services (e.g., SNS, EC2)
    #[arg(long)]
    service: Vec<String>,

    /// Only generate these resource types (e.g., AWS::SNS::Topic)
    #[arg(long)]
    type_name: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spec_json = if let Some(path) = &args.spec {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let spec = Specification::from_json(&spec_json)
        .context("Failed to parse CloudFormation resource specification")?;

    let filter = Filter {
        services: args.service,
        type_names: args.type_name,
    };
    let files = generate(&spec, &filter)?;

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        for file in &files {
            let path = dir.join(&file.name);
            std::fs::write(&path, &file.contents)
                .with_context(|| format!("Failed to write to: {}", path.display()))?;
            eprintln!("Generated: {}", path.display());
        }
    } else {
        for file in &files {
            println!("// ===== {} =====", file.name);
            println!("{}", file.contents);
        }
    }

    Ok(())
}
