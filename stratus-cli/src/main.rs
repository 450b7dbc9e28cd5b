use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use log::debug;
use similar::{ChangeTag, TextDiff};

use stratus_core::{EncodeConfig, Template, TemplateFormat};

#[derive(Parser)]
#[command(name = "stratus")]
#[command(about = "Inspect, validate and convert CloudFormation templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a template and check its references
    Validate {
        /// Path to a .json, .template, .yaml or .yml file
        file: PathBuf,
    },
    /// Convert a template between JSON and YAML
    Convert {
        /// Path to the source template
        file: PathBuf,

        /// Output format (json or yaml)
        #[arg(long, short)]
        format: TemplateFormat,

        /// Output file (writes to stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Indentation width for JSON output
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Rewrite template files in canonical form
    Fmt {
        /// Path to a template file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Check if files are formatted (don't modify)
        #[arg(long, short)]
        check: bool,

        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,

        /// Recursively format all templates in directory
        #[arg(long, short)]
        recursive: bool,

        /// Indent JSON with tabs
        #[arg(long)]
        tabs: bool,
    },
    /// List the resources declared in a template
    Resources {
        /// Path to the template
        file: PathBuf,
    },
    /// List the resource types with generated records
    Types,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Convert {
            file,
            format,
            output,
            indent,
        } => run_convert(&file, format, output.as_deref(), indent),
        Commands::Fmt {
            path,
            check,
            diff,
            recursive,
            tabs,
        } => run_fmt(&path, check, diff, recursive, tabs),
        Commands::Resources { file } => run_resources(&file),
        Commands::Types => run_types(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "stratus", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_template(file: &Path) -> Result<Template, String> {
    debug!("Loading {}", file.display());
    stratus_resources::open(file).map_err(|e| format!("Failed to load {}: {}", file.display(), e))
}

fn run_validate(file: &Path) -> Result<(), String> {
    let template = load_template(file)?;

    println!("{}", "Validating...".cyan());

    if let Err(errors) = template.validate() {
        for error in &errors {
            println!("  {} {}", "•".red(), error);
        }
        return Err(format!("{} reference error(s) found", errors.len()));
    }

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully.",
            template.resources.len()
        )
        .green()
        .bold()
    );

    for (logical_id, resource) in template.resources.iter() {
        println!("  • {} ({})", logical_id, resource.type_name());
    }

    Ok(())
}

fn run_convert(
    file: &Path,
    format: TemplateFormat,
    output: Option<&Path>,
    indent: usize,
) -> Result<(), String> {
    let template = load_template(file)?;
    let config = EncodeConfig {
        indent_size: indent,
        ..Default::default()
    };
    let converted = encode(&template, format, &config)?;

    match output {
        Some(path) => {
            fs::write(path, &converted)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("{} {}", "Converted:".green(), path.display());
        }
        None => print!("{}", converted),
    }
    Ok(())
}

fn encode(template: &Template, format: TemplateFormat, config: &EncodeConfig) -> Result<String, String> {
    let encoded = match format {
        TemplateFormat::Json => template.to_json_with(config),
        TemplateFormat::Yaml => template.to_yaml(),
    };
    encoded.map_err(|e| format!("Failed to encode template: {}", e))
}

/// Parse and re-encode a template in its own format
fn format_template(path: &Path, content: &str, config: &EncodeConfig) -> Result<String, String> {
    let format = TemplateFormat::from_path(path).map_err(|e| e.to_string())?;
    let template = Template::parse(content, format, &stratus_resources::registry())
        .map_err(|e| e.to_string())?;
    encode(&template, format, config)
}

fn run_fmt(path: &Path, check: bool, show_diff: bool, recursive: bool, tabs: bool) -> Result<(), String> {
    let config = EncodeConfig {
        use_tabs: tabs,
        ..Default::default()
    };

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        let mut files = Vec::new();
        collect_template_files(path, recursive, &mut files)?;
        files.sort();
        files
    };

    if files.is_empty() {
        println!("{}", "No template files found.".yellow());
        return Ok(());
    }

    let mut needs_formatting = Vec::new();
    let mut errors = Vec::new();

    for file in &files {
        let content = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

        match format_template(file, &content, &config) {
            Ok(formatted) => {
                if content != formatted {
                    if show_diff {
                        print_diff(file, &content, &formatted);
                    }

                    if !check {
                        fs::write(file, &formatted)
                            .map_err(|e| format!("Failed to write {}: {}", file.display(), e))?;
                        println!("{} {}", "Formatted:".green(), file.display());
                    }
                    needs_formatting.push(file.clone());
                }
            }
            Err(e) => {
                errors.push((file.clone(), e));
            }
        }
    }

    for (file, err) in &errors {
        eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
    }

    if check {
        if needs_formatting.is_empty() && errors.is_empty() {
            println!("{}", "All files are properly formatted.".green());
            Ok(())
        } else {
            if !needs_formatting.is_empty() {
                println!("{}", "The following files need formatting:".yellow());
                for file in &needs_formatting {
                    println!("  {}", file.display());
                }
            }
            Err("Some files are not properly formatted".to_string())
        }
    } else if !errors.is_empty() {
        Err("Some files had formatting errors".to_string())
    } else {
        let count = needs_formatting.len();
        if count > 0 {
            println!("{}", format!("Formatted {} file(s).", count).green().bold());
        } else {
            println!("{}", "All files are already properly formatted.".green());
        }
        Ok(())
    }
}

fn collect_template_files(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            if !recursive {
                continue;
            }
            // Skip hidden directories and build output
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if !name.starts_with('.') && name != "target" {
                collect_template_files(&path, recursive, files)?;
            }
        } else if TemplateFormat::from_path(&path).is_ok() {
            files.push(path);
        }
    }

    Ok(())
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}

fn run_resources(file: &Path) -> Result<(), String> {
    let template = load_template(file)?;

    if template.resources.is_empty() {
        println!("{}", "No resources declared.".yellow());
        return Ok(());
    }

    for (logical_id, resource) in template.resources.iter() {
        let kind = if resource.as_custom().is_some() {
            "untyped".yellow()
        } else {
            "typed".green()
        };
        println!("{} {} [{}]", logical_id.bold(), resource.type_name(), kind);

        let attributes = resource.attributes();
        if !attributes.depends_on.is_empty() {
            println!("    depends on: {}", attributes.depends_on.join(", "));
        }
        if let Some(condition) = &attributes.condition {
            println!("    condition: {}", condition);
        }
        if let Some(policy) = &attributes.deletion_policy {
            println!("    deletion policy: {:?}", policy);
        }
    }

    Ok(())
}

fn run_types() -> Result<(), String> {
    let registry = stratus_resources::registry();
    println!(
        "{}",
        format!("{} resource types:", registry.len()).cyan()
    );
    for type_name in registry.type_names() {
        println!("  • {}", type_name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = r#"{"Resources": {"T": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": "t"}}}}"#;

    #[test]
    fn test_format_template_json() {
        let formatted =
            format_template(Path::new("stack.json"), TOPIC, &EncodeConfig::default()).unwrap();
        assert_eq!(
            formatted,
            "{\n  \"Resources\": {\n    \"T\": {\n      \"Type\": \"AWS::SNS::Topic\",\n      \"Properties\": {\n        \"TopicName\": \"t\"\n      }\n    }\n  }\n}\n"
        );
        let again =
            format_template(Path::new("stack.json"), &formatted, &EncodeConfig::default()).unwrap();
        assert_eq!(again, formatted);
    }

    #[test]
    fn test_fmt_keeps_unrecognized_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.json");
        fs::write(
            &path,
            r#"{"Resources": {"T": {"Type": "AWS::SNS::Topic"}}, "Hooks": {"CodeDeployBlueGreenHook": {"Type": "AWS::CodeDeploy::BlueGreen", "Properties": {"ServiceRole": "DeployRole"}}}}"#,
        )
        .unwrap();

        run_fmt(&path, false, false, false, false).unwrap();
        let formatted = fs::read_to_string(&path).unwrap();
        assert!(formatted.contains("\"Hooks\""));
        assert!(formatted.contains("\"ServiceRole\": \"DeployRole\""));

        // A second pass is a no-op
        run_fmt(&path, true, false, false, false).unwrap();
    }

    #[test]
    fn test_format_template_rejects_unknown_extension() {
        assert!(format_template(Path::new("stack.txt"), TOPIC, &EncodeConfig::default()).is_err());
    }

    #[test]
    fn test_collect_template_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), TOPIC).unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.yaml"), "Resources: {}\n").unwrap();

        let mut flat = Vec::new();
        collect_template_files(dir.path(), false, &mut flat).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.json")]);

        let mut all = Vec::new();
        collect_template_files(dir.path(), true, &mut all).unwrap();
        all.sort();
        assert_eq!(
            all,
            vec![dir.path().join("a.json"), dir.path().join("nested").join("b.yaml")]
        );
    }

    #[test]
    fn test_convert_json_to_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("stack.json");
        let target = dir.path().join("stack.yaml");
        fs::write(&source, TOPIC).unwrap();

        run_convert(&source, TemplateFormat::Yaml, Some(&target), 2).unwrap();
        let converted = stratus_resources::open(&target).unwrap();
        assert!(converted.resource::<stratus_resources::sns::Topic>("T").is_ok());
    }
}
