use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use sinter_format::{parse_any, value_to_xml, xml_to_value, ParseMode};
use sinter_models::{registry, FieldDescriptor, TypeInfo, TypeRef};
use sinter_validator::{Preset, ValidationOutcome, Validator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sinter",
    about = "Validate, convert and describe FHIR R4 conformance resources",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Log validation and parsing details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate resources (JSON or XML) and report issues.
    Validate {
        /// Resource files (or "-" for stdin).
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Validation preset.
        #[arg(short, long, value_enum, conflicts_with = "config")]
        preset: Option<PresetArg>,
        /// YAML validator configuration.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Report format.
        #[arg(short, long, value_enum, default_value = "text")]
        output: ReportFormat,
    },

    /// Convert a resource between the JSON and XML formats.
    Convert {
        /// Resource file (or "-" for stdin). The input format is detected.
        input: PathBuf,
        /// Target format; defaults to the other format.
        #[arg(short, long, value_enum)]
        to: Option<WireFormat>,
        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reject unknown elements and conflicting choice alternatives.
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
        /// Pretty-print JSON output.
        #[arg(long, action = ArgAction::SetTrue)]
        pretty: bool,
    },

    /// Show the metadata of a type, or list the modeled resources.
    Describe {
        /// Type name (`Consent`) or element path (`Consent.provision`).
        name: Option<String>,
        /// Describe a single field of the type.
        #[arg(short, long)]
        field: Option<String>,
        /// Emit JSON instead of a table.
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Ingestion,
    Authoring,
    Strict,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Ingestion => Preset::Ingestion,
            PresetArg::Authoring => Preset::Authoring,
            PresetArg::Strict => Preset::Strict,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    /// One OperationOutcome per input
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum WireFormat {
    Json,
    Xml,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            files,
            preset,
            config,
            output,
        } => run_validate(&files, preset, config.as_deref(), output),
        Commands::Convert {
            input,
            to,
            output,
            strict,
            pretty,
        } => {
            run_convert(&input, to, output.as_deref(), strict, pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Describe { name, field, json } => {
            run_describe(name.as_deref(), field.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn load_config(preset: Option<PresetArg>, config: Option<&Path>) -> Result<ValidatorConfig> {
    match config {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            ValidatorConfig::from_yaml(&yaml)
                .with_context(|| format!("Invalid validator config in '{}'", path.display()))
        }
        None => Ok(ValidatorConfig::preset(
            preset.map(Preset::from).unwrap_or(Preset::Authoring),
        )),
    }
}

fn run_validate(
    files: &[PathBuf],
    preset: Option<PresetArg>,
    config: Option<&Path>,
    output: ReportFormat,
) -> Result<ExitCode> {
    let config = load_config(preset, config)?;
    let validator = Validator::from_config(&config).context("Invalid validator configuration")?;

    let mut all_valid = true;
    for path in files {
        let (content, format) = read_input(path)?;
        let outcome = match format {
            WireFormat::Json => {
                let value: Value = serde_json::from_str(&content)
                    .with_context(|| format!("'{}' is not valid JSON", path.display()))?;
                validator.validate(&value)
            }
            WireFormat::Xml => validator
                .validate_xml(&content)
                .with_context(|| format!("'{}' is not valid FHIR XML", path.display()))?,
        };
        all_valid &= outcome.valid;

        match output {
            ReportFormat::Text => print_text_report(path, &outcome),
            ReportFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&outcome.to_operation_outcome())?
            ),
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text_report(path: &Path, outcome: &ValidationOutcome) {
    let status = if outcome.valid { "valid" } else { "INVALID" };
    println!(
        "{}: {} ({} errors, {} warnings)",
        path.display(),
        status,
        outcome.error_count(),
        outcome.warning_count()
    );
    for issue in &outcome.issues {
        println!(
            "  {:<11} {:<13} {} @ {}",
            issue.severity,
            issue.code,
            issue.diagnostics,
            issue.location.as_deref().unwrap_or("-")
        );
    }
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

fn run_convert(
    input: &Path,
    to: Option<WireFormat>,
    output: Option<&Path>,
    strict: bool,
    pretty: bool,
) -> Result<()> {
    let (content, from) = read_input(input)?;
    let to = to.unwrap_or(match from {
        WireFormat::Json => WireFormat::Xml,
        WireFormat::Xml => WireFormat::Json,
    });
    tracing::debug!(?from, ?to, strict, "Converting {}", input.display());

    let value = match from {
        WireFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("'{}' is not valid JSON", input.display()))?,
        WireFormat::Xml => xml_to_value(&content)
            .with_context(|| format!("'{}' is not valid FHIR XML", input.display()))?,
    };

    let mode = if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let resource = parse_any(value, mode).context("Resource does not match the model")?;
    let value = resource.to_value().context("Failed to serialize resource")?;

    let rendered = match to {
        WireFormat::Json if pretty => serde_json::to_string_pretty(&value)?,
        WireFormat::Json => serde_json::to_string(&value)?,
        WireFormat::Xml => value_to_xml(&value).context("Failed to write XML")?,
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write to '{}'", path.display()))?;
            eprintln!("Wrote {:?} output to {}", to, path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Read a file or stdin and detect its wire format
fn read_input(path: &Path) -> Result<(String, WireFormat)> {
    let content = if path.to_string_lossy() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read resource from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read resource file '{}'", path.display()))?
    };

    let format = detect_format(&content);
    Ok((content, format))
}

fn detect_format(content: &str) -> WireFormat {
    if content.trim_start().starts_with('<') {
        WireFormat::Xml
    } else {
        WireFormat::Json
    }
}

// ---------------------------------------------------------------------------
// describe
// ---------------------------------------------------------------------------

fn run_describe(name: Option<&str>, field: Option<&str>, as_json: bool) -> Result<()> {
    let Some(name) = name else {
        let names: Vec<&str> = registry::resource_names().collect();
        if as_json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            for name in names {
                println!("{}", name);
            }
        }
        return Ok(());
    };

    let info = registry::type_info(name)
        .with_context(|| format!("Unknown type '{}'", name))?;

    if let Some(field_name) = field {
        let field = info
            .field(field_name)
            .with_context(|| format!("{} has no field '{}'", info.path, field_name))?;
        if as_json {
            println!("{}", serde_json::to_string_pretty(&field_json(info, field))?);
        } else {
            print_field_detail(info, field);
        }
        return Ok(());
    }

    if as_json {
        let fields: Vec<Value> = info.fields.iter().map(|f| field_json(info, f)).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "name": info.name,
                "path": info.path,
                "base": info.base,
                "url": info.url,
                "short": info.short,
                "fields": fields,
            }))?
        );
    } else {
        println!("{} ({}) - {}", info.path, info.base, info.short);
        for field in info.fields {
            println!(
                "  {:<24} {:<6} {:<40} {}",
                field.display_name(),
                field.cardinality.to_string(),
                type_list(field),
                field.short
            );
        }
    }
    Ok(())
}

fn print_field_detail(info: &TypeInfo, field: &FieldDescriptor) {
    println!("{}", info.path_of(field));
    println!("  short:       {}", field.short);
    println!("  cardinality: {}", field.cardinality);
    println!("  types:       {}", type_list(field));
    if field.is_choice() {
        println!("  wire keys:   {}", field.wire_keys().join(", "));
    }
    if field.is_modifier {
        println!("  modifier:    yes");
    }
    if let Some(binding) = field.binding {
        println!("  binding:     {} ({})", binding.value_set, binding.strength);
        for (system, code) in binding.codes() {
            println!("    {}#{}", system, code);
        }
    }
    if let Some(local) = field.local_ref {
        println!("  refers to:   {}.{}", local.target_path, local.key);
    }
}

fn field_json(info: &TypeInfo, field: &FieldDescriptor) -> Value {
    let mut out = json!({
        "path": info.path_of(field),
        "cardinality": field.cardinality.to_string(),
        "types": field.types.iter().map(type_label).collect::<Vec<_>>(),
        "modifier": field.is_modifier,
        "summary": field.is_summary,
        "short": field.short,
    });
    if let Some(binding) = field.binding {
        out["binding"] = json!({
            "strength": binding.strength.as_str(),
            "valueSet": binding.value_set,
            "codes": binding.codes().map(|(_, code)| code).collect::<Vec<_>>(),
        });
    }
    if let Some(local) = field.local_ref {
        out["localRef"] = json!(format!("{}.{}", local.target_path, local.key));
    }
    out
}

fn type_list(field: &FieldDescriptor) -> String {
    field
        .types
        .iter()
        .map(type_label)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `Reference(Patient|Group)`, backbone types by their record name
fn type_label(ty: &TypeRef) -> String {
    let base = match (ty.code, ty.type_info()) {
        ("BackboneElement" | "Element", Some(info)) => info.name.to_string(),
        (code, _) => code.to_string(),
    };
    if ty.target_profiles.is_empty() {
        return base;
    }
    let targets: Vec<&str> = ty
        .target_profiles
        .iter()
        .map(|p| p.rsplit('/').next().unwrap_or(p))
        .collect();
    format!("{}({})", base, targets.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn preset_and_config_conflict() {
        let result = Cli::try_parse_from([
            "sinter", "validate", "a.json", "--preset", "strict", "--config", "v.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn validate_accepts_several_files() {
        let cli = Cli::try_parse_from(["sinter", "-v", "validate", "a.json", "-", "-o", "json"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Validate { files, output, .. } => {
                assert_eq!(files.len(), 2);
                assert!(output == ReportFormat::Json);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn detects_wire_format() {
        assert_eq!(detect_format("  <Consent xmlns=\"http://hl7.org/fhir\"/>"), WireFormat::Xml);
        assert_eq!(detect_format("{\"resourceType\": \"Consent\"}"), WireFormat::Json);
    }

    #[test]
    fn labels_reference_and_backbone_types() {
        let consent = registry::type_info("Consent").unwrap();
        let patient = consent.field("patient").unwrap();
        assert_eq!(type_list(patient), "Reference(Patient)");

        let provision = consent.field("provision").unwrap();
        assert_eq!(type_list(provision), "ConsentProvision");
    }

    #[test]
    fn default_config_is_authoring() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config.preset, Some(Preset::Authoring));

        let config = load_config(Some(PresetArg::Ingestion), None).unwrap();
        assert_eq!(config.preset, Some(Preset::Ingestion));
    }
}
