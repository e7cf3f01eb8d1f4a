//! Generate and check command implementation

use crate::codegen::{MofGenerator, MofOutput};
use anyhow::{Context, Result};
use mofgen_core::{CollectingSink, Diagnostic, GeneratorConfig, Interface};
use mofgen_logging::TracingSink;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Values given on the command line that override the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub interface_prefix: Option<String>,
    pub cim_prefix: Option<String>,
    pub output_base: Option<String>,
    pub log_level: Option<String>,
}

/// Result of a generation run
#[derive(Debug)]
pub struct Generation {
    pub output: MofOutput,
    /// Diagnostics in report order
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the effective configuration from an optional file plus overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration: {path:?}"))?,
        None => GeneratorConfig::default(),
    };

    if let Some(prefix) = overrides.interface_prefix {
        config.interface_prefix = prefix;
    }
    if let Some(prefix) = overrides.cim_prefix {
        config.cim_prefix = prefix;
    }
    if let Some(base) = overrides.output_base {
        config.output_base = Some(base);
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Load a JSON interface model and run post-processing on every interface
pub fn load_interfaces(path: &Path, interface_prefix: &str) -> Result<Vec<Interface>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read interface model: {path:?}"))?;

    parse_interfaces(&content, interface_prefix)
        .with_context(|| format!("Failed to parse interface model: {path:?}"))
}

/// Parse a JSON array of interfaces and run post-processing on each
pub fn parse_interfaces(content: &str, interface_prefix: &str) -> Result<Vec<Interface>> {
    let mut interfaces: Vec<Interface> = serde_json::from_str(content)?;
    for interface in &mut interfaces {
        interface.post_process(interface_prefix);
    }
    Ok(interfaces)
}

/// Generate MOF, logging every diagnostic and keeping a copy of each
pub fn generate(interfaces: &[Interface], config: &GeneratorConfig) -> Generation {
    let collected = CollectingSink::new();
    let sink = (TracingSink, &collected);

    let output = MofGenerator::new(config, &sink).generate(interfaces);

    let report = &output.report;
    tracing::info!(
        classes = report.classes,
        properties = report.properties,
        methods = report.methods,
        associations = report.associations,
        setting_associations = report.setting_associations,
        skipped = report.skipped,
        "generation finished"
    );

    Generation {
        output,
        diagnostics: collected.drain(),
    }
}

/// Paths of the schema and to-do files for an output base name
pub fn output_paths(base: &str) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{base}.mof")),
        PathBuf::from(format!("{base}-todo.mof")),
    )
}

/// Write the schema and to-do buffers
///
/// With a base name both go to files; otherwise the schema goes to stdout and
/// the to-do stubs to stderr.
pub fn write_output(output: &MofOutput, base: Option<&str>) -> Result<()> {
    match base {
        Some(base) => {
            let (schema_path, todo_path) = output_paths(base);
            fs::write(&schema_path, &output.schema)
                .with_context(|| format!("Failed to write schema: {schema_path:?}"))?;
            fs::write(&todo_path, &output.todo)
                .with_context(|| format!("Failed to write to-do stubs: {todo_path:?}"))?;
            tracing::info!(schema = ?schema_path, todo = ?todo_path, "wrote output");
        }
        None => {
            std::io::stdout()
                .write_all(output.schema.as_bytes())
                .context("Failed to write schema to stdout")?;
            std::io::stderr()
                .write_all(output.todo.as_bytes())
                .context("Failed to write to-do stubs to stderr")?;
        }
    }
    Ok(())
}

/// `mofgen generate`: load, generate and write
pub fn run(input: &Path, config: &GeneratorConfig) -> Result<Generation> {
    let interfaces = load_interfaces(input, &config.interface_prefix)?;
    let generation = generate(&interfaces, config);
    write_output(&generation.output, config.output_base.as_deref())?;
    Ok(generation)
}

/// `mofgen check`: load and generate without writing anything
pub fn check(input: &Path, config: &GeneratorConfig) -> Result<Generation> {
    let interfaces = load_interfaces(input, &config.interface_prefix)?;
    Ok(generate(&interfaces, config))
}
