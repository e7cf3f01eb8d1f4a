//! mofgen CLI - MOF schema generator
//!
//! Commands:
//! - `mofgen generate` - Generate a MOF schema from a D-Bus interface model
//! - `mofgen check` - Validate a model and configuration without writing output

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mofgen_cli::generate::{self, ConfigOverrides, Generation};
use mofgen_core::GeneratorConfig;
use mofgen_logging::{DiagnosticCounter, init_logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mofgen")]
#[command(author, version, about = "Generate CIM MOF schemas from D-Bus interfaces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Interface model (JSON array of interfaces)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to mofgen.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix stripped from interface names
    #[arg(long)]
    interface_prefix: Option<String>,

    /// Prefix of generated class names
    #[arg(long)]
    cim_prefix: Option<String>,

    /// Log progress at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a MOF schema
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Base name of output files (<base>.mof, <base>-todo.mof); stdout when unset
        #[arg(short, long)]
        output: Option<String>,

        /// Fail if any warning was reported
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Validate a model and configuration without writing output
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            deny_warnings,
        } => {
            let config = load_config(&input, output)?;
            let generation = generate::run(&input.input, &config)?;

            let counter = DiagnosticCounter::global();
            if deny_warnings && (counter.has_warnings() || !generation.diagnostics.is_empty()) {
                anyhow::bail!(
                    "{} warning(s) reported and --deny-warnings is set",
                    counter.warnings().max(generation.diagnostics.len())
                );
            }
        }
        Commands::Check { input } => {
            let config = load_config(&input, None)?;
            let generation = generate::check(&input.input, &config)?;
            print_summary(&generation);
        }
    }

    Ok(())
}

/// Resolve configuration and install logging at its level
fn load_config(
    args: &InputArgs,
    output_base: Option<String>,
) -> anyhow::Result<GeneratorConfig> {
    let overrides = ConfigOverrides {
        interface_prefix: args.interface_prefix.clone(),
        cim_prefix: args.cim_prefix.clone(),
        output_base,
        log_level: args.verbose.then(|| "debug".to_string()),
    };

    let config = generate::resolve_config(args.config.as_deref(), overrides)?;
    let level = config.level().context("Invalid log level")?;
    init_logging(level);
    Ok(config)
}

fn print_summary(generation: &Generation) {
    let report = &generation.output.report;
    println!(
        "{} class(es), {} propert(ies), {} method(s), {} association(s), {} setting association(s), {} skipped",
        report.classes,
        report.properties,
        report.methods,
        report.associations,
        report.setting_associations,
        report.skipped
    );

    if !generation.diagnostics.is_empty() {
        println!("{} warning(s)", generation.diagnostics.len());
    }
}
