//! Generator configuration

use crate::{LogLevel, MofgenError, MofgenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration consumed by the MOF generator
///
/// Read from the `[generator]` table of a `mofgen.toml` file; command-line
/// flags override individual values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Prefix stripped from interface names (e.g. `org.freedesktop.UDisks2`)
    #[serde(default)]
    pub interface_prefix: String,

    /// Prefix of generated class names when no `CIMClass` annotation is given
    #[serde(default)]
    pub cim_prefix: String,

    /// Base name for output files; `<base>.mof` and `<base>-todo.mof`
    ///
    /// When unset the schema goes to standard output.
    #[serde(default)]
    pub output_base: Option<String>,

    /// Log level for diagnostics and progress messages
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface_prefix: String::new(),
            cim_prefix: String::new(),
            output_base: None,
            log_level: default_log_level(),
        }
    }
}

/// On-disk layout of `mofgen.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    /// Create a configuration with the given prefixes and defaults elsewhere
    pub fn new(interface_prefix: impl Into<String>, cim_prefix: impl Into<String>) -> Self {
        Self {
            interface_prefix: interface_prefix.into(),
            cim_prefix: cim_prefix.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a `mofgen.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> MofgenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> MofgenResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.generator)
    }

    /// Parsed log level
    pub fn level(&self) -> MofgenResult<LogLevel> {
        LogLevel::parse(&self.log_level)
            .ok_or_else(|| MofgenError::Config(format!("unknown log level: {}", self.log_level)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> MofgenResult<()> {
        if self.cim_prefix.chars().any(char::is_whitespace) {
            return Err(MofgenError::Config(format!(
                "CIM prefix must not contain whitespace: {:?}",
                self.cim_prefix
            )));
        }

        if let Some(base) = &self.output_base {
            if base.is_empty() || base.chars().any(char::is_whitespace) {
                return Err(MofgenError::Config(format!(
                    "output base name must be non-empty without whitespace: {base:?}"
                )));
            }
        }

        self.level()?;
        Ok(())
    }
}
