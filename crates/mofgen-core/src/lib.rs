//! mofgen-core - Interface model, diagnostics and configuration
//!
//! This crate provides the foundational types shared by the mofgen crates:
//! - [`Interface`] and friends, the parsed D-Bus interface model
//! - [`DiagnosticSink`] for non-fatal generator warnings
//! - [`GeneratorConfig`] for generator configuration
//! - [`MofgenError`] for error handling

mod config;
mod diagnostic;
mod error;
pub mod model;

pub use config::GeneratorConfig;
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NullSink};
pub use error::{MofgenError, MofgenResult};
pub use model::{Annotation, Annotations, Arg, Documented, Interface, Method, Property, Signal};

/// Log levels understood by the configuration and the logging crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a case-insensitive level name such as `"warn"` or `"DEBUG"`
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Lowercase name, also a valid `EnvFilter` directive
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
