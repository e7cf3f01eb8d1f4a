//! mofgen-logging - Tracing integration for mofgen
//!
//! This crate provides:
//! - [`TracingSink`], a diagnostic sink that reports through `tracing`
//! - [`DiagnosticLayer`], a tracing layer that counts warnings and errors
//! - [`DiagnosticCounter`] holding those counts
//! - [`init_logging`] to install the stderr subscriber used by the CLI

mod counter;
mod layer;
mod sink;

pub use counter::DiagnosticCounter;
pub use layer::{DiagnosticLayer, init_logging};
pub use mofgen_core::LogLevel;
pub use sink::{DIAGNOSTIC_TARGET, TracingSink};

