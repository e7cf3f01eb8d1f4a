//! Diagnostic sink backed by `tracing`

use mofgen_core::{Diagnostic, DiagnosticSink};

/// Target used for generator diagnostics
pub const DIAGNOSTIC_TARGET: &str = "mofgen::diagnostic";

/// Reports every diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(target: DIAGNOSTIC_TARGET, "{diagnostic}");
    }
}
