//! Non-fatal diagnostics reported while generating MOF

use parking_lot::Mutex;
use thiserror::Error;

/// A non-fatal problem found while generating.
///
/// Generation always continues after a diagnostic; the affected member is
/// emitted with a best-effort rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A member has no type signature at all
    #[error("unknown type for '{name}' ('{full_signature}'): empty signature")]
    EmptySignature {
        name: String,
        full_signature: String,
    },

    /// No CIM type could be derived from the signature
    #[error("cannot determine type of '{name}' ('{full_signature}'): {signature}")]
    UnresolvedSignature {
        name: String,
        full_signature: String,
        signature: String,
    },

    /// MOF has no setter semantics, so the property is emitted read-only
    #[error("property '{name}' is writable, no code is generated for it")]
    WritableProperty { name: String },
}

/// Receiver for generator diagnostics
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that drops every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Sink that keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Take all collected diagnostics, leaving the sink empty
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}

/// Report to both sinks, first `A` then `B`
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn report(&self, diagnostic: Diagnostic) {
        self.0.report(diagnostic.clone());
        self.1.report(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
