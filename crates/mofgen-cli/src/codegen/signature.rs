//! D-Bus signature to CIM type resolution.
//!
//! # Type Mappings
//!
//! | D-Bus | CIM |
//! |-------|-----|
//! | `y` | `uint8` |
//! | `b` | `boolean` |
//! | `n` / `q` | `sint16` / `uint16` |
//! | `i` / `u` | `sint32` / `uint32` |
//! | `x` / `t` | `sint64` / `uint64` |
//! | `d` | `real64` |
//! | `s` | `string` |
//! | `o` | `CIM_ManagedElement REF` |
//! | `a{sv}` (method argument) | `string` with `EmbeddedObject` |
//! | `aT` | type of `T` with `[]` appended |
//!
//! `CIMEmbeddedInstance` and `CIMType` annotations override the signature.
//! Anything else resolves to the placeholder `UNKNOWN` and reports a
//! diagnostic; resolution itself never fails.

use super::annotations::{CIM_EMBEDDED_INSTANCE, CIM_TYPE};
use mofgen_core::{Annotations, Diagnostic, DiagnosticSink};

/// Deepest array nesting accepted, matching the D-Bus limit.
pub const MAX_ARRAY_DEPTH: usize = 32;

/// Placeholder type for signatures with no CIM mapping.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Result of resolving a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// CIM type name, e.g. `uint32`.
    pub type_name: String,
    /// Array suffix appended to the member name, e.g. `[]`.
    pub suffix: String,
    /// Extra qualifiers the type needs, e.g. `EmbeddedObject`.
    pub qualifiers: Vec<String>,
}

impl ResolvedType {
    fn plain(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            suffix: String::new(),
            qualifiers: Vec::new(),
        }
    }

    fn qualified(type_name: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Self {
            qualifiers: vec![qualifier.into()],
            ..Self::plain(type_name)
        }
    }

    fn unknown() -> Self {
        Self::plain(UNKNOWN_TYPE)
    }
}

/// Where the signature being resolved is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeContext {
    /// A property, or the element of an array.
    Member,
    /// A method input or output argument.
    MethodArgument,
}

/// Map a single-code signature to its CIM primitive.
pub fn primitive_type(signature: &str) -> Option<&'static str> {
    match signature {
        "y" => Some("uint8"),
        "b" => Some("boolean"),
        "n" => Some("sint16"),
        "q" => Some("uint16"),
        "i" => Some("sint32"),
        "u" => Some("uint32"),
        "x" => Some("sint64"),
        "t" => Some("uint64"),
        "d" => Some("real64"),
        "s" => Some("string"),
        "o" => Some("CIM_ManagedElement REF "),
        _ => None,
    }
}

/// Resolves signatures, reporting problems to a diagnostic sink.
pub struct SignatureResolver<'a> {
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> SignatureResolver<'a> {
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { diagnostics }
    }

    /// Resolve `signature` of the member `name`.
    ///
    /// `name` and the full signature only appear in diagnostics.
    pub fn resolve(
        &self,
        name: &str,
        signature: &str,
        annotations: &Annotations,
        context: TypeContext,
    ) -> ResolvedType {
        let cursor = Cursor {
            name,
            full: signature,
            pos: 0,
            depth: 0,
        };
        self.resolve_at(cursor, annotations, context)
    }

    fn resolve_at(
        &self,
        cursor: Cursor<'_>,
        annotations: &Annotations,
        context: TypeContext,
    ) -> ResolvedType {
        if let Some(class) = annotations.lookup(CIM_EMBEDDED_INSTANCE) {
            return ResolvedType::qualified("string", format!("EmbeddedInstance(\"{class}\")"));
        }

        if let Some(cim_type) = annotations.lookup(CIM_TYPE) {
            return ResolvedType::plain(cim_type);
        }

        let rest = cursor.rest();
        if rest.is_empty() {
            self.diagnostics.report(Diagnostic::EmptySignature {
                name: cursor.name.to_string(),
                full_signature: cursor.full.to_string(),
            });
        }

        if let Some(primitive) = primitive_type(rest) {
            return ResolvedType::plain(primitive);
        }

        if rest == "a{sv}" && context == TypeContext::MethodArgument {
            return ResolvedType::qualified("string", "EmbeddedObject");
        }

        if rest.starts_with('a') && cursor.depth < MAX_ARRAY_DEPTH {
            let mut element = self.resolve_at(cursor.element(), annotations, TypeContext::Member);
            element.suffix.push_str("[]");
            return element;
        }

        self.diagnostics.report(Diagnostic::UnresolvedSignature {
            name: cursor.name.to_string(),
            full_signature: cursor.full.to_string(),
            signature: rest.to_string(),
        });
        ResolvedType::unknown()
    }
}

/// Position inside the signature being resolved.
#[derive(Debug, Clone, Copy)]
struct Cursor<'s> {
    name: &'s str,
    full: &'s str,
    /// Byte offset of the unresolved remainder; only ever advanced past `a`.
    pos: usize,
    depth: usize,
}

impl<'s> Cursor<'s> {
    fn rest(&self) -> &'s str {
        &self.full[self.pos..]
    }

    /// Step over one array marker.
    fn element(self) -> Self {
        Self {
            pos: self.pos + 1,
            depth: self.depth + 1,
            ..self
        }
    }
}
