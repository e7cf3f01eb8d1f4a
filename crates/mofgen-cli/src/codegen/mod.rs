//! MOF schema generation from D-Bus interface models.
//!
//! # Architecture
//!
//! Generation is a single synchronous pass over the interface list:
//!
//! ```text
//! Interface model (JSON)
//!     ↓
//!  [post_process]        name_without_prefix, deprecated flags
//!     ↓
//!  [classify]            plain / reference / setting properties
//!     ↓
//!  [MofGenerator]
//!     ├─→ [SignatureResolver] → CIM types, diagnostics
//!     ├─→ [render_qualifiers] → Deprecated, Description
//!     ↓
//!  ├─→ schema  (classes, associations)
//!  └─→ todo    (settings class stubs)
//! ```
//!
//! Problems found along the way (unresolvable signatures, writable
//! properties) never stop generation. They are reported to a
//! [`DiagnosticSink`](mofgen_core::DiagnosticSink) and the affected member is
//! still emitted.
//!
//! # Usage
//!
//! ```rust
//! use mofgen_cli::codegen::MofGenerator;
//! use mofgen_core::{CollectingSink, GeneratorConfig, Interface, Property};
//!
//! let config = GeneratorConfig::new("com.example.", "CIM_Example");
//! let mut iface = Interface::new("com.example.Foo");
//! iface.properties.push(Property {
//!     name: "Bar".to_string(),
//!     signature: "s".to_string(),
//!     ..Property::default()
//! });
//! iface.post_process(&config.interface_prefix);
//!
//! let sink = CollectingSink::new();
//! let output = MofGenerator::new(&config, &sink).generate(&[iface]);
//!
//! assert!(output.schema.contains("class CIM_ExampleFoo {"));
//! assert!(output.schema.contains("    string Bar;"));
//! assert!(sink.is_empty());
//! ```

pub mod annotations;
pub mod classify;
pub mod doc;
pub mod mof;
pub mod naming;
pub mod qualifiers;
pub mod signature;

pub use classify::{ClassifiedInterface, PropertyRole, classify};
pub use doc::render_doc;
pub use mof::{GenerationReport, MofGenerator, MofOutput};
pub use signature::{ResolvedType, SignatureResolver, TypeContext};
