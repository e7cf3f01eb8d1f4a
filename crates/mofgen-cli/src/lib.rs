//! mofgen-cli - MOF schema generator for D-Bus interfaces
//!
//! The [`codegen`] module turns a parsed D-Bus interface model into a CIM
//! MOF schema; [`generate`] wires it to files, configuration and logging for
//! the `mofgen` binary.

pub mod codegen;
pub mod generate;
