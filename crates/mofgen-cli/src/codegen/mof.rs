//! MOF schema emission.
//!
//! One class per interface, followed by the association classes derived from
//! its reference properties and the element-setting associations derived from
//! its setting properties. Settings classes themselves cannot be derived from
//! a variant dictionary, so a commented stub for each goes to a separate
//! to-do buffer for manual authoring.

use super::annotations::{
    CIM_ASSOCIATION_BASE, CIM_ASSOCIATION_LOCAL_NAME, CIM_ASSOCIATION_LOCAL_TYPE,
    CIM_ASSOCIATION_REMOTE_NAME, is_skipped,
};
use super::classify::{ClassifiedInterface, classify};
use super::naming;
use super::qualifiers::{emit_qualifier_block, format_qualifiers, render_qualifiers};
use super::signature::{SignatureResolver, TypeContext};
use mofgen_core::{Arg, Diagnostic, DiagnosticSink, GeneratorConfig, Interface, Method, Property};

const INDENT: &str = "    ";
const ARG_INDENT: &str = "        ";
const SEPARATOR: &str = "// ---------------------------------------------";

/// Default role of the owning class in an association.
pub const DEFAULT_LOCAL_NAME: &str = "Antecedent";
/// Default role of the referenced object in an association.
pub const DEFAULT_REMOTE_NAME: &str = "Dependent";
/// Default class of the referenced object in an association.
pub const DEFAULT_REMOTE_TYPE: &str = "CIM_ManagedObject";

/// Counts of what a generation run emitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub classes: usize,
    pub properties: usize,
    pub methods: usize,
    pub associations: usize,
    pub setting_associations: usize,
    /// Members left out because of `CIMSkip`.
    pub skipped: usize,
}

/// Text produced by a generation run.
#[derive(Debug, Default, Clone)]
pub struct MofOutput {
    /// The MOF schema.
    pub schema: String,
    /// Commented stubs for settings classes that need manual authoring.
    pub todo: String,
    pub report: GenerationReport,
}

/// Generates MOF from a list of interfaces.
///
/// The generator borrows its configuration and diagnostic sink and holds no
/// other state, so independent runs never influence each other.
pub struct MofGenerator<'a> {
    config: &'a GeneratorConfig,
    diagnostics: &'a dyn DiagnosticSink,
    resolver: SignatureResolver<'a>,
}

impl<'a> MofGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            config,
            diagnostics,
            resolver: SignatureResolver::new(diagnostics),
        }
    }

    /// Generate the schema for `interfaces`, in order.
    pub fn generate(&self, interfaces: &[Interface]) -> MofOutput {
        let mut out = MofOutput::default();
        for interface in interfaces {
            self.emit_interface(&classify(interface), &mut out);
        }
        out
    }

    fn emit_interface(&self, classified: &ClassifiedInterface<'_>, out: &mut MofOutput) {
        let interface = classified.interface;
        let class_name = naming::class_name(interface, &self.config.cim_prefix);
        tracing::debug!(interface = %interface.name, class = %class_name, "generating class");

        emit_qualifier_block(interface, Vec::new(), 0, &mut out.schema);
        out.schema.push_str(&format!("class {class_name} {{\n"));

        for property in &classified.properties {
            self.emit_property(property, out);
        }

        for method in &interface.methods {
            self.emit_method(method, out);
        }

        out.schema.push_str("};\n");
        out.schema.push('\n');

        for reference in &classified.references {
            emit_reference(&class_name, reference, out);
        }

        for setting in &classified.settings {
            emit_setting(&class_name, setting, out);
        }

        out.schema.push('\n');
        out.schema.push_str(SEPARATOR);
        out.schema.push_str("\n\n");
        out.report.classes += 1;
    }

    fn emit_property(&self, property: &Property, out: &mut MofOutput) {
        if is_skipped(&property.annotations) {
            out.report.skipped += 1;
            return;
        }

        if property.writable {
            self.diagnostics.report(Diagnostic::WritableProperty {
                name: property.name.clone(),
            });
        }

        emit_qualifier_block(property, Vec::new(), 1, &mut out.schema);

        let resolved = self.resolver.resolve(
            &property.name,
            &property.signature,
            &property.annotations,
            TypeContext::Member,
        );

        out.schema.push_str(&format!(
            "{INDENT}{} {}{};\n",
            resolved.type_name,
            naming::property_name(property),
            resolved.suffix
        ));
        out.schema.push('\n');
        out.report.properties += 1;
    }

    fn emit_method(&self, method: &Method, out: &mut MofOutput) {
        if is_method_skipped(method) {
            out.report.skipped += 1;
            return;
        }

        emit_qualifier_block(method, Vec::new(), 1, &mut out.schema);
        out.schema.push_str(&format!("{INDENT}int32 {} (\n", method.name));

        let in_args = method.in_args.iter().map(|arg| self.render_arg(arg, &["In"]));
        let out_args = method
            .out_args
            .iter()
            .map(|arg| self.render_arg(arg, &["In(false)", "Out"]));
        let args: Vec<String> = in_args.chain(out_args).collect();

        out.schema.push_str(&args.join(",\n"));
        out.schema.push_str(&format!("\n{INDENT});\n"));
        out.report.methods += 1;
    }

    /// Qualifier line and declaration of one method argument.
    fn render_arg(&self, arg: &Arg, direction: &[&str]) -> String {
        let resolved = self.resolver.resolve(
            &arg.name,
            &arg.signature,
            &arg.annotations,
            TypeContext::MethodArgument,
        );

        let mut base = resolved.qualifiers;
        base.extend(direction.iter().map(|q| q.to_string()));
        let qualifiers = render_qualifiers(arg, base, 2);

        format!(
            "{ARG_INDENT}{}\n{ARG_INDENT}{} {}{}",
            format_qualifiers(&qualifiers),
            resolved.type_name,
            arg.name,
            resolved.suffix
        )
    }
}

/// A method is dropped when it or any of its arguments carries `CIMSkip`.
fn is_method_skipped(method: &Method) -> bool {
    is_skipped(&method.annotations)
        || method
            .in_args
            .iter()
            .chain(&method.out_args)
            .any(|arg| is_skipped(&arg.annotations))
}

/// Association class linking the owning class to a referenced object.
fn emit_reference(class_name: &str, reference: &Property, out: &mut MofOutput) {
    let annotations = &reference.annotations;
    if is_skipped(annotations) {
        out.report.skipped += 1;
        return;
    }

    let assoc_name = naming::association_name(class_name, reference);
    emit_qualifier_block(reference, vec!["Association".to_string()], 0, &mut out.schema);

    match annotations.lookup(CIM_ASSOCIATION_BASE) {
        Some(base) => out
            .schema
            .push_str(&format!("class {assoc_name} : {base} {{\n")),
        None => out.schema.push_str(&format!("class {assoc_name} {{\n")),
    }

    let local_name = annotations
        .lookup(CIM_ASSOCIATION_LOCAL_NAME)
        .unwrap_or(DEFAULT_LOCAL_NAME);
    let remote_name = annotations
        .lookup(CIM_ASSOCIATION_REMOTE_NAME)
        .unwrap_or(DEFAULT_REMOTE_NAME);

    // Both ends read the local type annotation; there is no remote counterpart.
    let local_type = annotations
        .lookup(CIM_ASSOCIATION_LOCAL_TYPE)
        .unwrap_or(class_name);
    let remote_type = annotations
        .lookup(CIM_ASSOCIATION_LOCAL_TYPE)
        .unwrap_or(DEFAULT_REMOTE_TYPE);

    out.schema
        .push_str(&format!("{INDENT}{local_type} REF {local_name};\n"));
    out.schema
        .push_str(&format!("{INDENT}{remote_type} REF {remote_name};\n"));
    out.schema.push_str("}\n");
    out.report.associations += 1;
}

/// Settings stub for the to-do buffer plus the element-setting association.
fn emit_setting(class_name: &str, setting: &Property, out: &mut MofOutput) {
    if is_skipped(&setting.annotations) {
        out.report.skipped += 1;
        return;
    }

    let setting_class = naming::setting_class_name(class_name, setting);

    out.todo.push_str("// TODO: define following class:\n");
    emit_qualifier_block(setting, Vec::new(), 0, &mut out.todo);
    out.todo
        .push_str(&format!("class {setting_class} : CIM_SettingData {{\n"));
    out.todo.push_str("};\n");

    let assoc_name = naming::setting_association_name(&setting_class);
    out.schema.push_str("[Association]\n");
    out.schema.push_str(&format!(
        "class {assoc_name} : CIM_ElementSettingData {{\n"
    ));
    out.schema
        .push_str(&format!("{INDENT}{class_name} REF ManagedElement;\n"));
    out.schema
        .push_str(&format!("{INDENT}{setting_class} REF SettingData;\n"));
    out.schema.push_str("}\n");
    out.report.setting_associations += 1;
}

#[cfg(test)]
#[path = "mof/mof_tests.rs"]
mod mof_tests;
