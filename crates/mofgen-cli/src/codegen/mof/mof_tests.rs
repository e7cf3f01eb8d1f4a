#![allow(non_snake_case)]

use super::*;
use crate::codegen::annotations::{CIM_ASSOCIATION, CIM_CLASS, CIM_NAME, CIM_SETTING, CIM_SKIP};
use mofgen_core::{Annotations, CollectingSink};

// ============================================================================
// Fixtures
// ============================================================================

fn config() -> GeneratorConfig {
    GeneratorConfig::new("com.example.", "CIM_Example")
}

fn interface(name: &str) -> Interface {
    let mut iface = Interface::new(name);
    iface.post_process(&config().interface_prefix);
    iface
}

fn property(name: &str, signature: &str) -> Property {
    Property {
        name: name.to_string(),
        signature: signature.to_string(),
        ..Property::default()
    }
}

fn arg(name: &str, signature: &str) -> Arg {
    Arg {
        name: name.to_string(),
        signature: signature.to_string(),
        ..Arg::default()
    }
}

fn method(name: &str, in_args: Vec<Arg>, out_args: Vec<Arg>) -> Method {
    Method {
        name: name.to_string(),
        in_args,
        out_args,
        ..Method::default()
    }
}

trait Annotated: Sized {
    fn annotations_mut(&mut self) -> &mut Annotations;

    fn annotated(mut self, key: &str, value: &str) -> Self {
        self.annotations_mut().push(key, value);
        self
    }
}

impl Annotated for Property {
    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

impl Annotated for Method {
    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

fn generate(interfaces: &[Interface]) -> (MofOutput, Vec<Diagnostic>) {
    let config = config();
    let sink = CollectingSink::new();
    let output = MofGenerator::new(&config, &sink).generate(interfaces);
    (output, sink.drain())
}

// ============================================================================
// Whole-interface output
// ============================================================================

#[test]
fn generate___full_interface___matches_expected_text() {
    let mut iface = interface("com.example.Foo");
    iface.doc_string = Some("A foo.".to_string());
    iface.properties = vec![
        Property {
            doc_string: Some("The bar.".to_string()),
            ..property("Bar", "s")
        },
        property("Drive", "o"),
        property("Configuration", "a{sv}"),
    ];
    iface.methods = vec![method(
        "Frob",
        vec![arg("x", "u"), arg("options", "a{sv}")],
        vec![arg("result", "ao")],
    )];

    let (output, diagnostics) = generate(&[iface]);

    let expected = "\
[Description(\"A foo.\")]
class CIM_ExampleFoo {
    [Description(\"The bar.\")]
    string Bar;

    int32 Frob (
        [In]
        uint32 x,
        [EmbeddedObject, In]
        string options,
        [In(false), Out]
        CIM_ManagedElement REF  result[]
    );
};

[Association]
class CIM_ExampleFooDrive {
    CIM_ExampleFoo REF Antecedent;
    CIM_ManagedObject REF Dependent;
}
[Association]
class CIM_ExampleFooElementSettingData : CIM_ElementSettingData {
    CIM_ExampleFoo REF ManagedElement;
    CIM_ExampleFooSettingData REF SettingData;
}

// ---------------------------------------------

";
    assert_eq!(output.schema, expected);
    assert_eq!(
        output.todo,
        "// TODO: define following class:\nclass CIM_ExampleFooSettingData : CIM_SettingData {\n};\n"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn generate___empty_interface___emits_empty_class() {
    let (output, _) = generate(&[interface("com.example.Empty")]);

    assert_eq!(
        output.schema,
        "class CIM_ExampleEmpty {\n};\n\n\n// ---------------------------------------------\n\n"
    );
    assert!(output.todo.is_empty());
}

#[test]
fn generate___no_interfaces___emits_nothing() {
    let (output, diagnostics) = generate(&[]);

    assert!(output.schema.is_empty());
    assert!(output.todo.is_empty());
    assert_eq!(output.report, GenerationReport::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn generate___several_interfaces___keeps_input_order() {
    let (output, _) = generate(&[
        interface("com.example.Zeta"),
        interface("com.example.Alpha"),
    ]);

    let zeta = output.schema.find("class CIM_ExampleZeta").unwrap();
    let alpha = output.schema.find("class CIM_ExampleAlpha").unwrap();
    assert!(zeta < alpha);
    assert_eq!(output.report.classes, 2);
}

#[test]
fn generate___deprecated_interface___qualified() {
    let mut iface = interface("com.example.Old");
    iface.annotations.push("org.freedesktop.DBus.Deprecated", "true");
    iface.post_process("com.example.");

    let (output, _) = generate(&[iface]);

    assert!(output.schema.starts_with("[Deprecated]\nclass CIM_ExampleOld {\n"));
}

#[test]
fn generate___class_annotation___names_class() {
    let mut iface = interface("com.example.Foo");
    iface.annotations.push(CIM_CLASS, "LMI_Foo");
    iface.properties = vec![property("Drive", "o")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("class LMI_Foo {\n"));
    assert!(output.schema.contains("class LMI_FooDrive {\n"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn generate___plain_string_property___emits_declaration() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Bar", "s")];

    let (output, diagnostics) = generate(&[iface]);

    assert!(output.schema.contains("    string Bar;\n\n"));
    assert!(diagnostics.is_empty());
}

#[test]
fn generate___array_property___appends_suffix_to_name() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Symlinks", "aay")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("    uint8 Symlinks[][];\n"));
}

#[test]
fn generate___cim_name___renames_property() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Size", "t").annotated(CIM_NAME, "NumberOfBlocks")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("    uint64 NumberOfBlocks;\n"));
    assert!(!output.schema.contains("Size"));
}

#[test]
fn generate___skipped_property___omitted() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![
        property("Hidden", "s").annotated(CIM_SKIP, "1"),
        property("Shown", "s"),
    ];

    let (output, diagnostics) = generate(&[iface]);

    assert!(!output.schema.contains("Hidden"));
    assert!(output.schema.contains("string Shown;"));
    assert_eq!(output.report.skipped, 1);
    assert_eq!(output.report.properties, 1);
    assert!(diagnostics.is_empty());
}

#[test]
fn generate___writable_property___warns_and_still_emits() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![Property {
        writable: true,
        ..property("Label", "s")
    }];

    let (output, diagnostics) = generate(&[iface]);

    assert!(output.schema.contains("    string Label;\n"));
    assert_eq!(
        diagnostics,
        vec![Diagnostic::WritableProperty {
            name: "Label".to_string()
        }]
    );
}

#[test]
fn generate___unresolvable_signature___emits_unknown_and_continues() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Weird", "g"), property("After", "u")];
    iface.methods = vec![method("Later", Vec::new(), Vec::new())];

    let (output, diagnostics) = generate(&[iface]);

    assert!(output.schema.contains("    UNKNOWN Weird;\n"));
    assert!(output.schema.contains("    uint32 After;\n"));
    assert!(output.schema.contains("    int32 Later (\n"));
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].to_string().contains("'Weird'"));
}

#[test]
fn generate___property_type_qualifiers___not_in_property_block() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Job", "s").annotated("CIMEmbeddedInstance",
        "LMI_Job")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("class CIM_ExampleFoo {\n    string Job;\n"));
    assert!(!output.schema.contains("EmbeddedInstance"));
}

#[test]
fn generate___properties___keep_model_order() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Zed", "s"), property("Alpha", "s")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.find("Zed").unwrap() < output.schema.find("Alpha").unwrap());
}

// ============================================================================
// Methods
// ============================================================================

#[test]
fn generate___method_without_args___emits_empty_parameter_list() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![method("Rescan", Vec::new(), Vec::new())];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("    int32 Rescan (\n\n    );\n"));
}

#[test]
fn generate___skipped_method___omitted_silently() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![
        method("Internal", vec![arg("g", "g")], Vec::new()).annotated(CIM_SKIP, "1"),
        method("Public", Vec::new(), Vec::new()),
    ];

    let (output, diagnostics) = generate(&[iface]);

    assert!(!output.schema.contains("Internal"));
    assert!(output.schema.contains("int32 Public ("));
    assert!(diagnostics.is_empty());
    assert_eq!(output.report.methods, 1);
    assert_eq!(output.report.skipped, 1);
}

#[test]
fn generate___skipped_input_argument___omits_whole_method() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![
        method(
            "Format",
            vec![Arg {
                annotations: Annotations::new().with(CIM_SKIP, "1"),
                ..arg("fd", "h")
            }],
            Vec::new(),
        ),
        method("Rescan", Vec::new(), Vec::new()),
    ];

    let (output, diagnostics) = generate(&[iface]);

    assert!(!output.schema.contains("Format"));
    assert!(output.schema.contains("    int32 Rescan (\n"));
    assert!(diagnostics.is_empty());
    assert_eq!(output.report.methods, 1);
    assert_eq!(output.report.skipped, 1);
}

#[test]
fn generate___skipped_output_argument___omits_whole_method() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![method(
        "Open",
        vec![arg("options", "a{sv}")],
        vec![Arg {
            annotations: Annotations::new().with(CIM_SKIP, "1"),
            ..arg("fd", "h")
        }],
    )];

    let (output, diagnostics) = generate(&[iface]);

    assert!(!output.schema.contains("Open"));
    assert!(diagnostics.is_empty());
}

#[test]
fn generate___argument_skip_other_than_one___keeps_method() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![method(
        "Format",
        vec![Arg {
            annotations: Annotations::new().with(CIM_SKIP, "0"),
            ..arg("type", "s")
        }],
        Vec::new(),
    )];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("    int32 Format (\n        [In]\n        string type\n    );\n"));
}

#[test]
fn generate___documented_method_and_argument___indented_descriptions() {
    let mut iface = interface("com.example.Foo");
    let mut frob = method(
        "Frob",
        vec![Arg {
            doc_string: Some("How hard.\nVery.".to_string()),
            ..arg("force", "b")
        }],
        Vec::new(),
    );
    frob.doc_string = Some("Frobs.".to_string());
    frob.deprecated = true;
    iface.methods = vec![frob];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("    [Deprecated, Description(\"Frobs.\")]\n    int32 Frob (\n"));
    assert!(output.schema.contains(
        "        [In, Description(\"How hard.\"\n            \" Very.\")]\n        boolean force\n"
    ));
}

#[test]
fn generate___embedded_instance_argument___qualifier_before_direction() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![method(
        "Start",
        Vec::new(),
        vec![Arg {
            annotations: Annotations::new().with("CIMEmbeddedInstance", "LMI_Job"),
            ..arg("job", "o")
        }],
    )];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains(
        "        [EmbeddedInstance(\"LMI_Job\"), In(false), Out]\n        string job\n"
    ));
}

#[test]
fn generate___unknown_argument_type___reports_argument_name() {
    let mut iface = interface("com.example.Foo");
    iface.methods = vec![method("Odd", vec![arg("sig", "g")], Vec::new())];

    let (output, diagnostics) = generate(&[iface]);

    assert!(output.schema.contains("        UNKNOWN sig\n"));
    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnresolvedSignature {
            name: "sig".to_string(),
            full_signature: "g".to_string(),
            signature: "g".to_string(),
        }]
    );
}

// ============================================================================
// References
// ============================================================================

#[test]
fn generate___object_path_property___becomes_single_association() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Drive", "o")];

    let (output, _) = generate(&[iface]);

    assert!(!output.schema.contains("Drive;"));
    assert_eq!(output.schema.matches("[Association]").count(), 1);
    assert!(output.schema.contains(
        "[Association]\nclass CIM_ExampleFooDrive {\n    CIM_ExampleFoo REF Antecedent;\n    CIM_ManagedObject REF Dependent;\n}\n"
    ));
    assert_eq!(output.report.associations, 1);
}

#[test]
fn generate___association_annotations___override_defaults() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![Property {
        annotations: Annotations::new()
            .with(CIM_ASSOCIATION, "LMI_FooBasedOn")
            .with("CIMAssociationBase", "CIM_BasedOn")
            .with("CIMAssociationLocalName", "Owner")
            .with("CIMAssociationRemoteName", "Member"),
        doc_string: Some("Link.".to_string()),
        ..property("Parent", "s")
    }];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains(
        "[Association, Description(\"Link.\")]\nclass LMI_FooBasedOn : CIM_BasedOn {\n    CIM_ExampleFoo REF Owner;\n    CIM_ManagedObject REF Member;\n}\n"
    ));
    assert!(!output.schema.contains("Parent;"));
}

#[test]
fn generate___association_local_type___drives_both_ends() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Drive", "o").annotated("CIMAssociationLocalType",
        "LMI_StorageExtent")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains(
        "    LMI_StorageExtent REF Antecedent;\n    LMI_StorageExtent REF Dependent;\n"
    ));
}

#[test]
fn generate___skipped_reference___omitted() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Drive", "o").annotated(CIM_SKIP, "1")];

    let (output, _) = generate(&[iface]);

    assert!(!output.schema.contains("[Association]"));
    assert_eq!(output.report.skipped, 1);
}

#[test]
fn generate___references___keep_model_order() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Second", "ao"), property("First", "o")];

    let (output, _) = generate(&[iface]);

    let second = output.schema.find("CIM_ExampleFooSecond").unwrap();
    let first = output.schema.find("CIM_ExampleFooFirst").unwrap();
    assert!(second < first);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn generate___vardict_property___becomes_setting_association_and_stub() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Configuration", "a{sv}")];

    let (output, diagnostics) = generate(&[iface]);

    assert!(!output.schema.contains("Configuration"));
    assert_eq!(
        output
            .schema
            .matches("class CIM_ExampleFooElementSettingData : CIM_ElementSettingData {")
            .count(),
        1
    );
    assert!(output.todo.contains("class CIM_ExampleFooSettingData : CIM_SettingData {\n};\n"));
    assert!(!output.schema.contains("// TODO"));
    assert!(diagnostics.is_empty());
    assert_eq!(output.report.setting_associations, 1);
}

#[test]
fn generate___setting_annotation___names_settings_class() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![Property {
        doc_string: Some("Mount options.".to_string()),
        ..property("Options", "s").annotated(CIM_SETTING, "LMI_MountSettingData")
    }];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains(
        "[Association]\nclass LMI_MountElementSettingData : CIM_ElementSettingData {\n    CIM_ExampleFoo REF ManagedElement;\n    LMI_MountSettingData REF SettingData;\n}\n"
    ));
    assert_eq!(
        output.todo,
        "// TODO: define following class:\n[Description(\"Mount options.\")]\nclass LMI_MountSettingData : CIM_SettingData {\n};\n"
    );
}

#[test]
fn generate___skipped_setting___no_stub() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Configuration", "a{sv}").annotated(CIM_SKIP, "1")];

    let (output, _) = generate(&[iface]);

    assert!(output.todo.is_empty());
    assert!(!output.schema.contains("ElementSettingData"));
}

#[test]
fn generate___reference_and_setting___only_association() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Both", "a{sv}").annotated(CIM_ASSOCIATION, "LMI_Both")];

    let (output, _) = generate(&[iface]);

    assert!(output.schema.contains("class LMI_Both {"));
    assert!(!output.schema.contains("ElementSettingData"));
    assert!(output.todo.is_empty());
}

// ============================================================================
// Section ordering
// ============================================================================

#[test]
fn generate___sections___in_fixed_order() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![
        property("Configuration", "a{sv}"),
        property("Drive", "o"),
        property("Bar", "s"),
    ];
    iface.methods = vec![method("Frob", Vec::new(), Vec::new())];

    let (output, _) = generate(&[iface]);
    let schema = &output.schema;

    let positions = [
        schema.find("string Bar;").unwrap(),
        schema.find("int32 Frob (").unwrap(),
        schema.find("};\n").unwrap(),
        schema.find("class CIM_ExampleFooDrive").unwrap(),
        schema.find("class CIM_ExampleFooElementSettingData").unwrap(),
        schema.find(SEPARATOR).unwrap(),
    ];
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn generate___independent_runs___identical_output() {
    let mut iface = interface("com.example.Foo");
    iface.properties = vec![property("Bar", "s"), property("Drive", "o")];
    let interfaces = vec![iface];

    let (first, _) = generate(&interfaces);
    let (second, _) = generate(&interfaces);

    assert_eq!(first.schema, second.schema);
    assert_eq!(first.todo, second.todo);
    assert_eq!(first.report, second.report);
}
