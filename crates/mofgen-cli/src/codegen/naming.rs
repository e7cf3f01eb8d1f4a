//! Naming rules for generated MOF classes.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `com.example.Foo` | [`class_name`] | `CIM_ExampleFoo` |
//! | class + property | [`association_name`] | `CIM_ExampleFooDrive` |
//! | class | [`setting_class_name`] | `CIM_ExampleFooSettingData` |
//! | `XSettingData` | [`setting_association_name`] | `XElementSettingData` |

use super::annotations::{CIM_ASSOCIATION, CIM_CLASS, CIM_NAME, CIM_SETTING};
use mofgen_core::{Interface, Property};

/// Suffix of CIM settings classes.
pub const SETTING_DATA_SUFFIX: &str = "SettingData";

/// Class name of an interface.
///
/// The `CIMClass` annotation wins. Otherwise the CIM prefix is joined with the
/// interface name minus its prefix (and the separating dot), and all dots
/// are dropped.
///
/// # Examples
///
/// ```
/// use mofgen_cli::codegen::naming::class_name;
/// use mofgen_core::Interface;
///
/// let mut iface = Interface::new("org.freedesktop.UDisks2.Block");
/// iface.post_process("org.freedesktop.UDisks2");
///
/// assert_eq!(class_name(&iface, "LMI_UDisks"), "LMI_UDisksBlock");
/// ```
pub fn class_name(interface: &Interface, cim_prefix: &str) -> String {
    if let Some(name) = interface.annotations.lookup(CIM_CLASS) {
        return name.to_string();
    }

    let short = interface
        .name_without_prefix
        .strip_prefix('.')
        .unwrap_or(&interface.name_without_prefix);

    format!("{cim_prefix}{short}").replace('.', "")
}

/// Name of a property inside its class: `CIMName` or the D-Bus name.
pub fn property_name(property: &Property) -> &str {
    property
        .annotations
        .lookup(CIM_NAME)
        .unwrap_or(&property.name)
}

/// Name of the association class generated for a reference property.
///
/// # Examples
///
/// ```
/// use mofgen_cli::codegen::naming::association_name;
/// use mofgen_core::Property;
///
/// let drive = Property { name: "Drive".to_string(), ..Property::default() };
///
/// assert_eq!(association_name("LMI_Block", &drive), "LMI_BlockDrive");
/// ```
pub fn association_name(class_name: &str, property: &Property) -> String {
    match property.annotations.lookup(CIM_ASSOCIATION) {
        Some(name) => name.to_string(),
        None => format!("{class_name}{}", property.name),
    }
}

/// Name of the settings class generated for a setting property.
pub fn setting_class_name(class_name: &str, property: &Property) -> String {
    match property.annotations.lookup(CIM_SETTING) {
        Some(name) => name.to_string(),
        None => format!("{class_name}{SETTING_DATA_SUFFIX}"),
    }
}

/// Name of the association between a class and its settings class.
///
/// `Element` goes in front of the last eleven characters, the length of
/// `SettingData`; shorter names get it as a prefix.
///
/// # Examples
///
/// ```
/// use mofgen_cli::codegen::naming::setting_association_name;
///
/// assert_eq!(
///     setting_association_name("LMI_BlockSettingData"),
///     "LMI_BlockElementSettingData"
/// );
/// ```
pub fn setting_association_name(setting_class: &str) -> String {
    let tail_len = SETTING_DATA_SUFFIX.chars().count();
    let split = setting_class
        .char_indices()
        .rev()
        .nth(tail_len - 1)
        .map_or(0, |(idx, _)| idx);

    let (head, tail) = setting_class.split_at(split);
    format!("{head}Element{tail}")
}
