//! Property classification.
//!
//! Object paths become associations and variant dictionaries become setting
//! objects; only what remains is rendered as plain class properties.

use super::annotations::{CIM_ASSOCIATION, CIM_SETTING};
use mofgen_core::{Interface, Property};

/// How a property is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRole {
    /// A property line in the class body.
    Plain,
    /// An association class between the owner and the referenced object.
    Reference,
    /// A settings class linked by an element-setting association.
    Setting,
}

/// Properties of one interface, split by [`PropertyRole`].
///
/// Each list keeps the order of the interface's property list, and every
/// property is in exactly one list.
#[derive(Debug, Clone)]
pub struct ClassifiedInterface<'a> {
    pub interface: &'a Interface,
    pub properties: Vec<&'a Property>,
    pub references: Vec<&'a Property>,
    pub settings: Vec<&'a Property>,
}

/// Whether the property names another object.
pub fn is_reference(property: &Property) -> bool {
    matches!(property.signature.as_str(), "o" | "ao")
        || property.annotations.lookup(CIM_ASSOCIATION).is_some()
}

/// Whether the property holds a bag of settings.
pub fn is_setting(property: &Property) -> bool {
    property.signature == "a{sv}" || property.annotations.lookup(CIM_SETTING).is_some()
}

/// Role of a property; a reference takes precedence over a setting.
pub fn property_role(property: &Property) -> PropertyRole {
    if is_reference(property) {
        PropertyRole::Reference
    } else if is_setting(property) {
        PropertyRole::Setting
    } else {
        PropertyRole::Plain
    }
}

/// Split the properties of `interface` by role.
pub fn classify(interface: &Interface) -> ClassifiedInterface<'_> {
    let mut classified = ClassifiedInterface {
        interface,
        properties: Vec::new(),
        references: Vec::new(),
        settings: Vec::new(),
    };

    for property in &interface.properties {
        match property_role(property) {
            PropertyRole::Plain => classified.properties.push(property),
            PropertyRole::Reference => classified.references.push(property),
            PropertyRole::Setting => classified.settings.push(property),
        }
    }

    classified
}
