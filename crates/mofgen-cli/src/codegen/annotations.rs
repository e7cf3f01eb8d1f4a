//! Annotation keys recognized by the MOF generator.

use mofgen_core::Annotations;

/// Explicit class name for an interface.
pub const CIM_CLASS: &str = "CIMClass";
/// Embed an instance of the named class as a string.
pub const CIM_EMBEDDED_INSTANCE: &str = "CIMEmbeddedInstance";
/// Explicit CIM type, bypassing signature resolution.
pub const CIM_TYPE: &str = "CIMType";
/// Explicit property name in the generated class.
pub const CIM_NAME: &str = "CIMName";
/// `"1"` drops the member from the output.
pub const CIM_SKIP: &str = "CIMSkip";
/// Marks a property as a reference and names its association class.
pub const CIM_ASSOCIATION: &str = "CIMAssociation";
/// Superclass of the generated association class.
pub const CIM_ASSOCIATION_BASE: &str = "CIMAssociationBase";
/// Role name of the owning end of an association.
pub const CIM_ASSOCIATION_LOCAL_NAME: &str = "CIMAssociationLocalName";
/// Role name of the referenced end of an association.
pub const CIM_ASSOCIATION_REMOTE_NAME: &str = "CIMAssociationRemoteName";
/// Class of the association ends.
pub const CIM_ASSOCIATION_LOCAL_TYPE: &str = "CIMAssociationLocalType";
/// Marks a property as a setting and names its settings class.
pub const CIM_SETTING: &str = "CIMSetting";

/// Whether a member is excluded with `CIMSkip = "1"`.
pub fn is_skipped(annotations: &Annotations) -> bool {
    annotations.is(CIM_SKIP, "1")
}
