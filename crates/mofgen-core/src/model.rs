//! Parsed D-Bus interface model.
//!
//! These types mirror what an introspection parser produces: interfaces with
//! ordered methods, properties and signals, every node carrying free-form
//! annotations. They are (de)serializable so a parser's output can be handed
//! to the generator as JSON.
//!
//! # Example
//!
//! ```json
//! [{
//!     "name": "com.example.Foo",
//!     "properties": [{ "name": "Bar", "signature": "s" }],
//!     "annotations": [{ "key": "CIMClass", "value": "Example_Foo" }]
//! }]
//! ```

use serde::{Deserialize, Serialize};

/// Standard D-Bus annotation marking a node as deprecated.
pub const DEPRECATED_ANNOTATION: &str = "org.freedesktop.DBus.Deprecated";

/// A single key/value annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Ordered annotations attached to a model node.
///
/// Keys are not required to be unique. Lookup scans in order and the first
/// match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation, keeping earlier entries with the same key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Annotation {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Builder-style variant of [`Annotations::push`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Value of the first annotation named `key`.
    ///
    /// An empty value counts as absent.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Whether `key` is present with exactly `value`.
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.lookup(key) == Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| Annotation {
                    key: key.into(),
                    value: value.into(),
                })
                .collect(),
        )
    }
}

/// A method or signal argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub doc_string: Option<String>,
}

/// A D-Bus method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub in_args: Vec<Arg>,
    #[serde(default)]
    pub out_args: Vec<Arg>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub doc_string: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A D-Bus property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub doc_string: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A D-Bus signal. Carried by the model; MOF has no rendering for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Arg>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub doc_string: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A D-Bus interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    /// `name` with the configured interface prefix stripped.
    ///
    /// Filled in by [`Interface::post_process`] when the parser left it empty.
    #[serde(default)]
    pub name_without_prefix: String,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub signals: Vec<Signal>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub doc_string: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Derive the fields a parser computes after reading the raw description.
    ///
    /// Strips `interface_prefix` from the name (the full name is kept when it
    /// does not match) and turns `org.freedesktop.DBus.Deprecated` set to
    /// `true` or `True` into the `deprecated` flag on the interface and all of
    /// its members.
    pub fn post_process(&mut self, interface_prefix: &str) {
        self.name_without_prefix = match self.name.strip_prefix(interface_prefix) {
            Some(rest) if !interface_prefix.is_empty() => rest.to_string(),
            _ => self.name.clone(),
        };

        self.deprecated |= is_deprecated(&self.annotations);
        for method in &mut self.methods {
            method.deprecated |= is_deprecated(&method.annotations);
        }
        for property in &mut self.properties {
            property.deprecated |= is_deprecated(&property.annotations);
        }
        for signal in &mut self.signals {
            signal.deprecated |= is_deprecated(&signal.annotations);
        }
    }
}

fn is_deprecated(annotations: &Annotations) -> bool {
    matches!(annotations.lookup(DEPRECATED_ANNOTATION), Some("true" | "True"))
}

/// Common view over nodes that can carry qualifiers.
pub trait Documented {
    fn annotations(&self) -> &Annotations;

    fn doc_string(&self) -> Option<&str>;

    /// Arguments have no deprecation state, so the default is `false`.
    fn deprecated(&self) -> bool {
        false
    }
}

impl Documented for Arg {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn doc_string(&self) -> Option<&str> {
        self.doc_string.as_deref()
    }
}

macro_rules! impl_documented {
    ($($ty:ty),*) => {
        $(
            impl Documented for $ty {
                fn annotations(&self) -> &Annotations {
                    &self.annotations
                }

                fn doc_string(&self) -> Option<&str> {
                    self.doc_string.as_deref()
                }

                fn deprecated(&self) -> bool {
                    self.deprecated
                }
            }
        )*
    };
}

impl_documented!(Method, Property, Signal, Interface);
