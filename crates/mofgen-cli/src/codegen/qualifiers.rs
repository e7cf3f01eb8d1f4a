//! MOF qualifier lists.

use super::doc::render_doc;
use mofgen_core::model::Documented;

/// Build the qualifier list of `node`.
///
/// Starts from `base`, then adds `Deprecated` and a `Description` rendered
/// one level deeper than `indent`.
pub fn render_qualifiers<N>(node: &N, base: Vec<String>, indent: usize) -> Vec<String>
where
    N: Documented + ?Sized,
{
    let mut qualifiers = base;

    if node.deprecated() {
        qualifiers.push("Deprecated".to_string());
    }

    if let Some(doc) = node.doc_string().filter(|d| !d.is_empty()) {
        qualifiers.push(format!("Description({})", render_doc(doc, indent + 1)));
    }

    qualifiers
}

/// Format a qualifier list as `[a, b]`.
pub fn format_qualifiers(qualifiers: &[String]) -> String {
    format!("[{}]", qualifiers.join(", "))
}

/// Append the qualifier line of `node` to `out`; nothing when it has none.
pub fn emit_qualifier_block<N>(node: &N, base: Vec<String>, indent: usize, out: &mut String)
where
    N: Documented + ?Sized,
{
    let qualifiers = render_qualifiers(node, base, indent);
    if qualifiers.is_empty() {
        return;
    }

    out.push_str(&" ".repeat(indent * 4));
    out.push_str(&format_qualifiers(&qualifiers));
    out.push('\n');
}
