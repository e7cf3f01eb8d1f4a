//! Documentation strings as MOF string literals.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Markup tags, each with at most one surrounding space on either side.
#[allow(clippy::expect_used)] // Safe: literal pattern
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?<[^>]*> ?").expect("valid regex"));

/// A newline and the indentation that follows it.
#[allow(clippy::expect_used)] // Safe: literal pattern
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*").expect("valid regex"));

/// Render free text as a MOF string literal.
///
/// Markup tags become single spaces, backslashes and quotes are escaped, and
/// each line break starts a new adjacent string fragment indented by
/// `indent * 4` spaces.
///
/// # Examples
///
/// ```
/// use mofgen_cli::codegen::doc::render_doc;
///
/// assert_eq!(render_doc("The <emphasis>size</emphasis>.", 1), "\"The size .\"");
/// assert_eq!(render_doc("First\n   second", 1), "\"First\"\n    \" second\"");
/// ```
pub fn render_doc(text: &str, indent: usize) -> String {
    let text = MARKUP.replace_all(text, " ");
    let text = text.replace('\\', "\\\\").replace('"', "\\\"");

    let continuation = format!("\"\n{}\" ", " ".repeat(indent * 4));
    let text = LINE_BREAK.replace_all(&text, NoExpand(&continuation));

    format!("\"{}\"", text.trim())
}
