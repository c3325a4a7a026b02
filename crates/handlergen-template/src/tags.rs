//! Tool tag extraction
//!
//! Recovers the tool names a renderer dispatches on from its source text,
//! whether the branches were generated or written by hand.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `type === "tool-<name>"`, the discriminator every handler opens with.
static TOOL_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"type\s*===\s*"tool-([A-Za-z_$][A-Za-z0-9_$]*)""#)
        .expect("Invalid tool tag regex")
});

/// Tool names in order of appearance. Repeats are kept.
///
/// # Example
/// ```
/// use handlergen_template::extract_tool_tags;
///
/// let source = r#"if (type === "tool-tokenMint") { }"#;
/// assert_eq!(extract_tool_tags(source), vec!["tokenMint"]);
/// ```
pub fn extract_tool_tags(text: &str) -> Vec<String> {
    TOOL_TAG_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
