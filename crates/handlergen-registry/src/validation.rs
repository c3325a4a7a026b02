//! Validation for tool names and titles
//!
//! Both values end up inside generated markup: the name inside a string
//! literal (`"tool-<name>"`), the title inside attribute values and element
//! text. Anything that could close those contexts is rejected up front.

/// Characters that would terminate a string literal, attribute or JSX
/// expression in the generated output.
pub const FORBIDDEN_TITLE_CHARS: &[char] = &['"', '\'', '`', '{', '}', '<', '>', '\\'];

/// Check that a tool name is a plain identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn check_tool_name(name: &str) -> std::result::Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("name is empty".into());
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Err(format!("must start with a letter, '_' or '$', found '{first}'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(format!("contains '{bad}'"));
    }
    Ok(())
}

/// Check that a display title can be interpolated into markup.
pub fn check_title(title: &str) -> std::result::Result<(), String> {
    if title.trim().is_empty() {
        return Err("title is empty".into());
    }
    if title.contains(['\n', '\r']) {
        return Err("title spans multiple lines".into());
    }
    if let Some(bad) = title.chars().find(|c| FORBIDDEN_TITLE_CHARS.contains(c)) {
        return Err(format!("contains '{bad}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tokenMint")]
    #[case("getNFTCount")]
    #[case("_private")]
    #[case("$scoped")]
    #[case("utilitiesBuildAllowlistConfig")]
    fn test_valid_names(#[case] name: &str) {
        assert!(check_tool_name(name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("1token")]
    #[case("token-mint")]
    #[case("token mint")]
    #[case("token\"Mint")]
    #[case("tökenMint")]
    fn test_invalid_names(#[case] name: &str) {
        assert!(check_tool_name(name).is_err());
    }

    #[rstest]
    #[case("Mint Tokens")]
    #[case("Approve All NFTs")]
    #[case("Cast Vote")]
    fn test_valid_titles(#[case] title: &str) {
        assert!(check_title(title).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("Mint \"Tokens\"")]
    #[case("Mint {tokens}")]
    #[case("<b>Mint</b>")]
    #[case("Mint\nTokens")]
    #[case("Don't")]
    fn test_invalid_titles(#[case] title: &str) {
        assert!(check_title(title).is_err());
    }
}
