//! Integration tests for the registry and manifest loading.

use std::collections::HashSet;
use std::fs;

use handlergen_registry::{
    BUILTIN_COUNT, Color, Error, Manifest, ToolCategory, ToolDescriptor, ToolRegistry,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

#[test]
fn test_builtins_are_unique_across_categories() {
    let registry = ToolRegistry::with_builtins().unwrap();
    let names: HashSet<_> = registry.all_tools().iter().map(|t| &t.name).collect();
    assert_eq!(names.len(), BUILTIN_COUNT);
    assert_eq!(registry.len(), BUILTIN_COUNT);
}

#[test]
fn test_builtin_insertion_order() {
    let registry = ToolRegistry::with_builtins().unwrap();
    let first: Vec<_> = registry
        .all_tools()
        .iter()
        .take(3)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(first, vec!["tokenTransfer", "tokenTransferFrom", "tokenApprove"]);

    let last = registry.all_tools().last().unwrap();
    assert_eq!(last.name, "utilitiesValidateTokenConfig");
}

#[rstest]
#[case("tokenMint", ToolCategory::Write)]
#[case("governanceVote", ToolCategory::Write)]
#[case("tokenBalance", ToolCategory::Read)]
#[case("getContractInfo", ToolCategory::Read)]
#[case("getNFTsByOwner", ToolCategory::Factory)]
#[case("utilitiesParseAmount", ToolCategory::Utility)]
fn test_lookup_builtin(#[case] name: &str, #[case] category: ToolCategory) {
    let registry = ToolRegistry::with_builtins().unwrap();
    let tool = registry.lookup(name).unwrap();
    assert_eq!(tool.category, category);
}

#[test]
fn test_lookup_unregistered() {
    let registry = ToolRegistry::with_builtins().unwrap();
    // Present in the upstream script's registry table, never generated.
    assert!(registry.lookup("registryListPublished").is_none());
    assert!(matches!(
        registry.get_or_unknown("registryListPublished"),
        Err(Error::UnknownTool { .. })
    ));
}

#[test]
fn test_write_tool_metadata() {
    let registry = ToolRegistry::with_builtins().unwrap();
    let tool = registry.lookup("nftApproveForAll").unwrap();
    assert_eq!(
        tool,
        &ToolDescriptor::write("nftApproveForAll", "Approve All NFTs", Color::Blue)
    );
}

#[test]
fn test_load_manifest_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("handlers.toml");
    fs::write(
        &path,
        r#"
read = ["poolReserves"]
factory = ["getDeployedPools"]

[[write]]
name = "poolSwap"
title = "Swap"
color = "green"
"#,
    )
    .unwrap();

    let registry = Manifest::load(&path).unwrap().into_registry().unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.lookup("poolSwap").unwrap().color, Some(Color::Green));
    assert_eq!(
        registry.lookup("getDeployedPools").unwrap().category,
        ToolCategory::Factory
    );
}

#[test]
fn test_load_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let err = Manifest::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_malformed_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "read = [\"unterminated").unwrap();

    let err = Manifest::load(&path).unwrap_err();
    match err {
        Error::ManifestParse { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_manifest_duplicate_is_configuration_error() {
    let manifest = Manifest::from_toml_str(
        r#"
read = ["tokenMint"]

[[write]]
name = "tokenMint"
title = "Mint Tokens"
color = "amber"
"#,
    )
    .unwrap();

    let err = manifest.into_registry().unwrap_err();
    assert!(err.to_string().contains("Duplicate tool 'tokenMint'"));
}

const WRITE_FIRST: &str = r#"
[[write]]
name = "tokenMint"
title = "Mint Tokens"
color = "amber"

read = ["tokenBalance"]
factory = ["getTokenCount"]
utility = ["utilitiesParseAmount"]
"#;

const ARRAYS_FIRST: &str = r#"
read = ["tokenBalance"]
factory = ["getTokenCount"]
utility = ["utilitiesParseAmount"]

[[write]]
name = "tokenMint"
title = "Mint Tokens"
color = "amber"
"#;

#[test]
fn test_arrays_after_write_table_fail_instead_of_dropping_tools() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tools.toml");
    fs::write(&path, WRITE_FIRST).unwrap();

    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, Error::ManifestParse { ref path, .. } if path.ends_with("tools.toml")));
}

#[test]
fn test_arrays_first_registers_every_category() {
    let registry = Manifest::from_toml_str(ARRAYS_FIRST)
        .unwrap()
        .into_registry()
        .unwrap();

    assert_eq!(registry.len(), 4);
    for category in ToolCategory::ALL {
        assert_eq!(registry.count(category), 1, "{category}");
    }
}
