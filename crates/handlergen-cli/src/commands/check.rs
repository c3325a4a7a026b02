//! Check command: detect drift between a managed block and the registry

use std::path::Path;

use colored::Colorize;
use handlergen_blocks::{Error as BlockError, find_block, read_text};
use handlergen_registry::ToolRegistry;
use handlergen_template::{DEFAULT_INDENT, RenderOptions, extract_tool_tags};
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::commands::generate::render_selection;
use crate::error::{CliError, Result};

/// Outcome of comparing a block with freshly generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Block body matches the generated text
    pub up_to_date: bool,
    /// Unified diff from the block body to the generated text
    pub diff: String,
    /// Tool tags found in the file that the registry does not know
    pub unregistered: Vec<String>,
}

/// Compare block `id` in `content` with the rendered selection.
///
/// `tools` and `options` must match the ones the block was generated with;
/// an empty `tools` means the whole registry.
pub fn check_content(
    registry: &ToolRegistry,
    content: &str,
    id: &str,
    path: &Path,
    tools: &[String],
    options: &RenderOptions,
) -> Result<CheckReport> {
    let block = find_block(content, id).ok_or_else(|| BlockError::BlockNotFound {
        id: id.to_string(),
        path: path.to_path_buf(),
    })?;

    let expected = render_selection(registry, tools, options)?;
    let expected = expected.strip_suffix('\n').unwrap_or(&expected);
    let up_to_date = block.content == expected;

    let diff = if up_to_date {
        String::new()
    } else {
        debug!(
            block = id,
            changed = changed_lines(&block.content, expected),
            "block drift"
        );
        TextDiff::from_lines(block.content.as_str(), expected)
            .unified_diff()
            .context_radius(3)
            .header("current", "generated")
            .to_string()
    };

    let mut unregistered: Vec<String> = Vec::new();
    for tag in extract_tool_tags(content) {
        if !registry.contains(&tag) && !unregistered.contains(&tag) {
            unregistered.push(tag);
        }
    }

    Ok(CheckReport {
        up_to_date,
        diff,
        unregistered,
    })
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}

/// The `generate` invocation that brings the block back in sync.
fn regenerate_command(target: &Path, id: &str, tools: &[String], options: &RenderOptions) -> String {
    let mut command = format!("handlergen generate --splice {} --block {}", target.display(), id);
    for tool in tools {
        command.push_str(&format!(" --tool {tool}"));
    }
    if let Some(category) = options.category {
        command.push_str(&format!(" --category {category}"));
    }
    if options.indent != DEFAULT_INDENT {
        command.push_str(&format!(" --indent {}", options.indent));
    }
    if !options.banners {
        command.push_str(" --no-banners");
    }
    command
}

/// Run the check command
pub fn run_check(
    registry: &ToolRegistry,
    target: &Path,
    id: &str,
    tools: &[String],
    options: &RenderOptions,
) -> Result<()> {
    let content = read_text(target)?;
    let report = check_content(registry, &content, id, target, tools, options)?;

    for tag in &report.unregistered {
        eprintln!(
            "{} {} handles 'tool-{}', which is not registered",
            "warning:".yellow().bold(),
            target.display(),
            tag
        );
    }

    if report.up_to_date {
        println!(
            "{} Block '{}' in {} is up to date",
            "OK".green().bold(),
            id,
            target.display()
        );
        return Ok(());
    }

    print_diff(&report.diff);
    Err(CliError::user(format!(
        "Block '{}' in {} is out of date. Run '{}' to fix.",
        id,
        target.display(),
        regenerate_command(target, id, tools, options)
    )))
}

/// Count of changed lines in a diff, for log output.
pub fn changed_lines(old: &str, new: &str) -> usize {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .filter(|c| c.tag() != ChangeTag::Equal)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlergen_registry::{Color, ToolDescriptor};
    use handlergen_template::generate_write_handler;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDescriptor::write("tokenMint", "Mint Tokens", Color::Amber))
            .unwrap();
        registry
    }

    fn options() -> RenderOptions {
        RenderOptions {
            banners: false,
            ..Default::default()
        }
    }

    fn wrap(body: &str) -> String {
        format!(
            "// handlergen:block:tools\n{body}\n// /handlergen:block:tools\n"
        )
    }

    #[test]
    fn test_up_to_date() {
        let body = generate_write_handler("tokenMint", "Mint Tokens", Color::Amber).unwrap();
        let report =
            check_content(&registry(), &wrap(&body), "tools", Path::new("m.tsx"), &[], &options())
                .unwrap();
        assert!(report.up_to_date);
        assert!(report.diff.is_empty());
        assert!(report.unregistered.is_empty());
    }

    #[test]
    fn test_drift_detected() {
        let body = generate_write_handler("tokenMint", "Mint Coins", Color::Amber).unwrap();
        let report =
            check_content(&registry(), &wrap(&body), "tools", Path::new("m.tsx"), &[], &options())
                .unwrap();
        assert!(!report.up_to_date);
        assert!(report.diff.contains("-"));
        assert!(report.diff.contains("+"));
        assert!(report.diff.contains("Mint Tokens"));
    }

    #[test]
    fn test_unregistered_tags_reported_once() {
        let content = format!(
            "if (type === \"tool-legacy\") {{}}\n{}if (type === \"tool-legacy\") {{}}\n",
            wrap("")
        );
        let report =
            check_content(&registry(), &content, "tools", Path::new("m.tsx"), &[], &options()).unwrap();
        assert_eq!(report.unregistered, vec!["legacy"]);
    }

    #[test]
    fn test_missing_block() {
        let result = check_content(&registry(), "nothing", "tools", Path::new("m.tsx"), &[], &options());
        assert!(matches!(result, Err(CliError::Blocks(_))));
    }

    #[test]
    fn test_tool_subset_compared_against_subset() {
        let mut registry = registry();
        registry
            .register(ToolDescriptor::read("tokenBalance"))
            .unwrap();
        let body = generate_write_handler("tokenMint", "Mint Tokens", Color::Amber).unwrap();
        let content = wrap(&body);
        let path = Path::new("m.tsx");

        let subset = vec!["tokenMint".to_string()];
        let report = check_content(&registry, &content, "tools", path, &subset, &options()).unwrap();
        assert!(report.up_to_date);

        let report = check_content(&registry, &content, "tools", path, &[], &options()).unwrap();
        assert!(!report.up_to_date);
        assert!(report.diff.contains("tool-tokenBalance"));
    }

    #[test]
    fn test_regenerate_command_repeats_selection() {
        let path = Path::new("m.tsx");
        assert_eq!(
            regenerate_command(path, "t", &[], &RenderOptions::default()),
            "handlergen generate --splice m.tsx --block t"
        );

        let options = RenderOptions {
            indent: 2,
            category: None,
            banners: false,
        };
        assert_eq!(
            regenerate_command(path, "t", &["tokenMint".to_string()], &options),
            "handlergen generate --splice m.tsx --block t --tool tokenMint --indent 2 --no-banners"
        );
    }

    #[test]
    fn test_changed_lines() {
        assert_eq!(changed_lines("a\nb\n", "a\nb\n"), 0);
        assert_eq!(changed_lines("a\nb\n", "a\nc\n"), 2);
    }
}
