//! Block parsing functionality for managed blocks.
//!
//! Parses id-tagged blocks in source files with the format:
//! ```text
//! // handlergen:block:ID
//! content here
//! // /handlergen:block:ID
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// A parsed block with its id, content, and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The id identifying this block.
    pub id: String,
    /// The lines between the markers, joined with `\n`.
    pub content: String,
    /// Leading whitespace of the opening marker line.
    pub indent: String,
    /// The 1-based line number of the opening marker.
    pub start_line: usize,
    /// The 1-based line number of the closing marker.
    pub end_line: usize,
}

/// Regex for matching opening block markers on a single line.
static OPEN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)// handlergen:block:([a-zA-Z0-9_-]+)\s*$")
        .expect("Invalid open marker regex")
});

/// Whether `line` is the closing marker for `id`.
pub(crate) fn is_closing_marker(line: &str, id: &str) -> bool {
    line.trim() == format!("// /handlergen:block:{id}")
}

/// Parses all blocks from the given content.
///
/// An opening marker without a matching closing marker is ignored.
///
/// # Example
/// ```
/// use handlergen_blocks::parser::parse_blocks;
///
/// let content = "before
/// // handlergen:block:tools
/// block content
/// // /handlergen:block:tools
/// after";
///
/// let blocks = parse_blocks(content);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].id, "tools");
/// assert_eq!(blocks[0].content, "block content");
/// ```
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = OPEN_MARKER_REGEX.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let indent = caps[1].to_string();
        let id = caps[2].to_string();

        let close = lines[i + 1..]
            .iter()
            .position(|line| is_closing_marker(line, &id))
            .map(|offset| i + 1 + offset);

        match close {
            Some(close) => {
                blocks.push(Block {
                    content: lines[i + 1..close].join("\n"),
                    id,
                    indent,
                    start_line: i + 1,
                    end_line: close + 1,
                });
                i = close + 1;
            }
            None => i += 1,
        }
    }

    blocks
}

/// Finds a specific block by its id.
///
/// # Example
/// ```
/// use handlergen_blocks::parser::find_block;
///
/// let content = "// handlergen:block:tools
/// content
/// // /handlergen:block:tools";
///
/// let block = find_block(content, "tools");
/// assert!(block.is_some());
/// assert_eq!(block.unwrap().content, "content");
/// ```
pub fn find_block(content: &str, id: &str) -> Option<Block> {
    parse_blocks(content).into_iter().find(|block| block.id == id)
}

/// Checks if a block with the given id exists in the content.
pub fn has_block(content: &str, id: &str) -> bool {
    find_block(content, id).is_some()
}
