//! Block writing functionality for managed blocks.
//!
//! Provides functions to insert, update, remove, and upsert id-tagged blocks
//! in text content. Marker lines of an existing block are kept verbatim so
//! their indentation survives an update.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::parser::{Block, find_block};

/// Creates the opening marker for a block.
fn opening_marker(id: &str) -> String {
    format!("// handlergen:block:{id}")
}

/// Creates the closing marker for a block.
fn closing_marker(id: &str) -> String {
    format!("// /handlergen:block:{id}")
}

fn not_found(id: &str) -> Error {
    Error::BlockNotFound {
        id: id.to_string(),
        path: PathBuf::from("<content>"),
    }
}

/// Lines a block body contributes; a trailing newline adds no empty line.
fn body_lines(block_content: &str) -> Vec<&str> {
    let trimmed = block_content.strip_suffix('\n').unwrap_or(block_content);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('\n').collect()
    }
}

/// Replace lines `start..end` (0-based, exclusive) with `replacement`.
fn splice_lines(content: &str, start: usize, end: usize, replacement: &[&str]) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + replacement.len());
    out.extend_from_slice(&lines[..start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&lines[end..]);
    out.join("\n")
}

/// Inserts a new block at the end of the content.
///
/// If the content has existing text, the block is separated from it by a
/// blank line.
///
/// # Example
/// ```
/// use handlergen_blocks::writer::insert_block;
///
/// let result = insert_block("existing content", "tools", "new block");
/// assert!(result.contains("// handlergen:block:tools"));
/// ```
pub fn insert_block(content: &str, id: &str, block_content: &str) -> String {
    let mut lines = vec![opening_marker(id)];
    lines.extend(body_lines(block_content).into_iter().map(String::from));
    lines.push(closing_marker(id));
    let block = lines.join("\n");

    if content.is_empty() {
        block
    } else {
        format!("{}\n\n{}", content.trim_end_matches('\n'), block)
    }
}

/// Updates an existing block's content.
///
/// # Errors
/// Returns `Error::BlockNotFound` if no block with the given id exists.
///
/// # Example
/// ```
/// use handlergen_blocks::writer::update_block;
///
/// let content = "// handlergen:block:tools
/// old content
/// // /handlergen:block:tools";
///
/// let result = update_block(content, "tools", "new content").unwrap();
/// assert!(result.contains("new content"));
/// assert!(!result.contains("old content"));
/// ```
pub fn update_block(content: &str, id: &str, new_content: &str) -> Result<String> {
    let block = find_block(content, id).ok_or_else(|| not_found(id))?;
    Ok(replace_body(content, &block, new_content))
}

fn replace_body(content: &str, block: &Block, new_content: &str) -> String {
    // start_line/end_line are the 1-based marker lines; the body sits between.
    splice_lines(
        content,
        block.start_line,
        block.end_line - 1,
        &body_lines(new_content),
    )
}

/// Removes a block, markers included.
///
/// # Errors
/// Returns `Error::BlockNotFound` if no block with the given id exists.
pub fn remove_block(content: &str, id: &str) -> Result<String> {
    let block = find_block(content, id).ok_or_else(|| not_found(id))?;
    Ok(splice_lines(
        content,
        block.start_line - 1,
        block.end_line,
        &[],
    ))
}

/// Inserts a new block or updates an existing one.
///
/// # Example
/// ```
/// use handlergen_blocks::writer::upsert_block;
///
/// let result = upsert_block("", "tools", "content").unwrap();
/// assert!(result.contains("tools"));
///
/// let result = upsert_block(&result, "tools", "new content").unwrap();
/// assert!(result.contains("new content"));
/// ```
pub fn upsert_block(content: &str, id: &str, block_content: &str) -> Result<String> {
    match find_block(content, id) {
        Some(block) => Ok(replace_body(content, &block, block_content)),
        None => Ok(insert_block(content, id, block_content)),
    }
}
