//! Generate command

use std::path::PathBuf;

use colored::Colorize;
use handlergen_blocks::{Error as BlockError, find_block, read_text, splice_file, write_atomic};
use handlergen_registry::ToolRegistry;
use handlergen_template::{RenderOptions, extract_tool_tags, render_document, render_tools};
use tracing::debug;

use crate::error::Result;

/// Where generated text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// Whole file, written atomically
    File(PathBuf),
    /// Body of a managed block in an existing file
    Block { path: PathBuf, id: String },
}

impl Sink {
    pub fn from_args(output: Option<PathBuf>, splice: Option<PathBuf>, block: Option<String>) -> Self {
        match (output, splice, block) {
            (Some(path), _, _) => Sink::File(path),
            (None, Some(path), Some(id)) => Sink::Block { path, id },
            _ => Sink::Stdout,
        }
    }
}

/// Render either the named tools or the whole registry.
pub fn render_selection(
    registry: &ToolRegistry,
    tools: &[String],
    options: &RenderOptions,
) -> Result<String> {
    let text = if tools.is_empty() {
        render_document(registry, options)?
    } else {
        render_tools(registry, tools, options)?
    };
    Ok(text)
}

/// Run the generate command
pub fn run_generate(
    registry: &ToolRegistry,
    tools: &[String],
    options: &RenderOptions,
    sink: &Sink,
    dry_run: bool,
) -> Result<()> {
    let text = render_selection(registry, tools, options)?;
    let count = extract_tool_tags(&text).len();
    debug!(handlers = count, ?sink, dry_run, "generated handlers");

    if text.is_empty() {
        eprintln!("{} no tools selected", "warning:".yellow().bold());
    }

    match sink {
        Sink::Stdout => print!("{text}"),
        Sink::File(path) => {
            if dry_run {
                println!(
                    "{} Would write {} handlers to {}",
                    "[dry-run]".yellow(),
                    count,
                    path.display()
                );
            } else {
                write_atomic(path, text.as_bytes())?;
                println!(
                    "{} Wrote {} handlers to {}",
                    "OK".green().bold(),
                    count,
                    path.display()
                );
            }
        }
        Sink::Block { path, id } => {
            if dry_run {
                let current = read_text(path)?;
                if find_block(&current, id).is_none() {
                    return Err(BlockError::BlockNotFound {
                        id: id.clone(),
                        path: path.clone(),
                    }
                    .into());
                }
                println!(
                    "{} Would update block '{}' in {} with {} handlers",
                    "[dry-run]".yellow(),
                    id,
                    path.display(),
                    count
                );
            } else if splice_file(path, id, &text)? {
                println!(
                    "{} Updated block '{}' in {} ({} handlers)",
                    "OK".green().bold(),
                    id,
                    path.display(),
                    count
                );
            } else {
                println!(
                    "{} Block '{}' in {} is already up to date",
                    "OK".green().bold(),
                    id,
                    path.display()
                );
            }
        }
    }

    Ok(())
}
