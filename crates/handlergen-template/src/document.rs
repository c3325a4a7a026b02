//! Whole-registry rendering
//!
//! Lays handlers out the way the renderer source groups them: one section
//! per category in the order write, read, factory, utility, each opened by a
//! banner comment.

use std::sync::LazyLock;

use handlergen_registry::{ToolCategory, ToolDescriptor, ToolRegistry};
use tracing::debug;

use crate::error::Result;
use crate::generator::{DEFAULT_INDENT, HandlerGenerator, indent_lines};
use crate::template::{Slots, Template};

const BANNER_SOURCE: &str = "// ===========================
// {{label}} ({{count}})
// ===========================";

static BANNER_TEMPLATE: LazyLock<Template> = LazyLock::new(|| {
    Template::parse("section-banner", BANNER_SOURCE).expect("Invalid banner template")
});

/// Options for [`render_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces prefixed to every line
    pub indent: usize,
    /// Render only this category
    pub category: Option<ToolCategory>,
    /// Open each section with a banner comment
    pub banners: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            category: None,
            banners: true,
        }
    }
}

fn render_banner(category: ToolCategory, count: usize, indent: usize) -> Result<String> {
    let label = category.label().to_uppercase();
    let count = count.to_string();
    let banner = BANNER_TEMPLATE.render(&Slots::new().text("label", &label).text("count", &count))?;
    Ok(indent_lines(&banner, indent))
}

fn render_handlers(generator: &HandlerGenerator, tools: &[&ToolDescriptor]) -> Result<String> {
    let handlers = tools
        .iter()
        .map(|tool| generator.handler(tool))
        .collect::<Result<Vec<_>>>()?;
    Ok(handlers.join("\n\n"))
}

/// Render every registered tool.
///
/// Empty categories are skipped. Returns an empty string when nothing is
/// selected, otherwise the text ends with a newline.
pub fn render_document(registry: &ToolRegistry, options: &RenderOptions) -> Result<String> {
    let generator = HandlerGenerator::with_indent(options.indent);
    let mut sections = Vec::new();

    for category in ToolCategory::ALL {
        if options.category.is_some_and(|c| c != category) {
            continue;
        }
        let tools = registry.by_category(category);
        if tools.is_empty() {
            continue;
        }

        debug!(%category, tools = tools.len(), "rendering section");
        let handlers = render_handlers(&generator, &tools)?;
        if options.banners {
            let banner = render_banner(category, tools.len(), options.indent)?;
            sections.push(format!("{banner}\n\n{handlers}"));
        } else {
            sections.push(handlers);
        }
    }

    if sections.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{}\n", sections.join("\n\n")))
}

/// Render the named tools in the given order, without banners.
///
/// # Errors
///
/// Fails with `UnknownTool` on the first name that is not registered.
pub fn render_tools<S: AsRef<str>>(
    registry: &ToolRegistry,
    names: &[S],
    options: &RenderOptions,
) -> Result<String> {
    let tools = names
        .iter()
        .map(|name| registry.get_or_unknown(name.as_ref()))
        .collect::<handlergen_registry::Result<Vec<_>>>()?;

    if tools.is_empty() {
        return Ok(String::new());
    }

    let generator = HandlerGenerator::with_indent(options.indent);
    Ok(format!("{}\n", render_handlers(&generator, &tools)?))
}
