//! Handler generators
//!
//! Each generator emits one `if (type === "tool-<name>") { ... }` branch for
//! the message renderer of the consuming front-end. The branch switches on
//! the tool call state:
//!
//! | state | write tools | query tools |
//! |-------|-------------|-------------|
//! | `input-available` | loader, `"<title>..."` | loader, category message |
//! | `output-available` | transaction wrapper on success, error block on failure | category display component |
//!
//! A write result that succeeded without a transaction payload matches
//! neither write branch; the handler returns nothing and the renderer falls
//! through to its next branch.

use std::sync::LazyLock;

use handlergen_registry::validation::{check_title, check_tool_name};
use handlergen_registry::{Color, ToolDescriptor};
use tracing::debug;

use crate::error::Result;
use crate::style::{FACTORY_STYLE, QueryStyle, READ_STYLE, UTILITY_STYLE};
use crate::template::{Slots, Template};

/// Indentation of a handler inside the renderer's `parts.map` callback.
pub const DEFAULT_INDENT: usize = 14;

const WRITE_SOURCE: &str = r#"if (type === "tool-{{tool_name}}") {
  if ("toolCallId" in part && "state" in part) {
    const { toolCallId, state } = part;
    if (state === "input-available") {
      return (
        <div key={toolCallId}>
          <ToolCallLoader loadingMessage="{{title}}..." />
        </div>
      );
    }
    if (state === "output-available" && "output" in part) {
      const { output } = part;
      if (output.success && output.transaction) {
        return (
          <div key={toolCallId}>
            <StellarTransactionWrapper
              transactionData={output.transaction}
              buttonText="{{title}}"
            >
              <div className="space-y-2 p-4 border border-{{color}}-500/50 rounded-lg bg-{{color}}-500/5">
                <h3 className="text-lg font-semibold">{{title}}</h3>
                <p className="text-sm text-gray-400">{output.message}</p>
              </div>
            </StellarTransactionWrapper>
          </div>
        );
      }
      if (!output.success) {
        return (
          <div key={toolCallId} className="text-red-500 p-4 border border-red-500/50 rounded-lg bg-red-500/5">
            <p className="font-semibold">Operation Failed</p>
            <p className="text-sm">{output.error || output.message}</p>
          </div>
        );
      }
    }
  }
}"#;

const QUERY_SOURCE: &str = r#"if (type === "tool-{{tool_name}}") {
  if ("toolCallId" in part && "state" in part) {
    const { toolCallId, state } = part;
    if (state === "input-available") {
      return (
        <div key={toolCallId}>
          <ToolCallLoader loadingMessage="{{loading_message}}" />
        </div>
      );
    }
    if (state === "output-available" && "output" in part) {
      const { output } = part;
      return (
        <div key={toolCallId}>
          <{{component}}
            {{props}}
          />
        </div>
      );
    }
  }
}"#;

static WRITE_TEMPLATE: LazyLock<Template> = LazyLock::new(|| {
    Template::parse("write-handler", WRITE_SOURCE).expect("Invalid write handler template")
});

static QUERY_TEMPLATE: LazyLock<Template> = LazyLock::new(|| {
    Template::parse("query-handler", QUERY_SOURCE).expect("Invalid query handler template")
});

/// Renders handlers at a fixed indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerGenerator {
    indent: usize,
}

impl Default for HandlerGenerator {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl HandlerGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces every emitted line is prefixed with.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Generate the three-state handler for a write tool.
    pub fn write_handler(&self, tool_name: &str, title: &str, color: Color) -> Result<String> {
        validate_name(tool_name)?;
        check_title(title).map_err(|reason| handlergen_registry::Error::InvalidTitle {
            name: tool_name.to_string(),
            reason,
        })?;

        debug!(tool = tool_name, %color, "generating write handler");
        let body = WRITE_TEMPLATE.render(
            &Slots::new()
                .text("tool_name", tool_name)
                .text("title", title)
                .text("color", color.as_str()),
        )?;
        Ok(indent_lines(&body, self.indent))
    }

    /// Generate the two-state handler for a read, factory or utility tool.
    pub fn query_handler(&self, tool_name: &str, style: &QueryStyle) -> Result<String> {
        validate_name(tool_name)?;

        debug!(tool = tool_name, category = %style.category, "generating query handler");
        let body = QUERY_TEMPLATE.render(
            &Slots::new()
                .text("tool_name", tool_name)
                .text("loading_message", style.loading_message)
                .text("component", style.component)
                .raw("props", style.props),
        )?;
        Ok(indent_lines(&body, self.indent))
    }

    /// Generate the handler matching a registered tool's category.
    pub fn handler(&self, tool: &ToolDescriptor) -> Result<String> {
        match QueryStyle::for_category(tool.category) {
            Some(style) => self.query_handler(&tool.name, style),
            None => {
                let title = tool.title.as_deref().ok_or_else(|| {
                    handlergen_registry::Error::MissingWriteField {
                        name: tool.name.clone(),
                        field: "title",
                    }
                })?;
                let color = tool.color.ok_or_else(|| {
                    handlergen_registry::Error::MissingWriteField {
                        name: tool.name.clone(),
                        field: "color",
                    }
                })?;
                self.write_handler(&tool.name, title, color)
            }
        }
    }
}

fn validate_name(tool_name: &str) -> Result<()> {
    check_tool_name(tool_name).map_err(|reason| handlergen_registry::Error::InvalidName {
        name: tool_name.to_string(),
        reason,
    })?;
    Ok(())
}

/// Prefix every non-empty line with `indent` spaces.
pub fn indent_lines(text: &str, indent: usize) -> String {
    if indent == 0 {
        return text.to_string();
    }
    let pad = " ".repeat(indent);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write handler at the default indentation.
pub fn generate_write_handler(tool_name: &str, title: &str, color: Color) -> Result<String> {
    HandlerGenerator::new().write_handler(tool_name, title, color)
}

/// Read handler at the default indentation.
pub fn generate_read_handler(tool_name: &str) -> Result<String> {
    HandlerGenerator::new().query_handler(tool_name, &READ_STYLE)
}

/// Factory query handler at the default indentation.
pub fn generate_factory_handler(tool_name: &str) -> Result<String> {
    HandlerGenerator::new().query_handler(tool_name, &FACTORY_STYLE)
}

/// Utility handler at the default indentation.
pub fn generate_utility_handler(tool_name: &str) -> Result<String> {
    HandlerGenerator::new().query_handler(tool_name, &UTILITY_STYLE)
}

/// Handler for a registered tool at the default indentation.
pub fn generate_handler(tool: &ToolDescriptor) -> Result<String> {
    HandlerGenerator::new().handler(tool)
}
