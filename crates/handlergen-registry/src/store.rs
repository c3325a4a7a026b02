//! Tool registry storage

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ToolCategory, ToolDescriptor};
use crate::validation::{check_title, check_tool_name};

/// Central registry for tool descriptors.
///
/// Keeps registration order so generated output is reproducible between runs,
/// and rejects a name that is already registered under any category.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in tool tables.
    pub fn with_builtins() -> Result<Self> {
        crate::builtins::builtin_manifest().into_registry()
    }

    /// Register a tool.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name is not a plain identifier
    /// - `MissingWriteField` if a write tool lacks a title or color
    /// - `InvalidTitle` if the title cannot be embedded in markup
    /// - `DuplicateTool` if the name is already registered
    pub fn register(&mut self, tool: ToolDescriptor) -> Result<()> {
        check_tool_name(&tool.name).map_err(|reason| Error::InvalidName {
            name: tool.name.clone(),
            reason,
        })?;

        if tool.category == ToolCategory::Write {
            if tool.title.is_none() {
                return Err(Error::MissingWriteField {
                    name: tool.name,
                    field: "title",
                });
            }
            if tool.color.is_none() {
                return Err(Error::MissingWriteField {
                    name: tool.name,
                    field: "color",
                });
            }
        }

        if let Some(title) = &tool.title {
            check_title(title).map_err(|reason| Error::InvalidTitle {
                name: tool.name.clone(),
                reason,
            })?;
        }

        if let Some(&existing) = self.index.get(&tool.name) {
            return Err(Error::DuplicateTool {
                name: tool.name,
                existing: self.tools[existing].category,
                attempted: tool.category,
            });
        }

        debug!(tool = %tool.name, category = %tool.category, "registered tool");
        self.index.insert(tool.name.clone(), self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Look up a tool by name, failing with `UnknownTool` when absent.
    pub fn get_or_unknown(&self, name: &str) -> Result<&ToolDescriptor> {
        self.lookup(name).ok_or_else(|| Error::UnknownTool {
            name: name.to_string(),
        })
    }

    /// Check if a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All tools in registration order.
    pub fn all_tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Tools of one category in registration order.
    pub fn by_category(&self, category: ToolCategory) -> Vec<&ToolDescriptor> {
        self.tools
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Number of tools in a category.
    pub fn count(&self, category: ToolCategory) -> usize {
        self.tools.iter().filter(|t| t.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }
}
