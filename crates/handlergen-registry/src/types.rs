//! Core types for the tool registry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Handler category. Decides which template shape a tool gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Produces a submittable transaction
    Write,
    /// Queries and displays data
    Read,
    /// Read-only query against a contract factory
    Factory,
    /// Helper computation with no chain side-effect
    Utility,
}

impl ToolCategory {
    /// All categories in output order.
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Write,
        ToolCategory::Read,
        ToolCategory::Factory,
        ToolCategory::Utility,
    ];

    /// Lowercase identifier used on the command line and in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Write => "write",
            ToolCategory::Read => "read",
            ToolCategory::Factory => "factory",
            ToolCategory::Utility => "utility",
        }
    }

    /// Human-readable section label.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Write => "Write Tools",
            ToolCategory::Read => "Read Tools",
            ToolCategory::Factory => "Factory Query Tools",
            ToolCategory::Utility => "Utility Tools",
        }
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "write" => Ok(ToolCategory::Write),
            "read" => Ok(ToolCategory::Read),
            "factory" => Ok(ToolCategory::Factory),
            "utility" | "utilities" => Ok(ToolCategory::Utility),
            _ => Err(Error::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette for write-tool summary boxes.
///
/// The value namespaces the generated style classes, e.g. `border-amber-500/50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Amber,
    Blue,
    Green,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Amber => "amber",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amber" => Ok(Color::Amber),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            _ => Err(Error::InvalidColor {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered tool.
///
/// `title` and `color` are only meaningful for write tools; the other
/// categories render generic text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Tool identifier as emitted by the agent (e.g., "tokenMint")
    pub name: String,
    pub category: ToolCategory,
    /// Display title (e.g., "Mint Tokens")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl ToolDescriptor {
    /// Create a write tool descriptor.
    pub fn write(name: impl Into<String>, title: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            category: ToolCategory::Write,
            title: Some(title.into()),
            color: Some(color),
        }
    }

    /// Create a descriptor for a non-transactional category.
    pub fn query(name: impl Into<String>, category: ToolCategory) -> Self {
        Self {
            name: name.into(),
            category,
            title: None,
            color: None,
        }
    }

    pub fn read(name: impl Into<String>) -> Self {
        Self::query(name, ToolCategory::Read)
    }

    pub fn factory(name: impl Into<String>) -> Self {
        Self::query(name, ToolCategory::Factory)
    }

    pub fn utility(name: impl Into<String>) -> Self {
        Self::query(name, ToolCategory::Utility)
    }

    /// The discriminator the consuming renderer switches on.
    pub fn tool_tag(&self) -> String {
        format!("tool-{}", self.name)
    }
}
