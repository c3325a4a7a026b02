//! Manifest files describing a tool set
//!
//! A manifest has the same shape as the built-in tables:
//!
//! ```toml
//! read = ["tokenBalance"]
//! factory = ["getTokenCount"]
//! utility = ["utilitiesParseAmount"]
//!
//! [[write]]
//! name = "tokenMint"
//! title = "Mint Tokens"
//! color = "amber"
//! ```
//!
//! Plain arrays must come before the first `[[write]]` table, otherwise TOML
//! assigns them to that table. Unknown keys are rejected at both levels, so a
//! misplaced array fails to parse instead of being dropped.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::ToolRegistry;
use crate::types::{Color, ToolDescriptor};

/// A write tool entry: name plus the display data its handler needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteEntry {
    pub name: String,
    pub title: String,
    /// Palette name; validated when the manifest is turned into a registry.
    pub color: String,
}

impl WriteEntry {
    pub fn new(name: impl Into<String>, title: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            color: color.as_str().to_string(),
        }
    }
}

/// Tool tables, one per category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub read: Vec<String>,
    #[serde(default)]
    pub factory: Vec<String>,
    #[serde(default)]
    pub utility: Vec<String>,
    #[serde(default)]
    pub write: Vec<WriteEntry>,
}

impl Manifest {
    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), "loading manifest");
        Self::parse(&content, path)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.write.len() + self.read.len() + self.factory.len() + self.utility.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a validated registry.
    ///
    /// Registration order is write, read, factory, utility, each in file
    /// order. The first invalid or duplicate entry aborts the build.
    pub fn into_registry(self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::new();

        for entry in self.write {
            let color: Color = entry.color.parse()?;
            registry.register(ToolDescriptor::write(entry.name, entry.title, color))?;
        }
        for name in self.read {
            registry.register(ToolDescriptor::read(name))?;
        }
        for name in self.factory {
            registry.register(ToolDescriptor::factory(name))?;
        }
        for name in self.utility {
            registry.register(ToolDescriptor::utility(name))?;
        }

        debug!(tools = registry.len(), "registry built");
        Ok(registry)
    }
}
