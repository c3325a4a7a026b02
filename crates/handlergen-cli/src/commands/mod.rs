//! Command implementations for handlergen-cli

pub mod check;
pub mod generate;
pub mod list;
pub mod summary;

pub use check::run_check;
pub use generate::{Sink, run_generate};
pub use list::run_list;
pub use summary::run_summary;

use std::path::Path;

use handlergen_registry::{Manifest, ToolRegistry};
use handlergen_template::RenderOptions;
use tracing::debug;

use crate::cli::LayoutArgs;
use crate::error::Result;

/// Build the registry from a manifest file, or from the built-in tables.
pub fn load_registry(manifest: Option<&Path>) -> Result<ToolRegistry> {
    let registry = match manifest {
        Some(path) => {
            debug!(path = %path.display(), "using manifest");
            Manifest::load(path)?.into_registry()?
        }
        None => ToolRegistry::with_builtins()?,
    };
    Ok(registry)
}

impl LayoutArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: usize::from(self.indent),
            category: self.category,
            banners: !self.no_banners,
        }
    }
}
