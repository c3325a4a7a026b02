//! Summary command

use handlergen_registry::{Summary, ToolRegistry};

use crate::error::Result;

/// Run the summary command
pub fn run_summary(registry: &ToolRegistry) -> Result<()> {
    println!("{}", Summary::of(registry));
    Ok(())
}
