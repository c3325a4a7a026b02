//! List command for registered tools

use colored::Colorize;
use handlergen_registry::{ToolCategory, ToolDescriptor, ToolRegistry};

use crate::error::Result;

/// Run the list command
pub fn run_list(registry: &ToolRegistry, category: Option<ToolCategory>, json: bool) -> Result<()> {
    let tools: Vec<&ToolDescriptor> = match category {
        Some(cat) => registry.by_category(cat),
        None => registry.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    println!("{}", "Registered Tools".bold());
    println!();

    for cat in ToolCategory::ALL {
        if category.is_some_and(|c| c != cat) {
            continue;
        }

        let in_category = registry.by_category(cat);
        if in_category.is_empty() {
            continue;
        }

        println!("{} ({}):", cat.label().cyan().bold(), in_category.len());
        for tool in in_category {
            match (&tool.title, tool.color) {
                (Some(title), Some(color)) => {
                    println!("  {:<36} {} ({})", tool.name.green(), title, color.to_string().dimmed());
                }
                _ => println!("  {}", tool.name.green()),
            }
        }
        println!();
    }

    println!("{} {} tools", "Total:".dimmed(), tools.len());

    Ok(())
}
