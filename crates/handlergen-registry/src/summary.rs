//! Per-category tool counts

use std::fmt;

use crate::store::ToolRegistry;
use crate::types::ToolCategory;

/// Tool counts for a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub write: usize,
    pub read: usize,
    pub factory: usize,
    pub utility: usize,
}

impl Summary {
    pub fn of(registry: &ToolRegistry) -> Self {
        Self {
            write: registry.count(ToolCategory::Write),
            read: registry.count(ToolCategory::Read),
            factory: registry.count(ToolCategory::Factory),
            utility: registry.count(ToolCategory::Utility),
        }
    }

    pub fn total(&self) -> usize {
        self.write + self.read + self.factory + self.utility
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WRITE tools: {}", self.write)?;
        writeln!(f, "READ tools: {}", self.read)?;
        writeln!(f, "Factory tools: {}", self.factory)?;
        writeln!(f, "Utility tools: {}", self.utility)?;
        write!(f, "Total: {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_summary() {
        let summary = Summary::of(&ToolRegistry::with_builtins().unwrap());
        assert_eq!(summary.total(), crate::BUILTIN_COUNT);
        assert_eq!(
            summary.to_string(),
            "WRITE tools: 16\nREAD tools: 21\nFactory tools: 12\nUtility tools: 17\nTotal: 66"
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::of(&ToolRegistry::new());
        assert_eq!(summary.total(), 0);
    }
}
