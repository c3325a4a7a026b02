//! Display styles for the query-shaped categories
//!
//! Read, factory and utility handlers share one template and differ only in
//! the loading message and the display component they hand the output to.

use handlergen_registry::ToolCategory;

/// How a non-transactional category renders its two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryStyle {
    pub category: ToolCategory,
    /// Shown by `ToolCallLoader` while the call is pending
    pub loading_message: &'static str,
    /// Component that displays the tool output
    pub component: &'static str,
    /// Property lines passed to `component`, one per line
    pub props: &'static str,
}

pub const READ_STYLE: QueryStyle = QueryStyle {
    category: ToolCategory::Read,
    loading_message: "Fetching data...",
    component: "ContractInfoDisplay",
    props: "title={output.message || \"Query Result\"}\n\
            data={output.data}\n\
            success={output.success}\n\
            error={output.error}",
};

pub const FACTORY_STYLE: QueryStyle = QueryStyle {
    category: ToolCategory::Factory,
    loading_message: "Querying factory...",
    component: "FactoryQueryResults",
    props: "data={output.data}\n\
            message={output.message}\n\
            success={output.success}\n\
            error={output.error}",
};

pub const UTILITY_STYLE: QueryStyle = QueryStyle {
    category: ToolCategory::Utility,
    loading_message: "Processing...",
    component: "UtilityResults",
    props: "data={output.data}\n\
            message={output.message}\n\
            success={output.success}\n\
            error={output.error}",
};

impl QueryStyle {
    /// Style for a category, or `None` for write tools.
    pub fn for_category(category: ToolCategory) -> Option<&'static QueryStyle> {
        match category {
            ToolCategory::Write => None,
            ToolCategory::Read => Some(&READ_STYLE),
            ToolCategory::Factory => Some(&FACTORY_STYLE),
            ToolCategory::Utility => Some(&UTILITY_STYLE),
        }
    }
}
