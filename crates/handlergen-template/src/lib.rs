//! Markup templates and handler generators for handlergen.
//!
//! The crate turns registered tools into the `if (type === "tool-...")`
//! branches the front-end's message renderer is built from.
//!
//! - [`template`] - typed templates with named, validated slots
//! - [`generator`] - write and query handler generators
//! - [`document`] - whole-registry rendering with section banners
//! - [`tags`] - recovering tool names from rendered source

pub mod document;
pub mod error;
pub mod generator;
pub mod style;
pub mod tags;
pub mod template;

pub use document::{RenderOptions, render_document, render_tools};
pub use error::{Error, Result};
pub use generator::{
    DEFAULT_INDENT, HandlerGenerator, generate_factory_handler, generate_handler,
    generate_read_handler, generate_utility_handler, generate_write_handler,
};
pub use style::{FACTORY_STYLE, QueryStyle, READ_STYLE, UTILITY_STYLE};
pub use tags::extract_tool_tags;
pub use template::{Slots, Template};
