//! Tool registry for handlergen.
//!
//! Holds the classification of tool names into the four handler categories
//! (write, read, factory, utility) together with the display metadata write
//! tools need. The registry is built once, validated on the way in, and then
//! handed to the generators by reference.
//!
//! Two sources feed it:
//!
//! 1. **Built-in tables** - [`builtin_manifest`] mirrors the tool set shipped
//!    with the Stellar front-end.
//! 2. **Manifest files** - [`Manifest::load`] reads the same shape from TOML so
//!    a project can generate handlers for its own tools.

pub mod builtins;
pub mod error;
pub mod manifest;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

pub use builtins::{BUILTIN_COUNT, builtin_manifest};
pub use error::{Error, Result};
pub use manifest::{Manifest, WriteEntry};
pub use store::ToolRegistry;
pub use summary::Summary;
pub use types::{Color, ToolCategory, ToolDescriptor};
