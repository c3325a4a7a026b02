//! Managed blocks for handlergen.
//!
//! Generated handlers are spliced into the renderer source between a pair of
//! line-comment markers. Everything between the markers belongs to the
//! generator; everything outside is left untouched.
//!
//! ```text
//!               // handlergen:block:stellar-tools
//!               if (type === "tool-tokenMint") { ... }
//!               // /handlergen:block:stellar-tools
//! ```
//!
//! Marker lines may be indented. Block ids are alphanumeric with hyphens and
//! underscores.

pub mod error;
pub mod io;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use io::{read_text, splice_file, write_atomic};
pub use parser::{Block, find_block, has_block, parse_blocks};
pub use writer::{insert_block, remove_block, update_block, upsert_block};
