//! Glyphic catalog - the instruction vocabulary and its name resolver.
//!
//! # Example
//!
//! ```
//! use glyphic_catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! let found = catalog.resolve_longest_prefix("addition").unwrap();
//! assert_eq!(found.len, 3);
//! assert_eq!(found.instruction.glyph, "+");
//! ```

pub mod catalog;
pub mod instruction;
pub mod resolver;

pub use catalog::Catalog;
pub use instruction::{Instruction, STANDARD_INSTRUCTIONS};
pub use resolver::{resolve_exact, resolve_longest_prefix, PrefixMatch, Resolution};
