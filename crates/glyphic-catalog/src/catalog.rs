//! Read-only instruction catalog.

use crate::instruction::{Instruction, STANDARD_INSTRUCTIONS};
use crate::resolver::{self, PrefixMatch, Resolution};

/// An ordered, immutable view over a set of instructions.
///
/// The catalog never changes after construction, so it can be copied freely
/// and shared between threads without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog<'a> {
    instructions: &'a [Instruction],
}

impl Catalog<'static> {
    /// The built-in vocabulary of the target glyph language.
    pub fn standard() -> Self {
        Self::new(STANDARD_INSTRUCTIONS)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Catalog<'a> {
    /// Create a catalog over a custom instruction table.
    pub const fn new(instructions: &'a [Instruction]) -> Self {
        Self { instructions }
    }

    /// All instructions, in table order.
    pub fn all(&self) -> &'a [Instruction] {
        self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Length in bytes of the longest alias. No longer prefix can resolve.
    pub fn max_alias_len(&self) -> usize {
        self.iter()
            .flat_map(|inst| inst.aliases.iter())
            .map(|alias| alias.len())
            .max()
            .unwrap_or(0)
    }

    /// Find the first instruction with the given glyph.
    pub fn find_by_glyph(&self, glyph: &str) -> Option<&'a Instruction> {
        self.iter().find(|inst| inst.glyph == glyph)
    }

    /// Find the instruction owning exactly this alias.
    pub fn find_by_alias(&self, alias: &str) -> Option<&'a Instruction> {
        self.iter().find(|inst| inst.aliases.iter().any(|a| *a == alias))
    }

    /// See [`resolver::resolve_exact`].
    pub fn resolve_exact(&self, query: &str) -> Resolution<'a> {
        resolver::resolve_exact(*self, query)
    }

    /// See [`resolver::resolve_longest_prefix`].
    pub fn resolve_longest_prefix(&self, text: &str) -> Option<PrefixMatch<'a>> {
        resolver::resolve_longest_prefix(*self, text)
    }
}

impl<'a> IntoIterator for Catalog<'a> {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
