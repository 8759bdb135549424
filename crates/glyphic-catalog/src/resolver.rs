//! Name resolution over a [`Catalog`].
//!
//! A query resolves only when exactly one instruction owns an alias that
//! starts with it. [`resolve_longest_prefix`] applies that rule to the
//! longest possible prefix of a word-like run first and shortens it until a
//! unique instruction is found.

use crate::catalog::Catalog;
use crate::instruction::Instruction;

/// Outcome of a prefix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one instruction has an alias starting with the query.
    Unique(&'a Instruction),
    /// Several instructions match; holds how many.
    Ambiguous(usize),
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The resolved instruction, if the lookup was unique.
    pub fn instruction(&self) -> Option<&'a Instruction> {
        match *self {
            Resolution::Unique(inst) => Some(inst),
            Resolution::Ambiguous(_) | Resolution::NotFound => None,
        }
    }
}

/// A uniquely-resolving prefix of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Length of the matched prefix in bytes. Always a char boundary.
    pub len: usize,
    pub instruction: &'a Instruction,
}

/// Resolve `query` as a case-sensitive prefix of the catalog's aliases.
pub fn resolve_exact<'a>(catalog: Catalog<'a>, query: &str) -> Resolution<'a> {
    let mut matches = catalog
        .iter()
        .filter(|inst| inst.has_alias_prefixed_by(query));

    match (matches.next(), matches.count()) {
        (None, _) => Resolution::NotFound,
        (Some(inst), 0) => Resolution::Unique(inst),
        (Some(_), rest) => Resolution::Ambiguous(rest + 1),
    }
}

/// Find the longest prefix of `text` that resolves to a single instruction.
///
/// Returns `None` when no non-empty prefix resolves uniquely. Prefixes
/// longer than the catalog's longest alias are never tried.
pub fn resolve_longest_prefix<'a>(catalog: Catalog<'a>, text: &str) -> Option<PrefixMatch<'a>> {
    let mut end = catalog.max_alias_len().min(text.len());
    while end > 0 {
        if text.is_char_boundary(end) {
            if let Some(instruction) = resolve_exact(catalog, &text[..end]).instruction() {
                return Some(PrefixMatch { len: end, instruction });
            }
        }
        end -= 1;
    }
    None
}
