//! Instruction definitions for the Glyphic vocabulary.
//!
//! Every instruction pairs the glyph understood by the downstream
//! interpreter with the mnemonic aliases a user may type instead.

use std::fmt;

/// A single instruction of the target glyph language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Canonical output form. May span several characters (`>=`, `fold`).
    pub glyph: &'static str,
    /// Lowercase ASCII mnemonics. Never empty.
    pub aliases: &'static [&'static str],
}

impl Instruction {
    /// Create a new Instruction.
    pub const fn new(glyph: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { glyph, aliases }
    }

    /// Returns the first alias, used as the instruction's display name.
    pub fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.glyph)
    }

    /// Check whether any alias starts with `prefix`.
    pub fn has_alias_prefixed_by(&self, prefix: &str) -> bool {
        self.aliases.iter().any(|alias| alias.starts_with(prefix))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.glyph, self.aliases.join(", "))
    }
}

/// The fixed vocabulary accepted by the downstream interpreter.
///
/// Order is stable but carries no meaning for resolution.
pub static STANDARD_INSTRUCTIONS: &[Instruction] = &[
    // =========================================================================
    // Declarations
    // =========================================================================
    Instruction::new("⟼", &["fun", "declare"]),
    // =========================================================================
    // Arithmetic and logic
    // =========================================================================
    Instruction::new("◿", &["modulo"]),
    Instruction::new("⍟", &["count"]),
    Instruction::new("⁁", &["all"]),
    Instruction::new("˙", &["2dup"]),
    Instruction::new("⊻", &["xor"]),
    Instruction::new("∧", &["and"]),
    Instruction::new("∨", &["or"]),
    Instruction::new("℀", &["accuracy"]),
    // =========================================================================
    // Casts
    // =========================================================================
    Instruction::new("⑀", &["makefraction"]),
    Instruction::new("ℚ", &["castfraction"]),
    Instruction::new("𝕐", &["caststring"]),
    Instruction::new("ℝ", &["castreal"]),
    Instruction::new("ℤ", &["castinteger"]),
    // =========================================================================
    // I/O
    // =========================================================================
    Instruction::new("↪", &["newline", "nl"]),
    Instruction::new("⇲", &["readfile"]),
    Instruction::new("⇱", &["writefile"]),
    // =========================================================================
    // Structure
    // =========================================================================
    Instruction::new("⬡", &["fragment"]),
    Instruction::new("≡", &["dearray"]),
    Instruction::new("⊓", &["bracket"]),
    Instruction::new("⊕", &["group"]),
    Instruction::new("⊞", &["table"]),
    Instruction::new("⍞", &["separate"]),
    Instruction::new("◫", &["split"]),
    Instruction::new("↧", &["minimum"]),
    Instruction::new("↥", &["maximum"]),
    Instruction::new("⍤", &["assert"]),
    // =========================================================================
    // Comparison
    // =========================================================================
    Instruction::new(">=", &["gte", "greaterequal"]),
    Instruction::new(">", &["gt", "greater"]),
    Instruction::new("<=", &["lte", "lessequal"]),
    Instruction::new("<", &["lt", "less"]),
    Instruction::new("!=", &["neq", "notequal"]),
    Instruction::new("=", &["eq", "equal"]),
    Instruction::new("¯", &["negate"]),
    Instruction::new("¬", &["not"]),
    // =========================================================================
    // Constants
    // =========================================================================
    Instruction::new("♮", &["nan"]),
    Instruction::new("⊥", &["false"]),
    Instruction::new("⊤", &["true"]),
    // =========================================================================
    // Array operations
    // =========================================================================
    Instruction::new("fold", &["fold"]),
    Instruction::new("∺", &["distribute"]),
    Instruction::new("⊟", &["couple"]),
    Instruction::new("⌖", &["exact"]),
    Instruction::new("⌕", &["find"]),
    Instruction::new("▽", &["keep"]),
    Instruction::new("⊙", &["dip"]),
    Instruction::new("∩", &["both"]),
    Instruction::new("∞", &["inf"]),
    Instruction::new("⚂", &["rand"]),
    Instruction::new("τ", &["tau"]),
    Instruction::new("η", &["eta"]),
    Instruction::new("π", &["pi"]),
    Instruction::new("~", &["trace"]),
    Instruction::new("⍖", &["sortdesc"]),
    Instruction::new("⍏", &["sortasc"]),
    Instruction::new("⍉", &["transpose"]),
    Instruction::new("⋯", &["enumerate"]),
    Instruction::new("□", &["box"]),
    Instruction::new("⊔", &["unbox"]),
    Instruction::new("⊝", &["deduplicate"]),
    Instruction::new("⊚", &["where"]),
    Instruction::new("⇡", &["range"]),
    Instruction::new("⊢", &["first"]),
    Instruction::new("⧻", &["length"]),
    Instruction::new("⚙", &["typeof"]),
    Instruction::new("∅", &["emptyset"]),
    Instruction::new("↯", &["reshape"]),
    Instruction::new("⍥", &["repeat"]),
    Instruction::new("△", &["shape"]),
    Instruction::new("∘", &["push"]),
    Instruction::new("∊", &["member"]),
    Instruction::new("⊗", &["indexof"]),
    Instruction::new("⊡", &["pick"]),
    Instruction::new("⊏", &["select"]),
    Instruction::new("⊂", &["join"]),
    Instruction::new("≅", &["match"]),
    Instruction::new("♭", &["deshape"]),
    Instruction::new("⇌", &["reverse"]),
    Instruction::new("↻", &["rot"]),
    Instruction::new("↘", &["drop"]),
    Instruction::new("↙", &["take"]),
    Instruction::new("÷", &["divide"]),
    Instruction::new("×", &["multiply"]),
    Instruction::new("+", &["add"]),
    Instruction::new("-", &["subtract"]),
    Instruction::new("∵", &["each"]),
    Instruction::new("∘", &["noop", "nop"]),
    Instruction::new("⊃", &["fork"]),
    // =========================================================================
    // Stack and control
    // =========================================================================
    Instruction::new("!", &["call"]),
    Instruction::new(":", &["swap"]),
    Instruction::new(".", &["duplicate"]),
    Instruction::new(",", &["over"]),
    Instruction::new("/", &["reduce"]),
    Instruction::new("\\", &["scan"]),
    Instruction::new("?", &["if"]),
];
