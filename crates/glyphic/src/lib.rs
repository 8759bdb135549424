//! Glyphic - translate mnemonic source into a glyph-based array language.
//!
//! Source written with typable names such as `add`, `reduce` or `2dup` is
//! rewritten into the symbolic form the interpreter accepts. Names may be
//! abbreviated to any prefix that identifies a single instruction.
//!
//! # Example
//!
//! ```
//! use glyphic::translate;
//!
//! assert_eq!(translate("reduce add [1 2 3]").unwrap(), "/ + [1 2 3]");
//! ```

pub use glyphic_catalog as catalog;
pub use glyphic_lexer as lexer;

// Re-export commonly used types
pub use glyphic_catalog::{Catalog, Instruction, PrefixMatch, Resolution};
pub use glyphic_lexer::{
    tokenize, tokenize_with, Lexer, LexerConfig, LexerError, Position, Span, StringPolicy,
    Token, TokenKind,
};

/// Join token texts, in order, into the translated program.
pub fn assemble(tokens: &[Token]) -> String {
    tokens.iter().map(|tok| tok.text.as_str()).collect()
}

/// Translate mnemonic source using the default lexer options.
///
/// # Example
///
/// ```
/// use glyphic::translate;
///
/// assert_eq!(translate("dup mul # square").unwrap(), ". × ");
/// ```
pub fn translate(source: &str) -> Result<String, LexerError> {
    translate_with(source, LexerConfig::default())
}

/// Translate mnemonic source with custom lexer options.
pub fn translate_with(source: &str, config: LexerConfig) -> Result<String, LexerError> {
    let tokens = tokenize_with(source, config)?;
    Ok(assemble(&tokens))
}
