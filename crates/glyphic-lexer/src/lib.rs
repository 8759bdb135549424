//! Glyphic lexer - turns mnemonic source into glyph tokens.
//!
//! Word-like runs are resolved against the instruction catalog; literals,
//! brackets and whitespace pass through unchanged.
//!
//! # Example
//!
//! ```
//! use glyphic_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("add 1 2").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Operator);
//! assert_eq!(tokens[0].text, "+");
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{
    decompose, is_delimiter, tokenize, tokenize_with, Lexer, LexerConfig, LexerError,
    StringPolicy, LAMBDA,
};
pub use token::{Position, Span, Token, TokenKind};
