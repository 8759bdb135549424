//! Token types for the Glyphic lexer.

use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Unbroken run of decimal digits.
    Number,
    /// Quoted span, quotes included.
    String,
    /// `@` followed by one character.
    Char,
    Paren,
    Bracket,
    /// Resolved glyph or raw fallback character.
    Operator,
    /// Any whitespace character, normalized to a single space.
    Space,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Paren => "PAREN",
            TokenKind::Bracket => "BRACKET",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Space => "SPACE",
        };
        write!(f, "{}", s)
    }
}

/// Position in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Character offset within the input.
    pub offset: usize,
    /// 0-indexed line number.
    pub line: usize,
    /// 0-indexed column number.
    pub column: usize,
}

impl Position {
    /// Create a new Position.
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the 1-indexed line number.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-indexed column number.
    pub fn column_number(&self) -> usize {
        self.column + 1
    }

    /// Advance this position by n characters on the same line.
    pub fn advance(&self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            line: self.line,
            column: self.column + n,
        }
    }
}

/// Source range covered by a token. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Number of source characters covered.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Output text. For operators this is the glyph, not the source.
    pub text: String,
    /// Source characters this token was produced from.
    pub span: Span,
}

impl Token {
    /// Create a new Token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, \"{}\")", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(10, 1, 5);
        assert_eq!(pos.line_number(), 2);
        assert_eq!(pos.column_number(), 6);

        let advanced = pos.advance(3);
        assert_eq!(advanced.offset, 13);
        assert_eq!(advanced.column, 8);
        assert_eq!(advanced.line, 1);
    }

    #[test]
    fn test_span_len() {
        let start = Position::new(4, 0, 4);
        let span = Span::new(start, start.advance(3));
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::Operator, "+", Span::default());
        assert_eq!(tok.to_string(), "Token(OPERATOR, \"+\")");
        assert_eq!(TokenKind::Space.to_string(), "SPACE");
    }
}
