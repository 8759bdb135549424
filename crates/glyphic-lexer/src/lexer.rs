//! Lexer for Glyphic mnemonic source.
//!
//! The lexer makes a single forward pass over a fully materialized input.
//! Literals, brackets and whitespace are passed through; every other run of
//! non-delimiter characters is decomposed into operator glyphs by repeatedly
//! taking the longest prefix that names exactly one catalog instruction.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use glyphic_catalog::Catalog;
use thiserror::Error;
use tracing::{debug, trace};

use crate::token::{Position, Span, Token, TokenKind};

/// Marker that opens a lambda in the target language. Ends a word-like run.
pub const LAMBDA: char = 'λ';

/// Errors that can occur during lexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Expected character after '@' at line {line}, column {column}")]
    UnterminatedChar { line: usize, column: usize },

    #[error("Unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
}

/// How to treat a string literal with no closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringPolicy {
    /// Fail the whole pass with [`LexerError::UnterminatedString`].
    #[default]
    Reject,
    /// Emit a string token running from the opening quote to end of input.
    ExtendToEnd,
}

/// Lexer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub unterminated_strings: StringPolicy,
}

/// Lexer tokenizes Glyphic source code.
pub struct Lexer<'c> {
    chars: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    catalog: Catalog<'c>,
    config: LexerConfig,
    pending: VecDeque<Token>,
    failed: bool,
}

impl Lexer<'static> {
    /// Create a new lexer over the standard catalog.
    pub fn new(input: &str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    /// Create a new lexer over the standard catalog with custom options.
    pub fn with_config(input: &str, config: LexerConfig) -> Self {
        Self::with_catalog(input, Catalog::standard(), config)
    }
}

impl<'c> Lexer<'c> {
    /// Create a lexer that resolves names against `catalog`.
    pub fn with_catalog(input: &str, catalog: Catalog<'c>, config: LexerConfig) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
            line: 0,
            column: 0,
            catalog,
            config,
            pending: VecDeque::new(),
            failed: false,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn current_position(&self) -> Position {
        Position::new(self.position, self.line, self.column)
    }

    /// Consume one character, keeping line tracking up to date.
    fn read_char(&mut self) {
        if let Some(ch) = self.current() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn make_token(&self, kind: TokenKind, text: String, start: Position) -> Token {
        Token::new(kind, text, Span::new(start, self.current_position()))
    }

    /// Get the next token, or `None` once the input is exhausted.
    ///
    /// An error ends the pass: every later call returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        if self.failed {
            return Ok(None);
        }
        let result = self.lex_token();
        if result.is_err() {
            self.failed = true;
            self.pending.clear();
        }
        result
    }

    fn lex_token(&mut self) -> Result<Option<Token>, LexerError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }

            let Some(ch) = self.current() else {
                return Ok(None);
            };
            let start = self.current_position();

            match ch {
                c if c.is_whitespace() => {
                    self.read_char();
                    return Ok(Some(self.make_token(TokenKind::Space, " ".to_string(), start)));
                }
                '#' => self.skip_comment(),
                '"' => return self.read_string().map(Some),
                '@' => return self.read_char_literal().map(Some),
                '(' | ')' => {
                    self.read_char();
                    return Ok(Some(self.make_token(TokenKind::Paren, ch.to_string(), start)));
                }
                '[' | ']' => {
                    self.read_char();
                    return Ok(Some(self.make_token(TokenKind::Bracket, ch.to_string(), start)));
                }
                c if c.is_ascii_digit() => return Ok(Some(self.read_number())),
                _ => self.read_word(),
            }
        }
    }

    /// Skip a comment and the line break that ends it.
    fn skip_comment(&mut self) {
        while let Some(ch) = self.current() {
            self.read_char();
            if ch == '\n' {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.current_position();
        while self.current().is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }
        let text = self.slice(start.offset, self.position);
        self.make_token(TokenKind::Number, text, start)
    }

    /// Read a quoted string literal, keeping both quotes in the token text.
    fn read_string(&mut self) -> Result<Token, LexerError> {
        let start = self.current_position();
        self.read_char(); // consume opening quote

        while self.current().is_some_and(|ch| ch != '"') {
            self.read_char();
        }

        if self.current().is_none() {
            match self.config.unterminated_strings {
                StringPolicy::Reject => {
                    return Err(LexerError::UnterminatedString {
                        line: start.line_number(),
                        column: start.column_number(),
                    });
                }
                StringPolicy::ExtendToEnd => {
                    debug!(offset = start.offset, "string literal runs to end of input");
                }
            }
        } else {
            self.read_char(); // consume closing quote
        }

        let text = self.slice(start.offset, self.position);
        Ok(self.make_token(TokenKind::String, text, start))
    }

    /// Read `@` and the single character after it.
    fn read_char_literal(&mut self) -> Result<Token, LexerError> {
        let start = self.current_position();
        if self.position + 1 >= self.chars.len() {
            return Err(LexerError::UnterminatedChar {
                line: start.line_number(),
                column: start.column_number(),
            });
        }
        self.read_char(); // consume @
        self.read_char();
        let text = self.slice(start.offset, self.position);
        Ok(self.make_token(TokenKind::Char, text, start))
    }

    /// Collect a word-like run and queue the operators it decomposes into.
    fn read_word(&mut self) {
        let start = self.current_position();
        // The lead character is always part of the run, even a bare lambda.
        self.read_char();
        while self.current().is_some_and(|ch| !is_delimiter(ch)) {
            self.read_char();
        }
        let run = self.slice(start.offset, self.position);
        self.pending.extend(decompose(self.catalog, &run, start));
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Check if a character ends a word-like run.
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '[' | ']' | '"' | '#' | '@' | LAMBDA)
}

/// Split a word-like run into operator tokens.
///
/// Each step emits the glyph of the longest uniquely-resolving prefix, or the
/// first character verbatim when no prefix resolves. `run` must not contain
/// line breaks; `start` is the position of its first character.
pub fn decompose(catalog: Catalog<'_>, run: &str, start: Position) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = run;
    let mut at = start;

    while let Some(first) = rest.chars().next() {
        let (consumed, text) = match catalog.resolve_longest_prefix(rest) {
            Some(found) => {
                trace!(
                    mnemonic = &rest[..found.len],
                    glyph = found.instruction.glyph,
                    "resolved mnemonic"
                );
                (found.len, found.instruction.glyph.to_string())
            }
            None => {
                debug!(ch = %first, offset = at.offset, "no mnemonic matches, passing through");
                (first.len_utf8(), first.to_string())
            }
        };

        let end = at.advance(rest[..consumed].chars().count());
        tokens.push(Token::new(TokenKind::Operator, text, Span::new(at, end)));
        at = end;
        rest = &rest[consumed..];
    }

    tokens
}

/// Tokenize an input string into a vector of tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    tokenize_with(input, LexerConfig::default())
}

/// Tokenize with custom options.
pub fn tokenize_with(input: &str, config: LexerConfig) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::with_config(input, config);
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.next_token()? {
        tokens.push(tok);
    }
    debug!(chars = lexer.chars.len(), tokens = tokens.len(), "lexed input");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphic_catalog::Instruction;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_add_statement() {
        let tokens = tokenize("add 1 2").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Operator,
                TokenKind::Space,
                TokenKind::Number,
                TokenKind::Space,
                TokenKind::Number,
            ]
        );
        assert_eq!(texts(&tokens), vec!["+", " ", "1", " ", "2"]);
    }

    #[test]
    fn test_glyph_passes_through() {
        let mnemonic = tokenize("add 1 2").unwrap();
        let symbolic = tokenize("+ 1 2").unwrap();
        assert_eq!(mnemonic[0].kind, TokenKind::Operator);
        assert_eq!(mnemonic[0].text, symbolic[0].text);
    }

    #[test]
    fn test_longest_match_then_raw_characters() {
        let tokens = tokenize("addition").unwrap();
        assert_eq!(texts(&tokens), vec!["+", "i", "t", "i", "o", "n"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_adjacent_mnemonics() {
        let tokens = tokenize("dupswap").unwrap();
        assert_eq!(texts(&tokens), vec![".", ":"]);

        let tokens = tokenize("reversefold").unwrap();
        assert_eq!(texts(&tokens), vec!["⇌", "fold"]);
    }

    #[test]
    fn test_unique_prefixes() {
        let tokens = tokenize("rev tran gte nop").unwrap();
        assert_eq!(texts(&tokens), vec!["⇌", " ", "⍉", " ", ">=", " ", "∘"]);
    }

    #[test]
    fn test_ambiguous_alias_falls_back() {
        // "gt" also prefixes "gte"
        let tokens = tokenize("gt").unwrap();
        assert_eq!(texts(&tokens), vec!["g", "t"]);
    }

    #[test]
    fn test_digit_led_alias_lexes_number_first() {
        let tokens = tokenize("2dup").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Operator]);
        assert_eq!(texts(&tokens), vec!["2", "."]);

        let tokens = tokenize("z2dup").unwrap();
        assert_eq!(texts(&tokens), vec!["z", "˙"]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 0 123456789").unwrap();
        assert_eq!(texts(&tokens), vec!["42", " ", "0", " ", "123456789"]);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[4].kind, TokenKind::Number);
    }

    #[test]
    fn test_number_has_no_fraction() {
        let tokens = tokenize("3.14").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
            ]
        );
        // ".14" is a single word-like run with no matching mnemonic
        assert_eq!(texts(&tokens), vec!["3", ".", "1", "4"]);
    }

    #[test]
    fn test_strings() {
        let tokens = tokenize(r#""hello world" "(#@)""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "\"hello world\"");
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "\"(#@)\"");
    }

    #[test]
    fn test_multiline_string() {
        let tokens = tokenize("\"a\nb\" add").unwrap();
        assert_eq!(tokens[0].text, "\"a\nb\"");
        assert_eq!(tokens[2].span.start.line, 1);
        assert_eq!(tokens[2].span.start.column, 3);
    }

    #[test]
    fn test_unterminated_string_rejected() {
        let result = tokenize("add \"hello");
        assert_eq!(
            result,
            Err(LexerError::UnterminatedString { line: 1, column: 5 })
        );
    }

    #[test]
    fn test_unterminated_string_extended() {
        let config = LexerConfig {
            unterminated_strings: StringPolicy::ExtendToEnd,
        };
        let tokens = tokenize_with("add \"hello", config).unwrap();
        assert_eq!(texts(&tokens), vec!["+", " ", "\"hello"]);
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].span.len(), 6);
    }

    #[test]
    fn test_char_literal() {
        let tokens = tokenize("@x").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[0].text, "@x");
    }

    #[test]
    fn test_char_literal_takes_any_character() {
        let tokens = tokenize("@ @@@\"").unwrap();
        assert_eq!(texts(&tokens), vec!["@ ", "@@", "@\""]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Char));
    }

    #[test]
    fn test_unterminated_char() {
        assert_eq!(
            tokenize("@"),
            Err(LexerError::UnterminatedChar { line: 1, column: 1 })
        );
        assert_eq!(
            tokenize("add\n  @"),
            Err(LexerError::UnterminatedChar { line: 2, column: 3 })
        );
    }

    #[test]
    fn test_parens_and_brackets() {
        let tokens = tokenize("(add)[1 2]").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Paren,
                TokenKind::Operator,
                TokenKind::Paren,
                TokenKind::Bracket,
                TokenKind::Number,
                TokenKind::Space,
                TokenKind::Number,
                TokenKind::Bracket,
            ]
        );
        assert_eq!(texts(&tokens), vec!["(", "+", ")", "[", "1", " ", "2", "]"]);
    }

    #[test]
    fn test_comment_stripped_with_line_break() {
        let commented = tokenize("# hello\nadd").unwrap();
        let plain = tokenize("add").unwrap();
        assert_eq!(texts(&commented), texts(&plain));
        assert_eq!(kinds(&commented), kinds(&plain));
    }

    #[test]
    fn test_trailing_comment() {
        let tokens = tokenize("add # the rest is ignored").unwrap();
        assert_eq!(texts(&tokens), vec!["+", " "]);
    }

    #[test]
    fn test_comment_ends_word() {
        let tokens = tokenize("add#x\nsub").unwrap();
        assert_eq!(texts(&tokens), vec!["+", "-"]);
    }

    #[test]
    fn test_whitespace_and_comment_only() {
        let tokens = tokenize("  # nothing here\n").unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Space));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_whitespace_normalized() {
        let tokens = tokenize("add\tsub\r\nmul").unwrap();
        assert_eq!(texts(&tokens), vec!["+", " ", "-", " ", " ", "×"]);
    }

    #[test]
    fn test_lambda_splits_runs() {
        let tokens = tokenize("λdup").unwrap();
        assert_eq!(texts(&tokens), vec!["λ", "."]);

        let tokens = tokenize("dupλ").unwrap();
        assert_eq!(texts(&tokens), vec![".", "λ"]);
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        let tokens = tokenize("Add ⍉ %").unwrap();
        assert_eq!(texts(&tokens), vec!["A", "d", "d", " ", "⍉", " ", "%"]);
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokenize("add\n swap").unwrap();
        assert_eq!(tokens[0].span.start, Position::new(0, 0, 0));
        assert_eq!(tokens[0].span.end, Position::new(3, 0, 3));
        assert_eq!(tokens[2].span.start, Position::new(4, 1, 0));
        assert_eq!(tokens[3].span.start, Position::new(5, 1, 1));
        assert_eq!(tokens[3].span.len(), 4);
    }

    #[test]
    fn test_decompose_covers_run() {
        let catalog = Catalog::standard();
        let start = Position::new(7, 2, 3);
        for run in ["addition", "minabc", "gtλ", "reversefold", "zzz", "2dup"] {
            let tokens = decompose(catalog, run, start);
            assert!(!tokens.is_empty());
            assert_eq!(tokens[0].span.start, start);
            for pair in tokens.windows(2) {
                assert_eq!(pair[0].span.end, pair[1].span.start);
            }
            let covered: usize = tokens.iter().map(|t| t.span.len()).sum();
            assert_eq!(covered, run.chars().count(), "run: {}", run);
        }
    }

    #[test]
    fn test_custom_catalog() {
        static TABLE: &[Instruction] = &[
            Instruction::new("∧", &["and"]),
            Instruction::new("∃", &["any"]),
        ];
        let catalog = Catalog::new(TABLE);
        let tokens: Vec<Token> = Lexer::with_catalog("an any", catalog, LexerConfig::default())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(texts(&tokens), vec!["a", "n", " ", "∃"]);
    }

    #[test]
    fn test_iterator_stops_at_error() {
        let mut lexer = Lexer::new("add @");
        assert_eq!(lexer.next().unwrap().unwrap().text, "+");
        assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Space);
        assert!(matches!(
            lexer.next(),
            Some(Err(LexerError::UnterminatedChar { .. }))
        ));
        assert!(lexer.next().is_none());
        assert_eq!(lexer.next_token(), Ok(None));
    }

    #[test]
    fn test_error_reported_once() {
        let items: Vec<_> = Lexer::new("add @").take(10).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().filter(|item| item.is_err()).count(), 1);

        let mut count = 0;
        for _ in Lexer::new("\"add") {
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_long_runs() {
        let tokens = tokenize(&"x".repeat(100_000)).unwrap();
        assert_eq!(tokens.len(), 100_000);
        assert!(tokens.iter().all(|t| t.text == "⊻"));

        let tokens = tokenize(&"q".repeat(100_000)).unwrap();
        assert_eq!(tokens.len(), 100_000);
        assert_eq!(tokens[99_999].span.start.offset, 99_999);
    }
}
