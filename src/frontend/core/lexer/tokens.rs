//! Token types

use crate::util::span::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexer error
///
/// Tokenization stops at the first error; there is no recovery mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error("Unterminated interpolation at {position}")]
    UnterminatedInterpolation { position: Position },
    #[error("Unmatched '}}' in interpolated string at {position}")]
    UnmatchedClosingBrace { position: Position },
    #[error("Expected a quote after '$' at {position}, found {}", describe(.found))]
    InvalidInterpolationPrefix {
        found: Option<char>,
        position: Position,
    },
    #[error("Escape sequence at end of input at {position}")]
    EscapeAtEndOfInput { position: Position },
    #[error("Invalid unicode escape '\\{sequence}' at {position}")]
    InvalidUnicodeEscape { sequence: String, position: Position },
    #[error("Interpolated strings nested {depth} deep (limit {limit}) at {position}")]
    InterpolationTooDeep {
        depth: usize,
        limit: usize,
        position: Position,
    },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of line".to_string(),
    }
}

impl LexError {
    /// Location of the offending character
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnterminatedInterpolation { position }
            | LexError::UnmatchedClosingBrace { position }
            | LexError::InvalidInterpolationPrefix { position, .. }
            | LexError::EscapeAtEndOfInput { position }
            | LexError::InvalidUnicodeEscape { position, .. }
            | LexError::InterpolationTooDeep { position, .. } => *position,
        }
    }

    /// Line of the offending character
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "L0001",
            LexError::UnterminatedInterpolation { .. } => "L0002",
            LexError::UnmatchedClosingBrace { .. } => "L0003",
            LexError::InvalidInterpolationPrefix { .. } => "L0004",
            LexError::EscapeAtEndOfInput { .. } => "L0005",
            LexError::InvalidUnicodeEscape { .. } => "L0006",
            LexError::InterpolationTooDeep { .. } => "L0007",
        }
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Operator,

    // Brackets
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenSquare,
    CloseSquare,

    // Punctuation
    Arrow,
    DoubleArrow,
    Dot,
    Comma,
    Colon,
    Semicolon,
    QuestionMark,
    Equals,

    // Words
    Keyword,
    Identifier,

    // Literals
    String,
    InterpolatedString,
    Int,
    Float,
    Null,
    True,
    False,
}

impl TokenKind {
    /// Upper-case name used in diagnostics and token dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Operator => "OPERATOR",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenCurly => "OPEN_CURLY",
            TokenKind::CloseCurly => "CLOSE_CURLY",
            TokenKind::OpenSquare => "OPEN_SQUARE",
            TokenKind::CloseSquare => "CLOSE_SQUARE",
            TokenKind::Arrow => "ARROW",
            TokenKind::DoubleArrow => "DOUBLE_ARROW",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::Equals => "EQUALS",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::InterpolatedString => "INTERPOLATED_STRING",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Null => "NULL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }

    /// Whether this kind opens or closes a bracket pair
    pub fn is_bracket(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::OpenCurly
                | TokenKind::CloseCurly
                | TokenKind::OpenSquare
                | TokenKind::CloseSquare
        )
    }

    /// Whether this kind is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::InterpolatedString
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Null
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified fragment of one source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleToken {
    pub kind: TokenKind,
    /// Source text, or the decoded value for string literals
    pub raw: String,
    pub position: Position,
}

impl SimpleToken {
    pub fn new(
        kind: TokenKind,
        raw: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            raw: raw.into(),
            position,
        }
    }
}

/// Entry of an interpolated string's text list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSegment {
    /// Literal text between embedded expressions
    Text(String),
    /// Stands for the next stream in `embedded`
    Embedded,
}

/// One piece of an interpolated string in source order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationPart<'a> {
    Text(&'a str),
    Embedded(&'a [Token]),
}

/// Interpolated string literal with its embedded expressions already tokenized
///
/// The number of [`TextSegment::Embedded`] markers in `segments` always equals
/// `embedded.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedStringToken {
    pub position: Position,
    pub segments: Vec<TextSegment>,
    pub embedded: Vec<Vec<Token>>,
}

impl InterpolatedStringToken {
    /// Walk the literal in source order, pairing each marker with its stream
    pub fn parts(&self) -> impl Iterator<Item = InterpolationPart<'_>> + '_ {
        let mut streams = self.embedded.iter();
        self.segments.iter().filter_map(move |segment| match segment {
            TextSegment::Text(text) => Some(InterpolationPart::Text(text)),
            TextSegment::Embedded => streams
                .next()
                .map(|tokens| InterpolationPart::Embedded(tokens.as_slice())),
        })
    }

    /// Number of embedded-expression markers
    pub fn marker_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, TextSegment::Embedded))
            .count()
    }

    /// Concatenated literal text, with embedded expressions left out
    pub fn literal_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                TextSegment::Text(text) => Some(text.as_str()),
                TextSegment::Embedded => None,
            })
            .collect()
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Simple(SimpleToken),
    Interpolated(InterpolatedStringToken),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Simple(token) => token.kind,
            Token::Interpolated(_) => TokenKind::InterpolatedString,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Token::Simple(token) => token.position,
            Token::Interpolated(token) => token.position,
        }
    }

    /// Line the token started on
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// Raw text of a simple token
    pub fn raw(&self) -> Option<&str> {
        match self {
            Token::Simple(token) => Some(&token.raw),
            Token::Interpolated(_) => None,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleToken> {
        match self {
            Token::Simple(token) => Some(token),
            Token::Interpolated(_) => None,
        }
    }

    pub fn as_interpolated(&self) -> Option<&InterpolatedStringToken> {
        match self {
            Token::Interpolated(token) => Some(token),
            Token::Simple(_) => None,
        }
    }

    /// Check kind and raw text at once, e.g. `is(TokenKind::Keyword, "let")`
    pub fn is(
        &self,
        kind: TokenKind,
        raw: &str,
    ) -> bool {
        self.kind() == kind && self.raw() == Some(raw)
    }
}

impl From<SimpleToken> for Token {
    fn from(token: SimpleToken) -> Self {
        Token::Simple(token)
    }
}

impl From<InterpolatedStringToken> for Token {
    fn from(token: InterpolatedStringToken) -> Self {
        Token::Interpolated(token)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Token::Simple(token) => write!(f, "{} '{}'", token.kind, token.raw),
            Token::Interpolated(token) => write!(
                f,
                "{} ({} segments, {} embedded)",
                TokenKind::InterpolatedString,
                token.segments.len(),
                token.embedded.len()
            ),
        }
    }
}
