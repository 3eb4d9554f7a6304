//! Lexer state management
//! Fixed character tables and the state that survives between lines

use crate::frontend::core::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Reserved words, case-sensitive
pub const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "define", "fn", "let", "var", "auto", "const", "in", "break",
    "continue", "return", "import", "from", "as", "throw", "try", "catch", "finally", "switch",
    "case", "default", "async", "await", "class", "this", "super", "null", "true", "false",
    "private", "public", "protected", "internal", "static", "using", "namespace", "object",
    "dynamic", "enum", "is", "not",
];

/// Characters that can never be part of an identifier
pub const IDENTIFIER_ILLEGAL: &[char] = &[
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+', '=', '[', ']', '{', '}',
    '|', '\\', ';', ':', '\'', '"', ',', '.', '<', '>', '/', '?', ' ', '\t', '\r', '\n', '\0',
];

/// Characters skipped between tokens
pub const SKIP_CHARS: &[char] = &[' ', '\t', '\r', '\0'];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

static ILLEGAL_SET: Lazy<HashSet<char>> =
    Lazy::new(|| IDENTIFIER_ILLEGAL.iter().copied().collect());

/// Single-character escapes: the character after `\` and what it decodes to.
/// Both quote escapes decode to an apostrophe.
static SIMPLE_ESCAPES: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('\\', '\\'),
        ('\'', '\''),
        ('"', '\''),
        ('0', '\0'),
        ('a', '\u{07}'),
        ('b', '\u{08}'),
        ('f', '\u{0C}'),
        ('n', '\n'),
        ('r', '\r'),
        ('t', '\t'),
        ('v', '\u{0B}'),
    ])
});

/// Look up a single-character escape
pub fn simple_escape(c: char) -> Option<char> {
    SIMPLE_ESCAPES.get(&c).copied()
}

/// Check if a character is skipped between tokens
#[inline]
pub fn is_skip_char(c: char) -> bool {
    SKIP_CHARS.contains(&c)
}

/// Check if a character may appear inside an identifier
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    !ILLEGAL_SET.contains(&c)
}

/// Check if a character may start an identifier
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    is_identifier_char(c) && !c.is_ascii_digit()
}

/// Check if a word is reserved
#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Lexer state carried from one line to the next
#[derive(Debug, Default)]
pub struct LexerState {
    /// Inside `/* ... */` that has not been closed yet
    pub in_block_comment: bool,
}

impl LexerState {
    /// Create new lexer state
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a scanned word
    pub fn word_kind(
        &self,
        word: &str,
    ) -> TokenKind {
        match word {
            "null" => TokenKind::Null,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            w if is_keyword(w) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        }
    }
}
