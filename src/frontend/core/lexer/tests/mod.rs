//! Lexer tests module
//!
//! - basic: identifiers, keywords, whitespace, line accounting
//! - literals: numbers, escaped and raw strings
//! - operators: operators and punctuation
//! - comments: line and block comments
//! - interpolation: interpolated strings and brace policies
//! - errors: fatal lexing failures
//! - stream: token stream cursor
//! - state: keyword, identifier and escape tables


use crate::frontend::core::lexer::{tokenize, Token, TokenKind};

/// Tokenize a single line, panicking on failure
pub(crate) fn lex(line: &str) -> Vec<Token> {
    tokenize([line]).unwrap()
}

/// Kinds and raw text of simple tokens, for compact assertions
pub(crate) fn shape(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|t| (t.kind(), t.raw().unwrap_or("").to_string()))
        .collect()
}

pub(crate) fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}
