//! Token stream cursor
//!
//! The handle a parser uses to walk a fully materialized token vector.

use crate::frontend::core::lexer::tokens::{Token, TokenKind};
use crate::util::span::Position;
use thiserror::Error;

/// Errors raised while consuming a token stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("Expected {expected} but found {found} at {position}")]
    UnexpectedToken {
        expected: TokenKind,
        found: String,
        position: Position,
    },
    #[error("Expected {expected} but reached the end of input")]
    UnexpectedEnd { expected: TokenKind },
}

/// Cursor over a token vector
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Create a new stream positioned at the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Current token without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Token `distance` places ahead of the current one
    pub fn peek_ahead(
        &self,
        distance: usize,
    ) -> Option<&Token> {
        self.tokens.get(self.position + distance)
    }

    /// Kind of the current token
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(Token::kind)
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Whether the current token has the given kind
    pub fn check(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consume the current token if it has the given kind
    pub fn eat(
        &mut self,
        kind: TokenKind,
    ) -> Option<&Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume the current token if it is the given keyword or operator text
    pub fn eat_text(
        &mut self,
        kind: TokenKind,
        raw: &str,
    ) -> bool {
        let matches = self.peek().map(|t| t.is(kind, raw)).unwrap_or(false);
        if matches {
            self.position += 1;
        }
        matches
    }

    /// Consume the current token, failing if it is not of the given kind
    pub fn expect(
        &mut self,
        kind: TokenKind,
    ) -> Result<&Token, StreamError> {
        match self.tokens.get(self.position) {
            Some(token) if token.kind() == kind => {
                self.position += 1;
                Ok(&self.tokens[self.position - 1])
            }
            Some(token) => Err(StreamError::UnexpectedToken {
                expected: kind,
                found: token.to_string(),
                position: token.position(),
            }),
            None => Err(StreamError::UnexpectedEnd { expected: kind }),
        }
    }

    /// Whether every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Index of the current token
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move back to an earlier index, for backtracking
    pub fn reset(
        &mut self,
        position: usize,
    ) {
        self.position = position.min(self.tokens.len());
    }

    /// Tokens not consumed yet
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
