//! Tokenizer implementation
//! Main lexer structure and the per-character dispatch for one line

use super::interpolation::scan_interpolated;
use super::literals::{scan_number, scan_raw_string, scan_string};
use super::state::{is_identifier_char, is_identifier_start, is_skip_char, LexerState};
use crate::frontend::config::LexerConfig;
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Position;

/// Line-oriented lexer
///
/// Lines are fed in order with [`Lexer::next_line`]. Only the block comment
/// flag survives from one line to the next.
pub struct Lexer<'c> {
    config: &'c LexerConfig,
    state: LexerState,
    /// Interpolation nesting of this lexer (0 for top-level source)
    depth: usize,
    /// Number of lines processed so far
    line: usize,
    /// Position of the first character of the current line
    origin: Position,
    chars: Vec<char>,
    offset: usize,
    tokens: Vec<Token>,
}

impl<'c> Lexer<'c> {
    /// Create a new lexer for top-level source
    pub fn new(config: &'c LexerConfig) -> Self {
        Self::with_depth(config, 0)
    }

    fn with_depth(
        config: &'c LexerConfig,
        depth: usize,
    ) -> Self {
        Self {
            config,
            state: LexerState::new(),
            depth,
            line: 0,
            origin: Position::dummy(),
            chars: Vec::new(),
            offset: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the next source line
    pub fn next_line(
        &mut self,
        line: &str,
    ) -> Result<(), LexError> {
        self.line += 1;
        let origin = Position::at(self.line, 0);
        self.scan_line(line, origin)
    }

    /// Number of lines processed so far
    pub fn lines_processed(&self) -> usize {
        self.line
    }

    /// Whether a `/*` comment is still open
    pub fn in_block_comment(&self) -> bool {
        self.state.in_block_comment
    }

    /// Consume the lexer and return every token produced
    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }

    pub(crate) fn config(&self) -> &'c LexerConfig {
        self.config
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Character at the scan position
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// Character `distance` places after the scan position
    #[inline]
    pub(crate) fn peek_at(
        &self,
        distance: usize,
    ) -> Option<char> {
        self.chars.get(self.offset + distance).copied()
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn bump(
        &mut self,
        count: usize,
    ) {
        self.offset += count;
    }

    /// Move the scan position back so a character is scanned again
    #[inline]
    pub(crate) fn rewind(
        &mut self,
        count: usize,
    ) {
        self.offset -= count;
    }

    /// Source position of the character at `offset` on the current line
    pub(crate) fn position_at(
        &self,
        offset: usize,
    ) -> Position {
        self.origin.shifted(offset)
    }

    /// Text of the current line between two offsets
    pub(crate) fn slice(
        &self,
        start: usize,
        end: usize,
    ) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Emit a simple token that started at `start`
    pub(crate) fn emit(
        &mut self,
        kind: TokenKind,
        raw: impl Into<String>,
        start: usize,
    ) {
        let position = self.position_at(start);
        self.tokens
            .push(Token::Simple(SimpleToken::new(kind, raw, position)));
    }

    pub(crate) fn emit_token(
        &mut self,
        token: Token,
    ) {
        self.tokens.push(token);
    }

    /// Tokenize the source of an embedded expression as a single synthetic line
    ///
    /// `origin` is where the expression starts in the enclosing line, so
    /// nested tokens keep real source positions.
    pub(crate) fn tokenize_embedded(
        &self,
        source: &str,
        origin: Position,
    ) -> Result<Vec<Token>, LexError> {
        tracing::debug!("Tokenizing embedded expression at {}: {:?}", origin, source);
        let mut nested = Lexer::with_depth(self.config, self.depth + 1);
        nested.line = origin.line;
        nested.scan_line(source, origin)?;
        Ok(nested.finish())
    }

    fn scan_line(
        &mut self,
        line: &str,
        origin: Position,
    ) -> Result<(), LexError> {
        self.chars = line.chars().collect();
        self.offset = 0;
        self.origin = origin;

        while let Some(c) = self.current() {
            if is_skip_char(c) {
                self.bump(1);
                continue;
            }

            // Line comments win over an open block comment, which then
            // stays open into the next line.
            if c == '#' || (c == '/' && self.peek_at(1) == Some('/')) {
                break;
            }

            if self.state.in_block_comment {
                self.step_block_comment();
                continue;
            }

            match c {
                // Nothing after the semicolon check can match ';', so the
                // character is consumed here.
                ';' => {
                    self.emit(TokenKind::Semicolon, ";", self.offset);
                    self.bump(1);
                }
                c if c.is_ascii_digit() => scan_number(self),
                c if is_identifier_start(c) => self.scan_identifier(),
                '!' | '=' | '<' | '>' | '|' | '&' | '*' | '%' | '+' | '-' | '/' => {
                    self.scan_operator(c)
                }
                '(' | ')' | '{' | '}' | '[' | ']' | '?' | '.' | ',' | ':' => {
                    self.scan_punctuation(c)
                }
                '"' | '\'' => scan_string(self)?,
                '$' => self.scan_dollar()?,
                '@' => {
                    if matches!(self.peek_at(1), Some('"' | '\'')) {
                        scan_raw_string(self)?;
                    } else {
                        tracing::debug!("Ignoring '@' at {}", self.position_at(self.offset));
                        self.bump(1);
                    }
                }
                other => {
                    tracing::debug!(
                        "Ignoring unrecognized character {:?} at {}",
                        other,
                        self.position_at(self.offset)
                    );
                    self.bump(1);
                }
            }
        }

        Ok(())
    }

    /// Advance one character inside a block comment, closing it at `*/`
    fn step_block_comment(&mut self) {
        if self.current() == Some('*') && self.peek_at(1) == Some('/') {
            self.state.in_block_comment = false;
            self.bump(2);
        } else {
            self.bump(1);
        }
    }

    /// Scan identifier, keyword or word literal
    fn scan_identifier(&mut self) {
        let start = self.offset;
        while self.current().map(is_identifier_char).unwrap_or(false) {
            self.bump(1);
        }
        let word = self.slice(start, self.offset);
        let kind = self.state.word_kind(&word);
        self.emit(kind, word, start);
    }

    /// Scan an operator with one character of lookahead, longest match first.
    fn scan_operator(
        &mut self,
        c: char,
    ) {
        let start = self.offset;
        let next = self.peek_at(1);

        let (kind, len) = match (c, next) {
            ('!', Some('=')) => (Some(TokenKind::Operator), 2),
            ('!', _) => (Some(TokenKind::Operator), 1),
            ('=', Some('=')) => (Some(TokenKind::Operator), 2),
            ('=', Some('>')) => (Some(TokenKind::DoubleArrow), 2),
            ('=', _) => (Some(TokenKind::Equals), 1),
            ('<' | '>', Some('=')) => (Some(TokenKind::Operator), 2),
            ('<' | '>', _) => (Some(TokenKind::Operator), 1),
            ('|', Some('|')) | ('&', Some('&')) => (Some(TokenKind::Operator), 2),
            // A single '|' or '&' is not an operator
            ('|' | '&', _) => (None, 1),
            ('*' | '%', Some('=')) => (Some(TokenKind::Operator), 2),
            ('*' | '%', _) => (Some(TokenKind::Operator), 1),
            ('-', Some('>')) => (Some(TokenKind::Arrow), 2),
            ('+', Some('+')) | ('-', Some('-')) => (Some(TokenKind::Operator), 2),
            ('+' | '-', Some('=')) => (Some(TokenKind::Operator), 2),
            ('+' | '-', _) => (Some(TokenKind::Operator), 1),
            ('/', Some('=')) => (Some(TokenKind::Operator), 2),
            ('/', Some('*')) => {
                self.state.in_block_comment = true;
                self.bump(2);
                return;
            }
            _ => (Some(TokenKind::Operator), 1),
        };

        if let Some(kind) = kind {
            let raw = self.slice(start, start + len);
            self.emit(kind, raw, start);
        } else {
            tracing::debug!("Ignoring lone {:?} at {}", c, self.position_at(start));
        }
        self.bump(len);
    }

    fn scan_punctuation(
        &mut self,
        c: char,
    ) {
        let kind = match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            '[' => TokenKind::OpenSquare,
            ']' => TokenKind::CloseSquare,
            '?' => TokenKind::QuestionMark,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            _ => TokenKind::Colon,
        };
        self.emit(kind, c.to_string(), self.offset);
        self.bump(1);
    }

    /// `$` must be followed by a quote (escaped) or `@` and a quote (raw)
    fn scan_dollar(&mut self) -> Result<(), LexError> {
        match (self.peek_at(1), self.peek_at(2)) {
            (Some('"' | '\''), _) => scan_interpolated(self, false),
            (Some('@'), Some('"' | '\'')) => scan_interpolated(self, true),
            (Some('@'), found) => Err(LexError::InvalidInterpolationPrefix {
                found,
                position: self.position_at(self.offset + 2),
            }),
            (found, _) => Err(LexError::InvalidInterpolationPrefix {
                found,
                position: self.position_at(self.offset + 1),
            }),
        }
    }
}
