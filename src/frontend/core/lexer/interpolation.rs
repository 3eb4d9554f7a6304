//! Interpolated string scanning
//!
//! `$"..."` decodes escapes in its text, `$@"..."` keeps text verbatim.
//! Both recognise `{expr}` regions whose source is tokenized again as a
//! single line; `{{` and `}}` outside a region stand for literal braces.

use super::literals::decode_escape;
use super::tokenizer::Lexer;
use crate::frontend::config::BraceMatching;
use crate::frontend::core::lexer::tokens::*;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Offsets of `{` characters that have not been closed yet
enum OpenRegions {
    Stack(SmallVec<[usize; 4]>),
    Fifo(VecDeque<usize>),
}

impl OpenRegions {
    fn new(policy: BraceMatching) -> Self {
        match policy {
            BraceMatching::Stack => OpenRegions::Stack(SmallVec::new()),
            BraceMatching::Fifo => OpenRegions::Fifo(VecDeque::new()),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            OpenRegions::Stack(stack) => stack.is_empty(),
            OpenRegions::Fifo(queue) => queue.is_empty(),
        }
    }

    fn open(
        &mut self,
        at: usize,
    ) {
        match self {
            OpenRegions::Stack(stack) => stack.push(at),
            OpenRegions::Fifo(queue) => queue.push_back(at),
        }
    }

    /// Handle a `}` while at least one region is open.
    ///
    /// Returns the offset of the `{` that starts the completed region, or
    /// `None` when the brace only closes a nested pair.
    fn close(&mut self) -> Option<usize> {
        match self {
            OpenRegions::Stack(stack) => {
                let start = stack.pop();
                if stack.is_empty() {
                    start
                } else {
                    None
                }
            }
            OpenRegions::Fifo(queue) => queue.pop_front(),
        }
    }
}

/// Accumulates the text list and embedded streams of one literal
#[derive(Default)]
struct Segments {
    segments: Vec<TextSegment>,
    embedded: Vec<Vec<Token>>,
    buffer: String,
}

impl Segments {
    fn flush_text(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.segments.push(TextSegment::Text(text));
        }
    }

    fn push_embedded(
        &mut self,
        tokens: Vec<Token>,
    ) {
        self.flush_text();
        self.segments.push(TextSegment::Embedded);
        self.embedded.push(tokens);
    }
}

/// Scan an interpolated string starting at the `$` under the cursor
pub fn scan_interpolated(
    lexer: &mut Lexer<'_>,
    raw: bool,
) -> Result<(), LexError> {
    let start = lexer.offset();
    let depth = lexer.depth() + 1;
    let limit = lexer.config().max_interpolation_depth;
    if depth > limit {
        return Err(LexError::InterpolationTooDeep {
            depth,
            limit,
            position: lexer.position_at(start),
        });
    }

    let prefix = if raw { 2 } else { 1 };
    let quote = lexer.peek_at(prefix).unwrap_or('"');
    lexer.bump(prefix + 1);

    let mut regions = OpenRegions::new(lexer.config().brace_matching);
    let mut parts = Segments::default();

    loop {
        let at = lexer.offset();
        let Some(c) = lexer.current() else {
            return Err(if regions.is_empty() {
                LexError::UnterminatedString {
                    position: lexer.position_at(start),
                }
            } else {
                LexError::UnterminatedInterpolation {
                    position: lexer.position_at(at),
                }
            });
        };

        if regions.is_empty() {
            match c {
                '\\' if !raw => decode_escape(lexer, &mut parts.buffer)?,
                c if c == quote => {
                    lexer.bump(1);
                    break;
                }
                '{' => match lexer.peek_at(1) {
                    Some('{') => {
                        parts.buffer.push('{');
                        lexer.bump(2);
                    }
                    None => {
                        return Err(LexError::UnterminatedInterpolation {
                            position: lexer.position_at(at),
                        })
                    }
                    Some(_) => {
                        regions.open(at);
                        lexer.bump(1);
                    }
                },
                '}' => match lexer.peek_at(1) {
                    Some('}') => {
                        parts.buffer.push('}');
                        lexer.bump(2);
                    }
                    None => {
                        return Err(LexError::UnterminatedInterpolation {
                            position: lexer.position_at(at),
                        })
                    }
                    Some(_) => {
                        return Err(LexError::UnmatchedClosingBrace {
                            position: lexer.position_at(at),
                        })
                    }
                },
                c => {
                    parts.buffer.push(c);
                    lexer.bump(1);
                }
            }
            continue;
        }

        match c {
            c if c == quote => {
                return Err(LexError::UnterminatedInterpolation {
                    position: lexer.position_at(at),
                })
            }
            '{' => regions.open(at),
            '}' => {
                if let Some(open) = regions.close() {
                    let source = lexer.slice(open + 1, at);
                    let origin = lexer.position_at(open + 1);
                    let tokens = lexer.tokenize_embedded(&source, origin)?;
                    parts.push_embedded(tokens);
                }
            }
            _ => {}
        }
        lexer.bump(1);
    }

    parts.flush_text();
    lexer.emit_token(Token::Interpolated(InterpolatedStringToken {
        position: lexer.position_at(start),
        segments: parts.segments,
        embedded: parts.embedded,
    }));
    Ok(())
}
