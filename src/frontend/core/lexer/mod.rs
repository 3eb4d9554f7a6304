//! Lexer module
//!
//! Turns source lines into a flat token vector. Interpolated string tokens
//! carry their embedded expressions as nested token vectors.

pub mod interpolation;
pub mod literals;
pub mod state;
pub mod stream;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use stream::{StreamError, TokenStream};
pub use tokenizer::Lexer;
pub use tokens::{
    InterpolatedStringToken, InterpolationPart, LexError, SimpleToken, TextSegment, Token,
    TokenKind,
};

use crate::frontend::config::LexerConfig;

/// Tokenize source lines with the default configuration
///
/// Lines are processed strictly in order; an open `/* ... */` comment is the
/// only state carried from one line to the next.
pub fn tokenize<I, S>(lines: I) -> Result<Vec<Token>, LexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokenize_with(lines, &LexerConfig::default())
}

/// Tokenize source lines with an explicit configuration
pub fn tokenize_with<I, S>(
    lines: I,
    config: &LexerConfig,
) -> Result<Vec<Token>, LexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tracing::debug!(
        "Tokenizing source (brace matching: {})",
        config.brace_matching
    );

    let mut lexer = Lexer::new(config);
    for line in lines {
        lexer.next_line(line.as_ref()).map_err(|err| {
            tracing::debug!("Lexing failed [{}]: {}", err.code(), err);
            err
        })?;
    }

    let line_count = lexer.lines_processed();
    let tokens = lexer.finish();
    if tracing::enabled!(tracing::Level::TRACE) {
        tokens.iter().for_each(log_token);
    }
    tracing::debug!(
        "Tokenized {} lines into {} tokens",
        line_count,
        tokens.len()
    );
    Ok(tokens)
}

/// Tokenize a whole source text, splitting it into lines first
pub fn tokenize_source(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source.lines())
}

/// Log a token for debugging
fn log_token(token: &Token) {
    match token {
        Token::Simple(simple) => {
            tracing::trace!("{} {} {:?}", simple.position, simple.kind, simple.raw)
        }
        Token::Interpolated(interpolated) => {
            tracing::trace!(
                "{} {} with {} embedded expression(s)",
                interpolated.position,
                TokenKind::InterpolatedString,
                interpolated.embedded.len()
            );
            interpolated.embedded.iter().flatten().for_each(log_token);
        }
    }
}
