//! Lumen scripting language front end
//!
//! Tokenizer and syntax tree for a small dynamically typed scripting
//! language that is parsed into a tree and walked directly.
//!
//! # Example
//!
//! ```
//! use lumen::{tokenize, TokenKind};
//!
//! let tokens = tokenize(["let x = 1 + 2;"]).unwrap();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod runtime;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::config::{BraceMatching, FrontendConfig, LexerConfig};
pub use frontend::core::ast;
pub use frontend::core::lexer::{
    tokenize, tokenize_source, tokenize_with, InterpolatedStringToken, LexError, Token,
    TokenKind, TokenStream,
};
pub use runtime::value::Value;
pub use util::span::Position;

use ::std::fs;
use ::std::path::Path;
use tracing::debug;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Lumen";

/// Read a source file and tokenize it
///
/// # Example
///
/// ```no_run
/// use lumen::{tokenize_file, Result};
/// use std::path::Path;
///
/// fn main() -> Result<()> {
///     let tokens = tokenize_file(Path::new("script.lm"))?;
///     println!("{} tokens", tokens.len());
///     Ok(())
/// }
/// ```
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>> {
    debug!("Reading source file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let tokens = tokenize_source(&source)
        .with_context(|| format!("Failed to tokenize: {}", path.display()))?;
    Ok(tokens)
}

/// Same as [`tokenize_file`], with an explicit configuration
pub fn tokenize_file_with(
    path: &Path,
    config: &LexerConfig,
) -> Result<Vec<Token>> {
    debug!("Reading source file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let tokens = tokenize_with(source.lines(), config)
        .with_context(|| format!("Failed to tokenize: {}", path.display()))?;
    Ok(tokens)
}
