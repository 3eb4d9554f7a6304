//! Core front-end layer
//! Tokenizer and the syntax tree it feeds

pub mod ast;
pub mod lexer;

// Re-export commonly used items
pub use lexer::{tokenize, tokenize_source, tokenize_with};
