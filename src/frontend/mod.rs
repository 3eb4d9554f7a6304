//! Front end
//!
//! Source lines are tokenized into a flat token stream; a parser (outside
//! this crate) turns the stream into the syntax tree defined in
//! [`core::ast`], which an evaluator walks directly.

pub mod config;
pub mod core;

pub use config::{BraceMatching, ConfigError, FrontendConfig, LexerConfig};
