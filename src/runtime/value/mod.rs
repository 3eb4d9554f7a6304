//! Core runtime value types
//!
//! Evaluation is outside this crate; values appear here because folded
//! literal nodes carry one.

pub mod runtime_value;
pub use runtime_value::*;

#[cfg(test)]
mod tests;
