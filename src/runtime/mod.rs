//! Runtime types shared with the evaluator

pub mod value;
