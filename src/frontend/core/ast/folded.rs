//! Folded literals
//!
//! A folded literal holds a value computed ahead of time, such as the
//! result of a constant expression or a default parameter evaluated once.
//! The same node may be evaluated many times, so every read of a list or
//! dictionary hands out a new container.

use crate::runtime::value::Value;

/// Already-evaluated leaf value
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedLiteral {
    value: Value,
}

impl FoldedLiteral {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Clone-on-read
    ///
    /// Scalars come back as equal values. Lists and dictionaries come back
    /// as a shallow copy, so two reads never share container storage and a
    /// mutation through one result is invisible to every other read.
    pub fn read(&self) -> Value {
        self.value.shallow_copy()
    }

    /// Borrow the stored value without copying
    ///
    /// Callers must not mutate containers reached through this reference.
    pub fn peek(&self) -> &Value {
        &self.value
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }
}

impl From<Value> for FoldedLiteral {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
