//! Access nodes - indexing, slicing and calls

use super::node::Expression;
use super::one_or_more::OneOrMore;
use indexmap::IndexMap;

/// `object[i]`, `object[i][j]`, `object?[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct Indexer {
    pub object: Expression,
    /// One entry per bracket pair
    pub indices: OneOrMore<Expression>,
    /// `?[` short-circuits to null when `object` is null
    pub null_conditional: bool,
}

/// One `start:stop:step` triple; every part may be omitted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliceRange {
    pub start: Option<Expression>,
    pub stop: Option<Expression>,
    pub step: Option<Expression>,
}

/// `object[a:b]`, `object[a:b:c][::2]`, `object?[a:]`
#[derive(Debug, Clone, PartialEq)]
pub struct Slicer {
    pub object: Expression,
    pub ranges: OneOrMore<SliceRange>,
    pub null_conditional: bool,
}

/// Call of whatever `reference` evaluates to
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub reference: Expression,
    pub arguments: Vec<Expression>,
    /// Keyword arguments in source order
    pub keyword_arguments: IndexMap<String, Expression>,
    /// `f?(...)` evaluates to null instead of failing when `f` is null
    pub null_conditional: bool,
}

impl Call {
    /// Positional call without keyword arguments
    pub fn positional(
        reference: Expression,
        arguments: Vec<Expression>,
    ) -> Self {
        Self {
            reference,
            arguments,
            keyword_arguments: IndexMap::new(),
            null_conditional: false,
        }
    }

    /// Total number of arguments
    pub fn arity(&self) -> usize {
        self.arguments.len() + self.keyword_arguments.len()
    }
}
