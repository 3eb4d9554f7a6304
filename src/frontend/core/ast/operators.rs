//! Operator nodes
//!
//! Operators are stored as their source symbol. Precedence is resolved by
//! whoever builds the tree, so nesting already reflects evaluation order.

use super::node::Expression;

/// `left <operator> right`; assignments such as `x = 1` and `x += 1` included
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Expression,
    pub right: Expression,
    pub operator: String,
}

/// `<operator> operand`, e.g. `!done`, `-x`, `++i`
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operand: Expression,
    pub operator: String,
}

/// `condition ? then : otherwise`
#[derive(Debug, Clone, PartialEq)]
pub struct Ternary {
    pub condition: Expression,
    pub then: Expression,
    pub otherwise: Expression,
}

/// `value ?? fallback`
#[derive(Debug, Clone, PartialEq)]
pub struct NullCoalescing {
    pub value: Expression,
    pub fallback: Expression,
}
