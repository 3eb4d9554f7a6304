//! AST tests module
//!
//! - node: roles, tags, display names, constructors
//! - clauses: switch/try clauses, imports, definitions
//! - visit: traversal order and coverage
//! - folded: clone-on-read of pre-evaluated literals

mod clauses;

use crate::frontend::core::ast::{Expression, Node, NodeKind, Statement};
use crate::util::span::Position;

pub(crate) fn at(line: usize) -> Position {
    Position::new(line, 1)
}

/// Build an expression, panicking if the kind is statement-only
pub(crate) fn expr(kind: NodeKind) -> Expression {
    Node::new(kind, at(1)).into_expression().unwrap()
}

/// Build a statement, panicking if the kind is expression-only
pub(crate) fn stmt(kind: NodeKind) -> Statement {
    Node::new(kind, at(1)).into_statement().unwrap()
}

pub(crate) fn int(value: i64) -> Expression {
    expr(NodeKind::Int(value))
}

pub(crate) fn var(name: &str) -> Expression {
    expr(NodeKind::Variable(name.to_string()))
}
