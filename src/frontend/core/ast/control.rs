//! Control flow nodes

use super::definitions::TypeName;
use super::node::{Expression, Statement};
use super::one_or_more::OneOrMore;
use crate::util::span::Position;

/// `if (condition) { then } else { otherwise }`
///
/// `else if` chains hold a single `If` statement in `else_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expression,
    pub then_body: Vec<Statement>,
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// `for (a, b in iterator) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub names: OneOrMore<String>,
    pub iterator: Expression,
    pub body: Vec<Statement>,
}

/// `case a, b: body`; only valid inside a [`Switch`]
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub conditions: OneOrMore<Expression>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub condition: Expression,
    pub cases: Vec<CaseClause>,
    pub default: Option<Vec<Statement>>,
}

/// `catch (name: Type) { body }`; only valid inside a [`Try`]
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// Variable bound to the thrown value
    pub name: Option<String>,
    pub exception_type: Option<TypeName>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Try {
    pub body: Vec<Statement>,
    pub catch: Option<CatchClause>,
    pub finally: Option<Vec<Statement>>,
}
