//! Node sum type and position roles

use super::access::{Call, Indexer, Slicer};
use super::control::{For, If, Switch, Try, While};
use super::definitions::{
    ClassDefinition, EnumDefinition, Function, FunctionDefinition, VariableDefinition,
};
use super::folded::FoldedLiteral;
use super::modules::Import;
use super::operators::{Binary, NullCoalescing, Ternary, Unary};
use crate::util::span::Position;
use indexmap::IndexMap;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// AST node
///
/// Nodes are immutable once built and own their children outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

/// Piece of an interpolated string literal, evaluated lazily
#[derive(Debug, Clone, PartialEq)]
pub enum StringPart {
    Text(String),
    Expression(Expression),
}

/// Node kind
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // Literals
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    String(String),
    InterpolatedString(Vec<StringPart>),
    List(Vec<Expression>),
    Dict(Vec<(Expression, Expression)>),

    // Access
    Variable(String),
    Indexer(Indexer),
    Slicer(Slicer),
    Call(Call),

    // Operators
    Binary(Binary),
    Unary(Unary),
    Ternary(Ternary),
    NullCoalescing(NullCoalescing),

    // Definitions
    VariableDefinition(VariableDefinition),
    FunctionDefinition(FunctionDefinition),
    /// Anonymous function used as a value
    FunctionExpression(Function),
    ClassDefinition(ClassDefinition),
    EnumDefinition(EnumDefinition),

    // Control flow
    If(If),
    While(While),
    For(For),
    Switch(Switch),
    Try(Try),
    Throw(Option<Expression>),
    Return(Option<Expression>),
    Break,
    Continue,

    // Modules
    Import(Import),

    /// Pre-evaluated value
    Literal(FoldedLiteral),
}

/// Syntactic position a node may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Statement,
    Expression,
}

impl fmt::Display for Role {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Role::Statement => write!(f, "statement"),
            Role::Expression => write!(f, "expression"),
        }
    }
}

/// Roles a node kind is allowed to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub statement: bool,
    pub expression: bool,
}

impl Capabilities {
    /// Clauses that only live inside a specific parent
    pub const NONE: Self = Self {
        statement: false,
        expression: false,
    };
    pub const STATEMENT: Self = Self {
        statement: true,
        expression: false,
    };
    pub const EXPRESSION: Self = Self {
        statement: false,
        expression: true,
    };
    pub const BOTH: Self = Self {
        statement: true,
        expression: true,
    };

    pub fn allows(
        self,
        role: Role,
    ) -> bool {
        match role {
            Role::Statement => self.statement,
            Role::Expression => self.expression,
        }
    }
}

/// A node was placed in a position its kind does not support
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} cannot be used as {role} at {position}")]
pub struct RoleError {
    pub name: &'static str,
    pub role: Role,
    pub position: Position,
}

impl NodeKind {
    /// Variant tag, e.g. `IfNode`
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Int(_) => "IntNode",
            NodeKind::Float(_) => "FloatNode",
            NodeKind::Bool(_) => "BoolNode",
            NodeKind::Null => "NullNode",
            NodeKind::String(_) => "StringNode",
            NodeKind::InterpolatedString(_) => "InterpolatedStringNode",
            NodeKind::List(_) => "ListNode",
            NodeKind::Dict(_) => "DictNode",
            NodeKind::Variable(_) => "VariableNode",
            NodeKind::Indexer(_) => "IndexerNode",
            NodeKind::Slicer(_) => "SlicerNode",
            NodeKind::Call(_) => "CallNode",
            NodeKind::Binary(_) => "BinaryNode",
            NodeKind::Unary(_) => "UnaryNode",
            NodeKind::Ternary(_) => "TernaryNode",
            NodeKind::NullCoalescing(_) => "NullCoalescingNode",
            NodeKind::VariableDefinition(_) => "VariableDefinitionNode",
            NodeKind::FunctionDefinition(_) => "FunctionDefinitionNode",
            NodeKind::FunctionExpression(_) => "FunctionExpressionNode",
            NodeKind::ClassDefinition(_) => "ClassDefinitionNode",
            NodeKind::EnumDefinition(_) => "EnumDefinitionNode",
            NodeKind::If(_) => "IfNode",
            NodeKind::While(_) => "WhileNode",
            NodeKind::For(_) => "ForNode",
            NodeKind::Switch(_) => "SwitchNode",
            NodeKind::Try(_) => "TryNode",
            NodeKind::Throw(_) => "ThrowNode",
            NodeKind::Return(_) => "ReturnNode",
            NodeKind::Break => "BreakNode",
            NodeKind::Continue => "ContinueNode",
            NodeKind::Import(_) => "ImportNode",
            NodeKind::Literal(_) => "LiteralNode",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            // Expressions evaluated for their effect
            NodeKind::Call(_) | NodeKind::Binary(_) | NodeKind::Unary(_) => Capabilities::BOTH,

            NodeKind::VariableDefinition(_)
            | NodeKind::FunctionDefinition(_)
            | NodeKind::ClassDefinition(_)
            | NodeKind::EnumDefinition(_)
            | NodeKind::If(_)
            | NodeKind::While(_)
            | NodeKind::For(_)
            | NodeKind::Switch(_)
            | NodeKind::Try(_)
            | NodeKind::Throw(_)
            | NodeKind::Return(_)
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Import(_) => Capabilities::STATEMENT,

            NodeKind::Int(_)
            | NodeKind::Float(_)
            | NodeKind::Bool(_)
            | NodeKind::Null
            | NodeKind::String(_)
            | NodeKind::InterpolatedString(_)
            | NodeKind::List(_)
            | NodeKind::Dict(_)
            | NodeKind::Variable(_)
            | NodeKind::Indexer(_)
            | NodeKind::Slicer(_)
            | NodeKind::Ternary(_)
            | NodeKind::NullCoalescing(_)
            | NodeKind::FunctionExpression(_)
            | NodeKind::Literal(_) => Capabilities::EXPRESSION,
        }
    }
}

/// Strip the conventional `Node` suffix from a tag
pub(crate) fn display_name_of(tag: &'static str) -> &'static str {
    tag.strip_suffix("Node").unwrap_or(tag)
}

impl Node {
    pub fn new(
        kind: NodeKind,
        position: Position,
    ) -> Self {
        Self { kind, position }
    }

    /// Line the node starts on
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn variable(
        name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self::new(NodeKind::Variable(name.into()), position)
    }

    /// Call a function by name
    ///
    /// Built as a call whose reference is a variable lookup.
    pub fn call_by_name(
        name: impl Into<String>,
        arguments: Vec<Expression>,
        keyword_arguments: IndexMap<String, Expression>,
        position: Position,
    ) -> Self {
        let reference = Expression(Box::new(Self::variable(name, position)));
        Self::new(
            NodeKind::Call(Call {
                reference,
                arguments,
                keyword_arguments,
                null_conditional: false,
            }),
            position,
        )
    }

    /// Wrap a literal value computed ahead of time
    pub fn folded(
        literal: FoldedLiteral,
        position: Position,
    ) -> Self {
        Self::new(NodeKind::Literal(literal), position)
    }

    pub fn into_expression(self) -> Result<Expression, RoleError> {
        Expression::try_from(self)
    }

    pub fn into_statement(self) -> Result<Statement, RoleError> {
        Statement::try_from(self)
    }

    fn role_error(
        &self,
        role: Role,
    ) -> RoleError {
        RoleError {
            name: display_name_of(self.kind.tag()),
            role,
            position: self.position,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}@{}", display_name_of(self.kind.tag()), self.position)
    }
}

/// Node known to be valid in expression position
#[derive(Debug, Clone, PartialEq)]
pub struct Expression(Box<Node>);

/// Node known to be valid in statement position
#[derive(Debug, Clone, PartialEq)]
pub struct Statement(Box<Node>);

impl Expression {
    pub fn node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        *self.0
    }

    /// Reuse as a statement, e.g. a call evaluated for its effect
    pub fn into_statement(self) -> Result<Statement, RoleError> {
        Statement::try_from(self.into_node())
    }
}

impl Statement {
    pub fn node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        *self.0
    }
}

impl TryFrom<Node> for Expression {
    type Error = RoleError;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        if node.kind.capabilities().expression {
            Ok(Expression(Box::new(node)))
        } else {
            Err(node.role_error(Role::Expression))
        }
    }
}

impl TryFrom<Node> for Statement {
    type Error = RoleError;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        if node.kind.capabilities().statement {
            Ok(Statement(Box::new(node)))
        } else {
            Err(node.role_error(Role::Statement))
        }
    }
}

impl Deref for Expression {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl Deref for Statement {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Statement {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
