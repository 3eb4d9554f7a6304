//! Uniform node access and traversal
//!
//! [`AstNode`] gives diagnostics one interface over nodes and clauses.
//! [`Visitor`] walks a tree; every method defaults to visiting all children,
//! so an implementation only overrides what it inspects and calls the
//! matching `walk_*` function to keep descending.

use super::control::{CaseClause, CatchClause};
use super::node::{display_name_of, Capabilities, Expression, Node, NodeKind, StringPart, Statement};
use crate::util::span::Position;

/// Common interface for nodes and clauses
pub trait AstNode {
    /// Variant tag such as `IfNode`
    fn tag(&self) -> &'static str;

    fn position(&self) -> Position;

    fn capabilities(&self) -> Capabilities;

    /// Accept a visitor for traversing this node and its children
    fn accept(
        &self,
        visitor: &mut dyn Visitor,
    );

    /// Tag without the `Node` suffix, used in diagnostics
    fn display_name(&self) -> &'static str {
        display_name_of(self.tag())
    }

    fn line(&self) -> usize {
        self.position().line
    }
}

impl AstNode for Node {
    fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    fn position(&self) -> Position {
        self.position
    }

    fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    fn accept(
        &self,
        visitor: &mut dyn Visitor,
    ) {
        visitor.visit_node(self);
    }
}

impl AstNode for CaseClause {
    fn tag(&self) -> &'static str {
        "CaseNode"
    }

    fn position(&self) -> Position {
        self.position
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    fn accept(
        &self,
        visitor: &mut dyn Visitor,
    ) {
        visitor.visit_case(self);
    }
}

impl AstNode for CatchClause {
    fn tag(&self) -> &'static str {
        "CatchNode"
    }

    fn position(&self) -> Position {
        self.position
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    fn accept(
        &self,
        visitor: &mut dyn Visitor,
    ) {
        visitor.visit_catch(self);
    }
}

/// Tree visitor
pub trait Visitor {
    fn visit_node(
        &mut self,
        node: &Node,
    ) {
        walk_node(self, node);
    }

    fn visit_expression(
        &mut self,
        expression: &Expression,
    ) {
        self.visit_node(expression.node());
    }

    fn visit_statement(
        &mut self,
        statement: &Statement,
    ) {
        self.visit_node(statement.node());
    }

    fn visit_case(
        &mut self,
        case: &CaseClause,
    ) {
        walk_case(self, case);
    }

    fn visit_catch(
        &mut self,
        catch: &CatchClause,
    ) {
        walk_catch(self, catch);
    }
}

/// Visit every statement of a body in order
pub fn walk_body<V: Visitor + ?Sized>(
    visitor: &mut V,
    body: &[Statement],
) {
    for statement in body {
        visitor.visit_statement(statement);
    }
}

fn walk_optional<V: Visitor + ?Sized>(
    visitor: &mut V,
    expression: Option<&Expression>,
) {
    if let Some(expression) = expression {
        visitor.visit_expression(expression);
    }
}

/// Visit every direct child of `node` in source order
pub fn walk_node<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &Node,
) {
    match &node.kind {
        NodeKind::Int(_)
        | NodeKind::Float(_)
        | NodeKind::Bool(_)
        | NodeKind::Null
        | NodeKind::String(_)
        | NodeKind::Variable(_)
        | NodeKind::Break
        | NodeKind::Continue
        | NodeKind::Import(_)
        | NodeKind::Literal(_) => {}

        NodeKind::InterpolatedString(parts) => {
            for part in parts {
                if let StringPart::Expression(expression) = part {
                    visitor.visit_expression(expression);
                }
            }
        }
        NodeKind::List(items) => {
            for item in items {
                visitor.visit_expression(item);
            }
        }
        NodeKind::Dict(entries) => {
            for (key, value) in entries {
                visitor.visit_expression(key);
                visitor.visit_expression(value);
            }
        }

        NodeKind::Indexer(indexer) => {
            visitor.visit_expression(&indexer.object);
            for index in &indexer.indices {
                visitor.visit_expression(index);
            }
        }
        NodeKind::Slicer(slicer) => {
            visitor.visit_expression(&slicer.object);
            for range in &slicer.ranges {
                walk_optional(visitor, range.start.as_ref());
                walk_optional(visitor, range.stop.as_ref());
                walk_optional(visitor, range.step.as_ref());
            }
        }
        NodeKind::Call(call) => {
            visitor.visit_expression(&call.reference);
            for argument in &call.arguments {
                visitor.visit_expression(argument);
            }
            for argument in call.keyword_arguments.values() {
                visitor.visit_expression(argument);
            }
        }

        NodeKind::Binary(binary) => {
            visitor.visit_expression(&binary.left);
            visitor.visit_expression(&binary.right);
        }
        NodeKind::Unary(unary) => visitor.visit_expression(&unary.operand),
        NodeKind::Ternary(ternary) => {
            visitor.visit_expression(&ternary.condition);
            visitor.visit_expression(&ternary.then);
            visitor.visit_expression(&ternary.otherwise);
        }
        NodeKind::NullCoalescing(coalescing) => {
            visitor.visit_expression(&coalescing.value);
            visitor.visit_expression(&coalescing.fallback);
        }

        NodeKind::VariableDefinition(definition) => {
            walk_optional(visitor, definition.value.as_ref());
            if let Some(getter) = &definition.getter {
                walk_body(visitor, getter);
            }
            if let Some(setter) = &definition.setter {
                walk_body(visitor, setter);
            }
        }
        NodeKind::FunctionDefinition(definition) => {
            walk_function(visitor, &definition.function);
        }
        NodeKind::FunctionExpression(function) => walk_function(visitor, function),
        NodeKind::ClassDefinition(class) => walk_body(visitor, &class.body),
        NodeKind::EnumDefinition(definition) => {
            for value in definition.members.values() {
                walk_optional(visitor, value.as_ref());
            }
        }

        NodeKind::If(branch) => {
            visitor.visit_expression(&branch.condition);
            walk_body(visitor, &branch.then_body);
            if let Some(else_body) = &branch.else_body {
                walk_body(visitor, else_body);
            }
        }
        NodeKind::While(looping) => {
            visitor.visit_expression(&looping.condition);
            walk_body(visitor, &looping.body);
        }
        NodeKind::For(looping) => {
            visitor.visit_expression(&looping.iterator);
            walk_body(visitor, &looping.body);
        }
        NodeKind::Switch(switch) => {
            visitor.visit_expression(&switch.condition);
            for case in &switch.cases {
                visitor.visit_case(case);
            }
            if let Some(default) = &switch.default {
                walk_body(visitor, default);
            }
        }
        NodeKind::Try(attempt) => {
            walk_body(visitor, &attempt.body);
            if let Some(catch) = &attempt.catch {
                visitor.visit_catch(catch);
            }
            if let Some(finally) = &attempt.finally {
                walk_body(visitor, finally);
            }
        }
        NodeKind::Throw(value) | NodeKind::Return(value) => walk_optional(visitor, value.as_ref()),
    }
}

fn walk_function<V: Visitor + ?Sized>(
    visitor: &mut V,
    function: &super::definitions::Function,
) {
    for parameter in &function.parameters {
        walk_optional(visitor, parameter.default.as_ref());
    }
    walk_body(visitor, &function.body);
}

pub fn walk_case<V: Visitor + ?Sized>(
    visitor: &mut V,
    case: &CaseClause,
) {
    for condition in &case.conditions {
        visitor.visit_expression(condition);
    }
    walk_body(visitor, &case.body);
}

pub fn walk_catch<V: Visitor + ?Sized>(
    visitor: &mut V,
    catch: &CatchClause,
) {
    walk_body(visitor, &catch.body);
}
