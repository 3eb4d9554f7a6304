//! Abstract syntax tree
//!
//! The node shapes a parser builds from a token stream and an evaluator
//! walks. Nodes are plain data: immutable after construction, owning their
//! children, with no back-references.
//!
//! Whether a node may stand in statement or expression position is a
//! property of its kind ([`NodeKind::capabilities`]). The [`Statement`] and
//! [`Expression`] wrappers can only be built from nodes with the matching
//! capability, so misplaced nodes are rejected when the tree is assembled.

pub mod access;
pub mod control;
pub mod definitions;
pub mod folded;
pub mod modules;
pub mod node;
pub mod one_or_more;
pub mod operators;
pub mod visit;

#[cfg(test)]
mod tests;

pub use access::{Call, Indexer, SliceRange, Slicer};
pub use control::{CaseClause, CatchClause, For, If, Switch, Try, While};
pub use definitions::{
    Accessibility, ClassDefinition, EnumDefinition, Function, FunctionDefinition, Parameter,
    TypeName, VariableDefinition,
};
pub use folded::FoldedLiteral;
pub use modules::{Import, ImportItem, ImportSet};
pub use node::{Capabilities, Expression, Node, NodeKind, Role, RoleError, Statement, StringPart};
pub use one_or_more::OneOrMore;
pub use operators::{Binary, NullCoalescing, Ternary, Unary};
pub use visit::{walk_body, walk_case, walk_catch, walk_node, AstNode, Visitor};
