//! Definition nodes - variables, functions, classes, enums

use super::node::{Expression, Statement};
use super::one_or_more::OneOrMore;
use indexmap::IndexMap;
use std::fmt;

/// Visibility modifier
///
/// Stored as written; this layer attaches no meaning to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accessibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

impl Accessibility {
    /// Keyword spelling
    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Private => "private",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
        }
    }

    /// Parse a modifier keyword
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "public" => Some(Accessibility::Public),
            "private" => Some(Accessibility::Private),
            "protected" => Some(Accessibility::Protected),
            "internal" => Some(Accessibility::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Declared type annotation, kept as written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        TypeName(name.to_string())
    }
}

impl fmt::Display for TypeName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `let a, b: int = value` and property-style definitions with `get`/`set` bodies
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub names: OneOrMore<String>,
    pub value: Option<Expression>,
    pub declared_type: Option<TypeName>,
    pub getter: Option<Vec<Statement>>,
    pub setter: Option<Vec<Statement>>,
    pub is_constant: bool,
    pub is_static: bool,
    pub accessibility: Accessibility,
}

impl VariableDefinition {
    /// Plain mutable variable with an optional initial value
    pub fn simple(
        name: impl Into<String>,
        value: Option<Expression>,
    ) -> Self {
        Self {
            names: OneOrMore::new(name.into()),
            value,
            declared_type: None,
            getter: None,
            setter: None,
            is_constant: false,
            is_static: false,
            accessibility: Accessibility::default(),
        }
    }

    /// Whether a custom getter or setter is attached
    pub fn has_accessors(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub declared_type: Option<TypeName>,
    /// Evaluated when the argument is omitted
    pub default: Option<Expression>,
    /// Collects the remaining positional arguments
    pub variadic: bool,
}

impl Parameter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default: None,
            variadic: false,
        }
    }

    /// Whether the argument may be omitted at a call site
    pub fn is_optional(&self) -> bool {
        self.default.is_some() || self.variadic
    }
}

/// Signature and body shared by function statements and function expressions
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeName>,
    pub body: Vec<Statement>,
    pub is_static: bool,
    pub accessibility: Accessibility,
}

impl Function {
    pub fn new(
        parameters: Vec<Parameter>,
        body: Vec<Statement>,
    ) -> Self {
        Self {
            parameters,
            return_type: None,
            body,
            is_static: false,
            accessibility: Accessibility::default(),
        }
    }

    /// Number of parameters that must be supplied
    pub fn required_arity(&self) -> usize {
        self.parameters.iter().filter(|p| !p.is_optional()).count()
    }
}

/// `fn name(params) { body }` in statement position
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub function: Function,
}

/// `class Name : Base1, Base2 { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub name: String,
    pub body: Vec<Statement>,
    pub super_classes: Vec<TypeName>,
    pub is_static: bool,
    pub accessibility: Accessibility,
}

/// `enum Name { A, B = 2 }`; members keep declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    pub members: IndexMap<String, Option<Expression>>,
    pub accessibility: Accessibility,
}
