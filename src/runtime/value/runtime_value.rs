//! Runtime value representation
//!
//! `Value` is the opaque type an evaluator produces and folded literals carry.
//! Scalars and strings are immutable. Lists and dictionaries are shared,
//! interior-mutable containers:
//! - `clone()` aliases the container (both handles see the same storage)
//! - `shallow_copy()` creates a new container holding the same elements

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared list storage
pub type ListRef = Arc<RwLock<Vec<Value>>>;

/// Shared dictionary storage, iterated in insertion order
pub type DictRef = Arc<RwLock<IndexMap<DictKey, Value>>>;

/// Runtime value
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Immutable text, shared on clone
    String(Arc<str>),
    List(ListRef),
    Dict(DictRef),
}

/// Hashable subset of values usable as dictionary keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictKey {
    Null,
    Bool(bool),
    Int(i64),
    String(Arc<str>),
}

impl Value {
    /// Create a list value owning a fresh container
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    /// Create a dictionary value owning a fresh container
    pub fn dict<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (DictKey, Value)>,
    {
        Value::Dict(Arc::new(RwLock::new(entries.into_iter().collect())))
    }

    /// Create a string value
    pub fn string(text: &str) -> Self {
        Value::String(Arc::from(text))
    }

    /// Name of the value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }

    /// Whether the value owns mutable container storage
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dict(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Float value; integers widen
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements of a list or dictionary
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.read().len()),
            Value::Dict(entries) => Some(entries.read().len()),
            _ => None,
        }
    }

    /// Copy the outer container, sharing its elements.
    ///
    /// Mutating the copy (push, insert, remove) is not visible through the
    /// original. Nested containers are the same objects in both. Scalars
    /// and strings are returned as plain clones.
    pub fn shallow_copy(&self) -> Self {
        match self {
            Value::List(items) => Value::list(items.read().clone()),
            Value::Dict(entries) => Value::Dict(Arc::new(RwLock::new(entries.read().clone()))),
            other => other.clone(),
        }
    }

    /// Whether two values are the same container object
    ///
    /// Always `false` for scalars and strings.
    pub fn ptr_eq(
        &self,
        other: &Value,
    ) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Dict(a), Value::Dict(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Convert to a dictionary key, if the value is hashable
    pub fn to_key(&self) -> Option<DictKey> {
        match self {
            Value::Null => Some(DictKey::Null),
            Value::Bool(b) => Some(DictKey::Bool(*b)),
            Value::Int(n) => Some(DictKey::Int(*n)),
            Value::String(s) => Some(DictKey::String(Arc::clone(s))),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality; containers compare element by element.
    ///
    /// NaN equals NaN, so a value always equals a copy of itself. A pair of
    /// containers already under comparison is treated as equal, which lets
    /// self-referencing containers compare without unbounded recursion.
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        structural_eq(self, other, &mut Vec::new())
    }
}

/// Identity of a container's shared storage
fn container_id(value: &Value) -> Option<usize> {
    match value {
        Value::List(items) => Some(Arc::as_ptr(items) as *const () as usize),
        Value::Dict(entries) => Some(Arc::as_ptr(entries) as *const () as usize),
        _ => None,
    }
}

fn structural_eq(
    left: &Value,
    right: &Value,
    in_progress: &mut Vec<(usize, usize)>,
) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::List(a), Value::List(b)) if Arc::ptr_eq(a, b) => true,
        (Value::Dict(a), Value::Dict(b)) if Arc::ptr_eq(a, b) => true,
        (Value::List(_), Value::List(_)) | (Value::Dict(_), Value::Dict(_)) => {
            let (Some(l), Some(r)) = (container_id(left), container_id(right)) else {
                return false;
            };
            if in_progress.contains(&(l, r)) {
                return true;
            }
            in_progress.push((l, r));
            let equal = match (left, right) {
                (Value::List(a), Value::List(b)) => {
                    let (a, b) = (a.read(), b.read());
                    a.len() == b.len()
                        && a.iter().zip(b.iter()).all(|(x, y)| structural_eq(x, y, in_progress))
                }
                (Value::Dict(a), Value::Dict(b)) => {
                    let (a, b) = (a.read(), b.read());
                    a.len() == b.len()
                        && a.iter().all(|(key, x)| {
                            b.get(key)
                                .map(|y| structural_eq(x, y, in_progress))
                                .unwrap_or(false)
                        })
                }
                _ => false,
            };
            in_progress.pop();
            equal
        }
        _ => false,
    }
}

impl From<DictKey> for Value {
    fn from(key: DictKey) -> Self {
        match key {
            DictKey::Null => Value::Null,
            DictKey::Bool(b) => Value::Bool(b),
            DictKey::Int(n) => Value::Int(n),
            DictKey::String(s) => Value::String(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<&str> for DictKey {
    fn from(s: &str) -> Self {
        DictKey::String(Arc::from(s))
    }
}

impl From<i64> for DictKey {
    fn from(n: i64) -> Self {
        DictKey::Int(n)
    }
}

impl fmt::Display for DictKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            DictKey::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", Value::from(other.clone())),
        }
    }
}

impl fmt::Display for Value {
    /// A container that appears inside itself is shown as `[...]` or `{...}`
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    open: &mut Vec<usize>,
) -> fmt::Result {
    if let Some(id) = container_id(value) {
        if open.contains(&id) {
            return match value {
                Value::Dict(_) => write!(f, "{{...}}"),
                _ => write!(f, "[...]"),
            };
        }
        open.push(id);
    }

    match value {
        Value::Null => write!(f, "null")?,
        Value::Bool(b) => write!(f, "{}", b)?,
        Value::Int(n) => write!(f, "{}", n)?,
        Value::Float(x) => write!(f, "{}", x)?,
        Value::String(s) => write!(f, "{}", s)?,
        Value::List(items) => {
            write!(f, "[")?;
            for (i, item) in items.read().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_nested(f, item, open)?;
            }
            write!(f, "]")?;
        }
        Value::Dict(entries) => {
            write!(f, "{{")?;
            for (i, (key, item)) in entries.read().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: ", key)?;
                write_nested(f, item, open)?;
            }
            write!(f, "}}")?;
        }
    }

    if value.is_container() {
        open.pop();
    }
    Ok(())
}

/// Strings inside containers are shown quoted
fn write_nested(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    open: &mut Vec<usize>,
) -> fmt::Result {
    match value {
        Value::String(s) => write!(f, "{:?}", s),
        other => write_value(f, other, open),
    }
}
