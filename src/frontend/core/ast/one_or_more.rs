//! Non-empty sequences

use std::ops::Deref;

/// A sequence holding at least one element
///
/// Used wherever the grammar requires one or more children, such as the
/// names bound by a `for` loop or the conditions guarding a `case`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOrMore<T>(Vec<T>);

impl<T> OneOrMore<T> {
    /// A sequence with exactly one element
    pub fn new(first: T) -> Self {
        Self(vec![first])
    }

    /// Build from a vector, or `None` if it is empty
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    /// The first element, which always exists
    pub fn head(&self) -> &T {
        &self.0[0]
    }

    pub fn push(
        &mut self,
        item: T,
    ) {
        self.0.push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for OneOrMore<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<T> for OneOrMore<T> {
    fn from(item: T) -> Self {
        Self::new(item)
    }
}

impl<T> IntoIterator for OneOrMore<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
