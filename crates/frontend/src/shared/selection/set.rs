//! The selection value handed from the aggregator to its consumers.

use serde::Serialize;
use std::collections::HashSet;

/// Ordered, duplicate-free list of checked row identifiers.
///
/// Order follows DOM traversal. A new value is built on every change; holders
/// never mutate one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<String>);

/// Selection size as seen by bound controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Empty,
    Single,
    Multiple,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from values in traversal order, keeping the first
    /// occurrence of each identifier.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let ids = values
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        Self(ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|v| v == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn cardinality(&self) -> Cardinality {
        match self.0.len() {
            0 => Cardinality::Empty,
            1 => Cardinality::Single,
            _ => Cardinality::Multiple,
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
