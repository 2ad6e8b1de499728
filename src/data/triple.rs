//! Triples and triple sets.
use std::fmt;
use std::ops::Deref;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single `(subject, predicate, object)` fact.
///
/// Equality and hashing are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    subj: String,
    pred: String,
    obj: String,
}

impl Triple {
    pub fn new(subj: impl Into<String>, pred: impl Into<String>, obj: impl Into<String>) -> Self {
        Self {
            subj: subj.into(),
            pred: pred.into(),
            obj: obj.into(),
        }
    }

    /// Get a reference to the triple's subject.
    pub fn subj(&self) -> &str {
        &self.subj
    }

    /// Get a reference to the triple's predicate.
    pub fn pred(&self) -> &str {
        &self.pred
    }

    /// Get a reference to the triple's object.
    pub fn obj(&self) -> &str {
        &self.obj
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} | {} | {})", self.subj, self.pred, self.obj)
    }
}

/// Ordered, immutable sequence of [Triple]s.
///
/// Two triple sets are equal only if they hold equal triples *in the same order*,
/// which makes the type usable as a grouping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripleSet(Vec<Triple>);

impl TripleSet {
    /// Get the triples as a slice.
    pub fn triples(&self) -> &[Triple] {
        &self.0
    }

    /// Triple sets that are empty or hold a single triple usually come from corrupted records.
    pub fn is_suspicious(&self) -> bool {
        self.0.len() <= 1
    }
}

impl From<Vec<Triple>> for TripleSet {
    fn from(triples: Vec<Triple>) -> Self {
        Self(triples)
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for TripleSet {
    type Target = [Triple];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TripleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
