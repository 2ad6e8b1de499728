//! Entries and lexicalizations.
use serde::{Deserialize, Serialize};

use super::TripleSet;

/// A reference text for a triple set.
///
/// `order` and `agg` are reserved for triple ordering and aggregation markers.
/// Loaders leave them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicalization {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agg: Option<Vec<usize>>,
}

impl Lexicalization {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            order: None,
            agg: None,
        }
    }

    /// Get a reference to the lexicalization's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get a reference to the lexicalization's triple order, if any.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Get a reference to the lexicalization's aggregation markers, if any.
    pub fn agg(&self) -> Option<&[usize]> {
        self.agg.as_deref()
    }

    /// `true` if the text holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A distinct triple set along with all its known lexicalizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    triples: TripleSet,
    lexs: Vec<Lexicalization>,
}

impl Entry {
    pub fn new(triples: TripleSet, lexs: Vec<Lexicalization>) -> Self {
        Self { triples, lexs }
    }

    /// Get a reference to the entry's triples.
    pub fn triples(&self) -> &TripleSet {
        &self.triples
    }

    /// Get a reference to the entry's lexicalizations.
    pub fn lexs(&self) -> &[Lexicalization] {
        &self.lexs
    }

    pub(crate) fn push_lex(&mut self, lex: Lexicalization) {
        self.lexs.push(lex);
    }
}
