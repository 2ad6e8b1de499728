/*! Triple set grouping

Several source records can share the same triple set (one per reference text).
[Grouper] merges them into a single [Entry], keeping entries in the order their
triple set was first seen and lexicalizations in encounter order.
!*/
use std::collections::HashMap;

use super::{Entry, Lexicalization, TripleSet};

/// Ordered accumulator from [TripleSet] to [Entry].
#[derive(Debug, Default)]
pub struct Grouper {
    index: HashMap<TripleSet, usize>,
    entries: Vec<Entry>,
}

impl Grouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a lexicalization to the entry of `triples`, creating it if needed.
    pub fn push(&mut self, triples: TripleSet, lex: Lexicalization) {
        self.extend(triples, std::iter::once(lex));
    }

    /// Attach several lexicalizations at once.
    ///
    /// The entry is created even if `lexs` is empty.
    pub fn extend<I>(&mut self, triples: TripleSet, lexs: I)
    where
        I: IntoIterator<Item = Lexicalization>,
    {
        let idx = match self.index.get(&triples) {
            Some(idx) => *idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(Entry::new(triples.clone(), Vec::new()));
                self.index.insert(triples, idx);
                idx
            }
        };

        let entry = &mut self.entries[idx];
        for lex in lexs {
            entry.push_lex(lex);
        }
    }

    /// number of distinct triple sets seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize entries, in first-seen order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
