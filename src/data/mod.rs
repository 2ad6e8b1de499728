/*! Dataset model

A dataset split is a list of [Entry], each pairing a [TripleSet] with the
[Lexicalization]s (reference texts) that verbalize it.

[Grouper] builds entries out of a stream of `(TripleSet, Lexicalization)` pairs.
!*/
mod entry;
mod grouper;
mod triple;

pub use entry::{Entry, Lexicalization};
pub use grouper::Grouper;
pub use triple::{Triple, TripleSet};
