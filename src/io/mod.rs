//! # IO utilities
//!
//! Raw dataset reading. Readers yield raw records and leave parsing to [crate::parsing]:
//! - [MrReader] reads `{split}.csv` files holding meaning representations and their reference texts,
//! - [DocReader] reads `{split}/**/*.json` documents holding pipe-delimited triples.
//!
//! Template files are read by [crate::templates::TemplateTable::load].
mod docreader;
mod mrreader;

pub use docreader::{DocReader, RawDocument};
pub use mrreader::{MrReader, MrRecord};
