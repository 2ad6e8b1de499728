//! Error enum
use std::fmt;

use crate::datasets::Split;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// attribute string that could not be tokenized into `key[value]` pairs.
    MalformedRecord(String),
    /// structured item that is not a `subject | predicate | object` string.
    MalformedTriple(String),
    UnknownDataset(String),
    UnknownSplit(String),
    /// raised only when empty triple sets are configured as fatal.
    EmptyTriples {
        split: Split,
        record: usize,
    },
    AlreadyLoaded(Split),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "bad glob pattern: {}", e),
            Error::MalformedRecord(mr) => write!(f, "malformed meaning representation: {:?}", mr),
            Error::MalformedTriple(item) => write!(f, "malformed triple: {:?}", item),
            Error::UnknownDataset(name) => write!(
                f,
                "unknown dataset: '{}'. Register it in datasets::registry.",
                name
            ),
            Error::UnknownSplit(name) => {
                write!(f, "unknown split: '{}' (expected train, dev or test)", name)
            }
            Error::EmptyTriples { split, record } => {
                write!(f, "[{}] record {} yields no triples", split, record)
            }
            Error::AlreadyLoaded(split) => write!(f, "[{}] split is already loaded", split),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
