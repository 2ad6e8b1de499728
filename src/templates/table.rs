//! Template table and template file loading.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::error::Error;

/// Templates available for a predicate.
///
/// ```json
/// {
///   "food": ["<subject> serves <object> food ."],
///   "familyFriendly": {"yes": ["<subject> is family-friendly ."], "no": ["<subject> is not family-friendly ."]}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateEntry {
    Flat(Vec<String>),
    /// templates keyed by the triple's object value
    ByValue(HashMap<String, Vec<String>>),
}

impl TemplateEntry {
    /// Get the templates that are relevant for a given object value.
    ///
    /// Returns [None] for a [TemplateEntry::ByValue] that has no templates for `obj`.
    pub fn candidates(&self, obj: &str) -> Option<&[String]> {
        match self {
            Self::Flat(templates) => Some(templates),
            Self::ByValue(by_value) => by_value.get(obj).map(Vec::as_slice),
        }
    }
}

/// Mapping from predicate to [TemplateEntry].
///
/// Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTable(HashMap<String, TemplateEntry>);

impl TemplateTable {
    /// Read a template table from a JSON file.
    ///
    /// Read failures (including ones that happen while decoding) are [Error::Io].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = BufReader::new(File::open(path)?);
        serde_json::from_reader(f).map_err(|e| match e.classify() {
            Category::Io => Error::Io(e.into()),
            _ => Error::Serde(e),
        })
    }

    /// Load templates if a path is provided.
    ///
    /// A missing or unreadable file is not fatal: the table is left empty and every lookup
    /// falls back to [super::FALLBACK_TEMPLATE].
    /// Invalid JSON is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path,
            None => {
                warn!("Templates will not be loaded");
                return Ok(Self::default());
            }
        };

        match Self::from_path(path) {
            Ok(table) => {
                info!("Loaded {} templates from {:?}", table.len(), path);
                Ok(table)
            }
            Err(Error::Io(e)) => {
                warn!("Could not read templates from {:?} ({}), templates will not be loaded", path, e);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, pred: &str) -> Option<&TemplateEntry> {
        self.0.get(pred)
    }

    /// number of predicates that have templates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, TemplateEntry>> for TemplateTable {
    fn from(m: HashMap<String, TemplateEntry>) -> Self {
        Self(m)
    }
}

impl FromIterator<(String, TemplateEntry)> for TemplateTable {
    fn from_iter<I: IntoIterator<Item = (String, TemplateEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
