/*! Dataset registry

Maps dataset identifiers to their constructors.
Lookups are case-insensitive, and unknown identifiers are errors.

To add a dataset, implement [Dataset] and add it to [DATASETS].
!*/
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::error;

use super::{Dataset, LoadOptions, WikiData, E2E};
use crate::error::Error;

pub type Constructor = fn(LoadOptions) -> Box<dyn Dataset>;

fn e2e(options: LoadOptions) -> Box<dyn Dataset> {
    Box::new(E2E::new(options))
}

fn wikidata(options: LoadOptions) -> Box<dyn Dataset> {
    Box::new(WikiData::new(options))
}

lazy_static! {
    /// Holds available datasets, keyed by their lowercase identifier.
    pub static ref DATASETS: HashMap<&'static str, Constructor> = {
        let mut m: HashMap<&'static str, Constructor> = HashMap::new();
        m.insert(E2E::NAME, e2e);
        m.insert(WikiData::NAME, wikidata);
        m
    };
}

/// Get a new, empty dataset from its identifier.
pub fn get_dataset(name: &str, options: LoadOptions) -> Result<Box<dyn Dataset>, Error> {
    match DATASETS.get(name.to_lowercase().as_str()) {
        Some(constructor) => Ok(constructor(options)),
        None => {
            error!("Unknown dataset: '{}'. Available: {:?}", name, available());
            Err(Error::UnknownDataset(name.to_string()))
        }
    }
}

/// Sorted list of available identifiers.
pub fn available() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = DATASETS.keys().copied().collect();
    names.sort_unstable();
    names
}
