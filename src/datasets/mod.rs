/*! Datasets

A dataset holds [Entry] lists for the `train`, `dev` and `test` splits, along with the
[TemplateTable] used to verbalize its triples.

Every dataset implements [Dataset]: implementors only provide the way a single split is read
([Dataset::load_split]) and the template [SelectionPolicy]; loading, state tracking and
template lookup are shared.

Available datasets are listed in [registry].
!*/
mod e2e;
pub mod registry;
mod wikidata;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::data::{Entry, Triple};
use crate::error::Error;
use crate::templates::{SelectionPolicy, TemplateTable};

pub use e2e::E2E;
pub use registry::get_dataset;
pub use wikidata::WikiData;

/// Dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// Training data can lose corrupted records, evaluation data can't.
    pub fn is_training(&self) -> bool {
        matches!(self, Split::Train)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "dev" => Ok(Split::Dev),
            "test" => Ok(Split::Test),
            _ => Err(Error::UnknownSplit(s.to_string())),
        }
    }
}

/// What to do with records that yield no triples in evaluation splits.
///
/// Such records are always dropped from the training split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTriplesPolicy {
    /// keep them as entries with an empty triple set, so that no reference text is lost.
    #[default]
    Keep,
    Drop,
    /// abort loading with [Error::EmptyTriples].
    Fail,
}

impl FromStr for EmptyTriplesPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "drop" => Ok(Self::Drop),
            "fail" => Ok(Self::Fail),
            _ => Err(Error::Custom(format!(
                "invalid empty triples policy: '{}' (expected keep, drop or fail)",
                s
            ))),
        }
    }
}

/// Loading parameters.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// abort on the first malformed record instead of counting it.
    pub strict: bool,
    pub empty_triples: EmptyTriplesPolicy,
}

impl LoadOptions {
    /// Decide whether a record of `split` that yields no triples is kept.
    pub(crate) fn keep_empty(&self, split: Split, record: usize) -> Result<bool, Error> {
        if split.is_training() {
            return Ok(false);
        }
        match self.empty_triples {
            EmptyTriplesPolicy::Keep => Ok(true),
            EmptyTriplesPolicy::Drop => Ok(false),
            EmptyTriplesPolicy::Fail => Err(Error::EmptyTriples { split, record }),
        }
    }
}

/// Loading state of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// Loaded data shared by every dataset: entries per split, their state, templates and options.
#[derive(Debug, Default)]
pub struct Corpus {
    data: HashMap<Split, Vec<Entry>>,
    state: HashMap<Split, SplitState>,
    templates: TemplateTable,
    options: LoadOptions,
}

impl Corpus {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Get the entries of a split. Empty if the split is not loaded.
    pub fn entries(&self, split: Split) -> &[Entry] {
        self.data.get(&split).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn state(&self, split: Split) -> SplitState {
        self.state.get(&split).copied().unwrap_or_default()
    }

    /// Get a reference to the corpus' templates.
    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Get a reference to the corpus' options.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// `NotLoaded -> Loading`.
    fn begin(&mut self, split: Split) -> Result<(), Error> {
        match self.state(split) {
            SplitState::NotLoaded => {
                self.state.insert(split, SplitState::Loading);
                Ok(())
            }
            SplitState::Loading | SplitState::Loaded => Err(Error::AlreadyLoaded(split)),
        }
    }

    /// `Loading -> Loaded`.
    fn finish(&mut self, split: Split, entries: Vec<Entry>) {
        self.data.insert(split, entries);
        self.state.insert(split, SplitState::Loaded);
    }

    /// `Loading -> NotLoaded`, on failure.
    fn abort(&mut self, split: Split) {
        self.state.remove(&split);
    }
}

pub trait Dataset {
    /// lowercase identifier used by the [registry].
    fn name(&self) -> &'static str;

    /// How templates are picked for this dataset.
    fn policy(&self) -> SelectionPolicy;

    fn corpus(&self) -> &Corpus;

    fn corpus_mut(&mut self) -> &mut Corpus;

    /// Read `split` below `root`, returning grouped entries.
    ///
    /// Per-record problems are counted and reported once the split is read;
    /// only unreadable splits (or malformed records in strict mode) are errors.
    fn load_split(&self, root: &Path, split: Split) -> Result<Vec<Entry>, Error>;

    /// Load templates and the requested splits, sequentially.
    ///
    /// A missing `templates` path is not an error (see [TemplateTable::load]).
    /// Loading a split twice is an error.
    fn load(&mut self, root: &Path, templates: Option<&Path>, splits: &[Split]) -> Result<(), Error> {
        self.corpus_mut().templates = TemplateTable::load(templates)?;

        for &split in splits {
            info!("[{}] Loading {} split", self.name(), split);
            self.corpus_mut().begin(split)?;

            match self.load_split(root, split) {
                Ok(entries) => {
                    if entries.is_empty() {
                        warn!("[{}] {} split has no entries", self.name(), split);
                    }
                    info!(
                        "[{}] {} split: {} entries, {} lexicalizations",
                        self.name(),
                        split,
                        entries.len(),
                        entries.iter().map(|e| e.lexs().len()).sum::<usize>()
                    );
                    self.corpus_mut().finish(split, entries);
                }
                Err(e) => {
                    self.corpus_mut().abort(split);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Get the entries of a split.
    fn entries(&self, split: Split) -> &[Entry] {
        self.corpus().entries(split)
    }

    /// Get the template for a triple, following [Dataset::policy].
    fn template(&self, triple: &Triple) -> &str {
        self.corpus().templates().resolve(triple, self.policy())
    }
}
