/*! E2E dataset

Restaurant descriptions: `{split}.csv` files with a meaning representation and a reference text per row
(see [crate::io::MrReader] and [crate::parsing::mr]).

Rows sharing the same meaning representation are grouped into a single entry.
!*/
use std::path::Path;

use log::{debug, warn};

use super::{Corpus, Dataset, LoadOptions, Split};
use crate::data::{Entry, Grouper, Lexicalization, TripleSet};
use crate::error::Error;
use crate::io::MrReader;
use crate::parsing::mr;
use crate::templates::SelectionPolicy;

#[derive(Debug, Default)]
pub struct E2E {
    corpus: Corpus,
}

impl E2E {
    pub const NAME: &'static str = "e2e";

    pub fn new(options: LoadOptions) -> Self {
        Self {
            corpus: Corpus::new(options),
        }
    }
}

impl Dataset for E2E {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::First
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn corpus_mut(&mut self) -> &mut Corpus {
        &mut self.corpus
    }

    fn load_split(&self, root: &Path, split: Split) -> Result<Vec<Entry>, Error> {
        let src = root.join(format!("{}.csv", split));
        let reader = MrReader::from_path(&src)?;
        let options = self.corpus.options();

        let mut grouper = Grouper::new();
        let mut err = 0;

        for (idx, record) in reader.enumerate() {
            let nb = idx + 1;
            let record = match record {
                Ok(record) => record,
                // no reference text to save
                Err(e @ Error::MalformedRecord(_)) if !options.strict => {
                    debug!("[{}] record {}: {}", split, nb, e);
                    err += 1;
                    continue;
                }
                // undecodable row, the reader can go on unless the file itself fails
                Err(Error::Csv(e)) if !options.strict && !e.is_io_error() => {
                    debug!("[{}] record {}: {}", split, nb, e);
                    err += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let triples = match mr::parse(&record.mr) {
                Ok(triples) => triples,
                Err(e) if options.strict => return Err(e),
                Err(e) => {
                    debug!("[{}] record {}: {}", split, nb, e);
                    TripleSet::default()
                }
            };

            // probably a corrupted sample
            if triples.is_suspicious() {
                err += 1;
                // cannot skip for dev and test
                if split.is_training() {
                    continue;
                }
                if triples.is_empty() && !options.keep_empty(split, nb)? {
                    continue;
                }
            }

            grouper.push(triples, Lexicalization::new(record.text));
        }

        if err > 0 {
            warn!("[{}] {} corrupted instances", split, err);
        }

        Ok(grouper.into_entries())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::Triple;
    use crate::datasets::EmptyTriplesPolicy;

    const DEV: &str = r#"mr,ref
"name[The Vaults], eatType[pub], food[French]",The Vaults is a French pub.
"name[The Vaults], eatType[pub], food[French]",The Vaults pub serves French food.
"name[Blue Spice]",Blue Spice is a restaurant.
"eatType[coffee shop]",There is a coffee shop.
"name[Broken",This record is broken.
"name[The Mill], food[English]",The Mill serves English food.
"#;

    fn write_split(split: &str, content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{}.csv", split)), content).unwrap();
        dir
    }

    #[test]
    fn dev_keeps_everything() {
        let dir = write_split("dev", DEV);
        let e2e = E2E::default();
        let entries = e2e.load_split(dir.path(), Split::Dev).unwrap();

        // vaults, blue spice, empty (coffee shop + broken), mill
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].lexs().len(), 2);
        assert_eq!(
            entries[1].triples().triples(),
            &[Triple::new("Blue Spice", "eatType", "restaurant")]
        );
        assert!(entries[2].triples().is_empty());
        let texts: Vec<&str> = entries[2].lexs().iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["There is a coffee shop.", "This record is broken."]);
        assert_eq!(entries[3].triples()[0].subj(), "The Mill");
    }

    #[test]
    fn train_drops_corrupted() {
        let dir = write_split("train", DEV);
        let e2e = E2E::default();
        let entries = e2e.load_split(dir.path(), Split::Train).unwrap();

        // only the vaults survive: the mill has a single triple
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].triples().len(), 2);
    }

    #[test]
    fn drop_empty() {
        let dir = write_split("test", DEV);
        let e2e = E2E::new(LoadOptions {
            empty_triples: EmptyTriplesPolicy::Drop,
            ..Default::default()
        });
        let entries = e2e.load_split(dir.path(), Split::Test).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| !e.triples().is_empty()));
    }

    #[test]
    fn fail_empty() {
        let dir = write_split("test", DEV);
        let e2e = E2E::new(LoadOptions {
            empty_triples: EmptyTriplesPolicy::Fail,
            ..Default::default()
        });
        assert!(matches!(
            e2e.load_split(dir.path(), Split::Test),
            Err(Error::EmptyTriples {
                split: Split::Test,
                record: 4
            })
        ));
    }

    #[test]
    fn strict() {
        let dir = write_split("dev", DEV);
        let e2e = E2E::new(LoadOptions {
            strict: true,
            ..Default::default()
        });
        assert!(matches!(
            e2e.load_split(dir.path(), Split::Dev),
            Err(Error::MalformedRecord(_))
        ));
    }

    #[test]
    fn undecodable_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = b"mr,ref\n\"name[The Vaults], food[French]\",The Vaults serves French food.\n".to_vec();
        data.extend_from_slice(b"\"name[Bad], food[Thai]\",caf");
        data.extend_from_slice(&[0xe9, b'\n']);
        data.extend_from_slice(b"\"name[The Mill], area[riverside]\",The Mill is by the river.\n");
        fs::write(dir.path().join("dev.csv"), data).unwrap();

        let entries = E2E::default().load_split(dir.path(), Split::Dev).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].triples()[0].subj(), "The Vaults");
        assert_eq!(entries[1].triples()[0].subj(), "The Mill");

        let strict = E2E::new(LoadOptions {
            strict: true,
            ..Default::default()
        });
        assert!(matches!(
            strict.load_split(dir.path(), Split::Dev),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn missing_split() {
        let dir = tempfile::tempdir().unwrap();
        let e2e = E2E::default();
        assert!(matches!(
            e2e.load_split(dir.path(), Split::Dev),
            Err(Error::Io(_))
        ));
    }
}
