/*! WikiData dataset

Triple sets come from JSON documents below `{split}/` (see [crate::io::DocReader]),
already holding explicit `subject | predicate | object` strings.

Documents do not always come with reference texts: when `text` is missing,
the triple strings themselves are used as lexicalizations.
Templates are sampled among the available ones for each predicate.
!*/
use std::path::Path;

use log::{debug, warn};

use super::{Corpus, Dataset, LoadOptions, Split};
use crate::data::{Entry, Grouper, Lexicalization};
use crate::error::Error;
use crate::io::{DocReader, RawDocument};
use crate::parsing::structured;
use crate::templates::SelectionPolicy;

#[derive(Debug, Default)]
pub struct WikiData {
    corpus: Corpus,
}

impl WikiData {
    pub const NAME: &'static str = "wikidata";

    pub fn new(options: LoadOptions) -> Self {
        Self {
            corpus: Corpus::new(options),
        }
    }

    /// Get the non-blank lexicalizations of a document.
    fn extract_lexs(doc: &RawDocument) -> Vec<Lexicalization> {
        let texts = if doc.text().is_empty() {
            doc.items()
        } else {
            doc.text()
        };

        texts
            .iter()
            .map(|text| Lexicalization::new(text.as_str()))
            .filter(|lex| !lex.is_blank())
            .collect()
    }
}

impl Dataset for WikiData {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::Sample
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn corpus_mut(&mut self) -> &mut Corpus {
        &mut self.corpus
    }

    fn load_split(&self, root: &Path, split: Split) -> Result<Vec<Entry>, Error> {
        let reader = DocReader::new(&root.join(split.as_str()))?;
        let options = self.corpus.options();

        let mut grouper = Grouper::new();
        let mut malformed = 0;
        let mut no_lex = 0;

        for (idx, doc) in reader.enumerate() {
            let nb = idx + 1;
            let (path, doc) = match doc {
                Ok(doc) => doc,
                Err(e @ Error::Serde(_)) if !options.strict => {
                    debug!("[{}] document {}: {}", split, nb, e);
                    malformed += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let triples = match structured::parse_document(doc.items()) {
                Ok(triples) => triples,
                Err(e) if options.strict => return Err(e),
                Err(e) => {
                    debug!("[{}] {:?}: {}", split, path, e);
                    malformed += 1;
                    continue;
                }
            };

            let lexs = Self::extract_lexs(&doc);
            if lexs.is_empty() {
                debug!("[{}] {:?} has no lexicalizations", split, path);
                no_lex += 1;
                continue;
            }

            if triples.is_empty() && !options.keep_empty(split, nb)? {
                debug!("[{}] {:?} has no triples", split, path);
                malformed += 1;
                continue;
            }

            grouper.extend(triples, lexs);
        }

        if no_lex > 0 {
            warn!("[{}] Skipping {} entries without lexicalizations...", split, no_lex);
        }
        if malformed > 0 {
            warn!("[{}] {} corrupted documents", split, malformed);
        }

        Ok(grouper.into_entries())
    }
}
