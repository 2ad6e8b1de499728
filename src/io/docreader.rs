/*! Structured (JSON) document reader

Documents are JSON files located anywhere below a split directory:

```json
{"data": [["Q90 | P17 | Q142", "Q90 | P1376 | Q142"]], "text": ["Paris is the capital of France."]}
```

`text` is optional.
Files are read in sorted path order so that loading is deterministic.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::Error;

/// A document as found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDocument {
    data: Vec<Vec<String>>,
    #[serde(default)]
    text: Vec<String>,
}

impl RawDocument {
    /// Get the pipe-delimited triple strings.
    ///
    /// Only the first list of `data` holds triples.
    pub fn items(&self) -> &[String] {
        self.data.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Get a reference to the document's reference texts.
    pub fn text(&self) -> &[String] {
        &self.text
    }
}

/// Iterates over the documents of a directory tree.
#[derive(Debug)]
pub struct DocReader {
    paths: std::vec::IntoIter<PathBuf>,
}

impl DocReader {
    /// List `**/*.json` files below `src`.
    ///
    /// Errors if `src` does not exist.
    pub fn new(src: &Path) -> Result<Self, Error> {
        if !src.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such directory: {:?}", src),
            )));
        }

        let src_str = src
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source directory: {:?}", src)))?;
        let pattern = format!("{}/**/*.json", glob::Pattern::escape(src_str));

        let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
        paths.sort();
        debug!("{} documents in {:?}", paths.len(), src);

        Ok(Self {
            paths: paths.into_iter(),
        })
    }

    /// number of documents left.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for DocReader {
    type Item = Result<(PathBuf, RawDocument), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let doc = File::open(&path)
            .map_err(Error::Io)
            .and_then(|f| serde_json::from_reader(BufReader::new(f)).map_err(Error::Serde));

        Some(doc.map(|doc| (path, doc)))
    }
}
