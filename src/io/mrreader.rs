/*! Meaning representation (CSV) reader

Each row holds a meaning representation in its first column and a reference text in its second one.
The first row is a header and is always skipped.
!*/
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::Error;

/// A raw row: a meaning representation and its reference text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrRecord {
    pub mr: String,
    pub text: String,
}

impl TryFrom<StringRecord> for MrRecord {
    type Error = Error;

    fn try_from(record: StringRecord) -> Result<Self, Self::Error> {
        match (record.get(0), record.get(1)) {
            (Some(mr), Some(text)) => Ok(Self {
                mr: mr.to_string(),
                text: text.to_string(),
            }),
            _ => Err(Error::MalformedRecord(record.iter().collect::<Vec<_>>().join(","))),
        }
    }
}

/// Iterates over the rows of a meaning representation file.
///
/// Rows with less than two columns yield [Error::MalformedRecord],
/// rows that can't be decoded (e.g. invalid UTF-8) yield [Error::Csv].
/// In both cases, iteration can go on with the next row.
pub struct MrReader<T>
where
    T: Read,
{
    records: csv::StringRecordsIntoIter<T>,
}

impl<T> fmt::Debug for MrReader<T>
where
    T: Read,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MrReader").finish_non_exhaustive()
    }
}

impl MrReader<File> {
    /// Open a csv file.
    ///
    /// Errors if the file can't be opened.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self::new(f))
    }
}

impl<T> MrReader<T>
where
    T: Read,
{
    pub fn new(reader: T) -> Self {
        let records = csv::ReaderBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self { records }
    }
}

impl<T> Iterator for MrReader<T>
where
    T: Read,
{
    type Item = Result<MrRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.records.next()? {
            Ok(record) => Some(MrRecord::try_from(record)),
            Err(e) => Some(Err(Error::Csv(e))),
        }
    }
}
