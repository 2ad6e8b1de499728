//! Parsing of explicit `subject | predicate | object` strings.
use crate::data::{Triple, TripleSet};
use crate::error::Error;

/// Parse a single pipe-delimited item. Each part is trimmed.
///
/// Errors if the item does not have exactly three parts.
pub fn parse_item(item: &str) -> Result<Triple, Error> {
    let parts: Vec<&str> = item.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [subj, pred, obj] => Ok(Triple::new(*subj, *pred, *obj)),
        _ => Err(Error::MalformedTriple(item.to_string())),
    }
}

/// Parse the items of a document, keeping their order.
pub fn parse_document<S: AsRef<str>>(items: &[S]) -> Result<TripleSet, Error> {
    items.iter().map(|item| parse_item(item.as_ref())).collect()
}

/// Parse a list of documents into one [TripleSet] per document.
pub fn load<S: AsRef<str>>(documents: &[Vec<S>]) -> Result<Vec<TripleSet>, Error> {
    documents.iter().map(|doc| parse_document(doc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item() {
        let t = parse_item("Q1 | label | Paris").unwrap();
        assert_eq!(t, Triple::new("Q1", "label", "Paris"));
    }

    #[test]
    fn item_whitespace() {
        let t = parse_item("\t Q90   |P17|  Q142 \n").unwrap();
        assert_eq!(t, Triple::new("Q90", "P17", "Q142"));
    }

    #[test]
    fn item_malformed() {
        assert!(matches!(parse_item("Q1 | label"), Err(Error::MalformedTriple(_))));
        assert!(matches!(
            parse_item("Q1 | label | Paris | France"),
            Err(Error::MalformedTriple(_))
        ));
    }

    #[test]
    fn documents() {
        let docs = vec![
            vec!["Q1 | label | Paris", "Q1 | country | France"],
            vec!["Q2 | label | Berlin"],
            vec![],
        ];
        let sets = load(&docs).unwrap();
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0][1], Triple::new("Q1", "country", "France"));
        assert_eq!(sets[1].len(), 1);
        assert!(sets[2].is_empty());
    }

    #[test]
    fn documents_malformed() {
        let docs = vec![vec!["Q1 | label | Paris"], vec!["broken"]];
        assert!(load(&docs).is_err());
    }
}
