/*! # d2t

Normalization of data-to-text datasets.

Raw dataset records are turned into [data::Entry]s: a [data::TripleSet] and every reference text
([data::Lexicalization]) that verbalizes it.

- [parsing] turns raw records into triple sets,
- [data] holds the model and groups records sharing the same triple set,
- [templates] holds per-predicate templates and picks one for a given triple,
- [datasets] ties everything together, per split, and lists available datasets,
- [io] reads raw files.

```no_run
use std::path::Path;
use d2t::datasets::{get_dataset, Dataset, LoadOptions, Split};

let mut e2e = get_dataset("e2e", LoadOptions::default())?;
e2e.load(Path::new("data/e2e"), Some(Path::new("templates/templates-e2e.json")), &[Split::Dev])?;

for entry in e2e.entries(Split::Dev) {
    for triple in entry.triples() {
        println!("{} -> {}", triple, e2e.template(triple));
    }
}
# Ok::<(), d2t::error::Error>(())
```
!*/
pub mod data;
pub mod datasets;
pub mod error;
pub mod io;
pub mod parsing;
pub mod templates;
