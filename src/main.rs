//! # d2t
//!
//! Loads data-to-text datasets (E2E, WikiData) into triple sets and their reference texts,
//! along with the templates used to verbalize single triples.
//!
//! ```sh
//! d2t 0.1.0
//! data-to-text dataset loading tool.
//!
//! USAGE:
//!     d2t <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help         Prints this message or the help of the given subcommand(s)
//!     inspect      Load a dataset and report what has been loaded
//!     templates    Print the template selected for each triple of a dataset
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=d2t=debug`).
use std::fs::File;
use std::io::{BufWriter, Write};

use d2t::data::Entry;
use d2t::datasets::{Dataset, Split};
use d2t::error::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// An entry along with the split it comes from, as written by `inspect --dump`.
#[derive(Serialize)]
struct DumpEntry<'a> {
    split: Split,
    #[serde(flatten)]
    entry: &'a Entry,
}

fn inspect(dataset: &dyn Dataset, splits: &[Split], dump: Option<&std::path::Path>) -> Result<(), Error> {
    for &split in splits {
        let entries = dataset.entries(split);
        let nb_lexs: usize = entries.iter().map(|e| e.lexs().len()).sum();
        let nb_triples: usize = entries.iter().map(|e| e.triples().len()).sum();
        let nb_suspicious = entries.iter().filter(|e| e.triples().is_suspicious()).count();

        println!(
            "{}\t{}\tentries={}\tlexicalizations={}\ttriples={}\tsuspicious={}",
            dataset.name(),
            split,
            entries.len(),
            nb_lexs,
            nb_triples,
            nb_suspicious
        );
    }

    if let Some(dst) = dump {
        info!("writing entries to {:?}", dst);
        let mut out = BufWriter::new(File::create(dst)?);
        for &split in splits {
            for entry in dataset.entries(split) {
                serde_json::to_writer(&mut out, &DumpEntry { split, entry })?;
                writeln!(&mut out)?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

fn templates(dataset: &dyn Dataset, splits: &[Split], seed: Option<u64>) -> Result<(), Error> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let templates = dataset.corpus().templates();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for &split in splits {
        for entry in dataset.entries(split) {
            for triple in entry.triples() {
                let template = templates.resolve_with_rng(triple, dataset.policy(), &mut rng);
                writeln!(out, "{}\t{}\t{}", split, triple, template)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::D2t::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::D2t::Inspect(i) => {
            let dataset = i.load.load()?;
            inspect(dataset.as_ref(), &i.load.splits, i.dump.as_deref())?;
        }
        cli::D2t::Templates(t) => {
            let dataset = t.load.load()?;
            templates(dataset.as_ref(), &t.load.splits, t.seed)?;
        }
    };
    Ok(())
}
