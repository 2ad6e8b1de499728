//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use d2t::datasets::{get_dataset, Dataset, EmptyTriplesPolicy, LoadOptions, Split};
use d2t::error::Error;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "d2t", about = "data-to-text dataset loading tool.")]
/// Holds every command that is callable by the `d2t` command.
pub enum D2t {
    #[structopt(about = "Load a dataset and report what has been loaded")]
    Inspect(Inspect),
    #[structopt(about = "Print the template selected for each triple of a dataset")]
    Templates(Templates),
}

#[derive(Debug, StructOpt)]
/// Dataset location and loading parameters.
pub struct LoadArgs {
    #[structopt(help = "dataset identifier (e2e, wikidata)")]
    pub dataset: String,
    #[structopt(
        parse(from_os_str),
        help = "dataset location (contains {split}.csv or {split}/ folders)"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "t",
        long = "templates",
        help = "path to a JSON template file"
    )]
    pub templates: Option<PathBuf>,
    #[structopt(
        long = "splits",
        default_value = "train,dev,test",
        use_delimiter = true,
        help = "comma-separated splits to load"
    )]
    pub splits: Vec<Split>,
    #[structopt(long = "strict", help = "fail on the first malformed record")]
    pub strict: bool,
    #[structopt(
        long = "empty-triples",
        default_value = "keep",
        help = "what to do with dev/test records without triples (keep, drop, fail)"
    )]
    pub empty_triples: EmptyTriplesPolicy,
}

impl LoadArgs {
    /// Build the dataset and load the requested splits.
    pub fn load(&self) -> Result<Box<dyn Dataset>, Error> {
        let options = LoadOptions {
            strict: self.strict,
            empty_triples: self.empty_triples,
        };
        let mut dataset = get_dataset(&self.dataset, options)?;
        dataset.load(&self.src, self.templates.as_deref(), &self.splits)?;
        Ok(dataset)
    }
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
///
/// ```sh
/// d2t-inspect 0.1.0
/// Load a dataset and report what has been loaded
///
/// USAGE:
///     d2t inspect [FLAGS] [OPTIONS] <dataset> <src>
///
/// FLAGS:
///     -h, --help       Prints help information
///         --strict     fail on the first malformed record
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --dump <dump>                      write loaded entries as JSON lines
///         --empty-triples <empty-triples>    what to do with dev/test records without triples (keep, drop, fail) [default: keep]
///         --splits <splits>...               comma-separated splits to load [default: train,dev,test]
///     -t, --templates <templates>            path to a JSON template file
///
/// ARGS:
///     <dataset>    dataset identifier (e2e, wikidata)
///     <src>        dataset location (contains {split}.csv or {split}/ folders)
/// ```
pub struct Inspect {
    #[structopt(flatten)]
    pub load: LoadArgs,
    #[structopt(
        parse(from_os_str),
        long = "dump",
        help = "write loaded entries as JSON lines"
    )]
    pub dump: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Templates command and parameters.
pub struct Templates {
    #[structopt(flatten)]
    pub load: LoadArgs,
    #[structopt(long = "seed", help = "seed used when templates are sampled")]
    pub seed: Option<u64>,
}
