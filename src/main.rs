//! `dram` (a dram being a small pour of spirits) is a CLI tool for viewing
//! a restaurant spirits price list as a searchable, filterable catalog.
//!
//! `dram` accepts two loosely structured text encodings of the same list
//! and normalizes both into one catalog of categories, each holding priced
//! items with 2 oz, 1 oz, and half pour prices.
//!
//! # Example usage:
//!
//! ## Comma separated price table
//! Five positional fields per row (`name, 2oz, 1oz, half, category`); the
//! first line is a header and its content is ignored
//! ```sh
//! dram all-drinks.csv
//! # or from a pipe
//! cat all-drinks.csv | dram
//! ```
//!
//! ## Free form listing
//! All caps category headers over `name NN/NN` lines, where the optional
//! trailing `/X` marks pours that cannot be split
//! ```sh
//! dram spirits.txt
//! ```
//!
//! ## JSON export
//! Print the parsed catalog instead of opening the viewer
//! ```sh
//! dram --json all-drinks.csv > spirits.json
//! ```
//!
//! # Modes
//! `dram` infers the encoding from the text itself: a price table is comma
//! separated on every row, so input whose non blank lines all carry commas
//! parses as the table encoding and everything else as the free form one.
//! `--format` overrides the inference.
//!
//! ## Design
//! Both parsers are pure text-in/catalog-out functions over the full input,
//! and both are forgiving: blank or malformed lines are skipped silently,
//! and a price table that cannot be read at all yields an empty catalog
//! rather than an error. A user visible failure only occurs when
//! the text itself cannot be loaded. The viewer derives its category
//! dropdown and name search from the catalog; parsing never depends on the
//! view.

use anyhow::Result;
use clap::Parser;
use runner::run_dram;
use std::path::PathBuf;

mod menu;
mod parsers;
mod runner;

use parsers::inference::MenuFormat;

/// `dram` displays a spirits price list as a searchable, filterable catalog
#[derive(Debug, Parser)]
struct Args {
    /// Path to the price list text. Reads stdin when omitted.
    input: Option<PathBuf>,
    /// Price list encoding. If not provided, `dram` will infer the encoding
    /// from the text.
    #[arg(short, long, value_enum)]
    format: Option<MenuFormat>,
    /// Print the parsed catalog as JSON instead of opening the viewer
    #[arg(short, long)]
    json: bool,
}

/// Primary entrypoint for `dram`
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run_dram(args).await
}
