//! Infers which price list encoding an input uses
//!
//! Used when no explicit `--format` is provided. A price table is comma
//! separated on every row, while the free form listing rarely has a comma
//! at all, so the presence of commas on every line is the differentiator.

use clap::ValueEnum;

/// The two supported price list encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MenuFormat {
    /// Comma separated rows with a header line and five positional fields
    Tabular,
    /// All caps category headers over `name NN/NN` price lines
    Freeform,
}

impl MenuFormat {
    /// Guesses the encoding of the raw text: tabular when every non blank
    /// line carries a comma, freeform otherwise. Empty input reads as
    /// tabular; both parsers map it to an empty catalog anyway.
    pub fn infer(input: &str) -> Self {
        let all_comma = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .all(|line| line.contains(','));
        if all_comma {
            MenuFormat::Tabular
        } else {
            MenuFormat::Freeform
        }
    }
}
