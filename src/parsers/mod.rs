//! Parsers for the two price list encodings

use crate::menu::Category;

pub mod freeform;
pub mod inference;
pub mod tabular;

/// Trait for parsing a full raw text input into a catalog
pub trait CatalogParser {
    /// Parses the entire input into categories, in source order. Never
    /// fails: malformed lines are skipped and structural errors collapse to
    /// an empty catalog.
    fn parse(&self, input: &str) -> Vec<Category>;
}
