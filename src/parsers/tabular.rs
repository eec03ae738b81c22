//! Parses the comma separated price table encoding
//!
//! Rows carry five positional fields: `name, 2oz, 1oz, half, category`.
//! The first line is a header and is discarded regardless of content.
//! Categories accumulate in first-seen order, keyed by the fifth field.

use std::collections::HashMap;

use log::{trace, warn};

use crate::menu::{Category, Item, MenuError, PriceField};

use super::CatalogParser;

/// Parser for the comma separated table encoding
#[derive(Default)]
pub struct TabularParser;

impl TabularParser {
    pub fn new() -> Self {
        Self
    }

    /// Fallible body of the parse. The header line is stripped before the
    /// reader sees the text, so even a blank first line counts as the
    /// header. Quoting is disabled and record lengths are flexible, so
    /// record splitting is plain comma splitting; missing fields read as
    /// empty.
    fn parse_rows(&self, input: &str) -> Result<Vec<Category>, MenuError> {
        let body = match input.split_once('\n') {
            Some((_header, body)) => body,
            // a lone line is all header
            None => "",
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(body.as_bytes());

        let mut catalog: Vec<Category> = Vec::new();
        let mut category_indices: HashMap<String, usize> = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("");

            let category_key = field(4);
            if category_key.is_empty() {
                trace!("Skipping row without a category: {:?}", record);
                continue;
            }
            let name = field(0);
            if name.is_empty() {
                trace!("Skipping row without a name: {:?}", record);
                continue;
            }
            let item = Item {
                name: name.to_string(),
                price_2oz: PriceField::parse_prefixed(field(1)),
                price_1oz: PriceField::parse_prefixed(field(2)),
                price_half: PriceField::parse_prefixed(field(3)),
            };
            trace!("Parsed row: {:?}", item);

            let idx = match category_indices.get(category_key) {
                Some(&idx) => idx,
                None => {
                    catalog.push(Category::new(category_key.to_string()));
                    category_indices.insert(category_key.to_string(), catalog.len() - 1);
                    catalog.len() - 1
                }
            };
            catalog[idx].items.push(item);
        }
        Ok(catalog)
    }
}

impl CatalogParser for TabularParser {
    /// The result is all-or-nothing: an error anywhere in the table yields
    /// an empty catalog, never a partial one or an error to the caller.
    fn parse(&self, input: &str) -> Vec<Category> {
        match self.parse_rows(input) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Discarding unreadable price table: {e}");
                Vec::new()
            }
        }
    }
}
