//! Parses the free form price list encoding
//!
//! Lines are either all caps category headers or `name NN/NN` item lines
//! (with an optional `/X` marker), in any interleaving. Items attach to the
//! most recent header; anything else is dropped.

use log::trace;
use regex::Regex;

use crate::menu::{Category, Item, MenuError, PriceField};

use super::CatalogParser;

/// Matches an item line: a name, whitespace, then `<2oz>/<1oz>` with an
/// optional `/X` marker and nothing else trailing
const ITEM_PATTERN: &str = r"^(.*?)\s+([0-9]+)/([0-9]+)(/X)?$";
/// A `digits/digits` price anywhere in a line disqualifies it as a header
const PRICE_MARKER_PATTERN: &str = r"[0-9]+/[0-9]+";

/// Parser for the free form price list encoding
pub struct FreeformParser {
    item_line: Regex,
    price_marker: Regex,
}

impl FreeformParser {
    pub fn new() -> Result<Self, MenuError> {
        Ok(Self {
            item_line: Regex::new(ITEM_PATTERN)?,
            price_marker: Regex::new(PRICE_MARKER_PATTERN)?,
        })
    }

    /// A category header is a line that is already entirely upper case and
    /// carries no price anywhere in it
    fn is_category_header(&self, line: &str) -> bool {
        line == line.to_uppercase() && !self.price_marker.is_match(line)
    }

    /// Attempts to read a line as a priced item. Returns `None` when the
    /// line does not fit the pattern or names nothing. The half pour price
    /// is derived as half the 1 oz price, rounded up.
    fn match_item_line(&self, line: &str) -> Option<Item> {
        let captures = self.item_line.captures(line)?;
        let name = captures.get(1)?.as_str().trim();
        if name.is_empty() {
            return None;
        }
        let price_2oz: u32 = captures.get(2)?.as_str().parse().ok()?;
        let price_1oz: u32 = captures.get(3)?.as_str().parse().ok()?;
        Some(Item {
            name: name.to_string(),
            price_2oz: PriceField::from_amount(price_2oz),
            price_1oz: PriceField::from_amount(price_1oz),
            price_half: PriceField::from_amount(price_1oz.div_ceil(2)),
        })
    }
}

impl CatalogParser for FreeformParser {
    fn parse(&self, input: &str) -> Vec<Category> {
        let mut catalog: Vec<Category> = Vec::new();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            if self.is_category_header(line) {
                // a repeated header opens a second, independent category
                catalog.push(Category::new(line.trim().to_string()));
            } else if let Some(item) = self.match_item_line(line) {
                trace!("Parsed line: {:?}", item);
                match catalog.last_mut() {
                    Some(current) => current.items.push(item),
                    // item lines before the first header have no home
                    None => trace!("Dropping item line before any category: {:?}", line),
                }
            } else {
                trace!("Skipping unrecognized line: {:?}", line);
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> FreeformParser {
        FreeformParser::new().unwrap()
    }

    #[test]
    fn test_parse_headers_and_items() {
        let input = "\
LIQUEURS
Kahlua 30/15
Baileys 28/14/X
";
        let catalog = parser().parse(input);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].category, "LIQUEURS");
        assert_eq!(catalog[0].items.len(), 2);

        let kahlua = &catalog[0].items[0];
        assert_eq!(kahlua.name, "Kahlua");
        assert_eq!(kahlua.price_2oz, PriceField::Listed(30));
        assert_eq!(kahlua.price_1oz, PriceField::Listed(15));
        assert_eq!(kahlua.price_half, PriceField::Listed(8));

        // the /X marker is accepted and discarded
        let baileys = &catalog[0].items[1];
        assert_eq!(baileys.name, "Baileys");
        assert_eq!(baileys.price_2oz, PriceField::Listed(28));
        assert_eq!(baileys.price_1oz, PriceField::Listed(14));
        assert_eq!(baileys.price_half, PriceField::Listed(7));
    }

    #[test]
    fn test_half_price_rounds_up() {
        let input = "\
WHISKY
Talisker 10 14/7
";
        let catalog = parser().parse(input);
        assert_eq!(catalog[0].items[0].price_half, PriceField::Listed(4));
    }

    #[test]
    fn test_items_before_any_header_are_dropped() {
        let input = "\
Kahlua 30/15
LIQUEURS
Baileys 28/14
";
        let catalog = parser().parse(input);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].items.len(), 1);
        assert_eq!(catalog[0].items[0].name, "Baileys");
    }

    #[test]
    fn test_duplicate_headers_stay_separate() {
        let input = "\
LIQUEURS
Kahlua 30/15
LIQUEURS
Baileys 28/14
";
        let catalog = parser().parse(input);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].category, "LIQUEURS");
        assert_eq!(catalog[1].category, "LIQUEURS");
        assert_eq!(catalog[0].items[0].name, "Kahlua");
        assert_eq!(catalog[1].items[0].name, "Baileys");
    }

    #[test]
    fn test_all_caps_line_with_prices_is_an_item() {
        let input = "\
LIQUEURS
KAHLUA 30/15
";
        let catalog = parser().parse(input);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].items.len(), 1);
        assert_eq!(catalog[0].items[0].name, "KAHLUA");
    }

    #[test]
    fn test_unrecognized_lines_are_dropped() {
        let input = "\
LIQUEURS
ask your server about seasonal pours
Kahlua 30/15
Baileys 28/14 bottle only
";
        let catalog = parser().parse(input);
        assert_eq!(catalog[0].items.len(), 1);
        assert_eq!(catalog[0].items[0].name, "Kahlua");
    }

    #[test]
    fn test_zero_prices_are_unavailable() {
        let input = "\
LIQUEURS
Kahlua 30/0
";
        let catalog = parser().parse(input);
        let kahlua = &catalog[0].items[0];
        assert_eq!(kahlua.price_2oz, PriceField::Listed(30));
        assert_eq!(kahlua.price_1oz, PriceField::Unavailable);
        assert_eq!(kahlua.price_half, PriceField::Unavailable);
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        assert!(parser().parse("").is_empty());
        assert!(parser().parse("\n   \n").is_empty());
    }

    #[test]
    fn test_name_can_contain_prices() {
        let input = "\
SPECIALS
Wine 7/11 Special 30/15
";
        let catalog = parser().parse(input);
        let item = &catalog[0].items[0];
        assert_eq!(item.name, "Wine 7/11 Special");
        assert_eq!(item.price_2oz, PriceField::Listed(30));
        assert_eq!(item.price_1oz, PriceField::Listed(15));
    }
}
