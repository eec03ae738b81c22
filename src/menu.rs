//! Catalog model and the dram GUI

use eframe::{App, Frame};
use egui::{Align, ComboBox, Layout, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Height of the footer below the category tables
pub const FOOTER_HEIGHT: f32 = 30.0;
/// Height of each row in a category table
pub const ROW_HEIGHT: f32 = 20.0;
/// Wildcard entry prepended to the category dropdown
pub const ALL_CATEGORIES: &str = "All";
/// Rendered in place of a price that is missing, zero, or unparseable
const UNAVAILABLE: &str = "N/A";

/// Errors that can occur when building a catalog
#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// A price per pour size: either a listed dollar amount or unavailable.
///
/// Both parsers normalize through this type, so the catalog shape is the
/// same regardless of which encoding the text used. Formatting happens at
/// the display and serialization boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    /// A known positive whole-dollar price
    Listed(u32),
    /// Missing, zero, or unparseable
    Unavailable,
}

impl PriceField {
    /// Reads a raw price field using leading-digit-prefix semantics, so
    /// `"12abc"` reads as 12. Zero and anything without a digit prefix are
    /// unavailable.
    pub fn parse_prefixed(raw: &str) -> Self {
        let raw = raw.trim();
        let end = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        match raw[..end].parse::<u32>() {
            Ok(amount) => Self::from_amount(amount),
            Err(_) => Self::Unavailable,
        }
    }

    /// Wraps an already-parsed amount. Zero is unavailable.
    pub fn from_amount(amount: u32) -> Self {
        if amount > 0 {
            Self::Listed(amount)
        } else {
            Self::Unavailable
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listed(amount) => write!(f, "${amount}"),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl Serialize for PriceField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A single priced product line within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub price_2oz: PriceField,
    pub price_1oz: PriceField,
    pub price_half: PriceField,
}

/// A named group of priced items, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub category: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(category: String) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }
}

/// Returns the dropdown entries: the `All` wildcard followed by category
/// names deduplicated in first-seen order
pub fn category_names(catalog: &[Category]) -> Vec<String> {
    let mut names = vec![ALL_CATEGORIES.to_string()];
    for category in catalog {
        if !names.iter().any(|name| name == &category.category) {
            names.push(category.category.clone());
        }
    }
    names
}

/// Applies the search term (case-insensitive substring over item names) and
/// the category selection to the catalog. Categories left with no items do
/// not appear in the result.
pub fn filter_catalog(catalog: &[Category], search: &str, selected: &str) -> Vec<Category> {
    let needle = search.to_lowercase();
    catalog
        .iter()
        .filter(|category| selected == ALL_CATEGORIES || category.category == selected)
        .map(|category| Category {
            category: category.category.clone(),
            items: category
                .items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        })
        .filter(|category| !category.items.is_empty())
        .collect()
}

/// Dram GUI app: a search box and category dropdown over one price table
/// per category
pub struct MenuApp {
    /// Parsed catalog; rebuilt wholesale by rerunning a parser, never patched
    catalog: Vec<Category>,
    /// Current search term
    search: String,
    /// Currently selected category name, or the `All` wildcard
    selected_category: String,
}

impl MenuApp {
    pub fn new(catalog: Vec<Category>) -> Self {
        Self {
            catalog,
            search: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        let names = category_names(&self.catalog);
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.search);
            ComboBox::from_id_salt("category_filter")
                .selected_text(self.selected_category.clone())
                .show_ui(ui, |ui| {
                    for name in names {
                        ui.selectable_value(&mut self.selected_category, name.clone(), name);
                    }
                });
        });
    }

    fn render_catalog(&mut self, ui: &mut Ui) {
        if self.catalog.is_empty() {
            ui.heading("No spirits data available");
            return;
        }
        let visible = filter_catalog(&self.catalog, &self.search, &self.selected_category);
        let shown: usize = visible.iter().map(|category| category.items.len()).sum();
        let total: usize = self
            .catalog
            .iter()
            .map(|category| category.items.len())
            .sum();

        ScrollArea::vertical()
            // leave room for footer
            .max_height(ui.available_height() - FOOTER_HEIGHT)
            .show(ui, |ui| {
                for (idx, category) in visible.iter().enumerate() {
                    self.render_category(ui, idx, category);
                }
            });
        self.render_footer(ui, shown, total);
    }

    fn render_category(&self, ui: &mut Ui, idx: usize, category: &Category) {
        ui.add_space(8.0);
        ui.heading(&category.category);
        TableBuilder::new(ui)
            // duplicate freeform headers produce separate categories, so the
            // name alone is not a unique id
            .id_salt(idx)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Min))
            .column(Column::remainder().resizable(true))
            .columns(Column::auto(), 3)
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Spirit");
                });
                header.col(|ui| {
                    ui.strong("2 oz");
                });
                header.col(|ui| {
                    ui.strong("1 oz");
                });
                header.col(|ui| {
                    ui.strong("½ oz");
                });
            })
            .body(|mut body| {
                for item in &category.items {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&item.name);
                        });
                        row.col(|ui| {
                            ui.label(item.price_2oz.to_string());
                        });
                        row.col(|ui| {
                            ui.label(item.price_1oz.to_string());
                        });
                        row.col(|ui| {
                            ui.label(item.price_half.to_string());
                        });
                    });
                }
            });
    }

    fn render_footer(&self, ui: &mut Ui, shown: usize, total: usize) {
        ui.separator();
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(format!("Showing {shown} of {total} spirits"));
        });
    }
}

impl App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
            ui.separator();
            self.render_catalog(ui);
        });
    }
}
