//! Runs the dram app

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use eframe::{NativeOptions, run_native};
use egui::ViewportBuilder;
use log::debug;
use tokio::io::AsyncReadExt;

use crate::Args;
use crate::menu::MenuApp;
use crate::parsers::{
    CatalogParser, freeform::FreeformParser, inference::MenuFormat, tabular::TabularParser,
};

/// Reads the raw price list text from the given file, or stdin when no file
/// is given. The parsers only start once the full text is in memory.
async fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to load spirits data from {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to load spirits data from stdin")?;
            Ok(text)
        }
    }
}

/// Runs the dram app
pub async fn run_dram(args: Args) -> Result<()> {
    let text = read_input(args.input.as_ref()).await?;

    let format = args.format.unwrap_or_else(|| MenuFormat::infer(&text));
    debug!("Parsing input as {:?}", format);
    let catalog = match format {
        MenuFormat::Tabular => TabularParser::new().parse(&text),
        MenuFormat::Freeform => FreeformParser::new()?.parse(&text),
    };
    debug!(
        "Parsed {} categories with {} items",
        catalog.len(),
        catalog.iter().map(|c| c.items.len()).sum::<usize>()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let app = MenuApp::new(catalog);
    let viewport = ViewportBuilder::default().with_app_id("dram");
    let native_options = NativeOptions {
        viewport,
        ..Default::default()
    };
    run_native("dram", native_options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|_| anyhow!("Failed to run native app"))?;

    Ok(())
}
