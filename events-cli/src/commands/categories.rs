use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::App;
use crate::render::Render;
use crate::utils::tui::with_spinner;

pub async fn run(app: &App) -> Result<()> {
    let categories = with_spinner("Loading categories...", app.client.list_categories())
        .await
        .context("Error loading categories")?;

    if categories.is_empty() {
        println!("{}", "No categories found".dimmed());
        return Ok(());
    }

    for category in &categories {
        println!("{}", category.render());
    }

    Ok(())
}
