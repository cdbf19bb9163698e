use anyhow::{Context, Result};
use events_core::view::EventDetail;

use crate::App;
use crate::render::{Render, render_nav};
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, id: &str) -> Result<()> {
    let client = &app.client;

    let event = with_spinner("Loading...", client.get_event(id))
        .await
        .context("An error has occurred")?;
    let users = with_spinner("Loading users...", client.list_users())
        .await
        .context("Error loading users")?;
    let categories = with_spinner("Loading categories...", client.list_categories())
        .await
        .context("Error loading categories")?;

    let detail = EventDetail::assemble(event, &users, &categories);

    println!("{}", render_nav());
    println!();
    println!("{}", detail.render());

    Ok(())
}
