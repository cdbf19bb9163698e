use anyhow::{Context, Result};
use events_core::filter::EventFilter;
use owo_colors::OwoColorize;

use crate::App;
use crate::render::{render_event_list, render_nav};
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, filter: &EventFilter) -> Result<()> {
    let (events, categories) = with_spinner("Loading events...", async {
        tokio::try_join!(app.client.list_events(), app.client.list_categories())
    })
    .await
    .context("An error has occurred")?;

    println!("{}", render_nav());
    println!();
    println!("{}", "List of events".bold());
    if !filter.is_empty() {
        let category = filter.category.map(|id| format!(" in category {}", id)).unwrap_or_default();
        println!("{}", format!("Matching \"{}\"{}", filter.query, category).dimmed());
    }
    println!();

    let result = filter.apply(&events);
    println!("{}", render_event_list(&result, &categories));

    Ok(())
}

/// Leave the success notice up for the configured delay, then show the list.
pub async fn navigate_away(app: &App) -> Result<()> {
    let delay = app.config.navigate_delay();
    if !delay.is_zero() {
        with_spinner("Returning to events...", tokio::time::sleep(delay)).await;
    }
    println!();
    run(app, &EventFilter::default()).await
}
