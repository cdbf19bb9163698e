use anyhow::{Context, Result};
use events_core::filter::EventFilter;
use events_core::form::{EventForm, FormMode};
use events_core::payload::{UuidV4, create_payload};
use owo_colors::OwoColorize;

use crate::App;
use crate::commands::form::{EventArgs, complete_form};
use crate::render::render_failure;
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, fields: EventArgs, interactive: bool) -> Result<()> {
    let client = &app.client;

    let categories = with_spinner("Loading categories...", client.list_categories())
        .await
        .context("Error loading categories")?;
    let users = with_spinner("Loading users...", client.list_users())
        .await
        .context("Error loading users")?;

    let mut form = EventForm::new();
    for action in fields.into_actions(&form, &categories)? {
        form.apply(action);
    }

    let valid = complete_form(form, FormMode::Create, &users, &categories, interactive)?;
    let event = create_payload(valid, &UuidV4);

    tracing::debug!(id = %event.id, "creating event");
    let created = with_spinner("Submitting...", client.create_event(&event))
        .await
        .inspect_err(|e| eprintln!("{}", render_failure("Something went wrong", e)))
        .context("Something went wrong")?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Event added successfully: {}", created.title).green());
    println!();

    // Reload the list so the new event shows up
    crate::commands::list::run(app, &EventFilter::default()).await
}
