use anyhow::{Context, Result};
use events_core::form::{EventForm, FormMode};
use events_core::payload::update_payload;
use owo_colors::OwoColorize;

use crate::App;
use crate::commands::form::{EventArgs, complete_form};
use crate::commands::list::navigate_away;
use crate::render::render_failure;
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, id: &str, fields: EventArgs, interactive: bool) -> Result<()> {
    let client = &app.client;

    let event = with_spinner("Loading...", client.get_event(id))
        .await
        .context("An error has occurred")?;
    let categories = with_spinner("Loading categories...", client.list_categories())
        .await
        .context("Error loading categories")?;
    let users = with_spinner("Loading users...", client.list_users())
        .await
        .context("Error loading users")?;

    println!("{}", format!("Edit this Event [ID {}]", event.id).bold());

    let mut form = EventForm::from_event(&event);
    for action in fields.into_actions(&form, &categories)? {
        form.apply(action);
    }

    let valid = complete_form(form, FormMode::Update, &users, &categories, interactive)?;
    let payload = update_payload(&event.id, valid);

    let updated = with_spinner("Updating...", client.update_event(&payload))
        .await
        .inspect_err(|e| eprintln!("{}", render_failure("Error while updating", e)))
        .context("Error while updating")?;
    tracing::debug!(id = %updated.id, "event updated");

    println!("{}", "Event updated successfully!".green().bold());
    navigate_away(app).await
}
