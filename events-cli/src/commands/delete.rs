use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::App;
use crate::commands::list::navigate_away;
use crate::utils::tui::with_spinner;

pub async fn run(app: &App, id: &str, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!("Are you sure you want to delete event {}?", id))
            .default(false)
            .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    // A failed delete is logged, not reported
    if let Err(e) = with_spinner("Deleting...", app.client.delete_event(id)).await {
        tracing::error!(error = %e, id, "failed to delete event");
        return Ok(());
    }

    println!("{}", "Event deleted successfully!".green().bold());
    navigate_away(app).await
}
