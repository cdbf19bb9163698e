//! Terminal rendering for events-core types.
//!
//! Extension traits that add colored output to core view models using
//! owo_colors.

use events_core::Category;
use events_core::filter::FilterResult;
use events_core::form::FormErrors;
use events_core::view::{EventCard, EventDetail};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Header printed above list and detail views.
pub fn render_nav() -> String {
    format!(
        "{}   {}  {}",
        "My Events App".bold(),
        "events list".cyan(),
        "events show <id>".cyan()
    )
}

fn render_category_names(names: &[&str]) -> String {
    if names.is_empty() {
        "none".dimmed().to_string()
    } else {
        names.join(", ")
    }
}

impl Render for EventCard<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let mut lines = vec![format!("{} {}", event.title.bold(), format!("#{}", event.id).dimmed())];

        if !event.description.is_empty() {
            lines.push(format!("  {}", event.description));
        }
        if !event.image.is_empty() {
            lines.push(format!("  {}", event.image.dimmed()));
        }
        lines.push(format!("  Start: {}", event.start_time));
        lines.push(format!("  End:   {}", event.end_time));
        lines.push(format!("  Categories: {}", render_category_names(&self.category_names())));

        lines.join("\n")
    }
}

impl Render for EventDetail {
    fn render(&self) -> String {
        let event = &self.event;
        let mut lines = vec![
            "Details Selected Event".dimmed().to_string(),
            event.title.bold().to_string(),
            event.description.clone(),
        ];

        if !event.image.is_empty() {
            lines.push(format!("Image:    {}", event.image.dimmed()));
        }
        if !event.location.is_empty() {
            lines.push(format!("Location: {}", event.location));
        }
        lines.push(format!("Start:    {}", event.start_time));
        lines.push(format!("End:      {}", event.end_time));
        lines.push(format!("Categories: {}", render_category_names(&self.category_names())));

        match &self.creator {
            Some(user) if user.image.is_empty() => lines.push(format!("Created by: {}", user.name.bold())),
            Some(user) => lines.push(format!("Created by: {} {}", user.name.bold(), user.image.dimmed())),
            None => lines.push(format!("Created by: {}", "unknown".dimmed())),
        }

        lines.push(String::new());
        lines.push(format!("  {}  {}", format!("events edit {}", event.id).cyan(), "edit this event".dimmed()));
        lines.push(format!("  {}  {}", "events list".cyan(), "back to events".dimmed()));

        lines.join("\n")
    }
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{:>4}  {}", self.id.to_string().dimmed(), self.name)
    }
}

impl Render for FormErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("  {} {}", format!("{}:", field.label()).red(), message.red()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Red notice for a failed write, e.g. "Something went wrong: <error>".
pub fn render_failure(prefix: &str, error: &dyn std::fmt::Display) -> String {
    format!("{}: {}", prefix, error).red().to_string()
}

/// Render the filtered list as cards, or the placeholder when nothing matched.
pub fn render_event_list(result: &FilterResult<'_>, categories: &[Category]) -> String {
    match result {
        FilterResult::NoResults => "No results found.".dimmed().to_string(),
        FilterResult::Matches(events) => events
            .iter()
            .map(|event| EventCard::from_event(event, categories).render())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
