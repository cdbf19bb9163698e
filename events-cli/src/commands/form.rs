//! Prompting shared by `new` and `edit`.
//!
//! Flags and prompts both produce `FormAction`s, so the form state only
//! ever changes through `EventForm::apply`.

use anyhow::{Result, bail};
use clap::Args;
use dialoguer::{Input, MultiSelect, Select};
use events_core::form::{EventForm, Field, FormAction, FormErrors, FormMode, ValidForm};
use events_core::time::EventTime;
use events_core::{Category, User};
use owo_colors::OwoColorize;

use crate::render::Render;

const FIELD_ORDER: &[Field] = &[
    Field::CreatedBy,
    Field::Title,
    Field::Description,
    Field::Image,
    Field::Categories,
    Field::Location,
    Field::StartTime,
    Field::EndTime,
];

#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Event title
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Image URL (png, jpg, jpeg, gif, webp or svg)
    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Start date/time (e.g., "2025-03-20T15:00")
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date/time (e.g., "2025-03-20T17:00")
    #[arg(short, long)]
    pub end: Option<String>,

    /// Id of the user creating the event
    #[arg(long)]
    pub created_by: Option<String>,

    /// Category id to check; repeat for several. Replaces the current selection.
    #[arg(short, long = "category", value_name = "ID")]
    pub categories: Vec<String>,
}

impl EventArgs {
    /// Actions that bring `form` in line with the given flags.
    ///
    /// Category flags must name one of `categories`.
    pub fn into_actions(self, form: &EventForm, categories: &[Category]) -> Result<Vec<FormAction>> {
        let wanted: Vec<String> = self.categories.iter().map(|v| v.trim().to_string()).collect();
        if let Some(unknown) = wanted
            .iter()
            .find(|value| !categories.iter().any(|c| c.id.to_string() == **value))
        {
            bail!("Unknown category '{}'. Run `events categories` to see the available ids", unknown);
        }

        let mut actions = Vec::new();

        let setters: [(Option<String>, fn(String) -> FormAction); 7] = [
            (self.created_by, FormAction::SetCreatedBy),
            (self.title, FormAction::SetTitle),
            (self.description, FormAction::SetDescription),
            (self.image, FormAction::SetImage),
            (self.location, FormAction::SetLocation),
            (self.start.map(normalize_datetime), FormAction::SetStartTime),
            (self.end.map(normalize_datetime), FormAction::SetEndTime),
        ];
        for (value, action) in setters {
            if let Some(value) = value {
                actions.push(action(value));
            }
        }

        if !wanted.is_empty() {
            for current in form.categories.values() {
                if !wanted.contains(current) {
                    actions.push(FormAction::ToggleCategory {
                        value: current.clone(),
                        checked: false,
                    });
                }
            }
            for value in wanted {
                actions.push(FormAction::ToggleCategory {
                    value,
                    checked: true,
                });
            }
        }

        Ok(actions)
    }
}

/// Prompt (when interactive) until the form validates.
pub fn complete_form(
    mut form: EventForm,
    mode: FormMode,
    users: &[User],
    categories: &[Category],
    interactive: bool,
) -> Result<ValidForm> {
    if interactive {
        for field in FIELD_ORDER {
            prompt_field(&mut form, *field, users, categories)?;
        }
    }

    loop {
        match form.validate(mode) {
            Ok(valid) => return Ok(valid),
            Err(errors) => {
                eprintln!("{}", errors.render());
                if !interactive {
                    bail!("Event is invalid ({} field(s))", errors.len());
                }
                for field in fields_to_reprompt(&errors, categories)? {
                    prompt_field(&mut form, field, users, categories)?;
                }
            }
        }
    }
}

/// Failing fields in prompt order; fails when a prompt cannot fix them.
fn fields_to_reprompt(errors: &FormErrors, categories: &[Category]) -> Result<Vec<Field>> {
    if let Some(message) = errors.get(Field::Categories).filter(|_| categories.is_empty()) {
        bail!("{} (the backend has no categories to choose from)", message);
    }

    Ok(FIELD_ORDER
        .iter()
        .copied()
        .filter(|f| errors.get(*f).is_some())
        .collect())
}

fn prompt_field(form: &mut EventForm, field: Field, users: &[User], categories: &[Category]) -> Result<()> {
    match field {
        Field::CreatedBy => form.apply(FormAction::SetCreatedBy(prompt_creator(&form.created_by, users)?)),
        Field::Title => form.apply(FormAction::SetTitle(prompt_text("Title", &form.title)?)),
        Field::Description => {
            form.apply(FormAction::SetDescription(prompt_text("Description", &form.description)?))
        }
        Field::Image => form.apply(FormAction::SetImage(prompt_text("Image URL", &form.image)?)),
        Field::Location => form.apply(FormAction::SetLocation(prompt_text("Location", &form.location)?)),
        Field::StartTime => form.apply(FormAction::SetStartTime(normalize_datetime(prompt_text(
            "Start (YYYY-MM-DDTHH:MM)",
            &form.start_time,
        )?))),
        Field::EndTime => form.apply(FormAction::SetEndTime(normalize_datetime(prompt_text(
            "End (YYYY-MM-DDTHH:MM)",
            &form.end_time,
        )?))),
        Field::Categories => {
            for action in prompt_categories(form, categories)? {
                form.apply(action);
            }
        }
    }
    Ok(())
}

fn prompt_text(label: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("  {}", label))
        .allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

/// Select value for the creator: the chosen user's id.
fn prompt_creator(current: &str, users: &[User]) -> Result<String> {
    if users.is_empty() {
        return prompt_text("Created by (user id)", current);
    }

    let items: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    let default = users
        .iter()
        .position(|u| u.id.to_string() == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Created by")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(users[selection].id.to_string())
}

/// One toggle per category, checked state taken from the multi-select.
fn prompt_categories(form: &EventForm, categories: &[Category]) -> Result<Vec<FormAction>> {
    if categories.is_empty() {
        eprintln!("  {}", "No categories available".dimmed());
        return Ok(Vec::new());
    }

    let items: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let checked: Vec<bool> = categories
        .iter()
        .map(|c| form.categories.is_checked(&c.id.to_string()))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("  Categories (space to toggle)")
        .items(&items)
        .defaults(&checked)
        .interact()?;

    Ok(categories
        .iter()
        .enumerate()
        .map(|(i, c)| FormAction::ToggleCategory {
            value: c.id.to_string(),
            checked: selected.contains(&i),
        })
        .collect())
}

/// Store parseable input in `datetime-local` form; leave the rest for validation to flag.
fn normalize_datetime(input: String) -> String {
    let time = EventTime::new(input.trim());
    match time.to_local() {
        Some(_) => time.to_datetime_local(),
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        ["Sports", "Board games", "Music"]
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: i as u64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    fn apply_all(form: &EventForm, args: EventArgs) -> EventForm {
        let mut applied = form.clone();
        for action in args.into_actions(form, &categories()).unwrap() {
            applied.apply(action);
        }
        applied
    }

    #[test]
    fn flags_become_actions() {
        let args = EventArgs {
            title: Some("Run Club".into()),
            start: Some("2024-01-05 07:00".into()),
            categories: vec!["2".into()],
            ..Default::default()
        };

        let applied = apply_all(&EventForm::new(), args);

        assert_eq!(applied.title, "Run Club");
        assert_eq!(applied.start_time, "2024-01-05T07:00");
        assert_eq!(applied.categories.values(), ["2"]);
        assert!(applied.description.is_empty());
    }

    #[test]
    fn category_flags_replace_selection() {
        let form = EventForm::new()
            .with(FormAction::ToggleCategory { value: "1".into(), checked: true })
            .with(FormAction::ToggleCategory { value: "3".into(), checked: true });

        let args = EventArgs {
            categories: vec!["3".into(), "2".into()],
            ..Default::default()
        };

        assert_eq!(apply_all(&form, args).categories.values(), ["3", "2"]);
    }

    #[test]
    fn unknown_category_flags_are_rejected() {
        for value in ["9", "sports", ""] {
            let args = EventArgs {
                categories: vec!["1".into(), value.into()],
                ..Default::default()
            };
            let err = args.into_actions(&EventForm::new(), &categories()).unwrap_err();
            assert!(err.to_string().contains("Unknown category"), "{}", value);
        }
    }

    #[test]
    fn category_flags_need_fetched_categories() {
        let args = EventArgs {
            categories: vec!["1".into()],
            ..Default::default()
        };
        assert!(args.into_actions(&EventForm::new(), &[]).is_err());
    }

    #[test]
    fn no_flags_no_actions() {
        assert!(
            EventArgs::default()
                .into_actions(&EventForm::new(), &[])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn normalize_keeps_unparseable_input() {
        assert_eq!(normalize_datetime("2024-01-05T07:00:00".into()), "2024-01-05T07:00");
        assert_eq!(normalize_datetime("tomorrow".into()), "tomorrow");
    }

    #[test]
    fn non_interactive_invalid_form_fails() {
        let result = complete_form(EventForm::new(), FormMode::Create, &[], &[], false);
        assert!(result.is_err());
    }

    fn filled() -> EventForm {
        EventForm::new()
            .with(FormAction::SetCreatedBy("2".into()))
            .with(FormAction::SetTitle("Run Club".into()))
            .with(FormAction::SetDescription("Morning run along the river".into()))
            .with(FormAction::SetImage("https://example.com/run.png".into()))
            .with(FormAction::SetLocation("City park".into()))
            .with(FormAction::SetStartTime("2024-01-05T07:00".into()))
            .with(FormAction::SetEndTime("2024-01-05T08:00".into()))
    }

    #[test]
    fn missing_category_without_choices_stops_reprompting() {
        let errors = filled().validate(FormMode::Update).unwrap_err();

        let err = fields_to_reprompt(&errors, &[]).unwrap_err();
        assert!(err.to_string().contains("At least one category is required"));

        assert_eq!(
            fields_to_reprompt(&errors, &categories()).unwrap(),
            [Field::Categories]
        );
    }

    #[test]
    fn reprompt_follows_field_order() {
        let errors = filled()
            .with(FormAction::SetEndTime("".into()))
            .with(FormAction::SetTitle("Run".into()))
            .with(FormAction::SetCreatedBy("".into()))
            .validate(FormMode::Create)
            .unwrap_err();

        assert_eq!(
            fields_to_reprompt(&errors, &[]).unwrap(),
            [Field::CreatedBy, Field::Title, Field::EndTime]
        );
    }

    #[test]
    fn flagged_form_completes_without_prompting() {
        let args = EventArgs {
            created_by: Some("2".into()),
            title: Some("Run Club".into()),
            description: Some("Morning run along the river".into()),
            image: Some("https://example.com/run.png".into()),
            location: Some("City park".into()),
            start: Some("2024-01-05T07:00".into()),
            end: Some("2024-01-05T08:00".into()),
            categories: vec!["1".into()],
        };

        let form = apply_all(&EventForm::new(), args);
        let valid = complete_form(form, FormMode::Update, &[], &categories(), false).unwrap();
        assert_eq!(valid.category_ids, vec![1]);
    }
}
