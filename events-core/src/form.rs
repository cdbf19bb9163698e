//! Typed state for the create and edit forms.
//!
//! Every change goes through `EventForm::apply`, so the category
//! checkboxes and the text fields share one update path. `validate`
//! turns the raw string state into a `ValidForm` ready for payload
//! building, or reports every failing field at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CategoryId, Event, UserId};
use crate::selection::CategorySelection;
use crate::time::EventTime;

const MIN_TEXT_LEN: usize = 4;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://.*\.(?:png|jpg|jpeg|gif|webp|svg)$").expect("valid image url pattern")
});

/// Which form is being submitted. Only the edit form insists on a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CreatedBy,
    Title,
    Description,
    Image,
    Location,
    StartTime,
    EndTime,
    Categories,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::CreatedBy => "created by",
            Field::Title => "title",
            Field::Description => "description",
            Field::Image => "image",
            Field::Location => "location",
            Field::StartTime => "start time",
            Field::EndTime => "end time",
            Field::Categories => "categories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetCreatedBy(String),
    SetTitle(String),
    SetDescription(String),
    SetImage(String),
    SetLocation(String),
    SetStartTime(String),
    SetEndTime(String),
    ToggleCategory { value: String, checked: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    /// Raw select value, e.g. "2"
    pub created_by: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub location: String,
    /// `datetime-local` value
    pub start_time: String,
    pub end_time: String,
    pub categories: CategorySelection,
}

/// Form values that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm {
    pub created_by: UserId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub location: String,
    pub start_time: EventTime,
    pub end_time: EventTime,
    pub category_ids: Vec<CategoryId>,
}

/// Field-level validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(Field, String)>);

impl FormErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, String)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from a fetched record, as the edit form does.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            created_by: event.created_by.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            image: event.image.clone(),
            location: event.location.clone(),
            start_time: event.start_time.to_datetime_local(),
            end_time: event.end_time.to_datetime_local(),
            categories: CategorySelection::from_ids(&event.category_ids),
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetCreatedBy(v) => self.created_by = v,
            FormAction::SetTitle(v) => self.title = v,
            FormAction::SetDescription(v) => self.description = v,
            FormAction::SetImage(v) => self.image = v,
            FormAction::SetLocation(v) => self.location = v,
            FormAction::SetStartTime(v) => self.start_time = v,
            FormAction::SetEndTime(v) => self.end_time = v,
            FormAction::ToggleCategory { value, checked } => self.categories.toggle(&value, checked),
        }
    }

    /// Reducer-style variant of `apply`.
    pub fn with(mut self, action: FormAction) -> Self {
        self.apply(action);
        self
    }

    pub fn validate(&self, mode: FormMode) -> Result<ValidForm, FormErrors> {
        let mut errors = FormErrors::default();

        let creator = self.created_by.trim();
        let created_by = if creator.is_empty() {
            errors.push(Field::CreatedBy, "This is required");
            None
        } else {
            match creator.parse::<UserId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(Field::CreatedBy, "Choose a user from the list");
                    None
                }
            }
        };

        check_text(&mut errors, Field::Title, &self.title);
        check_text(&mut errors, Field::Description, &self.description);

        if self.image.is_empty() {
            errors.push(Field::Image, "Image URL is required");
        } else if !IMAGE_URL.is_match(&self.image) {
            errors.push(Field::Image, "Fill in a valid image URL");
        }

        check_text(&mut errors, Field::Location, &self.location);

        let start_time = EventTime::new(self.start_time.clone());
        let end_time = EventTime::new(self.end_time.clone());

        let start = if start_time.is_empty() {
            errors.push(Field::StartTime, "Start time is required");
            None
        } else {
            let parsed = start_time.to_local();
            if parsed.is_none() {
                errors.push(Field::StartTime, "Enter a valid date and time");
            }
            parsed
        };

        if end_time.is_empty() {
            errors.push(Field::EndTime, "End time is required");
        } else {
            match (start, end_time.to_local()) {
                (_, None) => errors.push(Field::EndTime, "Enter a valid date and time"),
                (Some(start), Some(end)) if end <= start => {
                    errors.push(Field::EndTime, "End time must be after start time")
                }
                _ => {}
            }
        }

        let category_ids = match self.categories.to_ids() {
            Ok(ids) => ids,
            Err(e) => {
                errors.push(Field::Categories, e.to_string());
                Vec::new()
            }
        };
        if mode == FormMode::Update && self.categories.is_empty() {
            errors.push(Field::Categories, "At least one category is required");
        }

        match created_by {
            Some(created_by) if errors.is_empty() => Ok(ValidForm {
                created_by,
                title: self.title.clone(),
                description: self.description.clone(),
                image: self.image.clone(),
                location: self.location.clone(),
                start_time,
                end_time,
                category_ids,
            }),
            _ => Err(errors),
        }
    }
}

fn check_text(errors: &mut FormErrors, field: Field, value: &str) {
    if value.is_empty() {
        errors.push(field, "This is required");
    } else if value.chars().count() < MIN_TEXT_LEN {
        errors.push(field, format!("Minimum length should be {}", MIN_TEXT_LEN));
    }
}
