//! View models assembled from fetched records.

use crate::model::{Category, CategoryId, Event, User};

/// Categories matching `ids`, in the order of `ids`. Unknown ids are skipped.
pub fn match_categories<'a>(ids: &[CategoryId], categories: &'a [Category]) -> Vec<&'a Category> {
    ids.iter()
        .filter_map(|id| categories.iter().find(|c| c.id == *id))
        .collect()
}

/// One card in the event list.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub categories: Vec<&'a Category>,
}

impl<'a> EventCard<'a> {
    pub fn from_event(event: &'a Event, categories: &'a [Category]) -> Self {
        EventCard {
            event,
            categories: match_categories(&event.category_ids, categories),
        }
    }

    pub fn category_names(&self) -> Vec<&'a str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

/// The detail page for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub creator: Option<User>,
    pub categories: Vec<Category>,
}

impl EventDetail {
    pub fn assemble(event: Event, users: &[User], categories: &[Category]) -> Self {
        let creator = users.iter().find(|u| u.id == event.created_by).cloned();
        let categories = match_categories(&event.category_ids, categories)
            .into_iter()
            .cloned()
            .collect();

        EventDetail {
            event,
            creator,
            categories,
        }
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
