//! Client-side filtering for the event list.

use crate::model::{CategoryId, Event};

/// Free-text query plus an optional category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub query: String,
    pub category: Option<CategoryId>,
}

/// Result of applying a filter. `NoResults` is kept distinct so the list
/// view can show its placeholder instead of an empty grid.
#[derive(Debug, PartialEq)]
pub enum FilterResult<'a> {
    Matches(Vec<&'a Event>),
    NoResults,
}

impl<'a> FilterResult<'a> {
    pub fn events(&self) -> &[&'a Event] {
        match self {
            FilterResult::Matches(events) => events,
            FilterResult::NoResults => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterResult::NoResults)
    }
}

impl EventFilter {
    pub fn new(query: impl Into<String>, category: Option<CategoryId>) -> Self {
        EventFilter {
            query: query.into(),
            category,
        }
    }

    /// Build from the raw select value, where an empty string means
    /// "all categories".
    pub fn from_select(query: impl Into<String>, category: &str) -> Result<Self, String> {
        let category = category.trim();
        let category = if category.is_empty() {
            None
        } else {
            Some(
                category
                    .parse::<CategoryId>()
                    .map_err(|_| format!("Invalid category '{}'. Expected a numeric id", category))?,
            )
        };
        Ok(Self::new(query, category))
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none()
    }

    pub fn matches_text(&self, event: &Event) -> bool {
        self.query.is_empty()
            || event
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }

    pub fn matches_category(&self, event: &Event) -> bool {
        self.category.is_none_or(|id| event.has_category(id))
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_text(event) && self.matches_category(event)
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> FilterResult<'a> {
        let matched: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();
        if matched.is_empty() {
            FilterResult::NoResults
        } else {
            FilterResult::Matches(matched)
        }
    }
}
