//! Selected-categories working set for one form instance.
//!
//! Values are kept as the string-encoded ids the checkboxes carry, in the
//! order they were checked. A box's checked state is always derived from
//! membership, so rendering can never drift from the stored value.

use crate::error::{EventsError, EventsResult};
use crate::model::CategoryId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    values: Vec<String>,
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a record's category ids, keeping their order.
    pub fn from_ids(ids: &[CategoryId]) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.toggle(&id.to_string(), true);
        }
        selection
    }

    /// Apply a checkbox change. Checking appends the value if absent,
    /// unchecking removes every occurrence.
    pub fn toggle(&mut self, value: &str, checked: bool) {
        if checked {
            if !self.is_checked(value) {
                self.values.push(value.to_string());
            }
        } else {
            self.values.retain(|v| v != value);
        }
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Numeric ids in toggle order.
    pub fn to_ids(&self) -> EventsResult<Vec<CategoryId>> {
        self.values
            .iter()
            .map(|v| {
                v.trim()
                    .parse::<CategoryId>()
                    .map_err(|_| EventsError::InvalidCategoryId(v.clone()))
            })
            .collect()
    }
}
