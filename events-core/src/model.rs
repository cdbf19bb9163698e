//! Records served by the backend.
//!
//! Field names follow the backend's camelCase JSON. Fields the backend
//! may omit deserialize to empty values.

use serde::{Deserialize, Deserializer, Serialize};

use crate::time::EventTime;

pub type UserId = u64;
pub type CategoryId = u64;

/// An event record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub location: String,
    pub start_time: EventTime,
    pub end_time: EventTime,
    #[serde(deserialize_with = "number_or_string")]
    pub created_by: UserId,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

impl Event {
    pub fn has_category(&self, id: CategoryId) -> bool {
        self.category_ids.contains(&id)
    }
}

/// Seeded records carry numeric ids, records created by this client carry UUIDs.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Older clients posted `createdBy` as the raw select value.
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(u64),
        Text(String),
    }

    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Ok(n),
        RawNumber::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Avatar URL
    #[serde(default)]
    pub image: String,
}
