//! Request bodies for create and update submissions.

use uuid::Uuid;

use crate::error::{EventsError, EventsResult};
use crate::form::{EventForm, FormMode, ValidForm};
use crate::model::Event;

/// Source of identifiers for new events.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Body for `POST /events`: the form values under a fresh identifier.
pub fn create_payload(form: ValidForm, ids: &impl IdGenerator) -> Event {
    into_event(ids.next_id(), form)
}

/// Body for `PUT /events/:id`: the form values under the existing identifier.
pub fn update_payload(id: &str, form: ValidForm) -> Event {
    into_event(id.to_string(), form)
}

/// Validate a create form and build its payload.
pub fn prepare_create(form: &EventForm, ids: &impl IdGenerator) -> EventsResult<Event> {
    let valid = form.validate(FormMode::Create).map_err(EventsError::Validation)?;
    Ok(create_payload(valid, ids))
}

/// Validate an edit form and build its payload.
pub fn prepare_update(id: &str, form: &EventForm) -> EventsResult<Event> {
    let valid = form.validate(FormMode::Update).map_err(EventsError::Validation)?;
    Ok(update_payload(id, valid))
}

fn into_event(id: String, form: ValidForm) -> Event {
    Event {
        id,
        title: form.title,
        description: form.description,
        image: form.image,
        location: form.location,
        start_time: form.start_time,
        end_time: form.end_time,
        created_by: form.created_by,
        category_ids: form.category_ids,
    }
}
