//! Core types for the events client.
//!
//! This crate holds everything that does not touch the terminal:
//! - `model` for the records served by the backend
//! - `client` for the REST request layer
//! - `selection`, `form` and `payload` for the create/edit form state
//! - `filter` and `view` for list and detail assembly

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod model;
pub mod payload;
pub mod selection;
pub mod time;
pub mod view;

pub use client::EventsClient;
pub use error::{EventsError, EventsResult};
pub use model::{Category, Event, User};
