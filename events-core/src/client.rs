//! HTTP client for the events backend.
//!
//! One method per endpoint. Every call is a single request with no
//! retry; any non-2xx status becomes `EventsError::Status`.

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{EventsError, EventsResult};
use crate::model::{Category, CategoryId, Event, User};

#[derive(Debug, Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EventsClient {
    pub fn new(base_url: &str) -> EventsResult<Self> {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> EventsResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| EventsError::Config(format!("Invalid base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(EventsError::Config(format!(
                "Base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("events-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;

        Ok(EventsClient { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// GET /events
    pub async fn list_events(&self) -> EventsResult<Vec<Event>> {
        self.get_json(&["events"]).await
    }

    /// GET /events/:id
    pub async fn get_event(&self, id: &str) -> EventsResult<Event> {
        self.get_json(&["events", id]).await
    }

    /// POST /events
    pub async fn create_event(&self, event: &Event) -> EventsResult<Event> {
        let resp = self
            .send(self.request(Method::POST, &["events"])?.json(event))
            .await?;
        Ok(resp.json().await?)
    }

    /// PUT /events/:id
    pub async fn update_event(&self, event: &Event) -> EventsResult<Event> {
        let resp = self
            .send(self.request(Method::PUT, &["events", &event.id])?.json(event))
            .await?;
        Ok(resp.json().await?)
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: &str) -> EventsResult<()> {
        self.send(self.request(Method::DELETE, &["events", id])?).await?;
        Ok(())
    }

    /// GET /categories
    pub async fn list_categories(&self) -> EventsResult<Vec<Category>> {
        self.get_json(&["categories"]).await
    }

    /// GET /categories/:id
    pub async fn get_category(&self, id: CategoryId) -> EventsResult<Category> {
        self.get_json(&["categories", &id.to_string()]).await
    }

    /// GET /users
    pub async fn list_users(&self) -> EventsResult<Vec<User>> {
        self.get_json(&["users"]).await
    }

    /// Base URL extended with `segments`, each percent-encoded as one path segment.
    pub fn url(&self, segments: &[&str]) -> EventsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EventsError::Config(format!("Base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> EventsResult<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "request");
        Ok(self.http.request(method, url))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> EventsResult<T> {
        let resp = self.send(self.request(Method::GET, segments)?).await?;
        Ok(resp.json().await?)
    }

    async fn send(&self, req: RequestBuilder) -> EventsResult<Response> {
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let url = resp.url().to_string();
            tracing::warn!(%status, %url, "backend returned an error");
            return Err(EventsError::Status { status, url });
        }

        Ok(resp)
    }
}
