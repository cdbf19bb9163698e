//! Command-level tests against an in-process fake backend.
//!
//! Every `App` here has `navigate_delay_ms = 0`, so flows that navigate
//! away finish immediately.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        routing::get,
    };
    use events_core::config::ClientConfig;
    use events_core::filter::EventFilter;
    use events_core::{Category, Event, EventsClient, User};

    use crate::App;
    use crate::commands::form::EventArgs;
    use crate::commands::{delete, edit, list, new, show};

    #[derive(Clone)]
    struct Backend {
        events: Arc<Mutex<Vec<Event>>>,
        categories: Vec<Category>,
        fail_writes: bool,
        writes: Arc<AtomicUsize>,
    }

    impl Backend {
        fn seeded() -> Self {
            Backend {
                events: Arc::new(Mutex::new(vec![
                    seed_event("1", "Run Club", vec![1]),
                    seed_event("2", "Chess Night", vec![2]),
                ])),
                categories: vec![
                    Category { id: 1, name: "sports".into() },
                    Category { id: 2, name: "games".into() },
                    Category { id: 3, name: "relaxation".into() },
                ],
                fail_writes: false,
                writes: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Backend {
                fail_writes: true,
                ..Self::seeded()
            }
        }

        fn event(&self, id: &str) -> Option<Event> {
            self.events.lock().unwrap().iter().find(|e| e.id == id).cloned()
        }

        fn len(&self) -> usize {
            self.events.lock().unwrap().len()
        }

        fn write_attempts(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        /// Count a write; `Err` when the backend is set to reject writes.
        fn write(&self) -> Result<(), StatusCode> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            } else {
                Ok(())
            }
        }
    }

    fn seed_event(id: &str, title: &str, category_ids: Vec<u64>) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "Seeded event".to_string(),
            image: "https://example.com/seed.png".to_string(),
            location: "Somewhere".to_string(),
            start_time: "2024-01-05T19:00".into(),
            end_time: "2024-01-05T21:00".into(),
            created_by: 1,
            category_ids,
        }
    }

    async fn list_events(State(b): State<Backend>) -> Json<Vec<Event>> {
        Json(b.events.lock().unwrap().clone())
    }

    async fn get_event(State(b): State<Backend>, Path(id): Path<String>) -> Result<Json<Event>, StatusCode> {
        b.event(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
    }

    async fn create_event(
        State(b): State<Backend>,
        Json(event): Json<Event>,
    ) -> Result<(StatusCode, Json<Event>), StatusCode> {
        b.write()?;
        b.events.lock().unwrap().push(event.clone());
        Ok((StatusCode::CREATED, Json(event)))
    }

    async fn update_event(
        State(b): State<Backend>,
        Path(id): Path<String>,
        Json(event): Json<Event>,
    ) -> Result<Json<Event>, StatusCode> {
        b.write()?;
        let mut events = b.events.lock().unwrap();
        let slot = events.iter_mut().find(|e| e.id == id).ok_or(StatusCode::NOT_FOUND)?;
        *slot = event.clone();
        Ok(Json(event))
    }

    async fn delete_event(State(b): State<Backend>, Path(id): Path<String>) -> Result<Json<serde_json::Value>, StatusCode> {
        b.write()?;
        let mut events = b.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(Json(serde_json::json!({})))
    }

    async fn list_categories(State(b): State<Backend>) -> Json<Vec<Category>> {
        Json(b.categories.clone())
    }

    async fn list_users() -> Json<Vec<User>> {
        Json(vec![
            User { id: 1, name: "Michael Turner".into(), image: String::new() },
            User { id: 2, name: "Sophia Collins".into(), image: String::new() },
        ])
    }

    async fn spawn_app(backend: Backend) -> App {
        let router = Router::new()
            .route("/events", get(list_events).post(create_event))
            .route("/events/{id}", get(get_event).put(update_event).delete(delete_event))
            .route("/categories", get(list_categories))
            .route("/users", get(list_users))
            .with_state(backend);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let config = ClientConfig {
            base_url: format!("http://{}", addr),
            navigate_delay_ms: 0,
            request_timeout_secs: 5,
        };
        let client = EventsClient::from_config(&config).unwrap();
        App { config, client }
    }

    fn full_args() -> EventArgs {
        EventArgs {
            created_by: Some("2".into()),
            title: Some("Yoga in the park".into()),
            description: Some("Bring a mat".into()),
            image: Some("https://example.com/yoga.webp".into()),
            location: Some("Vondelpark".into()),
            start: Some("2024-06-01 09:00".into()),
            end: Some("2024-06-01T10:30".into()),
            categories: vec!["3".into()],
        }
    }

    #[tokio::test]
    async fn delete_of_missing_event_still_succeeds() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        delete::run(&app, "404", true).await.unwrap();
        assert_eq!(backend.write_attempts(), 1);
        assert_eq!(backend.len(), 2);
    }

    #[tokio::test]
    async fn delete_failure_on_write_error_still_succeeds() {
        let backend = Backend::failing();
        let app = spawn_app(backend.clone()).await;

        delete::run(&app, "1", true).await.unwrap();
        assert_eq!(backend.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_event_and_returns_to_list() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        delete::run(&app, "1", true).await.unwrap();
        assert!(backend.event("1").is_none());
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn new_posts_event_and_reloads_list() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        new::run(&app, full_args(), false).await.unwrap();

        assert_eq!(backend.len(), 3);
        let created = backend.events.lock().unwrap()[2].clone();
        assert_eq!(created.title, "Yoga in the park");
        assert_eq!(created.created_by, 2);
        assert_eq!(created.category_ids, vec![3]);
        assert_eq!(created.start_time.as_str(), "2024-06-01T09:00");
        assert!(uuid_like(&created.id), "{}", created.id);
    }

    fn uuid_like(id: &str) -> bool {
        id.len() == 36 && id.matches('-').count() == 4
    }

    #[tokio::test]
    async fn new_fails_when_backend_rejects_write() {
        let backend = Backend::failing();
        let app = spawn_app(backend.clone()).await;

        let err = new::run(&app, full_args(), false).await.unwrap_err();
        assert!(format!("{err:#}").starts_with("Something went wrong"), "{err:#}");
        assert_eq!(backend.write_attempts(), 1);
        assert_eq!(backend.len(), 2);
    }

    #[tokio::test]
    async fn new_rejects_unknown_category_before_writing() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        let args = EventArgs {
            categories: vec!["9".into()],
            ..full_args()
        };
        assert!(new::run(&app, args, false).await.is_err());
        assert_eq!(backend.write_attempts(), 0);
    }

    #[tokio::test]
    async fn new_with_invalid_fields_fails_without_writing() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        let args = EventArgs {
            title: Some("Run".into()),
            ..full_args()
        };
        assert!(new::run(&app, args, false).await.is_err());
        assert_eq!(backend.write_attempts(), 0);
    }

    #[tokio::test]
    async fn edit_updates_event_and_navigates_away() {
        let backend = Backend::seeded();
        let app = spawn_app(backend.clone()).await;

        let args = EventArgs {
            title: Some("Run Club Sunday".into()),
            ..Default::default()
        };
        edit::run(&app, "1", args, false).await.unwrap();

        let stored = backend.event("1").unwrap();
        assert_eq!(stored.title, "Run Club Sunday");
        assert_eq!(stored.category_ids, vec![1]);
        assert_eq!(stored.location, "Somewhere");
    }

    #[tokio::test]
    async fn edit_fails_when_backend_rejects_write() {
        let backend = Backend::failing();
        let app = spawn_app(backend.clone()).await;

        let args = EventArgs {
            title: Some("Run Club Sunday".into()),
            ..Default::default()
        };
        let err = edit::run(&app, "1", args, false).await.unwrap_err();
        assert!(format!("{err:#}").starts_with("Error while updating"), "{err:#}");
        assert_eq!(backend.event("1").unwrap().title, "Run Club");
    }

    #[tokio::test]
    async fn edit_of_missing_event_fails_to_load() {
        let app = spawn_app(Backend::seeded()).await;

        let err = edit::run(&app, "404", EventArgs::default(), false).await.unwrap_err();
        assert!(format!("{err:#}").starts_with("An error has occurred"), "{err:#}");
    }

    #[tokio::test]
    async fn edit_without_any_category_fails_without_writing() {
        let backend = Backend {
            categories: Vec::new(),
            ..Backend::seeded()
        };
        backend.events.lock().unwrap()[0].category_ids.clear();
        let app = spawn_app(backend.clone()).await;

        assert!(edit::run(&app, "1", EventArgs::default(), false).await.is_err());
        assert_eq!(backend.write_attempts(), 0);
    }

    #[tokio::test]
    async fn list_and_show_render_against_backend() {
        let app = spawn_app(Backend::seeded()).await;

        let filter = EventFilter::from_select("chess", "2").unwrap();
        list::run(&app, &filter).await.unwrap();
        show::run(&app, "2").await.unwrap();
        assert!(show::run(&app, "404").await.is_err());
    }
}
