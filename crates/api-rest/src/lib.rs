//! # API REST
//!
//! REST API implementation for the showcase service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Mapping core outcomes to status codes and `{error}` bodies
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the wire types and `showcase-core` for the services.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health,
        handlers::list_jokes,
        handlers::list_persons,
        handlers::add_person,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::Joke,
        api_shared::Person,
        api_shared::AddPersonReq,
        api_shared::AddPersonRes,
        api_shared::ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Build the full application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/jokes", get(handlers::list_jokes))
        .route(
            "/api/persons",
            get(handlers::list_persons).post(handlers::add_person),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::{AddPersonRes, Joke, Person};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use showcase_core::jokes::{JokeSource, UpstreamJoke};
    use showcase_core::persons::NewPerson;
    use showcase_core::store::{MemoryStore, PersonId, PersonStore};
    use showcase_core::{CoreError, CoreResult, JokeService, PersonService};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedJokes(usize);

    #[async_trait]
    impl JokeSource for FixedJokes {
        async fn fetch_batch(&self, count: usize) -> CoreResult<Vec<UpstreamJoke>> {
            Ok((0..self.0.min(count))
                .map(|i| UpstreamJoke {
                    setup: format!("setup {i}"),
                    delivery: format!("delivery {i}"),
                })
                .collect())
        }
    }

    struct DownJokes;

    #[async_trait]
    impl JokeSource for DownJokes {
        async fn fetch_batch(&self, _count: usize) -> CoreResult<Vec<UpstreamJoke>> {
            Err(CoreError::UpstreamStatus(502))
        }
    }

    struct DownStore;

    #[async_trait]
    impl PersonStore for DownStore {
        async fn insert(&self, _person: &NewPerson) -> CoreResult<PersonId> {
            Err(CoreError::StorageInsert("store offline".into()))
        }

        async fn find_all(&self) -> CoreResult<Vec<Person>> {
            Err(CoreError::StorageRead("store offline".into()))
        }
    }

    fn app_with(store: Arc<dyn PersonStore>, jokes: Arc<dyn JokeSource>) -> Router {
        router(AppState::new(
            PersonService::new(store),
            JokeService::new(jokes, 10),
        ))
    }

    fn test_app() -> Router {
        app_with(Arc::new(MemoryStore::new()), Arc::new(FixedJokes(10)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();
        (status, bytes.to_vec())
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build");
        let (status, bytes) = send(app, request).await;
        (
            status,
            serde_json::from_slice(&bytes).expect("body should be JSON"),
        )
    }

    async fn post_raw(app: &Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/persons")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request should build");
        let (status, bytes) = send(app, request).await;
        (
            status,
            serde_json::from_slice(&bytes).expect("body should be JSON"),
        )
    }

    async fn post_person(app: &Router, body: Value) -> (StatusCode, Value) {
        post_raw(app, &body.to_string()).await
    }

    async fn person_count(app: &Router) -> usize {
        let (status, body) = get_json(app, "/api/persons").await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().expect("persons should be an array").len()
    }

    #[tokio::test]
    async fn test_root_reports_ready() {
        let app = test_app();
        let request = Request::builder()
            .uri("/")
            .body(Body::empty())
            .expect("request should build");

        let (status, bytes) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(bytes).unwrap(), handlers::READY_BANNER);
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let (status, body) = get_json(&test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_add_then_list_person() {
        let app = test_app();

        let (status, body) = post_person(
            &app,
            json!({"name": "Alice", "marks": "90", "age": "21", "dob": "2003-01-01"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let added: AddPersonRes = serde_json::from_value(body.clone()).expect("typed response");
        assert_eq!(body["person"]["marks"].as_f64(), Some(90.0));
        assert!(body["person"]["marks"].is_number(), "marks must be a JSON number");
        assert_eq!(added.person.age, 21.0);
        assert!(!added.id.is_empty());
        assert_eq!(added.person.id, added.id);

        let (status, listed) = get_json(&app, "/api/persons").await;
        assert_eq!(status, StatusCode::OK);
        let persons: Vec<Person> = serde_json::from_value(listed).expect("typed list");
        assert!(persons.iter().any(|p| p.name == "Alice" && p.id == added.id));
    }

    #[tokio::test]
    async fn test_add_person_accepts_json_numbers() {
        let app = test_app();

        let (status, body) = post_person(
            &app,
            json!({"name": "Bob", "marks": 72.5, "age": 30, "dob": "1994-02-03"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["person"]["marks"].as_f64(), Some(72.5));
        assert_eq!(body["person"]["age"].as_f64(), Some(30.0));
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_without_insert() {
        let app = test_app();
        let complete = json!({"name": "Alice", "marks": "90", "age": "21", "dob": "2003-01-01"});

        for field in ["name", "marks", "age", "dob"] {
            let mut partial = complete.clone();
            partial
                .as_object_mut()
                .expect("object")
                .remove(field);

            let (status, body) = post_person(&app, partial).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert!(body["error"].is_string(), "missing {field} should yield {{error}}");
        }

        assert_eq!(person_count(&app).await, 0);
    }

    #[tokio::test]
    async fn test_empty_field_is_rejected() {
        let app = test_app();

        let (status, body) = post_person(
            &app,
            json!({"name": "", "marks": "90", "age": "21", "dob": "2003-01-01"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            showcase_core::constants::REQUIRED_FIELDS_MESSAGE
        );
        assert_eq!(person_count(&app).await, 0);
    }

    #[tokio::test]
    async fn test_non_numeric_marks_is_rejected() {
        let app = test_app();

        let (status, body) = post_person(
            &app,
            json!({"name": "Alice", "marks": "lots", "age": "21", "dob": "2003-01-01"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap_or_default().contains("marks"));
        assert_eq!(person_count(&app).await, 0);
    }

    #[tokio::test]
    async fn test_unknown_and_mistyped_fields_are_rejected() {
        let app = test_app();

        let (status, body) = post_person(
            &app,
            json!({"name": "Eve", "marks": 1, "age": 2, "dob": "x", "role": "admin"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = post_person(
            &app,
            json!({"name": ["Eve"], "marks": 1, "age": 2, "dob": "x"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_raw(&app, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        assert_eq!(person_count(&app).await, 0);
    }

    #[tokio::test]
    async fn test_persons_listed_in_insertion_order() {
        let app = test_app();
        let names = ["Carol", "Alice", "Bob", "Dan", "Eve", "Fay"];

        for name in names {
            let (status, _) = post_person(
                &app,
                json!({"name": name, "marks": "1", "age": "2", "dob": "2000-01-01"}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, body) = get_json(&app, "/api/persons").await;
        let persons: Vec<Person> = serde_json::from_value(body).expect("typed list");
        let listed: Vec<&str> = persons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_list_jokes_numbers_batch() {
        let (status, body) = get_json(&test_app(), "/api/jokes").await;

        assert_eq!(status, StatusCode::OK);
        let jokes: Vec<Joke> = serde_json::from_value(body).expect("typed jokes");
        assert_eq!(jokes.len(), 10);
        let ids: Vec<u32> = jokes.iter().map(|j| j.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(jokes[0].title, "setup 0");
        assert_eq!(jokes[0].content, "delivery 0");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let app = app_with(Arc::new(MemoryStore::new()), Arc::new(DownJokes));

        let (status, body) = get_json(&app, "/api/jokes").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch jokes"}));
    }

    #[tokio::test]
    async fn test_storage_failures_are_500() {
        let app = app_with(Arc::new(DownStore), Arc::new(FixedJokes(1)));

        let (status, body) = get_json(&app, "/api/persons").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch persons"}));

        let (status, body) = post_person(
            &app,
            json!({"name": "Alice", "marks": "90", "age": "21", "dob": "2003-01-01"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to add person"}));
    }

    #[tokio::test]
    async fn test_validation_precedes_storage() {
        let app = app_with(Arc::new(DownStore), Arc::new(FixedJokes(1)));

        let (status, _) = post_person(&app, json!({"name": "Alice"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_json(&test_app(), "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/persons"].is_object());
    }
}
