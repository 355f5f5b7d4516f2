use crate::error::ApiError;
use crate::state::AppState;
use api_shared::{AddPersonReq, AddPersonRes, ErrorRes, HealthRes, HealthService, Joke, Person};
use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use showcase_core::constants::{
    ADD_PERSON_FAILED_MESSAGE, JOKES_FAILED_MESSAGE, PERSONS_FAILED_MESSAGE, PERSON_ADDED_MESSAGE,
};

pub const READY_BANNER: &str = "Server is Ready!";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Readiness banner", body = String)
    )
)]
#[axum::debug_handler]
pub async fn root() -> &'static str {
    READY_BANNER
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancer probes.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/jokes",
    responses(
        (status = 200, description = "Current joke batch", body = [Joke]),
        (status = 500, description = "Joke provider unavailable", body = ErrorRes)
    )
)]
/// Fetch a fresh batch of jokes from the upstream provider.
///
/// Every call goes upstream; nothing is cached server-side.
///
/// # Errors
/// Returns `500 Internal Server Error` if the provider is unreachable or answers with an error.
#[axum::debug_handler]
pub async fn list_jokes(State(state): State<AppState>) -> Result<Json<Vec<Joke>>, ApiError> {
    state
        .jokes
        .fetch_jokes()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(JOKES_FAILED_MESSAGE, e))
}

#[utoipa::path(
    get,
    path = "/api/persons",
    responses(
        (status = 200, description = "All persons in insertion order", body = [Person]),
        (status = 500, description = "Store unavailable", body = ErrorRes)
    )
)]
/// List every stored person.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    state
        .persons
        .list_persons()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(PERSONS_FAILED_MESSAGE, e))
}

#[utoipa::path(
    post,
    path = "/api/persons",
    request_body = AddPersonReq,
    responses(
        (status = 200, description = "Person added", body = AddPersonRes),
        (status = 400, description = "Missing, malformed or unknown field", body = ErrorRes),
        (status = 500, description = "Store unavailable", body = ErrorRes)
    )
)]
/// Add a person record.
///
/// The body is validated before anything is written: a rejected request never creates a
/// record.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not JSON, or has mistyped or unknown fields,
/// - any of name, marks, age, dob is missing or blank,
/// - marks or age is not a number.
///
/// Returns `500 Internal Server Error` if the store rejects the write.
#[axum::debug_handler]
pub async fn add_person(
    State(state): State<AppState>,
    payload: Result<Json<AddPersonReq>, JsonRejection>,
) -> Result<Json<AddPersonRes>, ApiError> {
    let Json(req) = payload?;

    let person = state
        .persons
        .add_person(req)
        .await
        .map_err(|e| ApiError::from_core(ADD_PERSON_FAILED_MESSAGE, e))?;

    tracing::info!("added person {}", person.id);

    Ok(Json(AddPersonRes {
        message: PERSON_ADDED_MESSAGE.into(),
        id: person.id.clone(),
        person,
    }))
}
