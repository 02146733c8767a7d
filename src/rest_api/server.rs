//! # REST API HTTP Routes
//!
//! Axum router for the person collection. Every route answers unsupported
//! methods with the same 404 as an unknown path. Person paths also match
//! with a trailing slash.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;

use crate::person::{Person, PersonPayload};
use crate::store::PersonStore;

use super::errors::{RestError, RestResult};
use super::handler::PersonHandler;
use super::response::{home_page, info_page};

/// REST API server state
pub struct RestServer<S: PersonStore> {
    handler: PersonHandler<S>,
}

impl<S: PersonStore + 'static> RestServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            handler: PersonHandler::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/", get(home_handler).fallback(unknown_endpoint))
            .route("/info", get(info_handler::<S>).fallback(unknown_endpoint))
            .route("/api/persons", collection_routes::<S>())
            .route("/api/persons/", collection_routes::<S>())
            .route("/api/persons/:id", item_routes::<S>())
            .route("/api/persons/:id/", item_routes::<S>())
            .fallback(unknown_endpoint)
            .with_state(state)
    }
}

fn collection_routes<S: PersonStore + 'static>() -> MethodRouter<ServerState<S>> {
    get(list_handler::<S>)
        .post(create_handler::<S>)
        .fallback(unknown_endpoint)
}

fn item_routes<S: PersonStore + 'static>() -> MethodRouter<ServerState<S>> {
    get(get_handler::<S>)
        .put(update_handler::<S>)
        .delete(delete_handler::<S>)
        .fallback(unknown_endpoint)
}

/// Shared state type
type ServerState<S> = Arc<RestServer<S>>;

/// Missing or unparseable bodies read as an empty object
fn payload_from(body: Option<Json<Value>>) -> PersonPayload {
    PersonPayload::from_json(body.as_ref().map(|Json(value)| value))
}

async fn home_handler() -> Html<&'static str> {
    home_page()
}

async fn info_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
) -> RestResult<Html<String>> {
    let count = server.handler.count()?;
    Ok(info_page(count, &chrono::Local::now()))
}

/// List persons handler
async fn list_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
) -> RestResult<Json<Vec<Person>>> {
    Ok(Json(server.handler.list()?))
}

/// Get single person handler
async fn get_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Person>> {
    Ok(Json(server.handler.get(&id)?))
}

/// Create person handler
async fn create_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
    body: Option<Json<Value>>,
) -> RestResult<Json<Person>> {
    let person = server.handler.create(payload_from(body))?;
    Ok(Json(person))
}

/// Update number handler
async fn update_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> RestResult<Json<Person>> {
    let person = server.handler.update_number(&id, payload_from(body))?;
    Ok(Json(person))
}

/// Delete person handler
async fn delete_handler<S: PersonStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> RestResult<StatusCode> {
    server.handler.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn unknown_endpoint() -> RestError {
    RestError::UnknownEndpoint
}
