//! HTTP delivery for Folio.
//!
//! Routes:
//!
//! - `GET /api/website-data`: the full profile document
//! - `POST`/`PUT /api/website-data`: replace the document wholesale

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use folio_application::ContentService;
use folio_application::content_service::{FETCH_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};
use folio_core::ProfileDocument;
use folio_core::store::ProfileStore;

pub mod cli;
pub mod telemetry;

pub const WEBSITE_DATA_PATH: &str = "/api/website-data";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            content_service: ContentService::new(store),
        }
    }
}

/// Generic error body; internal details stay in the logs.
fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

async fn get_website_data(State(state): State<AppState>) -> Response {
    match state.content_service.get_website_data().await {
        Ok(doc) => Json(doc).into_response(),
        Err(_) => error_response(FETCH_FAILED_MESSAGE),
    }
}

async fn update_website_data(
    State(state): State<AppState>,
    Json(doc): Json<ProfileDocument>,
) -> Response {
    match state.content_service.update_website_data(doc).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(_) => error_response(UPDATE_FAILED_MESSAGE),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            WEBSITE_DATA_PATH,
            get(get_website_data)
                .post(update_website_data)
                .put(update_website_data),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
