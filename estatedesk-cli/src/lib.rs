//! Fixture HTTP API and configuration for the EstateDesk binary.

mod config;

pub use config::{AppConfig, ConfigError};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use estatedesk_model::RecordKind;
use estatedesk_store::FixtureData;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn collection_handler(
    State(data): State<Arc<FixtureData>>,
    Path(collection): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let kind: RecordKind = collection
        .parse()
        .map_err(|e: estatedesk_model::UnknownKind| api_error(StatusCode::NOT_FOUND, e.to_string()))?;
    debug!("Serving {} {}", data.count(kind), kind);
    data.collection(kind)
        .map(Json)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// Build the fixture API router serving `data`.
///
/// `GET /api/v1/{collection}` returns the collection as a JSON array, the
/// path an `HttpSource` reads.
pub fn build_router(data: Arc<FixtureData>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/{collection}", get(collection_handler))
        .with_state(data)
}
