use axum::{
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::Value;

use crate::modules::webhooks::adapters::inbound::auth::{ApiKeyParams, authorize};
use crate::modules::webhooks::core::errors::WebhookError;
use crate::modules::webhooks::core::webhook_id::WebhookId;
use crate::shell::state::AppState;

// Extractor failures are carried into `ingest` so the api_key check always runs first.
pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, WebhookError> {
    ingest(&state, id.map(|Path(id)| id), params, body).await
}

/// `POST /webhook/` has no identifier segment but still authenticates first.
pub async fn handle_without_id(
    State(state): State<AppState>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, WebhookError> {
    ingest(&state, Ok(String::new()), params, body).await
}

async fn ingest(
    state: &AppState,
    raw_id: Result<String, PathRejection>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, WebhookError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    authorize(&state.api_key, &params)?;

    let raw_id = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "identifier could not be decoded");
        WebhookError::MissingId
    })?;
    let id = WebhookId::parse(raw_id)?;

    let body = body.map_err(|rejection| {
        tracing::debug!(webhook_id = %id, error = %rejection, "request body could not be read");
        WebhookError::InvalidJson
    })?;
    let payload: Value = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(webhook_id = %id, error = %err, "payload is not valid JSON");
        WebhookError::InvalidJson
    })?;

    state.ingest_handler.handle(&id, payload).await;
    Ok(StatusCode::OK)
}
