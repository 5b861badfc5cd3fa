use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde_json::Value;

use crate::modules::webhooks::adapters::inbound::auth::{ApiKeyParams, authorize};
use crate::modules::webhooks::core::errors::WebhookError;
use crate::modules::webhooks::core::webhook_id::WebhookId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
) -> Result<Json<Vec<Value>>, WebhookError> {
    read(&state, id.map(|Path(id)| id), params).await
}

pub async fn handle_without_id(
    State(state): State<AppState>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
) -> Result<Json<Vec<Value>>, WebhookError> {
    read(&state, Ok(String::new()), params).await
}

async fn read(
    state: &AppState,
    raw_id: Result<String, PathRejection>,
    params: Result<Query<ApiKeyParams>, QueryRejection>,
) -> Result<Json<Vec<Value>>, WebhookError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    authorize(&state.api_key, &params)?;

    let raw_id = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "identifier could not be decoded");
        WebhookError::MissingId
    })?;
    let id = WebhookId::parse(raw_id)?;
    let payloads = state.read_handler.handle(&id).await?;
    Ok(Json(payloads))
}
