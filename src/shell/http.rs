use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::modules::webhooks::use_cases::ingest_payload::inbound::http as ingest_http;
use crate::modules::webhooks::use_cases::read_payloads::inbound::http as read_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook/{id}", post(ingest_http::handle))
        .route("/webhook/", post(ingest_http::handle_without_id))
        .route("/get_data/{id}", get(read_http::handle))
        .route("/get_data/", get(read_http::handle_without_id))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
