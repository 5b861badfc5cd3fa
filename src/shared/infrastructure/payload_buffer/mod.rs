// Payload buffer port.
//
// Purpose
// - Hold the payloads received per webhook identifier until they are read or go stale.
//
// Responsibilities
// - Preserve insertion order per identifier.
// - Clear an identifier's payloads before any append or read that finds it stale.
// - Tell "never seen" (None) apart from "seen but currently empty" (Some(vec![])).

pub mod in_memory;

use crate::modules::webhooks::core::webhook_id::WebhookId;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait PayloadBuffer: Send + Sync {
    async fn append(&self, id: &WebhookId, payload: Value);
    async fn read(&self, id: &WebhookId) -> Option<Vec<Value>>;
}
