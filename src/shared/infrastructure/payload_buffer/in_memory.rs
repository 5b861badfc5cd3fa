use crate::modules::webhooks::core::staleness::{DEFAULT_STALE_AFTER, is_stale};
use crate::modules::webhooks::core::webhook_id::WebhookId;
use crate::shared::infrastructure::payload_buffer::PayloadBuffer;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Default)]
struct Buffers {
    data: HashMap<String, Vec<Value>>,
    last_updated_at: HashMap<String, Instant>,
}

impl Buffers {
    // Must run under the lock, before the operation that observed the id.
    fn clear_if_stale(&mut self, id: &WebhookId, now: Instant, window: Duration) {
        let last = self.last_updated_at.get(id.as_str()).copied();
        if !is_stale(last, now, window) {
            return;
        }
        if let Some(payloads) = self.data.get_mut(id.as_str()) {
            if !payloads.is_empty() {
                tracing::info!(
                    webhook_id = %id,
                    dropped = payloads.len(),
                    "discarding stale payloads"
                );
            }
            payloads.clear();
        }
    }
}

pub struct InMemoryPayloadBuffer {
    stale_after: Duration,
    inner: Mutex<Buffers>,
}

impl InMemoryPayloadBuffer {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            inner: Mutex::new(Buffers::default()),
        }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }
}

impl Default for InMemoryPayloadBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}

#[async_trait::async_trait]
impl PayloadBuffer for InMemoryPayloadBuffer {
    async fn append(&self, id: &WebhookId, payload: Value) {
        let mut buffers = self.inner.lock().await;
        let now = Instant::now();
        buffers.clear_if_stale(id, now, self.stale_after);
        buffers
            .data
            .entry(id.as_str().to_owned())
            .or_default()
            .push(payload);
        buffers.last_updated_at.insert(id.as_str().to_owned(), now);
    }

    async fn read(&self, id: &WebhookId) -> Option<Vec<Value>> {
        let mut buffers = self.inner.lock().await;
        buffers.clear_if_stale(id, Instant::now(), self.stale_after);
        buffers.data.get(id.as_str()).cloned()
    }
}
