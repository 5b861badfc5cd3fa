use crate::modules::webhooks::core::webhook_id::WebhookId;
use crate::shared::infrastructure::payload_buffer::PayloadBuffer;
use serde_json::Value;
use std::sync::Arc;

pub struct IngestPayloadHandler<TBuffer>
where
    TBuffer: PayloadBuffer + 'static,
{
    buffer: Arc<TBuffer>,
}

impl<TBuffer> IngestPayloadHandler<TBuffer>
where
    TBuffer: PayloadBuffer + 'static,
{
    pub fn new(buffer: Arc<TBuffer>) -> Self {
        Self { buffer }
    }

    pub async fn handle(&self, id: &WebhookId, payload: Value) {
        self.buffer.append(id, payload).await;
        tracing::debug!(webhook_id = %id, "payload buffered");
    }
}
