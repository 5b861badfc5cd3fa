use crate::modules::webhooks::core::errors::WebhookError;
use crate::modules::webhooks::core::webhook_id::WebhookId;
use crate::shared::infrastructure::payload_buffer::PayloadBuffer;
use serde_json::Value;
use std::sync::Arc;

pub struct ReadPayloadsHandler<TBuffer>
where
    TBuffer: PayloadBuffer + 'static,
{
    buffer: Arc<TBuffer>,
}

impl<TBuffer> ReadPayloadsHandler<TBuffer>
where
    TBuffer: PayloadBuffer + 'static,
{
    pub fn new(buffer: Arc<TBuffer>) -> Self {
        Self { buffer }
    }

    /// An identifier cleared for staleness still reads as an empty list.
    pub async fn handle(&self, id: &WebhookId) -> Result<Vec<Value>, WebhookError> {
        let payloads = self.buffer.read(id).await.ok_or(WebhookError::NotFound)?;
        tracing::debug!(webhook_id = %id, count = payloads.len(), "payloads read");
        Ok(payloads)
    }
}
