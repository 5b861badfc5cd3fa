use crate::modules::webhooks::use_cases::ingest_payload::handler::IngestPayloadHandler;
use crate::modules::webhooks::use_cases::read_payloads::handler::ReadPayloadsHandler;
use crate::shared::core::api_key::ApiKey;
use crate::shared::infrastructure::payload_buffer::in_memory::InMemoryPayloadBuffer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api_key: ApiKey,
    pub ingest_handler: Arc<IngestPayloadHandler<InMemoryPayloadBuffer>>,
    pub read_handler: Arc<ReadPayloadsHandler<InMemoryPayloadBuffer>>,
}

impl AppState {
    pub fn new(api_key: ApiKey, buffer: Arc<InMemoryPayloadBuffer>) -> Self {
        Self {
            api_key,
            ingest_handler: Arc::new(IngestPayloadHandler::new(buffer.clone())),
            read_handler: Arc::new(ReadPayloadsHandler::new(buffer)),
        }
    }
}
