use crate::shared::core::api_key::ApiKey;
use crate::shared::infrastructure::payload_buffer::in_memory::InMemoryPayloadBuffer;
use crate::shell::state::AppState;
use std::sync::Arc;

pub const API_KEY: &str = "test-api-key";

pub fn make_test_state_with_buffer() -> (AppState, Arc<InMemoryPayloadBuffer>) {
    let buffer = Arc::new(InMemoryPayloadBuffer::default());
    let api_key = ApiKey::new(API_KEY).unwrap();
    (AppState::new(api_key, buffer.clone()), buffer)
}

pub fn make_test_state() -> AppState {
    make_test_state_with_buffer().0
}
