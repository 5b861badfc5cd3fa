use serde::Deserialize;

use crate::modules::webhooks::core::errors::WebhookError;
use crate::shared::core::api_key::ApiKey;

/// Query string carried by every webhook endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ApiKeyParams {
    pub api_key: Option<String>,
}

pub fn authorize(expected: &ApiKey, params: &ApiKeyParams) -> Result<(), WebhookError> {
    if expected.matches(params.api_key.as_deref()) {
        Ok(())
    } else {
        tracing::warn!("rejected request with missing or invalid api_key");
        Err(WebhookError::Unauthorized)
    }
}
