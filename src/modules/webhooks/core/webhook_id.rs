use crate::modules::webhooks::core::errors::WebhookError;

/// Identifier scoping a payload sequence. Opaque apart from being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebhookId(String);

impl WebhookId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, WebhookError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(WebhookError::MissingId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WebhookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
