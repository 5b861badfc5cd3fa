use thiserror::Error;

/// Every way a webhook request can be refused. All of them end the request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing ID")]
    MissingId,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("No data found")]
    NotFound,
}
