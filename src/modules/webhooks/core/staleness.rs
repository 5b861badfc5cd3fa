use std::time::Duration;
use tokio::time::Instant;

/// Idle time after which an identifier's buffered payloads are discarded.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(10 * 60);

/// An identifier is stale once strictly more than `window` has elapsed since
/// its last ingest. Identifiers that were never written are never stale.
pub fn is_stale(last_updated_at: Option<Instant>, now: Instant, window: Duration) -> bool {
    match last_updated_at {
        Some(last) => now.saturating_duration_since(last) > window,
        None => false,
    }
}
