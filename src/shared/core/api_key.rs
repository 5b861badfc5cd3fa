use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Shared secret callers must present as the `api_key` query parameter.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty secret, which is treated as not configured.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Constant-time comparison against a caller supplied key.
    ///
    /// Both sides are hashed first so the comparison always runs over equal
    /// length digests and does not reveal the secret's length.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        let expected = Sha256::digest(self.0.as_bytes());
        let provided = Sha256::digest(candidate.as_bytes());
        expected.as_slice().ct_eq(provided.as_slice()).into()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
