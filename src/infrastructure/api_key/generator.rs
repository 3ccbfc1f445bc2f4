//! API Key generation
//!
//! Generates cryptographically secure, opaque API keys.

use rand::RngCore;

/// Number of random bytes per key (48 hex characters)
const KEY_BYTES: usize = 24;

/// Generator for secure API keys
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyGenerator;

impl ApiKeyGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new API key as lowercase hex
    ///
    /// Uniqueness is not checked here; the store's unique constraint on the
    /// key value rejects the (vanishingly unlikely) collision.
    pub fn generate(&self) -> String {
        let mut random_bytes = [0u8; KEY_BYTES];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        hex::encode(random_bytes)
    }
}
