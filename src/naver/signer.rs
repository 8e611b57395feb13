//! HMAC-SHA256 request signing for the Search Ad API

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with the account's secret key
///
/// The signature covers `"{timestamp}.{method}.{path}"`. Timestamps are
/// supplied by the caller so signing stays pure.
#[derive(Clone)]
pub struct Signer {
    secret_key: String,
}

impl Signer {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Canonical message covered by the signature
    pub fn message(timestamp: i64, method: &str, path: &str) -> String {
        format!("{}.{}.{}", timestamp, method, path)
    }

    /// Base64 (standard, padded) HMAC-SHA256 of the canonical message
    pub fn sign(&self, timestamp: i64, method: &str, path: &str) -> String {
        // HMAC accepts keys of any length, including empty ones.
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(Self::message(timestamp, method, path).as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}
