// ====
// Binance Request Signer
// ====
// HMAC-SHA256 signing for USER_DATA / TRADE endpoints
// ====

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::ExchangeError;
use crate::config::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Binance API key + secret pair
///
/// - the key travels in the `X-MBX-APIKEY` header
/// - the secret never leaves the process, it only keys the HMAC
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Sign an already url-encoded query string
    ///
    /// Example:
    /// ```ignore
    /// let sig = signer.sign("symbol=BTCUSDT&timestamp=1499827319559")?;
    /// ```
    pub fn sign(&self, query: &str) -> Result<String, ExchangeError> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .map_err(|e| ExchangeError::SigningError(e.to_string()))?;
        mac.update(query.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
