use crate::core::errors::MarketplaceError;
use base64::engine::general_purpose;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha1::Sha1;
use std::collections::HashMap;

type HmacSha1 = Hmac<Sha1>;

/// Result type for signing operations: the headers to attach to the request
pub type SignatureResult = Result<HashMap<String, String>, MarketplaceError>;

/// Signer trait for request authentication
///
/// Implementations produce the authorization headers for one outbound
/// request. A fresh set of headers is required per request (the signature
/// covers a timestamp generated at call time), so results must never be
/// cached or reused.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to attach
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `endpoint` - API endpoint path, without the query string
    fn sign_request(&self, method: &str, endpoint: &str) -> SignatureResult;
}

/// HMAC-SHA1 signer for the NOD web-service authentication scheme
///
/// Each request carries four headers: an HTTP-date, the account name, a
/// base64 HMAC-SHA1 signature over `verb + canonical_path + "/" + account +
/// date`, and a fixed `json` accept-format marker. SHA-1 is fixed by the
/// remote service's wire contract; it is not a choice this crate makes, and
/// new integrations should not copy the scheme.
pub struct NodSigner {
    username: String,
    password: Secret<String>,
}

impl NodSigner {
    /// Create a new signer from web-service credentials
    ///
    /// # Arguments
    /// * `username` - Web-service account name, sent in `X-NodWS-User`
    /// * `password` - Shared secret used as the HMAC key
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }

    /// Build the four authorization headers for the given date
    ///
    /// Deterministic for a fixed date; [`Signer::sign_request`] calls this
    /// with a freshly generated HTTP-date.
    pub fn build_auth_headers(
        &self,
        method: &str,
        endpoint: &str,
        date: &str,
    ) -> SignatureResult {
        let message = signing_message(method, endpoint, &self.username, date);
        let signature = hmac_sha1_base64(self.password.expose_secret(), &message)?;

        let mut headers = HashMap::new();
        headers.insert("X-NodWS-Date".to_string(), date.to_string());
        headers.insert("X-NodWS-User".to_string(), self.username.clone());
        headers.insert("X-NodWS-Auth".to_string(), signature);
        headers.insert("X-NodWS-Accept".to_string(), "json".to_string());

        Ok(headers)
    }
}

impl Signer for NodSigner {
    fn sign_request(&self, method: &str, endpoint: &str) -> SignatureResult {
        self.build_auth_headers(method, endpoint, &http_date())
    }
}

/// Strip leading and trailing `/` characters from a request path
///
/// The canonical form is used only inside the signed message; the request
/// URL keeps its original slashes.
pub fn canonical_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Build the exact string fed into the keyed hash:
/// `verb + canonical_path + "/" + account + date`
///
/// The `/` before the account is a literal part of the scheme; there are no
/// other separators. The query string is deliberately not covered (wire
/// compatibility with the service's verification).
pub fn signing_message(method: &str, path: &str, username: &str, date: &str) -> String {
    format!("{}{}/{}{}", method, canonical_path(path), username, date)
}

/// Compute `base64(HMAC-SHA1(secret, message))`
pub fn hmac_sha1_base64(secret: &str, message: &str) -> Result<String, MarketplaceError> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| MarketplaceError::AuthError(format!("Failed to create HMAC: {}", e)))?;

    mac.update(message.as_bytes());
    let signature_bytes = mac.finalize().into_bytes();

    Ok(general_purpose::STANDARD.encode(signature_bytes))
}

/// Current time as an RFC 1123 HTTP-date string, UTC
///
/// Matches the textual form the service expects, e.g.
/// `Sat, 30 Aug 2026 12:00:00 GMT`.
pub fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
