/// Transport kernel - signing and HTTP for the marketplace client
///
/// The kernel contains only transport logic and generic interfaces; nothing
/// in it knows about products, categories, or manufacturers.
///
/// # Architecture
///
/// - `RestClient`: unified HTTP client interface (GET-only, the upstream API
///   is read-only)
/// - `Signer`: pluggable authentication interface
/// - `NodSigner`: HMAC-SHA1 web-service scheme used by the NOD API
///
/// All components are trait-based so the catalog logic can be exercised with
/// an injected mock transport instead of a running host or live service.
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use rest::{encode_query, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{
    canonical_path, hmac_sha1_base64, http_date, signing_message, NodSigner, SignatureResult,
    Signer,
};
