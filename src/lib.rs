//! Client for the NOD Marketplace B2B REST API.
//!
//! Read-only catalog access (products, categories, manufacturers) over the
//! service's signed-request scheme: every GET carries an `X-NodWS-Auth`
//! header holding a base64 HMAC-SHA1 over the verb, canonical path, account
//! name, and an HTTP-date generated per request.
//!
//! ```rust,no_run
//! use nodws::marketplace::{NodBuilder, ProductFilter};
//! use nodws::core::traits::CatalogSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = NodBuilder::new()
//!     .with_credentials("account".to_string(), "shared-secret".to_string())
//!     .build()?;
//!
//! let filter = ProductFilter::default().page(2).manufacturer("Acme");
//! let products = connector.list_products(&filter).await?;
//! for product in products {
//!     println!("{}", product);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The transport ([`core::kernel::RestClient`]) and the signer
//! ([`core::kernel::Signer`]) are traits, so catalog dispatch and
//! normalization can be exercised against mocks without a network.

pub mod core;
pub mod marketplace;

pub use self::core::{config::MarketplaceConfig, errors::MarketplaceError, traits::CatalogSource};
pub use self::marketplace::{NodBuilder, NodConnector, OperationParams, ProductFilter};
