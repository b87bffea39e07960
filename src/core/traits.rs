use crate::core::errors::MarketplaceError;
use crate::marketplace::types::ProductFilter;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only catalog capability exposed to a host integration
///
/// Every method performs one signed GET request and returns the normalized
/// result records (see `marketplace::normalize`). Single-item operations
/// yield exactly one record.
#[async_trait]
pub trait CatalogSource {
    /// List products, one page at a time, with optional filters
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Value>, MarketplaceError>;

    /// Get a single product by ID
    async fn get_product(&self, product_id: &str) -> Result<Vec<Value>, MarketplaceError>;

    /// List all product categories
    async fn list_categories(&self) -> Result<Vec<Value>, MarketplaceError>;

    /// Get a single category by ID
    async fn get_category(&self, category_id: &str) -> Result<Vec<Value>, MarketplaceError>;

    /// List all manufacturers
    async fn list_manufacturers(&self) -> Result<Vec<Value>, MarketplaceError>;
}
