use crate::core::errors::MarketplaceError;
use crate::core::kernel::RestClient;
use crate::core::traits::CatalogSource;
use crate::marketplace::rest::NodRest;
use crate::marketplace::types::{OperationParams, ProductFilter};
use async_trait::async_trait;
use serde_json::Value;

/// NOD Marketplace connector
///
/// Thin composition over [`NodRest`] exposing the [`CatalogSource`]
/// capability plus the string-keyed `execute` entry a host integration
/// drives.
#[derive(Debug)]
pub struct NodConnector<R: RestClient> {
    catalog: NodRest<R>,
}

impl<R: RestClient + Clone> NodConnector<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            catalog: NodRest::new(rest.clone()),
        }
    }
}

impl<R: RestClient> NodConnector<R> {
    /// Execute one operation by its host-facing name
    pub async fn execute(
        &self,
        operation_name: &str,
        params: &OperationParams,
    ) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.execute(operation_name, params).await
    }
}

#[async_trait]
impl<R: RestClient> CatalogSource for NodConnector<R> {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.get_products(filter).await
    }

    async fn get_product(&self, product_id: &str) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.get_product(product_id).await
    }

    async fn list_categories(&self) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.get_categories().await
    }

    async fn get_category(&self, category_id: &str) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.get_category(category_id).await
    }

    async fn list_manufacturers(&self) -> Result<Vec<Value>, MarketplaceError> {
        self.catalog.get_manufacturers().await
    }
}
