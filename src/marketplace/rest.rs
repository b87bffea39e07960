use crate::core::errors::MarketplaceError;
use crate::core::kernel::RestClient;
use crate::marketplace::normalize::normalize_records;
use crate::marketplace::operations::Operation;
use crate::marketplace::types::{OperationParams, ProductFilter};
use serde_json::Value;
use tracing::instrument;

/// NOD Marketplace REST API dispatcher
///
/// Maps one resolved [`Operation`] to a signed GET request and normalizes
/// the response envelope into result records. Generic over the transport so
/// it runs against a mock in tests.
#[derive(Debug)]
pub struct NodRest<R: RestClient> {
    rest_client: R,
}

impl<R: RestClient> NodRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    /// Execute one operation by its host-facing name
    ///
    /// The name is validated before any request is attempted; an unknown
    /// name fails with `UnsupportedOperation` and no I/O happens.
    pub async fn execute(
        &self,
        operation_name: &str,
        params: &OperationParams,
    ) -> Result<Vec<Value>, MarketplaceError> {
        let operation = Operation::from_request(operation_name, params)?;
        self.dispatch(&operation).await
    }

    /// Perform one resolved operation: request, then unwrap the envelope
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn dispatch(&self, operation: &Operation) -> Result<Vec<Value>, MarketplaceError> {
        let path = operation.path();
        let params = operation.query_params();
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let body = self.rest_client.get(&path, &borrowed).await?;
        Ok(normalize_records(operation.envelope(), body))
    }

    /// List products with optional filters
    pub async fn get_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<Value>, MarketplaceError> {
        self.dispatch(&Operation::ListProducts(filter.clone())).await
    }

    /// Get a single product by ID
    pub async fn get_product(&self, product_id: &str) -> Result<Vec<Value>, MarketplaceError> {
        self.dispatch(&Operation::GetProduct {
            product_id: product_id.to_string(),
        })
        .await
    }

    /// List all product categories
    pub async fn get_categories(&self) -> Result<Vec<Value>, MarketplaceError> {
        self.dispatch(&Operation::ListCategories).await
    }

    /// Get a single category by ID
    pub async fn get_category(&self, category_id: &str) -> Result<Vec<Value>, MarketplaceError> {
        self.dispatch(&Operation::GetCategory {
            category_id: category_id.to_string(),
        })
        .await
    }

    /// List all manufacturers
    pub async fn get_manufacturers(&self) -> Result<Vec<Value>, MarketplaceError> {
        self.dispatch(&Operation::ListManufacturers).await
    }
}
