use crate::core::errors::MarketplaceError;
use crate::marketplace::types::{OperationParams, ProductFilter};

/// Fixed upstream page size for product listings
pub const PAGE_SIZE: u32 = 100;

/// One catalog operation, resolved to its request shape
///
/// Each variant knows its path, its ordered query parameters, and the
/// envelope key under which the response nests its payload. The five
/// variants are exhaustive: there is no dynamic dispatch on operation names
/// past [`Operation::from_request`].
#[derive(Debug, Clone)]
pub enum Operation {
    ListProducts(ProductFilter),
    GetProduct { product_id: String },
    ListCategories,
    GetCategory { category_id: String },
    ListManufacturers,
}

impl Operation {
    /// Parse a host-supplied operation name and parameter bag
    ///
    /// Fails synchronously, before any I/O: an unknown name yields
    /// `UnsupportedOperation`, a missing required ID yields
    /// `InvalidParameters`.
    pub fn from_request(name: &str, params: &OperationParams) -> Result<Self, MarketplaceError> {
        match name {
            "getProducts" => Ok(Self::ListProducts(ProductFilter {
                page: params.page.unwrap_or(1),
                code: params.code.clone(),
                manufacturer: params.manufacturer.clone(),
                category: params.category.clone(),
                search: params.search.clone(),
                stock: params.stock.unwrap_or(false),
                promotion: params.promotion.unwrap_or(false),
            })),
            "getProduct" => {
                let product_id = require_id(params.product_id.as_deref(), "productId")?;
                Ok(Self::GetProduct { product_id })
            }
            "getCategories" => Ok(Self::ListCategories),
            "getCategory" => {
                let category_id = require_id(params.category_id.as_deref(), "categoryId")?;
                Ok(Self::GetCategory { category_id })
            }
            "getManufacturers" => Ok(Self::ListManufacturers),
            other => Err(MarketplaceError::UnsupportedOperation(other.to_string())),
        }
    }

    /// Request path, query string excluded
    pub fn path(&self) -> String {
        match self {
            Self::ListProducts(_) => "/products/".to_string(),
            Self::GetProduct { product_id } => format!("/products/{}", product_id),
            Self::ListCategories => "/product-categories/".to_string(),
            Self::GetCategory { category_id } => format!("/product-categories/{}", category_id),
            Self::ListManufacturers => "/manufacturers/".to_string(),
        }
    }

    /// Ordered query parameters for this operation
    ///
    /// For product listings the order is fixed: `count` and `page` first,
    /// then the optional filters in declaration order. Empty optionals are
    /// omitted entirely, never sent as empty strings.
    pub fn query_params(&self) -> Vec<(String, String)> {
        match self {
            Self::ListProducts(filter) => {
                let mut params = vec![
                    ("count".to_string(), PAGE_SIZE.to_string()),
                    ("page".to_string(), filter.page.to_string()),
                ];
                if let Some(code) = non_empty(filter.code.as_deref()) {
                    params.push(("code".to_string(), code.to_string()));
                }
                if let Some(manufacturer) = non_empty(filter.manufacturer.as_deref()) {
                    params.push(("manufacturer".to_string(), manufacturer.to_string()));
                }
                if let Some(category) = non_empty(filter.category.as_deref()) {
                    params.push(("category".to_string(), category.to_string()));
                }
                if let Some(search) = non_empty(filter.search.as_deref().map(str::trim)) {
                    params.push(("search".to_string(), search.to_string()));
                }
                if filter.stock {
                    params.push(("only_available".to_string(), "1".to_string()));
                }
                if filter.promotion {
                    params.push(("only_promotional".to_string(), "1".to_string()));
                }
                params
            }
            _ => Vec::new(),
        }
    }

    /// Key path of the response envelope for this operation
    pub fn envelope(&self) -> &'static [&'static str] {
        match self {
            Self::ListProducts(_) => &["result", "products"],
            Self::GetProduct { .. } => &["product"],
            Self::ListCategories => &["product_categories"],
            Self::GetCategory { .. } => &["product_category"],
            Self::ListManufacturers => &["manufacturers"],
        }
    }

    /// Host-facing operation name, used in tracing fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListProducts(_) => "getProducts",
            Self::GetProduct { .. } => "getProduct",
            Self::ListCategories => "getCategories",
            Self::GetCategory { .. } => "getCategory",
            Self::ListManufacturers => "getManufacturers",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn require_id(value: Option<&str>, field: &str) -> Result<String, MarketplaceError> {
    match non_empty(value) {
        Some(id) => Ok(id.to_string()),
        None => Err(MarketplaceError::InvalidParameters(format!(
            "{} must be a non-empty string",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::encode_query;

    #[test]
    fn test_paths() {
        let params = OperationParams {
            product_id: Some("123".to_string()),
            category_id: Some("77".to_string()),
            ..OperationParams::default()
        };

        let cases = [
            ("getProducts", "/products/"),
            ("getProduct", "/products/123"),
            ("getCategories", "/product-categories/"),
            ("getCategory", "/product-categories/77"),
            ("getManufacturers", "/manufacturers/"),
        ];
        for (name, path) in cases {
            let op = Operation::from_request(name, &params).unwrap();
            assert_eq!(op.path(), path);
            assert_eq!(op.name(), name);
        }
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let err = Operation::from_request("doSomethingUnknown", &OperationParams::default())
            .unwrap_err();
        match err {
            MarketplaceError::UnsupportedOperation(name) => {
                assert_eq!(name, "doSomethingUnknown");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_product_id_is_invalid() {
        let err =
            Operation::from_request("getProduct", &OperationParams::default()).unwrap_err();
        assert!(matches!(err, MarketplaceError::InvalidParameters(_)));

        let empty = OperationParams {
            product_id: Some(String::new()),
            ..OperationParams::default()
        };
        assert!(matches!(
            Operation::from_request("getProduct", &empty),
            Err(MarketplaceError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_product_query_string_order() {
        let filter = ProductFilter::default()
            .page(2)
            .manufacturer("Acme")
            .stock_only(true);
        let op = Operation::ListProducts(filter);
        let params = op.query_params();
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            encode_query(&borrowed),
            "count=100&page=2&manufacturer=Acme&only_available=1"
        );
    }

    #[test]
    fn test_product_query_all_filters_in_declared_order() {
        let filter = ProductFilter::default()
            .code("PN-1")
            .manufacturer("Acme")
            .category("42")
            .search("  usb hub  ")
            .stock_only(true)
            .promotional_only(true);
        let op = Operation::ListProducts(filter);
        let keys: Vec<String> = op.query_params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "count",
                "page",
                "code",
                "manufacturer",
                "category",
                "search",
                "only_available",
                "only_promotional"
            ]
        );
    }

    #[test]
    fn test_search_is_trimmed_and_dropped_when_blank() {
        let op = Operation::ListProducts(ProductFilter::default().search("  usb hub "));
        assert!(op
            .query_params()
            .contains(&("search".to_string(), "usb hub".to_string())));

        let blank = Operation::ListProducts(ProductFilter::default().search("   "));
        assert!(!blank.query_params().iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn test_non_list_operations_have_no_query() {
        let params = OperationParams {
            product_id: Some("1".to_string()),
            category_id: Some("2".to_string()),
            ..OperationParams::default()
        };
        for name in ["getProduct", "getCategories", "getCategory", "getManufacturers"] {
            let op = Operation::from_request(name, &params).unwrap();
            assert!(op.query_params().is_empty());
        }
    }

    #[test]
    fn test_page_defaults_to_one() {
        let op = Operation::from_request("getProducts", &OperationParams::default()).unwrap();
        assert!(op
            .query_params()
            .contains(&("page".to_string(), "1".to_string())));
    }
}
