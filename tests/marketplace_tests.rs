use async_trait::async_trait;
use nodws::core::errors::MarketplaceError;
use nodws::core::kernel::RestClient;
use nodws::core::traits::CatalogSource;
use nodws::marketplace::{NodConnector, OperationParams, ProductFilter};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Transport stub that records every request and replays a canned body
#[derive(Clone)]
struct MockRest {
    calls: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
    response: Value,
}

impl MockRest {
    fn new(response: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestClient for MockRest {
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, MarketplaceError> {
        let params = query_params
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), params));
        Ok(self.response.clone())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, MarketplaceError> {
        let value = self.get(endpoint, query_params).await?;
        serde_json::from_value(value)
            .map_err(|e| MarketplaceError::DeserializationError(e.to_string()))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[tokio::test]
async fn list_products_builds_expected_request_and_normalizes() {
    init_tracing();
    let rest = MockRest::new(json!({
        "result": { "products": [{"id": 1}, {"id": 2}] }
    }));
    let connector = NodConnector::new(&rest);

    let filter = ProductFilter::default()
        .page(2)
        .manufacturer("Acme")
        .stock_only(true);
    let records = connector.list_products(&filter).await.unwrap();

    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);

    let calls = rest.calls();
    assert_eq!(calls.len(), 1);
    let (endpoint, params) = &calls[0];
    assert_eq!(endpoint, "/products/");
    assert_eq!(
        *params,
        vec![
            ("count".to_string(), "100".to_string()),
            ("page".to_string(), "2".to_string()),
            ("manufacturer".to_string(), "Acme".to_string()),
            ("only_available".to_string(), "1".to_string()),
        ]
    );
}

#[tokio::test]
async fn get_product_unwraps_single_object() {
    let rest = MockRest::new(json!({ "product": {"id": 7, "name": "hub"} }));
    let connector = NodConnector::new(&rest);

    let records = connector.get_product("7").await.unwrap();
    assert_eq!(records, vec![json!({"id": 7, "name": "hub"})]);
    assert_eq!(rest.calls()[0].0, "/products/7");
    assert!(rest.calls()[0].1.is_empty());
}

#[tokio::test]
async fn get_category_falls_back_to_raw_body_on_shape_mismatch() {
    let body = json!({ "something_else": {"id": 9} });
    let rest = MockRest::new(body.clone());
    let connector = NodConnector::new(&rest);

    let records = connector.get_category("9").await.unwrap();
    assert_eq!(records, vec![body]);
    assert_eq!(rest.calls()[0].0, "/product-categories/9");
}

#[tokio::test]
async fn list_categories_and_manufacturers_hit_plural_endpoints() {
    let rest = MockRest::new(json!({
        "product_categories": [{"id": "a"}],
        "manufacturers": [{"name": "Acme"}, {"name": "Globex"}]
    }));
    let connector = NodConnector::new(&rest);

    let categories = connector.list_categories().await.unwrap();
    assert_eq!(categories, vec![json!({"id": "a"})]);

    let manufacturers = connector.list_manufacturers().await.unwrap();
    assert_eq!(manufacturers.len(), 2);

    let endpoints: Vec<String> = rest.calls().into_iter().map(|(e, _)| e).collect();
    assert_eq!(endpoints, vec!["/product-categories/", "/manufacturers/"]);
}

#[tokio::test]
async fn execute_dispatches_by_host_operation_name() {
    let rest = MockRest::new(json!({ "result": { "products": [{"id": 1}] } }));
    let connector = NodConnector::new(&rest);

    let params = OperationParams {
        page: Some(3),
        search: Some("  usb hub ".to_string()),
        ..OperationParams::default()
    };
    let records = connector.execute("getProducts", &params).await.unwrap();
    assert_eq!(records.len(), 1);

    let (_, query) = &rest.calls()[0];
    assert!(query.contains(&("page".to_string(), "3".to_string())));
    assert!(query.contains(&("search".to_string(), "usb hub".to_string())));
}

#[tokio::test]
async fn unknown_operation_fails_before_any_request() {
    let rest = MockRest::new(json!({}));
    let connector = NodConnector::new(&rest);

    let err = connector
        .execute("doSomethingUnknown", &OperationParams::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("doSomethingUnknown"));
    match err {
        MarketplaceError::UnsupportedOperation(name) => assert_eq!(name, "doSomethingUnknown"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(rest.calls().is_empty(), "no request may be attempted");
}

#[tokio::test]
async fn missing_required_id_fails_before_any_request() {
    let rest = MockRest::new(json!({}));
    let connector = NodConnector::new(&rest);

    let err = connector
        .execute("getCategory", &OperationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidParameters(_)));
    assert!(rest.calls().is_empty());
}

#[tokio::test]
async fn transport_errors_propagate_unmodified() {
    /// Transport stub that always fails
    #[derive(Clone)]
    struct FailingRest;

    #[async_trait]
    impl RestClient for FailingRest {
        async fn get(
            &self,
            _endpoint: &str,
            _query_params: &[(&str, &str)],
        ) -> Result<Value, MarketplaceError> {
            Err(MarketplaceError::ApiError {
                code: 503,
                message: "upstream unavailable".to_string(),
            })
        }

        async fn get_json<T: DeserializeOwned>(
            &self,
            endpoint: &str,
            query_params: &[(&str, &str)],
        ) -> Result<T, MarketplaceError> {
            let value = self.get(endpoint, query_params).await?;
            serde_json::from_value(value)
                .map_err(|e| MarketplaceError::DeserializationError(e.to_string()))
        }
    }

    let connector = NodConnector::new(&FailingRest);
    let err = connector.list_manufacturers().await.unwrap_err();
    assert!(matches!(
        err,
        MarketplaceError::ApiError { code: 503, .. }
    ));
}
