use serde::Deserialize;

/// Filters for the product listing operation
///
/// Only non-empty fields become query parameters; `search` is
/// whitespace-trimmed before use. Paging is a single `page` number - the
/// upstream page size is fixed at 100.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    pub page: u32,
    pub code: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    /// Only products currently in stock (`only_available=1`)
    pub stock: bool,
    /// Only promotional products (`only_promotional=1`)
    pub promotion: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: 1,
            code: None,
            manufacturer: None,
            category: None,
            search: None,
            stock: false,
            promotion: false,
        }
    }
}

impl ProductFilter {
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn stock_only(mut self, stock: bool) -> Self {
        self.stock = stock;
        self
    }

    #[must_use]
    pub fn promotional_only(mut self, promotion: bool) -> Self {
        self.promotion = promotion;
        self
    }
}

/// Raw parameter values as supplied by a host for one execution
///
/// Field names mirror the host-side parameter declarations (camelCase on the
/// wire). Unset fields fall back to the per-operation defaults when the
/// request is parsed into an [`super::operations::Operation`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationParams {
    pub page: Option<u32>,
    pub product_id: Option<String>,
    pub category_id: Option<String>,
    pub code: Option<String>,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub stock: Option<bool>,
    pub promotion: Option<bool>,
}
