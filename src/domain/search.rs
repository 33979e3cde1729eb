use crate::domain::filter::{
    TrademarkFilter, application_date_from_filter, application_date_to_filter, keyword_filter,
    product_code_filter, status_filter,
};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Request-scoped search criteria. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: Option<String>,
    pub status: Option<String>,
    /// Inclusive lower bound in `YYYYMMDD` form.
    pub application_date_from: Option<String>,
    /// Inclusive upper bound in `YYYYMMDD` form.
    pub application_date_to: Option<String>,
    pub product_code: Option<String>,
    /// 1-based page number.
    pub page: usize,
    pub size: usize,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            keyword: None,
            status: None,
            application_date_from: None,
            application_date_to: None,
            product_code: None,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchCriteria {
    /// Active predicates in a fixed order: keyword, status, date bounds,
    /// product code.
    pub fn filters(&self) -> Vec<TrademarkFilter> {
        [
            keyword_filter(self.keyword.as_deref()),
            status_filter(self.status.as_deref()),
            application_date_from_filter(self.application_date_from.as_deref()),
            application_date_to_filter(self.application_date_to.as_deref()),
            product_code_filter(self.product_code.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether page and size are within the accepted bounds.
    pub fn has_valid_paging(&self) -> bool {
        self.page >= 1 && (1..=MAX_PAGE_SIZE).contains(&self.size)
    }
}
