use crate::{
    db::DbPool,
    domain::{
        filter::{
            TrademarkFilter, application_date_from_filter, application_date_to_filter,
            keyword_filter, product_code_filter, status_filter,
        },
        search::SearchCriteria,
        trademark::{NewTrademark, Trademark},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod trademark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip; `page` is 1-based and page 0 is treated as 1.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }
}

/// Immutable description of a trademark search.
///
/// Every builder method consumes the query and returns a new one, so the
/// value handed to the repository cannot change between the count pass and
/// the fetch pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrademarkQuery {
    pub filters: Vec<TrademarkFilter>,
    pub pagination: Option<Pagination>,
}

impl TrademarkQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the filtered and paginated query for the given criteria.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self {
            filters: criteria.filters(),
            pagination: None,
        }
        .paginate(criteria.page, criteria.size)
    }

    fn with_filter(mut self, filter: Option<TrademarkFilter>) -> Self {
        self.filters.extend(filter);
        self
    }

    pub fn with_keyword(self, keyword: Option<&str>) -> Self {
        self.with_filter(keyword_filter(keyword))
    }

    pub fn with_status(self, status: Option<&str>) -> Self {
        self.with_filter(status_filter(status))
    }

    /// Adds both date bounds; each side is dropped on its own when it does
    /// not parse as `YYYYMMDD`.
    pub fn with_application_date_range(self, from: Option<&str>, to: Option<&str>) -> Self {
        self.with_filter(application_date_from_filter(from))
            .with_filter(application_date_to_filter(to))
    }

    pub fn with_product_code(self, code: Option<&str>) -> Self {
        self.with_filter(product_code_filter(code))
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait TrademarkReader {
    /// Number of trademarks matching the query filters; pagination is ignored.
    fn count_trademarks(&self, query: &TrademarkQuery) -> RepositoryResult<usize>;
    /// Total matching count and the requested page, newest application first.
    fn search_trademarks(&self, query: &TrademarkQuery)
    -> RepositoryResult<(usize, Vec<Trademark>)>;
    fn get_trademark_by_application_number(
        &self,
        application_number: &str,
    ) -> RepositoryResult<Option<Trademark>>;
}

pub trait TrademarkWriter {
    /// Replaces the stored registry with `trademarks` in one transaction.
    fn replace_trademarks(&self, trademarks: &[NewTrademark]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository holding the connection pool.
///
/// Each call checks a connection out of the pool for its own duration only.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_skips_absent_criteria() {
        let query = TrademarkQuery::new()
            .with_keyword(None)
            .with_status(None)
            .with_application_date_range(None, None)
            .with_product_code(None);
        assert!(query.filters.is_empty());
        assert_eq!(query.pagination, None);
    }

    #[test]
    fn builder_accumulates_filters() {
        let query = TrademarkQuery::new()
            .with_keyword(Some("테스트"))
            .with_status(Some("등록"))
            .with_application_date_range(Some("20200101"), Some("20201231"))
            .with_product_code(Some("G01"));
        assert_eq!(query.filters.len(), 5);
    }

    #[test]
    fn invalid_date_bound_adds_nothing() {
        let query = TrademarkQuery::new().with_application_date_range(Some("invalid-date"), None);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn pagination_offsets() {
        let p = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(p.offset(), 20);
        assert_eq!(p.limit(), 10);
        let first = Pagination {
            page: 1,
            per_page: 10,
        };
        assert_eq!(first.offset(), 0);
        let huge = Pagination {
            page: usize::MAX,
            per_page: 100,
        };
        assert_eq!(huge.offset(), usize::MAX);
    }

    #[test]
    fn from_criteria_matches_builder() {
        let criteria = SearchCriteria {
            keyword: Some("test".to_string()),
            application_date_from: Some("20200101".to_string()),
            page: 2,
            size: 20,
            ..SearchCriteria::default()
        };
        let expected = TrademarkQuery::new()
            .with_keyword(Some("test"))
            .with_application_date_range(Some("20200101"), None)
            .paginate(2, 20);
        assert_eq!(TrademarkQuery::from_criteria(&criteria), expected);
    }
}
