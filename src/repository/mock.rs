//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::trademark::{NewTrademark, Trademark};
use crate::repository::errors::RepositoryResult;
use crate::repository::{TrademarkQuery, TrademarkReader, TrademarkWriter};

mock! {
    pub Repository {}

    impl TrademarkReader for Repository {
        fn count_trademarks(&self, query: &TrademarkQuery) -> RepositoryResult<usize>;
        fn search_trademarks(
            &self,
            query: &TrademarkQuery,
        ) -> RepositoryResult<(usize, Vec<Trademark>)>;
        fn get_trademark_by_application_number(
            &self,
            application_number: &str,
        ) -> RepositoryResult<Option<Trademark>>;
    }

    impl TrademarkWriter for Repository {
        fn replace_trademarks(&self, trademarks: &[NewTrademark]) -> RepositoryResult<usize>;
    }
}
