use crate::domain::search::{MAX_PAGE_SIZE, SearchCriteria};
use crate::dto::trademark::{SearchResult, TrademarkDto};
use crate::pagination::Paginated;
use crate::repository::{TrademarkQuery, TrademarkReader};
use crate::services::{ServiceError, ServiceResult};

/// Runs a paginated trademark search and projects the records for output.
///
/// Store failures propagate unchanged; only the paging bounds are checked.
pub fn search_trademarks<R>(repo: &R, criteria: SearchCriteria) -> ServiceResult<SearchResult>
where
    R: TrademarkReader + ?Sized,
{
    if !criteria.has_valid_paging() {
        return Err(ServiceError::Validation(format!(
            "page must be >= 1 and size within 1..={MAX_PAGE_SIZE}"
        )));
    }

    let query = TrademarkQuery::from_criteria(&criteria);
    let (total, trademarks) = repo.search_trademarks(&query)?;

    let items = trademarks
        .into_iter()
        .map(TrademarkDto::from)
        .collect::<Vec<_>>();

    Ok(Paginated::new(items, total, criteria.page, criteria.size))
}

/// Looks up a single trademark by its exact application number.
pub fn get_trademark_by_application_number<R>(
    repo: &R,
    application_number: &str,
) -> ServiceResult<Option<TrademarkDto>>
where
    R: TrademarkReader + ?Sized,
{
    let trademark = repo.get_trademark_by_application_number(application_number)?;
    Ok(trademark.map(TrademarkDto::from))
}
