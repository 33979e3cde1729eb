use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::{DbConnection, get_connection, unicode_lower},
    domain::{
        filter::TrademarkFilter,
        trademark::{NewTrademark, Trademark},
    },
    repository::{
        DieselRepository, TrademarkQuery, TrademarkReader, TrademarkWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::trademarks,
};

/// Rows per INSERT statement; keeps each batch under SQLite's bound
/// parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

type BoxedTrademarks = trademarks::BoxedQuery<'static, Sqlite>;

/// Fresh query over `trademarks` restricted by every filter (logical AND).
///
/// Called once per pass, so the count and the page fetch never share a
/// mutable statement.
fn filtered(filters: &[TrademarkFilter]) -> BoxedTrademarks {
    let mut query = trademarks::table.into_boxed();
    for filter in filters {
        query = match filter {
            TrademarkFilter::Keyword(keyword) => {
                let pattern = format!("%{}%", keyword.to_lowercase());
                query.filter(
                    unicode_lower(trademarks::product_name)
                        .like(pattern.clone())
                        .or(unicode_lower(trademarks::product_name_eng).like(pattern)),
                )
            }
            TrademarkFilter::Status(status) => {
                query.filter(trademarks::register_status.eq(status.clone()))
            }
            TrademarkFilter::ApplicationDateFrom(from) => {
                query.filter(trademarks::application_date.ge(*from))
            }
            TrademarkFilter::ApplicationDateTo(to) => {
                query.filter(trademarks::application_date.le(*to))
            }
            TrademarkFilter::ProductCode(code) => query.filter(
                trademarks::asign_product_main_code_list.like(format!("%{code}%")),
            ),
        };
    }
    query
}

/// Filtered query with ordering and pagination applied.
///
/// Undated rows sort after dated ones via an explicit `IS NULL` key; dated
/// rows are newest first, ties broken by newest id.
fn paged(query: &TrademarkQuery) -> BoxedTrademarks {
    let mut statement = filtered(&query.filters)
        .order_by(trademarks::application_date.is_null().asc())
        .then_order_by(trademarks::application_date.desc())
        .then_order_by(trademarks::id.desc());

    if let Some(pagination) = query.pagination {
        let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
        let limit = i64::try_from(pagination.limit()).unwrap_or(i64::MAX);
        statement = statement.offset(offset).limit(limit);
    }
    statement
}

fn count_matching(conn: &mut DbConnection, filters: &[TrademarkFilter]) -> RepositoryResult<usize> {
    let total: Option<i64> = filtered(filters)
        .count()
        .get_result::<i64>(conn)
        .optional()?;

    Ok(total.map_or(0, |n| usize::try_from(n).unwrap_or(0)))
}

fn into_domain(rows: Vec<crate::models::trademark::Trademark>) -> RepositoryResult<Vec<Trademark>> {
    rows.into_iter()
        .map(|row| Trademark::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl TrademarkReader for DieselRepository {
    fn count_trademarks(&self, query: &TrademarkQuery) -> RepositoryResult<usize> {
        let mut conn = get_connection(self.pool())?;
        count_matching(&mut conn, &query.filters)
    }

    fn search_trademarks(
        &self,
        query: &TrademarkQuery,
    ) -> RepositoryResult<(usize, Vec<Trademark>)> {
        use crate::models::trademark::Trademark as DbTrademark;

        // Two back-to-back reads on one connection; no snapshot spans them.
        let mut conn = get_connection(self.pool())?;

        let total = count_matching(&mut conn, &query.filters)?;

        let rows = paged(query).load::<DbTrademark>(&mut conn)?;

        Ok((total, into_domain(rows)?))
    }

    fn get_trademark_by_application_number(
        &self,
        application_number: &str,
    ) -> RepositoryResult<Option<Trademark>> {
        use crate::models::trademark::Trademark as DbTrademark;

        let mut conn = get_connection(self.pool())?;
        let row = trademarks::table
            .filter(trademarks::application_number.eq(application_number))
            .first::<DbTrademark>(&mut conn)
            .optional()?;

        row.map(Trademark::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl TrademarkWriter for DieselRepository {
    fn replace_trademarks(&self, new_trademarks: &[NewTrademark]) -> RepositoryResult<usize> {
        use crate::models::trademark::NewTrademark as DbNewTrademark;

        let insertables = new_trademarks
            .iter()
            .map(DbNewTrademark::try_from)
            .collect::<Result<Vec<DbNewTrademark>, _>>()?;

        let mut conn = get_connection(self.pool())?;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(trademarks::table).execute(conn)?;

            let mut inserted = 0;
            for chunk in insertables.chunks(INSERT_CHUNK_SIZE) {
                inserted += diesel::insert_into(trademarks::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
