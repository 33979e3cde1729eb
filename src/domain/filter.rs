//! Search predicates over a single [`Trademark`] record.
//!
//! Each optional criterion maps to zero or one [`TrademarkFilter`]. Absent or
//! blank criteria never produce a filter, so omitting a criterion never
//! excludes a record. Active filters are combined with logical AND by the
//! query layer.

use chrono::NaiveDate;

use crate::domain::trademark::Trademark;
use crate::domain::types::parse_compact_date;

/// One boolean condition derived from a search criterion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrademarkFilter {
    /// Case-insensitive substring of `product_name` OR `product_name_eng`.
    Keyword(String),
    /// Exact match on `register_status`.
    Status(String),
    /// Inclusive lower bound on `application_date`.
    ApplicationDateFrom(NaiveDate),
    /// Inclusive upper bound on `application_date`.
    ApplicationDateTo(NaiveDate),
    /// Substring of the JSON text of `asign_product_main_code_list`.
    ///
    /// Not a per-element comparison: `"1\",\"G"`
    /// matches `["G01","G02"]`.
    ProductCode(String),
}

/// Whitespace-only values count as absent; anything else is kept verbatim.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn compact_date(value: Option<&str>, bound: &str) -> Option<NaiveDate> {
    let raw = non_blank(value)?;
    let parsed = parse_compact_date(raw.trim());
    if parsed.is_none() {
        log::debug!("Ignoring unparseable {bound} date bound: {raw:?}");
    }
    parsed
}

/// Keyword predicate, or `None` when the keyword is absent or blank.
pub fn keyword_filter(keyword: Option<&str>) -> Option<TrademarkFilter> {
    non_blank(keyword).map(TrademarkFilter::Keyword)
}

/// Status predicate, or `None` when the status is absent or blank.
pub fn status_filter(status: Option<&str>) -> Option<TrademarkFilter> {
    non_blank(status).map(TrademarkFilter::Status)
}

/// Lower date bound, or `None` when absent or not a valid `YYYYMMDD` date.
pub fn application_date_from_filter(value: Option<&str>) -> Option<TrademarkFilter> {
    compact_date(value, "lower").map(TrademarkFilter::ApplicationDateFrom)
}

/// Upper date bound, or `None` when absent or not a valid `YYYYMMDD` date.
pub fn application_date_to_filter(value: Option<&str>) -> Option<TrademarkFilter> {
    compact_date(value, "upper").map(TrademarkFilter::ApplicationDateTo)
}

/// Product code predicate, or `None` when the code is absent or blank.
pub fn product_code_filter(code: Option<&str>) -> Option<TrademarkFilter> {
    non_blank(code).map(TrademarkFilter::ProductCode)
}

/// Serialized form of a code list as it is kept in storage.
///
/// An empty list serializes to `[]`, the same text the store holds for it.
pub fn code_list_text(codes: &[String]) -> Option<String> {
    serde_json::to_string(codes).ok()
}

fn contains_ignore_case(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle_lower))
}

impl TrademarkFilter {
    /// Evaluates the predicate against an in-memory record.
    ///
    /// A missing field never satisfies a predicate that inspects it.
    pub fn matches(&self, trademark: &Trademark) -> bool {
        match self {
            TrademarkFilter::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                contains_ignore_case(trademark.product_name.as_deref(), &needle)
                    || contains_ignore_case(trademark.product_name_eng.as_deref(), &needle)
            }
            TrademarkFilter::Status(status) => {
                trademark.register_status.as_deref() == Some(status.as_str())
            }
            TrademarkFilter::ApplicationDateFrom(from) => {
                trademark.application_date.is_some_and(|d| d >= *from)
            }
            TrademarkFilter::ApplicationDateTo(to) => {
                trademark.application_date.is_some_and(|d| d <= *to)
            }
            TrademarkFilter::ProductCode(code) => {
                code_list_text(&trademark.asign_product_main_code_list)
                    .is_some_and(|text| text.to_lowercase().contains(&code.to_lowercase()))
            }
        }
    }
}

/// Returns `true` when the record satisfies every filter.
pub fn matches_all(filters: &[TrademarkFilter], trademark: &Trademark) -> bool {
    filters.iter().all(|f| f.matches(trademark))
}
