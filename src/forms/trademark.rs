//! Query parameters of the trademark search endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::search::{DEFAULT_PAGE_SIZE, SearchCriteria};
use crate::domain::types::is_compact_date_shape;
use crate::forms::FormError;

fn default_page() -> usize {
    1
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Accepts blank values (treated as absent later) or exactly eight digits.
fn validate_compact_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || is_compact_date_shape(value) {
        Ok(())
    } else {
        Err(ValidationError::new("compact_date")
            .with_message("expected a date in YYYYMMDD format".into()))
    }
}

/// `GET /api/trademarks/search` query string.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchTrademarksForm {
    pub keyword: Option<String>,
    pub status: Option<String>,
    #[validate(custom(function = "validate_compact_date"))]
    pub application_date_from: Option<String>,
    #[validate(custom(function = "validate_compact_date"))]
    pub application_date_to: Option<String>,
    pub product_code: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100))]
    pub size: usize,
}

impl TryFrom<SearchTrademarksForm> for SearchCriteria {
    type Error = FormError;

    fn try_from(form: SearchTrademarksForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            keyword: form.keyword,
            status: form.status,
            application_date_from: form.application_date_from,
            application_date_to: form.application_date_to,
            product_code: form.product_code,
            page: form.page,
            size: form.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::MAX_PAGE_SIZE;

    fn form() -> SearchTrademarksForm {
        SearchTrademarksForm {
            keyword: Some("테스트".to_string()),
            status: Some("등록".to_string()),
            application_date_from: Some("20200101".to_string()),
            application_date_to: Some("20201231".to_string()),
            product_code: Some("G01".to_string()),
            page: 1,
            size: 10,
        }
    }

    #[test]
    fn valid_form_converts_to_criteria() {
        let criteria = SearchCriteria::try_from(form()).unwrap();
        assert_eq!(criteria.keyword.as_deref(), Some("테스트"));
        assert_eq!(criteria.application_date_to.as_deref(), Some("20201231"));
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.size, 10);
    }

    #[test]
    fn rejects_non_compact_dates() {
        let bad = SearchTrademarksForm {
            application_date_from: Some("2020-01-01".to_string()),
            ..form()
        };
        assert!(matches!(
            SearchCriteria::try_from(bad),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn blank_date_is_allowed() {
        let blank = SearchTrademarksForm {
            application_date_to: Some(String::new()),
            ..form()
        };
        assert!(SearchCriteria::try_from(blank).is_ok());
    }

    #[test]
    fn rejects_out_of_range_paging() {
        let zero_page = SearchTrademarksForm { page: 0, ..form() };
        assert!(SearchCriteria::try_from(zero_page).is_err());
        let big = SearchTrademarksForm {
            size: MAX_PAGE_SIZE + 1,
            ..form()
        };
        assert!(SearchCriteria::try_from(big).is_err());
        let max = SearchTrademarksForm {
            size: MAX_PAGE_SIZE,
            ..form()
        };
        assert!(SearchCriteria::try_from(max).is_ok());
    }

    #[test]
    fn missing_paging_uses_defaults() {
        let form: SearchTrademarksForm = serde_json::from_str(r#"{"keyword": "abc"}"#).unwrap();
        assert_eq!(form.page, 1);
        assert_eq!(form.size, DEFAULT_PAGE_SIZE);
        assert_eq!(form.status, None);
    }
}
