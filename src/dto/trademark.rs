//! Response shapes of the trademark API.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::trademark::Trademark;
use crate::pagination::Paginated;

/// Plain projection of a [`Trademark`] for API responses.
///
/// Dates are ISO-8601 calendar strings; missing dates are `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkDto {
    pub id: i32,
    pub product_name: Option<String>,
    pub product_name_eng: Option<String>,
    pub application_number: String,
    pub application_date: Option<String>,
    pub register_status: Option<String>,
    pub publication_number: Option<String>,
    pub publication_date: Option<String>,
    pub registration_number: Vec<String>,
    pub registration_date: Vec<Option<String>>,
    pub registration_pub_number: Option<String>,
    pub registration_pub_date: Option<String>,
    pub international_reg_date: Option<String>,
    pub international_reg_numbers: Option<String>,
    pub priority_claim_num_list: Vec<String>,
    pub priority_claim_date_list: Vec<Option<String>>,
    pub asign_product_main_code_list: Vec<String>,
    pub asign_product_sub_code_list: Vec<String>,
    pub vienna_code_list: Vec<String>,
}

/// Page of trademarks returned by the search endpoint.
pub type SearchResult = Paginated<TrademarkDto>;

fn iso(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

fn iso_list(dates: Vec<Option<NaiveDate>>) -> Vec<Option<String>> {
    dates.into_iter().map(iso).collect()
}

impl From<Trademark> for TrademarkDto {
    fn from(trademark: Trademark) -> Self {
        Self {
            id: trademark.id,
            product_name: trademark.product_name,
            product_name_eng: trademark.product_name_eng,
            application_number: trademark.application_number,
            application_date: iso(trademark.application_date),
            register_status: trademark.register_status,
            publication_number: trademark.publication_number,
            publication_date: iso(trademark.publication_date),
            registration_number: trademark.registration_number,
            registration_date: iso_list(trademark.registration_date),
            registration_pub_number: trademark.registration_pub_number,
            registration_pub_date: iso(trademark.registration_pub_date),
            international_reg_date: iso(trademark.international_reg_date),
            international_reg_numbers: trademark.international_reg_numbers,
            priority_claim_num_list: trademark.priority_claim_num_list,
            priority_claim_date_list: iso_list(trademark.priority_claim_date_list),
            asign_product_main_code_list: trademark.asign_product_main_code_list,
            asign_product_sub_code_list: trademark.asign_product_sub_code_list,
            vienna_code_list: trademark.vienna_code_list,
        }
    }
}
