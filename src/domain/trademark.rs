use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::ApplicationNumber;

/// A single trademark application as stored in the registry.
///
/// List-valued fields are empty when the source had no value. Parallel lists
/// (`registration_number`/`registration_date`,
/// `priority_claim_num_list`/`priority_claim_date_list`) are kept exactly as
/// ingested; their lengths are not required to match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Trademark {
    pub id: i32,
    pub application_number: String,
    pub product_name: Option<String>,
    pub product_name_eng: Option<String>,
    pub register_status: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub publication_number: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub registration_number: Vec<String>,
    pub registration_date: Vec<Option<NaiveDate>>,
    pub registration_pub_number: Option<String>,
    pub registration_pub_date: Option<NaiveDate>,
    pub international_reg_date: Option<NaiveDate>,
    /// Free-form text, not a list.
    pub international_reg_numbers: Option<String>,
    pub priority_claim_num_list: Vec<String>,
    pub priority_claim_date_list: Vec<Option<NaiveDate>>,
    pub asign_product_main_code_list: Vec<String>,
    pub asign_product_sub_code_list: Vec<String>,
    pub vienna_code_list: Vec<String>,
}

/// Trademark payload produced by ingestion, before the store assigns an id.
///
/// List fields use `Option` so that "absent in the source" and "empty list"
/// round-trip distinctly into storage.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTrademark {
    pub application_number: ApplicationNumber,
    pub product_name: Option<String>,
    pub product_name_eng: Option<String>,
    pub register_status: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub publication_number: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub registration_number: Option<Vec<String>>,
    pub registration_date: Option<Vec<Option<NaiveDate>>>,
    pub registration_pub_number: Option<String>,
    pub registration_pub_date: Option<NaiveDate>,
    pub international_reg_date: Option<NaiveDate>,
    pub international_reg_numbers: Option<String>,
    pub priority_claim_num_list: Option<Vec<String>>,
    pub priority_claim_date_list: Option<Vec<Option<NaiveDate>>>,
    pub asign_product_main_code_list: Option<Vec<String>>,
    pub asign_product_sub_code_list: Option<Vec<String>>,
    pub vienna_code_list: Option<Vec<String>>,
}

impl NewTrademark {
    /// Creates a payload with only the required application number set.
    #[must_use]
    pub fn new(application_number: ApplicationNumber) -> Self {
        Self {
            application_number,
            product_name: None,
            product_name_eng: None,
            register_status: None,
            application_date: None,
            publication_number: None,
            publication_date: None,
            registration_number: None,
            registration_date: None,
            registration_pub_number: None,
            registration_pub_date: None,
            international_reg_date: None,
            international_reg_numbers: None,
            priority_claim_num_list: None,
            priority_claim_date_list: None,
            asign_product_main_code_list: None,
            asign_product_sub_code_list: None,
            vienna_code_list: None,
        }
    }
}
