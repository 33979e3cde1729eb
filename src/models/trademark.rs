use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::trademark::{NewTrademark as DomainNewTrademark, Trademark as DomainTrademark};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trademarks)]
/// Diesel model for [`crate::domain::trademark::Trademark`].
///
/// List-valued columns hold JSON text.
pub struct Trademark {
    pub id: i32,
    pub product_name: Option<String>,
    pub product_name_eng: Option<String>,
    pub application_number: String,
    pub application_date: Option<NaiveDate>,
    pub register_status: Option<String>,
    pub publication_number: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub registration_number: Option<String>,
    pub registration_date: Option<String>,
    pub registration_pub_number: Option<String>,
    pub registration_pub_date: Option<NaiveDate>,
    pub international_reg_date: Option<NaiveDate>,
    pub international_reg_numbers: Option<String>,
    pub priority_claim_num_list: Option<String>,
    pub priority_claim_date_list: Option<String>,
    pub asign_product_main_code_list: Option<String>,
    pub asign_product_sub_code_list: Option<String>,
    pub vienna_code_list: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::trademarks)]
#[diesel(treat_none_as_default_value = false)]
/// Insertable form of [`Trademark`]; `None` is written as SQL `NULL`.
pub struct NewTrademark<'a> {
    pub product_name: Option<&'a str>,
    pub product_name_eng: Option<&'a str>,
    pub application_number: &'a str,
    pub application_date: Option<NaiveDate>,
    pub register_status: Option<&'a str>,
    pub publication_number: Option<&'a str>,
    pub publication_date: Option<NaiveDate>,
    pub registration_number: Option<String>,
    pub registration_date: Option<String>,
    pub registration_pub_number: Option<&'a str>,
    pub registration_pub_date: Option<NaiveDate>,
    pub international_reg_date: Option<NaiveDate>,
    pub international_reg_numbers: Option<&'a str>,
    pub priority_claim_num_list: Option<String>,
    pub priority_claim_date_list: Option<String>,
    pub asign_product_main_code_list: Option<String>,
    pub asign_product_sub_code_list: Option<String>,
    pub vienna_code_list: Option<String>,
}

fn decode_list<T: DeserializeOwned>(column: Option<String>) -> Result<Vec<T>, serde_json::Error> {
    match column {
        Some(text) => serde_json::from_str::<Option<Vec<T>>>(&text).map(Option::unwrap_or_default),
        None => Ok(Vec::new()),
    }
}

fn encode_list<T: Serialize>(list: Option<&Vec<T>>) -> Result<Option<String>, serde_json::Error> {
    list.map(serde_json::to_string).transpose()
}

impl TryFrom<Trademark> for DomainTrademark {
    type Error = serde_json::Error;

    fn try_from(row: Trademark) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            application_number: row.application_number,
            product_name: row.product_name,
            product_name_eng: row.product_name_eng,
            register_status: row.register_status,
            application_date: row.application_date,
            publication_number: row.publication_number,
            publication_date: row.publication_date,
            registration_number: decode_list(row.registration_number)?,
            registration_date: decode_list(row.registration_date)?,
            registration_pub_number: row.registration_pub_number,
            registration_pub_date: row.registration_pub_date,
            international_reg_date: row.international_reg_date,
            international_reg_numbers: row.international_reg_numbers,
            priority_claim_num_list: decode_list(row.priority_claim_num_list)?,
            priority_claim_date_list: decode_list(row.priority_claim_date_list)?,
            asign_product_main_code_list: decode_list(row.asign_product_main_code_list)?,
            asign_product_sub_code_list: decode_list(row.asign_product_sub_code_list)?,
            vienna_code_list: decode_list(row.vienna_code_list)?,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewTrademark> for NewTrademark<'a> {
    type Error = serde_json::Error;

    fn try_from(trademark: &'a DomainNewTrademark) -> Result<Self, Self::Error> {
        Ok(Self {
            product_name: trademark.product_name.as_deref(),
            product_name_eng: trademark.product_name_eng.as_deref(),
            application_number: trademark.application_number.as_str(),
            application_date: trademark.application_date,
            register_status: trademark.register_status.as_deref(),
            publication_number: trademark.publication_number.as_deref(),
            publication_date: trademark.publication_date,
            registration_number: encode_list(trademark.registration_number.as_ref())?,
            registration_date: encode_list(trademark.registration_date.as_ref())?,
            registration_pub_number: trademark.registration_pub_number.as_deref(),
            registration_pub_date: trademark.registration_pub_date,
            international_reg_date: trademark.international_reg_date,
            international_reg_numbers: trademark.international_reg_numbers.as_deref(),
            priority_claim_num_list: encode_list(trademark.priority_claim_num_list.as_ref())?,
            priority_claim_date_list: encode_list(trademark.priority_claim_date_list.as_ref())?,
            asign_product_main_code_list: encode_list(
                trademark.asign_product_main_code_list.as_ref(),
            )?,
            asign_product_sub_code_list: encode_list(
                trademark.asign_product_sub_code_list.as_ref(),
            )?,
            vienna_code_list: encode_list(trademark.vienna_code_list.as_ref())?,
        })
    }
}
