//! Bulk ingestion of trademark records from a JSON array.
//!
//! Every array element is decoded on its own: a malformed element is logged
//! and skipped without affecting its neighbours. Committing the decoded batch
//! is left to [`crate::repository::TrademarkWriter::replace_trademarks`],
//! which stores all of it or none of it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::domain::trademark::NewTrademark;
use crate::domain::types::{ApplicationNumber, parse_compact_date};

const PROGRESS_EVERY: usize = 100;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not a JSON array of objects: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of decoding a data file.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records that decoded successfully, in file order.
    pub trademarks: Vec<NewTrademark>,
    /// Number of elements that failed to decode.
    pub skipped: usize,
}

impl IngestReport {
    pub fn loaded(&self) -> usize {
        self.trademarks.len()
    }
}

/// Dates in the source are `YYYYMMDD` text; anything else becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_compact_date))
}

fn lenient_date_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<NaiveDate>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(raw.map(|dates| {
        dates
            .into_iter()
            .map(|d| d.as_deref().and_then(parse_compact_date))
            .collect()
    }))
}

/// One element of the source array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrademarkInput {
    application_number: ApplicationNumber,
    product_name: Option<String>,
    product_name_eng: Option<String>,
    register_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    application_date: Option<NaiveDate>,
    publication_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    publication_date: Option<NaiveDate>,
    registration_number: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_date_list")]
    registration_date: Option<Vec<Option<NaiveDate>>>,
    registration_pub_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    registration_pub_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    international_reg_date: Option<NaiveDate>,
    international_reg_numbers: Option<String>,
    priority_claim_num_list: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_date_list")]
    priority_claim_date_list: Option<Vec<Option<NaiveDate>>>,
    asign_product_main_code_list: Option<Vec<String>>,
    asign_product_sub_code_list: Option<Vec<String>>,
    vienna_code_list: Option<Vec<String>>,
}

impl From<TrademarkInput> for NewTrademark {
    fn from(input: TrademarkInput) -> Self {
        Self {
            application_number: input.application_number,
            product_name: input.product_name,
            product_name_eng: input.product_name_eng,
            register_status: input.register_status,
            application_date: input.application_date,
            publication_number: input.publication_number,
            publication_date: input.publication_date,
            registration_number: input.registration_number,
            registration_date: input.registration_date,
            registration_pub_number: input.registration_pub_number,
            registration_pub_date: input.registration_pub_date,
            international_reg_date: input.international_reg_date,
            international_reg_numbers: input.international_reg_numbers,
            priority_claim_num_list: input.priority_claim_num_list,
            priority_claim_date_list: input.priority_claim_date_list,
            asign_product_main_code_list: input.asign_product_main_code_list,
            asign_product_sub_code_list: input.asign_product_sub_code_list,
            vienna_code_list: input.vienna_code_list,
        }
    }
}

/// Decodes a JSON array of trademark objects, skipping invalid elements.
pub fn parse_trademarks<R: Read>(reader: R) -> Result<IngestReport, IngestError> {
    let items: Vec<Value> = serde_json::from_reader(reader)?;
    log::info!("Parsed JSON array with {} item(s)", items.len());

    let total = items.len();
    let mut report = IngestReport::default();

    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 && idx % PROGRESS_EVERY == 0 {
            log::info!("Processing {idx}/{total} items...");
        }

        let label = item
            .get("applicationNumber")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        match serde_json::from_value::<TrademarkInput>(item) {
            Ok(input) => report.trademarks.push(input.into()),
            Err(e) => {
                log::warn!("Skipping invalid item {label}: {e}");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Opens `path` and decodes it with [`parse_trademarks`].
pub fn load_trademarks_from_path(path: &Path) -> Result<IngestReport, IngestError> {
    let file = File::open(path)?;
    if let Ok(meta) = file.metadata() {
        log::info!("Data file {} is {} bytes", path.display(), meta.len());
    }
    parse_trademarks(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "productName": "테스트상표",
            "productNameEng": "Test Trademark",
            "applicationNumber": "4020200012345",
            "applicationDate": "20200101",
            "registerStatus": "등록",
            "publicationNumber": "4020200054321",
            "publicationDate": "20200201",
            "registrationNumber": ["4000123456"],
            "registrationDate": ["20200301", "bogus", null],
            "internationalRegNumbers": null,
            "priorityClaimNumList": ["US123456", "EU654321"],
            "priorityClaimDateList": ["20191201"],
            "asignProductMainCodeList": ["G01", "G02"],
            "asignProductSubCodeList": ["G0101", "G0201"],
            "viennaCodeList": ["01.01", "02.01"]
        },
        { "productName": "no number" },
        { "applicationNumber": "4020200099999", "applicationDate": "2020-01-01" },
        { "applicationNumber": "4020200088888", "registrationNumber": 5 }
    ]"#;

    #[test]
    fn decodes_valid_items_and_skips_invalid_ones() {
        let report = parse_trademarks(SAMPLE.as_bytes()).unwrap();

        assert_eq!(report.loaded(), 2);
        assert_eq!(report.skipped, 2);

        let first = &report.trademarks[0];
        assert_eq!(first.application_number.as_str(), "4020200012345");
        assert_eq!(first.application_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(
            first.registration_date,
            Some(vec![NaiveDate::from_ymd_opt(2020, 3, 1), None, None])
        );
        assert_eq!(
            first.priority_claim_num_list.as_ref().map(Vec::len),
            Some(2)
        );
        assert_eq!(first.priority_claim_date_list.as_ref().map(Vec::len), Some(1));
        assert_eq!(first.international_reg_numbers, None);
    }

    #[test]
    fn malformed_dates_become_absent() {
        let report = parse_trademarks(SAMPLE.as_bytes()).unwrap();
        let iso_dated = &report.trademarks[1];
        assert_eq!(iso_dated.application_number.as_str(), "4020200099999");
        assert_eq!(iso_dated.application_date, None);
    }

    #[test]
    fn top_level_must_be_an_array() {
        let err = parse_trademarks(r#"{"applicationNumber": "1"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }

    #[test]
    fn empty_array_loads_nothing() {
        let report = parse_trademarks("[]".as_bytes()).unwrap();
        assert_eq!(report.loaded(), 0);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn loads_from_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let report = load_trademarks_from_path(file.path()).unwrap();
        assert_eq!(report.loaded(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_trademarks_from_path(Path::new("/nonexistent/trademarks.json")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
