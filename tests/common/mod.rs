#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;
use trademark_search::db::{DbPool, establish_connection_pool, run_migrations};
use trademark_search::domain::trademark::NewTrademark;
use trademark_search::domain::types::ApplicationNumber;

/// Migrated SQLite database living in a temporary directory.
///
/// The directory (and the WAL side files) is removed on drop.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temp path is not UTF-8").to_string();
        let pool = establish_connection_pool(&url).expect("Failed to establish SQLite connection");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

pub fn date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

pub fn new_trademark(application_number: &str) -> NewTrademark {
    NewTrademark::new(ApplicationNumber::new(application_number).expect("valid number"))
}

/// Record matching the reference sample document.
pub fn sample_trademark() -> NewTrademark {
    NewTrademark {
        product_name: Some("테스트상표".into()),
        product_name_eng: Some("Test Trademark".into()),
        register_status: Some("등록".into()),
        application_date: date("20200101"),
        publication_number: Some("4020200054321".into()),
        publication_date: date("20200201"),
        registration_number: Some(vec!["4000123456".into()]),
        registration_date: Some(vec![date("20200301")]),
        priority_claim_num_list: Some(vec!["US123456".into(), "EU654321".into()]),
        priority_claim_date_list: Some(vec![date("20191201"), date("20191215")]),
        asign_product_main_code_list: Some(vec!["G01".into(), "G02".into()]),
        asign_product_sub_code_list: Some(vec!["G0101".into(), "G0201".into()]),
        vienna_code_list: Some(vec!["01.01".into(), "02.01".into()]),
        ..new_trademark("4020200012345")
    }
}
