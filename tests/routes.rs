use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;
use trademark_search::db::establish_connection_pool;
use trademark_search::repository::{DieselRepository, TrademarkWriter};

mod common;

use common::{new_trademark, sample_trademark};

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    let other = trademark_search::domain::trademark::NewTrademark {
        product_name: Some("다른상표".into()),
        register_status: Some("출원".into()),
        ..new_trademark("4020210000001")
    };
    repo.replace_trademarks(&[sample_trademark(), other]).unwrap();
    repo
}

async fn get_json(repo: DieselRepository, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(trademark_search::configure),
    )
    .await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[actix_web::test]
async fn test_health_check() {
    let test_db = common::TestDb::new("test_health_check.db");
    let (status, body) = get_json(seeded_repo(&test_db), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "OK"}));
}

#[actix_web::test]
async fn test_search_returns_paginated_envelope() {
    let test_db = common::TestDb::new("test_search_returns_paginated_envelope.db");
    let uri = "/api/trademarks/search?keyword=%ED%85%8C%EC%8A%A4%ED%8A%B8&application_date_from=20200101&application_date_to=20201231";
    let (status, body) = get_json(seeded_repo(&test_db), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 10);
    assert_eq!(body["pages_count"], 1);

    let item = &body["items"][0];
    assert_eq!(item["applicationNumber"], "4020200012345");
    assert_eq!(item["productName"], "테스트상표");
    assert_eq!(item["applicationDate"], "2020-01-01");
    assert_eq!(item["asignProductMainCodeList"][1], "G02");
}

#[actix_web::test]
async fn test_search_without_criteria_lists_everything() {
    let test_db = common::TestDb::new("test_search_without_criteria_lists_everything.db");
    let (status, body) =
        get_json(seeded_repo(&test_db), "/api/trademarks/search?keyword=&size=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["pages_count"], 2);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn test_search_rejects_bad_parameters() {
    for uri in [
        "/api/trademarks/search?application_date_from=2020",
        "/api/trademarks/search?application_date_to=2020-01-01",
        "/api/trademarks/search?size=101",
        "/api/trademarks/search?size=0",
        "/api/trademarks/search?page=0",
        "/api/trademarks/search?page=abc",
    ] {
        let test_db = common::TestDb::new("test_search_rejects_bad_parameters.db");
        let (status, body) = get_json(seeded_repo(&test_db), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].is_string(), "{uri}");
    }
}

#[actix_web::test]
async fn test_get_trademark_by_application_number() {
    let test_db = common::TestDb::new("test_get_trademark_by_application_number.db");
    let (status, body) =
        get_json(seeded_repo(&test_db), "/api/trademarks/4020200012345").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applicationNumber"], "4020200012345");
    assert_eq!(body["registerStatus"], "등록");
    assert_eq!(body["registrationDate"][0], "2020-03-01");
}

#[actix_web::test]
async fn test_get_missing_trademark_is_not_found() {
    let test_db = common::TestDb::new("test_get_missing_trademark_is_not_found.db");
    let (status, body) =
        get_json(seeded_repo(&test_db), "/api/trademarks/9999999999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["detail"],
        "Trademark with application number '9999999999999' not found."
    );
}

/// Repository over a database whose schema was never created.
fn broken_repo(dir: &tempfile::TempDir) -> DieselRepository {
    let path = dir.path().join("unmigrated.db");
    let pool = establish_connection_pool(path.to_str().unwrap()).unwrap();
    DieselRepository::new(pool)
}

#[actix_web::test]
async fn test_search_failure_is_generic_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) =
        get_json(broken_repo(&dir), "/api/trademarks/search?keyword=test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({"detail": "Internal server error while processing the search."})
    );
}

#[actix_web::test]
async fn test_lookup_failure_is_generic_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(broken_repo(&dir), "/api/trademarks/4020200012345").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({"detail": "Internal server error while loading the trademark."})
    );
}
