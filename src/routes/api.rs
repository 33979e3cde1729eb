use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::domain::search::SearchCriteria;
use crate::forms::trademark::SearchTrademarksForm;
use crate::repository::DieselRepository;
use crate::routes::ErrorDetail;
use crate::services::ServiceError;
use crate::services::trademark as trademark_service;

const SEARCH_FAILED: &str = "Internal server error while processing the search.";
const LOOKUP_FAILED: &str = "Internal server error while loading the trademark.";

#[get("/trademarks/search")]
pub async fn search_trademarks(
    params: web::Query<SearchTrademarksForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let criteria = match SearchCriteria::try_from(params.into_inner()) {
        Ok(criteria) => criteria,
        Err(e) => return HttpResponse::BadRequest().json(ErrorDetail::new(e.to_string())),
    };

    match trademark_service::search_trademarks(repo.get_ref(), criteria) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(ErrorDetail::new(message))
        }
        Err(e) => {
            error!("Failed to search trademarks: {e}");
            HttpResponse::InternalServerError().json(ErrorDetail::new(SEARCH_FAILED))
        }
    }
}

#[get("/trademarks/{application_number}")]
pub async fn get_trademark(
    application_number: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let application_number = application_number.into_inner();

    match trademark_service::get_trademark_by_application_number(
        repo.get_ref(),
        &application_number,
    ) {
        Ok(Some(trademark)) => HttpResponse::Ok().json(trademark),
        Ok(None) => HttpResponse::NotFound().json(ErrorDetail::new(format!(
            "Trademark with application number '{application_number}' not found."
        ))),
        Err(e) => {
            error!("Failed to get trademark {application_number}: {e}");
            HttpResponse::InternalServerError().json(ErrorDetail::new(LOOKUP_FAILED))
        }
    }
}
