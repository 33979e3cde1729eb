//! HTTP handlers of the trademark API.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

pub mod api;
pub mod health;

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Turns undecodable query strings (e.g. `page=abc`) into a JSON 400.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorDetail::new(err.to_string()));
    InternalError::from_response(err, response).into()
}
