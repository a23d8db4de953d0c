//! HTTP adapter mapping for domain errors.
//!
//! Domain errors become failure envelopes with a status derived from their
//! code. Unmatched routes are funnelled through the same mapping so every
//! failure has one shape.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::debug;

use super::envelope::FailureEnvelope;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(FailureEnvelope::new(self.message()))
    }
}

/// Fallback service for requests no route matches.
///
/// # Errors
/// Always returns [`ErrorCode::NotFound`].
pub async fn unmatched_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(Error::not_found("Not found"))
}
