//! Response envelopes shared by every API endpoint.
//!
//! ```text
//! success: {"success": true, "data": ..., "timestamp": "2024-06-03T07:30:00.000Z"}
//! failure: {"success": false, "error": "Failed to fetch sensor data"}
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::Error;

/// Successful payload wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `true`.
    pub success: bool,
    /// The generated record.
    pub data: T,
    /// RFC 3339 instant at which the response was assembled.
    pub timestamp: String,
}

impl<T: Serialize> SuccessEnvelope<T> {
    /// Wrap `data`, stamping it with `at`.
    pub fn new(data: T, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Render as an HTTP 200 JSON response.
    ///
    /// A payload that cannot be serialized is answered with the 500 failure
    /// envelope instead.
    #[must_use]
    pub fn into_response(self) -> HttpResponse {
        match serde_json::to_vec(&self) {
            Ok(body) => HttpResponse::Ok()
                .content_type(ContentType::json())
                .body(body),
            Err(err) => {
                let failure = Error::internal("Failed to serialize response");
                error!(
                    error = %err,
                    trace_id = failure.trace_id().unwrap_or_default(),
                    "error serializing response"
                );
                failure.error_response()
            }
        }
    }
}

/// Failure payload. Never carries partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Client-facing description of what failed.
    pub error: String,
}

impl FailureEnvelope {
    /// Build a failure envelope with `error` as its message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
