//! Site discovery endpoint.
//!
//! ```text
//! GET /api/sites
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{FailureEnvelopeSchema, SuccessEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Metadata for every configured site, keyed by identifier.
#[utoipa::path(
    get,
    path = "/api/sites",
    responses(
        (status = 200, description = "Map of site identifier to site metadata", body = SuccessEnvelopeSchema),
        (status = 500, description = "Site listing failed", body = FailureEnvelopeSchema)
    ),
    tags = ["sites"],
    operation_id = "listSites"
)]
#[get("/api/sites")]
pub async fn list_sites(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(state.respond(state.sites.sites()))
}
