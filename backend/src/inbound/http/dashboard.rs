//! Dashboard page.
//!
//! The page is a static document compiled into the binary. It polls the JSON
//! endpoints from the browser.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const DASHBOARD_HTML: &str = include_str!("../../../templates/index.html");

/// Serve the dashboard page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Dashboard HTML page", body = String, content_type = "text/html")
    ),
    tags = ["dashboard"],
    operation_id = "getDashboard"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(DASHBOARD_HTML)
}
