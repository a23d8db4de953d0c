//! Telemetry endpoints.
//!
//! ```text
//! GET /api/sensor-data?site=
//! GET /api/mes-data?site=
//! GET /api/erp-data?site=
//! GET /api/work-orders?site=
//! GET /api/production-metrics?site=
//! GET /api/historical-data?range=&site=
//! ```
//!
//! Each handler resolves the site, asks the telemetry port for one record and
//! wraps it in the success envelope. Port failures are logged with the trace
//! identifier and answered with a generic message.

use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::TelemetrySourceError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{HistoryQuery, SiteQuery};
use crate::inbound::http::schemas::{FailureEnvelopeSchema, SuccessEnvelopeSchema};
use crate::inbound::http::state::HttpState;

fn fetch_failed(subject: &'static str) -> impl FnOnce(TelemetrySourceError) -> Error {
    move |err| {
        let failure = Error::internal(format!("Failed to fetch {subject}"));
        error!(
            error = %err,
            trace_id = failure.trace_id().unwrap_or_default(),
            "error fetching {subject}"
        );
        failure
    }
}

/// Current sensor readings.
#[utoipa::path(
    get,
    path = "/api/sensor-data",
    params(SiteQuery),
    responses(
        (status = 200, description = "Temperature, pressure, humidity and vibration readings", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getSensorData"
)]
#[get("/api/sensor-data")]
pub async fn sensor_data(
    state: web::Data<HttpState>,
    query: SiteQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let readings = state
        .telemetry
        .sensor_readings(site.id())
        .await
        .map_err(fetch_failed("sensor data"))?;
    Ok(state.respond(readings))
}

/// Manufacturing execution metrics.
#[utoipa::path(
    get,
    path = "/api/mes-data",
    params(SiteQuery),
    responses(
        (status = 200, description = "OEE breakdown, six production lines and quality metrics", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getMesData"
)]
#[get("/api/mes-data")]
pub async fn mes_data(
    state: web::Data<HttpState>,
    query: SiteQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let snapshot = state
        .telemetry
        .mes_snapshot(site.id())
        .await
        .map_err(fetch_failed("MES data"))?;
    Ok(state.respond(snapshot))
}

/// ERP inventory, financial and supply chain figures.
#[utoipa::path(
    get,
    path = "/api/erp-data",
    params(SiteQuery),
    responses(
        (status = 200, description = "Inventory, financial metrics and supply chain", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getErpData"
)]
#[get("/api/erp-data")]
pub async fn erp_data(
    state: web::Data<HttpState>,
    query: SiteQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let snapshot = state
        .telemetry
        .erp_snapshot(site.id())
        .await
        .map_err(fetch_failed("ERP data"))?;
    Ok(state.respond(snapshot))
}

/// Open work orders.
#[utoipa::path(
    get,
    path = "/api/work-orders",
    params(SiteQuery),
    responses(
        (status = 200, description = "Work orders dated relative to today", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getWorkOrders"
)]
#[get("/api/work-orders")]
pub async fn work_orders(
    state: web::Data<HttpState>,
    query: SiteQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let orders = state
        .telemetry
        .work_orders(site.id())
        .await
        .map_err(fetch_failed("work orders"))?;
    Ok(state.respond(orders))
}

/// Production performance.
#[utoipa::path(
    get,
    path = "/api/production-metrics",
    params(SiteQuery),
    responses(
        (status = 200, description = "Daily output, weekly trend and downtime", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getProductionMetrics"
)]
#[get("/api/production-metrics")]
pub async fn production_metrics(
    state: web::Data<HttpState>,
    query: SiteQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let metrics = state
        .telemetry
        .production_metrics(site.id())
        .await
        .map_err(fetch_failed("production metrics"))?;
    Ok(state.respond(metrics))
}

/// Historical chart series.
///
/// Unknown range tags are not rejected: they produce an empty series that
/// echoes the tag.
#[utoipa::path(
    get,
    path = "/api/historical-data",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Series of timestamped points, oldest first", body = SuccessEnvelopeSchema),
        (status = 500, description = "Generation failed", body = FailureEnvelopeSchema)
    ),
    tags = ["telemetry"],
    operation_id = "getHistoricalData"
)]
#[get("/api/historical-data")]
pub async fn historical_data(
    state: web::Data<HttpState>,
    query: HistoryQuery,
) -> ApiResult<HttpResponse> {
    let site = query.resolve(&state.sites);
    let series = state
        .telemetry
        .historical_series(site.id(), query.range())
        .await
        .map_err(fetch_failed("historical data"))?;
    Ok(state.respond(series))
}
