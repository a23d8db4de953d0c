//! Shared fixtures for driving the dashboard app in-process.
//!
//! Apps are assembled with the production `build_app` wiring, a frozen clock
//! and either a seeded telemetry service or a source that always fails.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{test, web};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use factory_backend::domain::TRACE_ID_HEADER;
use factory_backend::domain::ports::{TelemetrySource, TelemetrySourceError};
use factory_backend::inbound::http::health::HealthState;
use factory_backend::inbound::http::state::HttpState;
use factory_data::{
    ErpSnapshot, HistoricalSeries, MesSnapshot, ProductionMetrics, SensorReadings, SiteId,
    SiteRegistry, WorkOrder,
};
use mockable::Clock;
use serde_json::Value;

use crate::server::{AppDependencies, ServerConfig, build_app, build_http_state};

/// Instant every response envelope is stamped with.
pub(crate) const FROZEN_TIMESTAMP: &str = "2024-06-03T07:30:00.000Z";

pub(crate) struct FrozenClock;

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 7, 30, 0)
            .single()
            .expect("valid instant")
    }
}

/// Telemetry source whose every call fails, as a poisoned random source would.
pub(crate) struct BrokenSource;

fn broken<T>() -> Result<T, TelemetrySourceError> {
    Err(TelemetrySourceError::random_source("lock poisoned"))
}

#[async_trait]
impl TelemetrySource for BrokenSource {
    async fn sensor_readings(&self, _site: SiteId) -> Result<SensorReadings, TelemetrySourceError> {
        broken()
    }

    async fn mes_snapshot(&self, _site: SiteId) -> Result<MesSnapshot, TelemetrySourceError> {
        broken()
    }

    async fn erp_snapshot(&self, _site: SiteId) -> Result<ErpSnapshot, TelemetrySourceError> {
        broken()
    }

    async fn work_orders(&self, _site: SiteId) -> Result<Vec<WorkOrder>, TelemetrySourceError> {
        broken()
    }

    async fn production_metrics(
        &self,
        _site: SiteId,
    ) -> Result<ProductionMetrics, TelemetrySourceError> {
        broken()
    }

    async fn historical_series(
        &self,
        _site: SiteId,
        _range_tag: &str,
    ) -> Result<HistoricalSeries, TelemetrySourceError> {
        broken()
    }
}

fn unbound() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

/// Dependencies backed by the real telemetry service seeded with `seed`.
pub(crate) fn seeded_deps(seed: u64) -> AppDependencies {
    let config = ServerConfig::new(unbound())
        .with_seed(Some(seed))
        .with_clock(Arc::new(FrozenClock));
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: build_http_state(&config),
    }
}

/// Dependencies whose telemetry source always fails.
pub(crate) fn broken_deps() -> AppDependencies {
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::new(
            SiteRegistry::builtin(),
            Arc::new(BrokenSource),
            Arc::new(FrozenClock),
        )),
    }
}

/// What a test needs from a response.
#[derive(Debug, Clone)]
pub(crate) struct Captured {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) body: Value,
    pub(crate) text: String,
}

fn header_text(response: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Issue a GET against a freshly initialised app.
pub(crate) async fn get(deps: AppDependencies, uri: &str) -> Captured {
    let app = test::init_service(build_app(deps)).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status().as_u16();
    let trace_id = header_text(&response, TRACE_ID_HEADER);
    let content_type = header_text(&response, CONTENT_TYPE.as_str());
    let bytes = test::read_body(response).await;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Captured {
        status,
        trace_id,
        content_type,
        body,
        text,
    }
}
