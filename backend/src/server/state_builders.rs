//! Builders for the shared HTTP state.

use std::sync::Arc;

use actix_web::web;
use factory_backend::domain::TelemetryService;
use factory_backend::inbound::http::state::HttpState;
use factory_data::SiteRegistry;
use tracing::info;

use super::ServerConfig;

/// Build the shared HTTP state: the built-in site registry and a telemetry
/// service seeded from configuration.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match config.seed {
        Some(seed) => info!(seed, "seeding telemetry random source"),
        None => info!("seeding telemetry random source from OS entropy"),
    }
    let telemetry = TelemetryService::from_seed(config.seed, Arc::clone(&config.clock));
    web::Data::new(HttpState::new(
        SiteRegistry::builtin(),
        Arc::new(telemetry),
        Arc::clone(&config.clock),
    ))
}
