//! Dashboard entry-point: loads settings, wires telemetry endpoints and
//! serves the dashboard page.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use factory_backend::inbound::http::health::HealthState;
use factory_backend::settings::DashboardSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DashboardSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let config = ServerConfig::new(bind_addr).with_seed(settings.seed);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_prometheus());

    info!(%bind_addr, seeded = settings.seed.is_some(), "starting factory dashboard");
    let health_state = web::Data::new(HealthState::new());
    let result = create_server(health_state.clone(), config)?.await;
    health_state.mark_draining();
    info!("factory dashboard stopped");
    result
}
