//! Driving port through which HTTP handlers obtain generated telemetry.
//!
//! Handlers resolve the site first and pass the resolved [`SiteId`], so the
//! port never sees an unknown identifier. Each call produces a fresh record.

use async_trait::async_trait;
use factory_data::{
    ErpSnapshot, HistoricalSeries, MesSnapshot, ProductionMetrics, SensorReadings, SiteId,
    WorkOrder,
};

/// Errors raised while producing telemetry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TelemetrySourceError {
    /// A generator rejected its parameter table or reference time.
    #[error("telemetry generation failed: {message}")]
    Generation { message: String },
    /// The shared random source cannot be used.
    #[error("random source unavailable: {message}")]
    RandomSource { message: String },
}

impl TelemetrySourceError {
    /// Build a [`TelemetrySourceError::Generation`].
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Build a [`TelemetrySourceError::RandomSource`].
    pub fn random_source(message: impl Into<String>) -> Self {
        Self::RandomSource {
            message: message.into(),
        }
    }
}

/// Port producing one telemetry record per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Current temperature, pressure, humidity and vibration readings.
    async fn sensor_readings(&self, site: SiteId) -> Result<SensorReadings, TelemetrySourceError>;

    /// OEE breakdown, production lines and quality metrics.
    async fn mes_snapshot(&self, site: SiteId) -> Result<MesSnapshot, TelemetrySourceError>;

    /// Inventory, financial and supply chain figures.
    async fn erp_snapshot(&self, site: SiteId) -> Result<ErpSnapshot, TelemetrySourceError>;

    /// The site's open work orders, dated relative to today.
    async fn work_orders(&self, site: SiteId) -> Result<Vec<WorkOrder>, TelemetrySourceError>;

    /// Daily output, weekly trend and downtime.
    async fn production_metrics(
        &self,
        site: SiteId,
    ) -> Result<ProductionMetrics, TelemetrySourceError>;

    /// Historical series ending now.
    ///
    /// Unknown `range_tag` values yield an empty series echoing the tag.
    async fn historical_series(
        &self,
        site: SiteId,
        range_tag: &str,
    ) -> Result<HistoricalSeries, TelemetrySourceError>;
}
