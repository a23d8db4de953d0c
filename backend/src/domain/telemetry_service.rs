//! Telemetry service backing the [`TelemetrySource`] port.
//!
//! The service owns the only mutable state in the process: the random source
//! shared by every request. The lock is held for exactly one generator call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use factory_data::{
    ErpSnapshot, GenerationError, HistoricalSeries, MesSnapshot, ProductionMetrics,
    SensorReadings, SiteId, TelemetryRng, WorkOrder, entropy_rng, generate_erp_snapshot,
    generate_historical_series, generate_mes_snapshot, generate_production_metrics,
    generate_sensor_readings, generate_work_orders, seeded_rng,
};
use mockable::Clock;
use tracing::debug;

use super::ports::{TelemetrySource, TelemetrySourceError};

/// Generates telemetry from a shared random source and an injected clock.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use factory_backend::domain::TelemetryService;
/// use mockable::DefaultClock;
///
/// let service = TelemetryService::from_seed(Some(7), Arc::new(DefaultClock));
/// # let _ = service;
/// ```
pub struct TelemetryService {
    rng: Mutex<TelemetryRng>,
    clock: Arc<dyn Clock>,
}

impl TelemetryService {
    /// Create a service drawing from `rng`.
    pub fn new(rng: TelemetryRng, clock: Arc<dyn Clock>) -> Self {
        Self {
            rng: Mutex::new(rng),
            clock,
        }
    }

    /// Seed deterministically when `seed` is set, otherwise from OS entropy.
    pub fn from_seed(seed: Option<u64>, clock: Arc<dyn Clock>) -> Self {
        let rng = seed.map_or_else(entropy_rng, seeded_rng);
        Self::new(rng, clock)
    }

    fn generate<T>(
        &self,
        generator: impl FnOnce(&mut TelemetryRng) -> Result<T, GenerationError>,
    ) -> Result<T, TelemetrySourceError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|err| TelemetrySourceError::random_source(err.to_string()))?;
        generator(&mut rng).map_err(|err| TelemetrySourceError::generation(err.to_string()))
    }
}

#[async_trait]
impl TelemetrySource for TelemetryService {
    async fn sensor_readings(&self, site: SiteId) -> Result<SensorReadings, TelemetrySourceError> {
        self.generate(|rng| generate_sensor_readings(rng, site.site()))
    }

    async fn mes_snapshot(&self, site: SiteId) -> Result<MesSnapshot, TelemetrySourceError> {
        self.generate(|rng| generate_mes_snapshot(rng, site.site()))
    }

    async fn erp_snapshot(&self, site: SiteId) -> Result<ErpSnapshot, TelemetrySourceError> {
        self.generate(|rng| generate_erp_snapshot(rng, site.site()))
    }

    async fn work_orders(&self, site: SiteId) -> Result<Vec<WorkOrder>, TelemetrySourceError> {
        let today = self.clock.local().date_naive();
        self.generate(|rng| generate_work_orders(rng, site.site(), today))
    }

    async fn production_metrics(
        &self,
        site: SiteId,
    ) -> Result<ProductionMetrics, TelemetrySourceError> {
        self.generate(|rng| generate_production_metrics(rng, site.site()))
    }

    async fn historical_series(
        &self,
        site: SiteId,
        range_tag: &str,
    ) -> Result<HistoricalSeries, TelemetrySourceError> {
        let now = self.clock.local().naive_local();
        debug!(%site, range = range_tag, %now, "generating historical series");
        self.generate(|rng| generate_historical_series(rng, site.site(), range_tag, now))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
    use factory_data::WorkOrderStatus;
    use rstest::{fixture, rstest};

    use super::*;

    struct FixtureClock {
        local_now: DateTime<Local>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.local_now
        }

        fn utc(&self) -> DateTime<Utc> {
            self.local_now.with_timezone(&Utc)
        }
    }

    fn local_fixture_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 6, 3, 9, 30, 0)
            .earliest()
            .expect("valid local fixture time")
    }

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixtureClock {
            local_now: local_fixture_time(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn same_seed_reproduces_every_record(clock: Arc<dyn Clock>) {
        let first = TelemetryService::from_seed(Some(11), Arc::clone(&clock));
        let second = TelemetryService::from_seed(Some(11), clock);

        assert_eq!(
            first.sensor_readings(SiteId::Uk).await.expect("readings"),
            second.sensor_readings(SiteId::Uk).await.expect("readings")
        );
        assert_eq!(
            first.work_orders(SiteId::Uk).await.expect("orders"),
            second.work_orders(SiteId::Uk).await.expect("orders")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn work_orders_are_dated_from_the_clock(clock: Arc<dyn Clock>) {
        let service = TelemetryService::from_seed(Some(3), clock);
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");

        let orders = service.work_orders(SiteId::Germany).await.expect("orders");

        assert_eq!(orders.len(), 8);
        for order in &orders {
            assert!(order.start_date <= today);
            assert!(order.due_date > today);
            if order.status == WorkOrderStatus::Completed {
                assert_eq!(order.progress, 100);
            }
        }
    }

    #[rstest]
    #[tokio::test]
    async fn hourly_series_ends_at_the_clock_hour(clock: Arc<dyn Clock>) {
        let service = TelemetryService::from_seed(Some(5), clock);

        let series = service
            .historical_series(SiteId::Germany, "24h")
            .await
            .expect("series");

        assert_eq!(series.time_range, "24h");
        assert_eq!(series.data_points.len(), 24);
        assert_eq!(
            series.data_points.last().map(|point| point.timestamp.as_str()),
            Some("09:00")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_range_yields_empty_series(clock: Arc<dyn Clock>) {
        let service = TelemetryService::from_seed(None, clock);

        let series = service
            .historical_series(SiteId::Uk, "90d")
            .await
            .expect("series");

        assert_eq!(series.time_range, "90d");
        assert!(series.data_points.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn poisoned_random_source_is_reported(clock: Arc<dyn Clock>) {
        let service = Arc::new(TelemetryService::from_seed(Some(1), clock));
        let poisoner = Arc::clone(&service);
        let outcome = std::thread::spawn(move || {
            let _guard = poisoner.rng.lock().expect("lock");
            panic!("poison the random source");
        })
        .join();
        assert!(outcome.is_err());

        let err = service
            .mes_snapshot(SiteId::Germany)
            .await
            .expect_err("poisoned lock");
        assert!(matches!(err, TelemetrySourceError::RandomSource { .. }));
    }
}
