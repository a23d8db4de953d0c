//! Randomised but plausible factory telemetry for dashboard demonstrations.
//!
//! The crate models a small set of manufacturing sites and samples telemetry
//! records for them: live sensor readings, manufacturing execution (MES)
//! metrics, ERP inventory and finance figures, work orders, production
//! performance, and historical chart series. It performs no I/O and keeps no
//! state between calls.
//!
//! # Overview
//!
//! - [`SiteRegistry`] resolves site identifiers. Lookup is total: unknown
//!   identifiers fall back to the default site.
//! - Every generator takes an explicit [`rand::Rng`], so a seeded
//!   [`TelemetryRng`] reproduces the same records.
//! - Generators that produce dates take the reference date or instant as an
//!   argument instead of reading the system clock.
//!
//! # Example
//!
//! ```
//! use factory_data::{SiteRegistry, generate_production_metrics, seeded_rng};
//!
//! let registry = SiteRegistry::builtin();
//! let site = registry.resolve("germany");
//! let metrics = generate_production_metrics(&mut seeded_rng(42), site)
//!     .expect("generation succeeds");
//!
//! assert_eq!(metrics.daily_production.target, 1_000);
//! assert_eq!(metrics.weekly_trend.len(), 7);
//! ```

pub mod erp;
mod error;
pub mod history;
pub mod mes;
pub mod production;
mod profile;
mod sampling;
pub mod sensors;
mod site;
pub mod work_orders;

pub use erp::{ErpSnapshot, generate_erp_snapshot};
pub use error::{GenerationError, UnknownSiteError, UnknownTimeRangeError};
pub use history::{DataPoint, HistoricalSeries, TimeRange, generate_historical_series};
pub use mes::{MesSnapshot, generate_mes_snapshot};
pub use production::{ProductionMetrics, generate_production_metrics};
pub use profile::SiteProfile;
pub use sampling::{
    FloatRange, IntRange, Precision, TelemetryRng, entropy_rng, percent_of, seeded_rng,
};
pub use sensors::{SensorReadings, generate_sensor_readings};
pub use site::{Site, SiteId, SiteInfo, SiteRegistry};
pub use work_orders::{WorkOrder, WorkOrderStatus, generate_work_orders};
