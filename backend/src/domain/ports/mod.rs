//! Domain ports for the hexagonal boundary.

mod telemetry_source;

#[cfg(test)]
pub use telemetry_source::MockTelemetrySource;
pub use telemetry_source::{TelemetrySource, TelemetrySourceError};
