//! Live sensor readings from the simulated shop floor.

use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;
use crate::sampling::{FloatRange, Precision, pick};
use crate::site::Site;

/// Health classification attached to a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    /// Reading is within its operating envelope.
    Normal,
    /// Reading is drifting towards a limit.
    Warning,
    /// Reading has crossed a limit.
    Critical,
}

/// Per-site value ranges for each sensor channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorProfile {
    /// Production floor temperature in °C.
    pub temperature: FloatRange,
    /// Hydraulic pressure in bar.
    pub pressure: FloatRange,
    /// Relative humidity in percent.
    pub humidity: FloatRange,
    /// Motor vibration in mm/s.
    pub vibration: FloatRange,
}

/// Fixed presentation attributes of one sensor channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorChannel {
    /// Field name used in the payload and in error reports.
    pub field: &'static str,
    /// Engineering unit.
    pub unit: &'static str,
    /// Location label appended to the site prefix.
    pub location: &'static str,
    /// Rounding applied to sampled values.
    pub precision: Precision,
    /// Statuses the channel can report.
    pub statuses: &'static [SensorStatus],
}

const ALL_STATUSES: &[SensorStatus] = &[
    SensorStatus::Normal,
    SensorStatus::Warning,
    SensorStatus::Critical,
];
const NON_CRITICAL_STATUSES: &[SensorStatus] = &[SensorStatus::Normal, SensorStatus::Warning];
const NORMAL_ONLY: &[SensorStatus] = &[SensorStatus::Normal];

/// Temperature channel.
pub const TEMPERATURE: SensorChannel = SensorChannel {
    field: "temperature",
    unit: "°C",
    location: "Production Floor A",
    precision: Precision::Tenths,
    statuses: ALL_STATUSES,
};

/// Pressure channel.
pub const PRESSURE: SensorChannel = SensorChannel {
    field: "pressure",
    unit: "bar",
    location: "Hydraulic System",
    precision: Precision::Hundredths,
    statuses: NON_CRITICAL_STATUSES,
};

/// Humidity channel.
pub const HUMIDITY: SensorChannel = SensorChannel {
    field: "humidity",
    unit: "%",
    location: "Climate Control",
    precision: Precision::Tenths,
    statuses: NORMAL_ONLY,
};

/// Vibration channel.
pub const VIBRATION: SensorChannel = SensorChannel {
    field: "vibration",
    unit: "mm/s",
    location: "Motor Assembly",
    precision: Precision::Hundredths,
    statuses: NON_CRITICAL_STATUSES,
};

/// One sampled sensor value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    /// Sampled value, rounded to the channel precision.
    pub value: f64,
    /// Engineering unit.
    pub unit: &'static str,
    /// Reported status.
    pub status: SensorStatus,
    /// Site-prefixed location label.
    pub location: String,
}

/// Snapshot of every sensor channel at one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReadings {
    /// Production floor temperature.
    pub temperature: SensorReading,
    /// Hydraulic pressure.
    pub pressure: SensorReading,
    /// Climate control humidity.
    pub humidity: SensorReading,
    /// Motor assembly vibration.
    pub vibration: SensorReading,
}

/// Sample a fresh set of sensor readings for `site`.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's sensor table is malformed.
///
/// # Example
///
/// ```
/// use factory_data::{SiteRegistry, generate_sensor_readings, seeded_rng};
///
/// let site = SiteRegistry::builtin().resolve("uk");
/// let readings = generate_sensor_readings(&mut seeded_rng(1), site).expect("generated");
/// assert!(readings.temperature.location.starts_with("UK-"));
/// ```
pub fn generate_sensor_readings<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
) -> Result<SensorReadings, GenerationError> {
    let profile = &site.profile().sensors;
    let prefix = site.info().location_prefix;

    Ok(SensorReadings {
        temperature: read_channel(rng, &TEMPERATURE, profile.temperature, prefix)?,
        pressure: read_channel(rng, &PRESSURE, profile.pressure, prefix)?,
        humidity: read_channel(rng, &HUMIDITY, profile.humidity, prefix)?,
        vibration: read_channel(rng, &VIBRATION, profile.vibration, prefix)?,
    })
}

fn read_channel<R: Rng + ?Sized>(
    rng: &mut R,
    channel: &SensorChannel,
    range: FloatRange,
    prefix: &str,
) -> Result<SensorReading, GenerationError> {
    Ok(SensorReading {
        value: range.sample(rng, channel.precision, channel.field)?,
        unit: channel.unit,
        status: pick(rng, channel.statuses, channel.field)?,
        location: format!("{prefix}{}", channel.location),
    })
}
