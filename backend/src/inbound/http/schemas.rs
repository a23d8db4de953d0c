//! OpenAPI schema definitions for envelope and generator types.
//!
//! The generator crate stays free of framework derives, so the schemas the
//! document needs are declared here, in the adapter layer, mirroring the
//! serialized shape of their counterparts.

use utoipa::ToSchema;

/// OpenAPI schema for a successful response envelope.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::envelope::SuccessEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SuccessEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// The generated record; its shape depends on the endpoint.
    #[schema(value_type = Object)]
    data: serde_json::Value,
    /// RFC 3339 instant at which the response was assembled.
    #[schema(example = "2024-06-03T07:30:00.000Z")]
    timestamp: String,
}

/// OpenAPI schema for a failure envelope.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::envelope::FailureEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Client-facing description of what failed.
    #[schema(example = "Failed to fetch sensor data")]
    error: String,
}

/// OpenAPI schema for [`factory_data::SiteInfo`].
#[derive(ToSchema)]
#[schema(as = factory_data::SiteInfo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SiteInfoSchema {
    /// Display name.
    #[schema(example = "Germany Manufacturing")]
    name: String,
    /// IANA timezone name.
    #[schema(example = "Europe/Berlin")]
    timezone: String,
    /// ISO 4217 currency code.
    #[schema(example = "EUR")]
    currency: String,
    /// Prefix of generated resource names.
    #[schema(example = "DE-")]
    location_prefix: String,
}

/// OpenAPI schema for [`factory_data::sensors::SensorReading`].
#[derive(ToSchema)]
#[schema(as = factory_data::sensors::SensorReading)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SensorReadingSchema {
    /// Measured value.
    #[schema(example = 27.4)]
    value: f64,
    /// Unit of measurement.
    #[schema(example = "°C")]
    unit: String,
    /// `normal`, `warning` or `critical`.
    #[schema(example = "normal")]
    status: String,
    /// Location label.
    #[schema(example = "DE-Production Floor A")]
    location: String,
}

/// OpenAPI schema for [`factory_data::WorkOrder`].
#[derive(ToSchema)]
#[schema(as = factory_data::WorkOrder)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WorkOrderSchema {
    /// Order identifier.
    #[schema(example = "DE-WO2024001")]
    id: String,
    /// Product name.
    #[schema(example = "Product A")]
    product: String,
    /// Units ordered.
    #[schema(example = 250)]
    quantity: u32,
    /// `in_progress`, `pending`, `completed` or `on_hold`.
    #[schema(example = "in_progress")]
    status: String,
    /// Completion percentage consistent with `status`.
    #[schema(example = 45)]
    progress: u32,
    /// `high`, `medium` or `low`.
    #[schema(example = "medium")]
    priority: String,
    /// Line label.
    #[schema(example = "DE-Line 2")]
    assigned_line: String,
    /// Start date, `YYYY-MM-DD`.
    #[schema(example = "2024-06-01")]
    start_date: String,
    /// Due date, `YYYY-MM-DD`.
    #[schema(example = "2024-06-10")]
    due_date: String,
}

/// OpenAPI schema for [`factory_data::DataPoint`].
#[derive(ToSchema)]
#[schema(as = factory_data::DataPoint)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DataPointSchema {
    /// Label formatted for the window, e.g. `14:00` or `03/02`.
    #[schema(example = "14:00")]
    timestamp: String,
    /// Temperature in °C.
    #[schema(example = 24.6)]
    temperature: f64,
    /// Pressure in bar.
    #[schema(example = 19.2)]
    pressure: f64,
    /// Units per hour.
    #[schema(example = 61)]
    production_rate: u32,
}
