//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the envelope and
//! record schemas from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and exported by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    DataPointSchema, FailureEnvelopeSchema, SensorReadingSchema, SiteInfoSchema,
    SuccessEnvelopeSchema, WorkOrderSchema,
};

/// OpenAPI document for the dashboard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Factory dashboard telemetry API",
        description = "Simulated sensor, MES, ERP and production telemetry for dashboard demonstrations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dashboard::index,
        crate::inbound::http::telemetry::sensor_data,
        crate::inbound::http::telemetry::mes_data,
        crate::inbound::http::telemetry::erp_data,
        crate::inbound::http::telemetry::work_orders,
        crate::inbound::http::telemetry::production_metrics,
        crate::inbound::http::telemetry::historical_data,
        crate::inbound::http::sites::list_sites,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SuccessEnvelopeSchema,
        FailureEnvelopeSchema,
        SiteInfoSchema,
        SensorReadingSchema,
        WorkOrderSchema,
        DataPointSchema
    )),
    tags(
        (name = "dashboard", description = "Dashboard page"),
        (name = "telemetry", description = "Generated telemetry records"),
        (name = "sites", description = "Site discovery"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
