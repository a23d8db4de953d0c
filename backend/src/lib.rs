//! Factory dashboard backend library.
//!
//! Hosts the HTTP gateway in front of the `factory-data` generators: the
//! telemetry port and its service, request tracing, response envelopes,
//! configuration and the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
