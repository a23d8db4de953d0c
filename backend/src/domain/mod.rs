//! Domain services, ports and primitives for the telemetry gateway.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation identifier.
//! - [`ports::TelemetrySource`]: the port HTTP handlers call.
//! - [`TelemetryService`]: the generator-backed implementation of that port.

pub mod error;
pub mod ports;
mod telemetry_service;
mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::telemetry_service::TelemetryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
