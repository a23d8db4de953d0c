//! HTTP inbound adapter exposing the dashboard page and JSON endpoints.

pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod health;
pub mod query;
pub mod schemas;
pub mod sites;
pub mod state;
pub mod telemetry;

pub use error::ApiResult;
