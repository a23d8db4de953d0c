//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! the site registry, the telemetry port and a clock, so they are testable
//! with deterministic fakes.

use std::sync::Arc;

use actix_web::HttpResponse;
use factory_data::SiteRegistry;
use mockable::Clock;
use serde::Serialize;

use super::envelope::SuccessEnvelope;
use crate::domain::ports::TelemetrySource;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Site lookup.
    pub sites: SiteRegistry,
    /// Telemetry port.
    pub telemetry: Arc<dyn TelemetrySource>,
    /// Clock stamping response envelopes.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the handler dependencies.
    pub fn new(
        sites: SiteRegistry,
        telemetry: Arc<dyn TelemetrySource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sites,
            telemetry,
            clock,
        }
    }

    /// Wrap `data` in a success envelope stamped with the current instant.
    pub fn respond<T: Serialize>(&self, data: T) -> HttpResponse {
        SuccessEnvelope::new(data, self.clock.utc()).into_response()
    }
}
