//! Query string parameters accepted by the telemetry endpoints.
//!
//! Selectors are read leniently: a repeated key keeps its first value and
//! unrecognised keys are ignored, so no query string is ever rejected.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use factory_data::{Site, SiteRegistry, TimeRange};
use futures_util::future::{Ready, ready};
use tracing::debug;
use utoipa::IntoParams;

/// `?site=` selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SiteQuery {
    /// Site identifier. Absent or unknown values select `germany`.
    #[param(example = "uk")]
    pub site: Option<String>,
}

impl SiteQuery {
    /// Read the selector from a raw query string.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs = QueryPairs::parse(query);
        Self {
            site: pairs.first("site"),
        }
    }

    /// Resolve the selector against `registry`.
    #[must_use]
    pub fn resolve(&self, registry: &SiteRegistry) -> &'static Site {
        resolve_site(self.site.as_deref(), registry)
    }
}

impl FromRequest for SiteQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::parse(req.query_string())))
    }
}

/// `?range=&site=` selector for historical series.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Window tag: `1h`, `24h` or `7d`. Defaults to `24h`; other tags
    /// produce an empty series.
    #[param(example = "7d")]
    pub range: Option<String>,
    /// Site identifier. Absent or unknown values select `germany`.
    #[param(example = "germany")]
    pub site: Option<String>,
}

impl HistoryQuery {
    /// Read the selectors from a raw query string.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs = QueryPairs::parse(query);
        Self {
            range: pairs.first("range"),
            site: pairs.first("site"),
        }
    }

    /// Requested window tag, defaulting to the last day.
    #[must_use]
    pub fn range(&self) -> &str {
        self.range
            .as_deref()
            .unwrap_or(TimeRange::LastDay.as_str())
    }

    /// Resolve the site selector against `registry`.
    #[must_use]
    pub fn resolve(&self, registry: &SiteRegistry) -> &'static Site {
        resolve_site(self.site.as_deref(), registry)
    }
}

impl FromRequest for HistoryQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::parse(req.query_string())))
    }
}

/// Decoded `key=value` pairs in request order.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn parse(query: &str) -> Self {
        // Pair decoding is lossy, so errors are not expected here.
        match web::Query::<Vec<(String, String)>>::from_query(query) {
            Ok(pairs) => Self(pairs.into_inner()),
            Err(err) => {
                debug!(error = %err, "query string not decodable; using defaults");
                Self(Vec::new())
            }
        }
    }

    fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

fn resolve_site(identifier: Option<&str>, registry: &SiteRegistry) -> &'static Site {
    match identifier {
        Some(id) if registry.is_known(id) => registry.resolve(id),
        Some(id) => {
            debug!(site = id, "unknown site requested; using default");
            registry.default_site()
        }
        None => registry.default_site(),
    }
}

#[cfg(test)]
mod tests {
    use factory_data::SiteId;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, SiteId::Germany)]
    #[case(Some("uk"), SiteId::Uk)]
    #[case(Some("germany"), SiteId::Germany)]
    #[case(Some("mars"), SiteId::Germany)]
    #[case(Some(""), SiteId::Germany)]
    fn site_selector_falls_back_to_default(
        #[case] site: Option<&str>,
        #[case] expected: SiteId,
    ) {
        let query = SiteQuery {
            site: site.map(str::to_owned),
        };
        assert_eq!(query.resolve(&SiteRegistry::builtin()).id(), expected);
    }

    #[rstest]
    #[case(None, "24h")]
    #[case(Some("1h"), "1h")]
    #[case(Some("30d"), "30d")]
    fn range_defaults_to_last_day(#[case] range: Option<&str>, #[case] expected: &str) {
        let query = HistoryQuery {
            range: range.map(str::to_owned),
            site: None,
        };
        assert_eq!(query.range(), expected);
    }

    #[rstest]
    #[case("", None)]
    #[case("site=uk", Some("uk"))]
    #[case("site=uk&site=germany", Some("uk"))]
    #[case("site=&site=uk", Some(""))]
    #[case("foo=bar&site=germany", Some("germany"))]
    #[case("site=u%6B", Some("uk"))]
    #[case("site", Some(""))]
    fn site_selector_keeps_the_first_occurrence(
        #[case] raw: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(SiteQuery::parse(raw).site.as_deref(), expected);
    }

    #[rstest]
    fn history_selector_keeps_the_first_of_each_key() {
        let query = HistoryQuery::parse("range=1h&site=uk&range=7d&site=germany");

        assert_eq!(query.range(), "1h");
        assert_eq!(
            query.resolve(&SiteRegistry::builtin()).id(),
            SiteId::Uk
        );
    }

    #[rstest]
    fn malformed_pairs_fall_back_to_defaults() {
        let query = HistoryQuery::parse("range=%ZZ&&=&site=%");

        assert_eq!(query.range(), "%ZZ");
        assert_eq!(
            query.resolve(&SiteRegistry::builtin()).id(),
            SiteId::Germany
        );
    }
}
