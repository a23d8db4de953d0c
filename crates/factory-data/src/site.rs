//! Site registry: the simulated manufacturing locations.
//!
//! Every site pairs public metadata ([`SiteInfo`]) with the numeric parameter
//! table its generators sample from ([`SiteProfile`]). Both are compiled in
//! and immutable. Lookup is total: identifiers that match no site resolve to
//! the registry's default site.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UnknownSiteError;
use crate::profile::{self, SiteProfile};

/// Identifier of a simulated manufacturing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteId {
    /// Germany Manufacturing, the default site.
    Germany,
    /// UK Manufacturing.
    Uk,
}

impl SiteId {
    /// Every configured site, in registry order.
    pub const ALL: [Self; 2] = [Self::Germany, Self::Uk];

    /// Wire identifier used in query strings and the site listing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Germany => "germany",
            Self::Uk => "uk",
        }
    }

    /// The compiled-in site this identifier names.
    #[must_use]
    pub const fn site(self) -> &'static Site {
        match self {
            Self::Germany => &GERMANY,
            Self::Uk => &UK,
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteId {
    type Err = UnknownSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSiteError {
                identifier: s.to_owned(),
            })
    }
}

/// Public metadata describing a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    /// Display name.
    pub name: &'static str,
    /// IANA timezone name.
    pub timezone: &'static str,
    /// ISO 4217 currency code used for financial figures.
    pub currency: &'static str,
    /// Prefix namespacing generated resource names, e.g. `DE-`.
    pub location_prefix: &'static str,
}

/// A simulated site: identifier, metadata, and parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    id: SiteId,
    info: SiteInfo,
    profile: SiteProfile,
}

impl Site {
    /// Site identifier.
    #[must_use]
    pub const fn id(&self) -> SiteId {
        self.id
    }

    /// Public metadata.
    #[must_use]
    pub const fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Numeric parameter table read by the generators.
    #[must_use]
    pub const fn profile(&self) -> &SiteProfile {
        &self.profile
    }
}

const GERMANY: Site = Site {
    id: SiteId::Germany,
    info: SiteInfo {
        name: "Germany Manufacturing",
        timezone: "Europe/Berlin",
        currency: "EUR",
        location_prefix: "DE-",
    },
    profile: profile::GERMANY,
};

const UK: Site = Site {
    id: SiteId::Uk,
    info: SiteInfo {
        name: "UK Manufacturing",
        timezone: "Europe/London",
        currency: "GBP",
        location_prefix: "UK-",
    },
    profile: profile::UK,
};

/// Read-only registry resolving site identifiers.
///
/// # Example
///
/// ```
/// use factory_data::{SiteId, SiteRegistry};
///
/// let registry = SiteRegistry::builtin();
/// assert_eq!(registry.resolve("uk").id(), SiteId::Uk);
/// assert_eq!(registry.resolve("atlantis").id(), SiteId::Germany);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteRegistry {
    default_site: SiteId,
}

impl SiteRegistry {
    /// Registry of the compiled-in sites, defaulting to Germany.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            default_site: SiteId::Germany,
        }
    }

    /// The site returned for unrecognised identifiers.
    #[must_use]
    pub const fn default_site(&self) -> &'static Site {
        self.default_site.site()
    }

    /// Resolve an identifier to a site, falling back to the default site.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> &'static Site {
        identifier
            .parse::<SiteId>()
            .map_or_else(|_| self.default_site(), SiteId::site)
    }

    /// Whether `identifier` names a configured site.
    #[must_use]
    pub fn is_known(&self, identifier: &str) -> bool {
        identifier.parse::<SiteId>().is_ok()
    }

    /// Metadata for every configured site, keyed by identifier.
    #[must_use]
    pub fn sites(&self) -> BTreeMap<SiteId, SiteInfo> {
        SiteId::ALL
            .into_iter()
            .map(|id| (id, *id.site().info()))
            .collect()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
