//! Historical time series generated on demand for the dashboard charts.
//!
//! Nothing is stored: every call samples a fresh series ending at the supplied
//! reference instant. Longer windows widen the sampling ranges so that the
//! weekly chart shows more spread than the hourly one.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use serde::Serialize;

use crate::error::{GenerationError, UnknownTimeRangeError};
use crate::sampling::{FloatRange, IntRange, Precision};
use crate::site::Site;

/// Window covered by a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Last hour in five-minute steps.
    LastHour,
    /// Last day in hourly steps.
    LastDay,
    /// Last week in daily steps.
    LastWeek,
}

/// Widening applied to each base range for one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Widening {
    /// Added on both sides of the temperature range.
    pub temperature: f64,
    /// Added on both sides of the pressure range.
    pub pressure: f64,
    /// Added on both sides of the production rate range.
    pub production_rate: u32,
}

impl TimeRange {
    /// Every supported window.
    pub const ALL: [Self; 3] = [Self::LastHour, Self::LastDay, Self::LastWeek];

    /// Wire tag, e.g. `24h`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastHour => "1h",
            Self::LastDay => "24h",
            Self::LastWeek => "7d",
        }
    }

    /// Number of points in the series.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::LastHour => 12,
            Self::LastDay => 24,
            Self::LastWeek => 7,
        }
    }

    /// Time between consecutive points.
    #[must_use]
    pub const fn spacing(self) -> TimeDelta {
        match self {
            Self::LastHour => TimeDelta::minutes(5),
            Self::LastDay => TimeDelta::hours(1),
            Self::LastWeek => TimeDelta::days(1),
        }
    }

    /// `strftime` pattern used for point labels.
    #[must_use]
    pub const fn label_format(self) -> &'static str {
        match self {
            Self::LastHour => "%H:%M",
            Self::LastDay => "%H:00",
            Self::LastWeek => "%m/%d",
        }
    }

    /// How far the base ranges are widened for this window.
    #[must_use]
    pub const fn widening(self) -> Widening {
        match self {
            Self::LastHour => Widening {
                temperature: 0.0,
                pressure: 0.0,
                production_rate: 0,
            },
            Self::LastDay => Widening {
                temperature: 2.0,
                pressure: 3.0,
                production_rate: 10,
            },
            Self::LastWeek => Widening {
                temperature: 5.0,
                pressure: 5.0,
                production_rate: 20,
            },
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = UnknownTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| UnknownTimeRangeError { tag: s.to_owned() })
    }
}

/// Per-site base ranges for historical series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryProfile {
    /// Temperature in °C.
    pub temperature: FloatRange,
    /// Pressure in bar.
    pub pressure: FloatRange,
    /// Production rate in units per hour.
    pub production_rate: IntRange,
}

impl HistoryProfile {
    /// Base ranges widened for `range`.
    #[must_use]
    pub const fn widened_for(&self, range: TimeRange) -> Self {
        let widening = range.widening();
        Self {
            temperature: self.temperature.widened(widening.temperature),
            pressure: self.pressure.widened(widening.pressure),
            production_rate: self.production_rate.widened(widening.production_rate),
        }
    }
}

/// One point of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Local time label formatted for the window.
    pub timestamp: String,
    /// Temperature in °C, one decimal.
    pub temperature: f64,
    /// Pressure in bar, one decimal.
    pub pressure: f64,
    /// Production rate in units per hour.
    pub production_rate: u32,
}

/// A historical series, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalSeries {
    /// The requested tag, echoed verbatim.
    pub time_range: String,
    /// Points in chronological order.
    pub data_points: Vec<DataPoint>,
}

/// Sample a historical series for `site` ending at `now`.
///
/// `range_tag` is echoed back unchanged. Tags other than `1h`, `24h`, and
/// `7d` yield an empty point list.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's history table is malformed or a
/// point would fall outside the supported calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use factory_data::{SiteRegistry, generate_historical_series, seeded_rng};
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 14)
///     .and_then(|date| date.and_hms_opt(10, 7, 0))
///     .expect("valid instant");
/// let site = SiteRegistry::builtin().resolve("germany");
/// let series = generate_historical_series(&mut seeded_rng(1), site, "1h", now)
///     .expect("generated");
///
/// assert_eq!(series.data_points.len(), 12);
/// assert_eq!(series.data_points.first().map(|p| p.timestamp.as_str()), Some("09:12"));
/// assert_eq!(series.data_points.last().map(|p| p.timestamp.as_str()), Some("10:07"));
/// ```
pub fn generate_historical_series<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
    range_tag: &str,
    now: NaiveDateTime,
) -> Result<HistoricalSeries, GenerationError> {
    let data_points = match range_tag.parse::<TimeRange>() {
        Ok(range) => sample_points(rng, site, range, now)?,
        Err(_) => Vec::new(),
    };

    Ok(HistoricalSeries {
        time_range: range_tag.to_owned(),
        data_points,
    })
}

fn sample_points<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
    range: TimeRange,
    now: NaiveDateTime,
) -> Result<Vec<DataPoint>, GenerationError> {
    let bounds = site.profile().history.widened_for(range);

    (0..range.points())
        .rev()
        .map(|steps_back| {
            point_time(now, range, steps_back)
                .and_then(|at| sample_point(&mut *rng, &bounds, range, at))
        })
        .collect()
}

fn sample_point<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &HistoryProfile,
    range: TimeRange,
    at: NaiveDateTime,
) -> Result<DataPoint, GenerationError> {
    Ok(DataPoint {
        timestamp: at.format(range.label_format()).to_string(),
        temperature: bounds
            .temperature
            .sample(rng, Precision::Tenths, "temperature")?,
        pressure: bounds.pressure.sample(rng, Precision::Tenths, "pressure")?,
        production_rate: bounds.production_rate.sample(rng, "production_rate")?,
    })
}

fn point_time(
    now: NaiveDateTime,
    range: TimeRange,
    steps_back: u32,
) -> Result<NaiveDateTime, GenerationError> {
    let out_of_range = GenerationError::TimestampOutOfRange { field: "timestamp" };
    let steps = i32::try_from(steps_back).map_err(|_| out_of_range.clone())?;
    range
        .spacing()
        .checked_mul(steps)
        .and_then(|offset| now.checked_sub_signed(offset))
        .ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::sampling::seeded_rng;
    use crate::site::SiteId;

    #[fixture]
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 2)
            .and_then(|date| date.and_hms_opt(14, 35, 20))
            .expect("valid instant")
    }

    #[rstest]
    #[case("1h", 12)]
    #[case("24h", 24)]
    #[case("7d", 7)]
    #[case("30d", 0)]
    #[case("", 0)]
    fn point_count_follows_tag(now: NaiveDateTime, #[case] tag: &str, #[case] expected: usize) {
        let site = SiteId::Germany.site();
        let series =
            generate_historical_series(&mut seeded_rng(1), site, tag, now).expect("generated");

        assert_eq!(series.time_range, tag);
        assert_eq!(series.data_points.len(), expected);
    }

    #[rstest]
    #[case("24h", "15:00", "14:00")]
    #[case("7d", "02/25", "03/02")]
    fn labels_run_oldest_first(
        now: NaiveDateTime,
        #[case] tag: &str,
        #[case] first: &str,
        #[case] last: &str,
    ) {
        let series = generate_historical_series(&mut seeded_rng(2), SiteId::Uk.site(), tag, now)
            .expect("generated");

        assert_eq!(
            series.data_points.first().map(|point| point.timestamp.as_str()),
            Some(first)
        );
        assert_eq!(
            series.data_points.last().map(|point| point.timestamp.as_str()),
            Some(last)
        );
    }

    #[rstest]
    fn values_respect_widened_ranges(
        now: NaiveDateTime,
        #[values(SiteId::Germany, SiteId::Uk)] id: SiteId,
        #[values(TimeRange::LastHour, TimeRange::LastDay, TimeRange::LastWeek)] range: TimeRange,
    ) {
        let bounds = id.site().profile().history.widened_for(range);
        let mut rng = seeded_rng(77);

        for _ in 0..20 {
            let series = generate_historical_series(&mut rng, id.site(), range.as_str(), now)
                .expect("generated");
            for point in &series.data_points {
                assert!(
                    bounds
                        .temperature
                        .contains_rounded(point.temperature, Precision::Tenths)
                );
                assert!(
                    bounds
                        .pressure
                        .contains_rounded(point.pressure, Precision::Tenths)
                );
                assert!(bounds.production_rate.contains(point.production_rate));
            }
        }
    }

    #[test]
    fn weekly_production_range_widens_by_twenty() {
        let bounds = SiteId::Uk
            .site()
            .profile()
            .history
            .widened_for(TimeRange::LastWeek);
        assert_eq!(bounds.production_rate, IntRange::new(25, 85));
    }

    #[test]
    fn unknown_tag_is_rejected_by_strict_parse() {
        let err = "2w".parse::<TimeRange>().expect_err("unknown tag");
        assert_eq!(err.tag, "2w");
    }

    #[test]
    fn calendar_underflow_is_reported() {
        let result = generate_historical_series(
            &mut seeded_rng(1),
            SiteId::Germany.site(),
            "7d",
            NaiveDateTime::MIN,
        );
        assert_eq!(
            result,
            Err(GenerationError::TimestampOutOfRange { field: "timestamp" })
        );
    }
}
