//! Daily production performance, weekly trend, and downtime.

use chrono::Weekday;
use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;
use crate::sampling::{FloatRange, IntRange, Precision, percent_of};
use crate::site::Site;

/// Share of the daily target produced on each weekday, in percent.
pub const WEEKLY_SHARE: [(Weekday, IntRange); 7] = [
    (Weekday::Mon, WORKDAY_SHARE),
    (Weekday::Tue, WORKDAY_SHARE),
    (Weekday::Wed, WORKDAY_SHARE),
    (Weekday::Thu, WORKDAY_SHARE),
    (Weekday::Fri, WORKDAY_SHARE),
    (Weekday::Sat, IntRange::new(60, 80)),
    (Weekday::Sun, IntRange::new(40, 60)),
];

const WORKDAY_SHARE: IntRange = IntRange::new(85, 110);

/// Planned downtime in minutes, identical at every site.
pub const PLANNED_DOWNTIME: IntRange = IntRange::new(20, 60);

/// Per-site production parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionProfile {
    /// Daily unit target.
    pub target: u32,
    /// Permitted deviation of actual output from target, in percent.
    pub variance_percent: u32,
    /// Efficiency percentage range.
    pub efficiency: FloatRange,
    /// Total downtime range in minutes.
    pub total_downtime: IntRange,
    /// Unplanned downtime range in minutes.
    pub unplanned_downtime: IntRange,
}

impl ProductionProfile {
    /// Range the actual daily output is drawn from.
    ///
    /// ```
    /// use factory_data::{IntRange, SiteId};
    ///
    /// let profile = SiteId::Uk.site().profile().production;
    /// assert_eq!(profile.actual_output(), IntRange::new(697, 1_003));
    /// ```
    #[must_use]
    pub const fn actual_output(&self) -> IntRange {
        IntRange::new(
            percent_of(self.target, 100_u32.saturating_sub(self.variance_percent)),
            percent_of(self.target, 100_u32.saturating_add(self.variance_percent)),
        )
    }
}

/// Output against target for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyProduction {
    /// Unit target.
    pub target: u32,
    /// Units produced.
    pub actual: u32,
    /// Efficiency percentage.
    pub efficiency: f64,
}

/// Output on one day of the trailing week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyOutput {
    /// Abbreviated weekday name, `Mon` through `Sun`.
    pub day: &'static str,
    /// Units produced.
    pub production: u32,
}

/// Downtime breakdown in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Downtime {
    /// Total minutes lost.
    pub total_minutes: u32,
    /// Minutes of scheduled stoppage.
    pub planned: u32,
    /// Minutes of unscheduled stoppage.
    pub unplanned: u32,
}

/// Production metrics for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionMetrics {
    /// Today's output.
    pub daily_production: DailyProduction,
    /// Output per weekday, Monday first.
    pub weekly_trend: Vec<DailyOutput>,
    /// Downtime breakdown.
    pub downtime: Downtime,
}

/// Sample fresh production metrics for `site`.
///
/// Downtime components are drawn independently, so `planned + unplanned`
/// need not equal `total_minutes`.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's production table is malformed.
pub fn generate_production_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
) -> Result<ProductionMetrics, GenerationError> {
    let profile = &site.profile().production;

    let daily_production = DailyProduction {
        target: profile.target,
        actual: profile.actual_output().sample(rng, "actual")?,
        efficiency: profile
            .efficiency
            .sample(rng, Precision::Tenths, "efficiency")?,
    };

    let weekly_trend = WEEKLY_SHARE
        .iter()
        .map(|(day, share)| {
            share
                .scaled(profile.target)
                .sample(&mut *rng, "weekly_trend")
                .map(|production| DailyOutput {
                    day: abbreviation(*day),
                    production,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let downtime = Downtime {
        total_minutes: profile.total_downtime.sample(rng, "total_minutes")?,
        planned: PLANNED_DOWNTIME.sample(rng, "planned")?,
        unplanned: profile.unplanned_downtime.sample(rng, "unplanned")?,
    };

    Ok(ProductionMetrics {
        daily_production,
        weekly_trend,
        downtime,
    })
}

const fn abbreviation(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::sampling::seeded_rng;
    use crate::site::SiteId;

    #[rstest]
    #[case(SiteId::Germany, 1_000, 850, 1_150)]
    #[case(SiteId::Uk, 850, 697, 1_003)]
    fn daily_output_stays_within_variance(
        #[case] id: SiteId,
        #[case] target: u32,
        #[case] low: u32,
        #[case] high: u32,
    ) {
        let profile = id.site().profile().production;
        let mut rng = seeded_rng(6);

        for _ in 0..200 {
            let daily = generate_production_metrics(&mut rng, id.site())
                .expect("generated")
                .daily_production;
            assert_eq!(daily.target, target);
            assert!((low..=high).contains(&daily.actual), "{}", daily.actual);
            assert!(
                profile
                    .efficiency
                    .contains_rounded(daily.efficiency, Precision::Tenths)
            );
        }
    }

    #[test]
    fn weekly_trend_runs_monday_to_sunday() {
        let metrics =
            generate_production_metrics(&mut seeded_rng(1), SiteId::Uk.site()).expect("generated");
        let days: Vec<&str> = metrics.weekly_trend.iter().map(|entry| entry.day).collect();
        assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[rstest]
    #[case(
        SiteId::Germany,
        IntRange::new(850, 1_100),
        IntRange::new(600, 800),
        IntRange::new(400, 600)
    )]
    #[case(SiteId::Uk, IntRange::new(722, 935), IntRange::new(510, 680), IntRange::new(340, 510))]
    fn weekly_trend_follows_day_type(
        #[case] id: SiteId,
        #[case] workday: IntRange,
        #[case] saturday: IntRange,
        #[case] sunday: IntRange,
    ) {
        let mut rng = seeded_rng(14);
        for _ in 0..100 {
            let metrics = generate_production_metrics(&mut rng, id.site()).expect("generated");
            for entry in &metrics.weekly_trend {
                let expected = match entry.day {
                    "Sat" => saturday,
                    "Sun" => sunday,
                    _ => workday,
                };
                assert!(expected.contains(entry.production), "{entry:?}");
            }
        }
    }

    #[rstest]
    #[case(SiteId::Germany)]
    #[case(SiteId::Uk)]
    fn downtime_components_stay_in_range(#[case] id: SiteId) {
        let profile = id.site().profile().production;
        let mut rng = seeded_rng(40);

        for _ in 0..100 {
            let downtime = generate_production_metrics(&mut rng, id.site())
                .expect("generated")
                .downtime;
            assert!(profile.total_downtime.contains(downtime.total_minutes));
            assert!(PLANNED_DOWNTIME.contains(downtime.planned));
            assert!(profile.unplanned_downtime.contains(downtime.unplanned));
        }
    }
}
