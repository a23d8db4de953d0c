//! Manufacturing execution system (MES) snapshot: OEE, line status, quality.

use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;
use crate::sampling::{FloatRange, IntRange, Precision, pick};
use crate::site::Site;

/// Availability percentage, identical at every site.
pub const AVAILABILITY: FloatRange = FloatRange::new(85.0, 98.0);

/// Performance percentage, identical at every site.
pub const PERFORMANCE: FloatRange = FloatRange::new(80.0, 95.0);

/// Operating state of a production line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    /// Producing output.
    Running,
    /// Powered but not producing.
    Idle,
    /// Down for planned maintenance.
    Maintenance,
}

/// Statuses available to lines that support maintenance windows.
pub const SERVICEABLE_LINE: &[LineStatus] = &[
    LineStatus::Running,
    LineStatus::Idle,
    LineStatus::Maintenance,
];

/// Statuses available to lines that never report maintenance.
pub const CONTINUOUS_LINE: &[LineStatus] = &[LineStatus::Running, LineStatus::Idle];

/// Parameter table for one production line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProfile {
    /// Line name appended to the site prefix.
    pub name: &'static str,
    /// Statuses the line can report.
    pub statuses: &'static [LineStatus],
    /// Efficiency percentage range.
    pub efficiency: FloatRange,
    /// Output rate range in units per hour.
    pub output_rate: IntRange,
    /// Target rate in units per hour.
    pub target_rate: u32,
}

/// Per-site MES parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MesProfile {
    /// Composite OEE percentage range.
    pub oee: FloatRange,
    /// Quality percentage range.
    pub quality: FloatRange,
    /// Production lines in display order.
    pub lines: [LineProfile; 6],
    /// Defect rate percentage range.
    pub defect_rate: FloatRange,
    /// First pass yield percentage range.
    pub first_pass_yield: FloatRange,
    /// Rework rate percentage range.
    pub rework_rate: FloatRange,
}

/// Overall equipment effectiveness and its components, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallEquipmentEffectiveness {
    /// Composite OEE.
    pub oee: f64,
    /// Availability component.
    pub availability: f64,
    /// Performance component.
    pub performance: f64,
    /// Quality component.
    pub quality: f64,
}

/// Status of one production line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionLine {
    /// Site-prefixed identifier such as `DE-LINE_001`.
    pub id: String,
    /// Site-prefixed display name.
    pub name: String,
    /// Operating state.
    pub status: LineStatus,
    /// Efficiency percentage.
    pub efficiency: f64,
    /// Current output rate.
    pub output_rate: u32,
    /// Target output rate.
    pub target_rate: u32,
}

/// Quality indicators, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityMetrics {
    /// Share of defective units.
    pub defect_rate: f64,
    /// Share of units passing first inspection.
    pub first_pass_yield: f64,
    /// Share of units sent back for rework.
    pub rework_rate: f64,
}

/// MES snapshot for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MesSnapshot {
    /// OEE breakdown.
    pub overall_equipment_effectiveness: OverallEquipmentEffectiveness,
    /// Every production line in display order.
    pub production_lines: Vec<ProductionLine>,
    /// Quality indicators.
    pub quality_metrics: QualityMetrics,
}

/// Sample a fresh MES snapshot for `site`.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's MES table is malformed.
pub fn generate_mes_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
) -> Result<MesSnapshot, GenerationError> {
    let profile = &site.profile().mes;
    let prefix = site.info().location_prefix;

    let overall_equipment_effectiveness = OverallEquipmentEffectiveness {
        oee: profile.oee.sample(rng, Precision::Tenths, "oee")?,
        availability: AVAILABILITY.sample(rng, Precision::Tenths, "availability")?,
        performance: PERFORMANCE.sample(rng, Precision::Tenths, "performance")?,
        quality: profile.quality.sample(rng, Precision::Tenths, "quality")?,
    };

    let production_lines = (1_u32..)
        .zip(profile.lines.iter())
        .map(|(number, line)| sample_line(&mut *rng, prefix, number, line))
        .collect::<Result<Vec<_>, _>>()?;

    let quality_metrics = QualityMetrics {
        defect_rate: profile
            .defect_rate
            .sample(rng, Precision::Hundredths, "defect_rate")?,
        first_pass_yield: profile
            .first_pass_yield
            .sample(rng, Precision::Tenths, "first_pass_yield")?,
        rework_rate: profile
            .rework_rate
            .sample(rng, Precision::Hundredths, "rework_rate")?,
    };

    Ok(MesSnapshot {
        overall_equipment_effectiveness,
        production_lines,
        quality_metrics,
    })
}

fn sample_line<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &str,
    number: u32,
    line: &LineProfile,
) -> Result<ProductionLine, GenerationError> {
    Ok(ProductionLine {
        id: format!("{prefix}LINE_{number:03}"),
        name: format!("{prefix}{}", line.name),
        status: pick(rng, line.statuses, "line_status")?,
        efficiency: line
            .efficiency
            .sample(rng, Precision::Tenths, "line_efficiency")?,
        output_rate: line.output_rate.sample(rng, "output_rate")?,
        target_rate: line.target_rate,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::sampling::seeded_rng;
    use crate::site::SiteId;

    #[rstest]
    #[case(SiteId::Germany)]
    #[case(SiteId::Uk)]
    fn snapshot_respects_site_ranges(#[case] id: SiteId) {
        let site = id.site();
        let profile = site.profile().mes;
        let mut rng = seeded_rng(21);

        for _ in 0..100 {
            let snapshot = generate_mes_snapshot(&mut rng, site).expect("generated");
            let oee = snapshot.overall_equipment_effectiveness;
            assert!(profile.oee.contains_rounded(oee.oee, Precision::Tenths));
            assert!(AVAILABILITY.contains_rounded(oee.availability, Precision::Tenths));
            assert!(PERFORMANCE.contains_rounded(oee.performance, Precision::Tenths));
            assert!(profile.quality.contains_rounded(oee.quality, Precision::Tenths));

            for (line, line_profile) in snapshot.production_lines.iter().zip(profile.lines) {
                assert!(line_profile.statuses.contains(&line.status));
                assert!(
                    line_profile
                        .efficiency
                        .contains_rounded(line.efficiency, Precision::Tenths)
                );
                assert!(line_profile.output_rate.contains(line.output_rate));
                assert_eq!(line.target_rate, line_profile.target_rate);
            }

            let quality = snapshot.quality_metrics;
            assert!(
                profile
                    .defect_rate
                    .contains_rounded(quality.defect_rate, Precision::Hundredths)
            );
            assert!(
                profile
                    .first_pass_yield
                    .contains_rounded(quality.first_pass_yield, Precision::Tenths)
            );
            assert!(
                profile
                    .rework_rate
                    .contains_rounded(quality.rework_rate, Precision::Hundredths)
            );
        }
    }

    #[test]
    fn lines_are_numbered_and_prefixed() {
        let snapshot =
            generate_mes_snapshot(&mut seeded_rng(3), SiteId::Germany.site()).expect("generated");
        let ids: Vec<&str> = snapshot
            .production_lines
            .iter()
            .map(|line| line.id.as_str())
            .collect();

        assert_eq!(
            ids,
            vec![
                "DE-LINE_001",
                "DE-LINE_002",
                "DE-LINE_003",
                "DE-LINE_004",
                "DE-LINE_005",
                "DE-LINE_006"
            ]
        );
        assert_eq!(
            snapshot.production_lines.get(2).map(|line| line.name.as_str()),
            Some("DE-Packaging Line")
        );
    }

    #[test]
    fn packaging_and_testing_lines_never_enter_maintenance() {
        let site = SiteId::Uk.site();
        let mut rng = seeded_rng(8);

        for _ in 0..200 {
            let snapshot = generate_mes_snapshot(&mut rng, site).expect("generated");
            for line in &snapshot.production_lines {
                if line.name.ends_with("Packaging Line") || line.name.ends_with("Testing Line") {
                    assert_ne!(line.status, LineStatus::Maintenance, "{}", line.name);
                }
            }
        }
    }
}
