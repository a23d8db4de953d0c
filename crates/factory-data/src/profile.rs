//! Compiled-in parameter tables for each site.

use crate::erp::ErpProfile;
use crate::history::HistoryProfile;
use crate::mes::{CONTINUOUS_LINE, LineProfile, LineStatus, MesProfile, SERVICEABLE_LINE};
use crate::production::ProductionProfile;
use crate::sampling::{FloatRange, IntRange};
use crate::sensors::SensorProfile;
use crate::work_orders::WorkOrderProfile;

/// Every numeric table the generators read for one site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteProfile {
    /// Sensor value ranges.
    pub sensors: SensorProfile,
    /// MES ranges and production lines.
    pub mes: MesProfile,
    /// ERP scaling and supply chain ranges.
    pub erp: ErpProfile,
    /// Work order batch shape.
    pub work_orders: WorkOrderProfile,
    /// Production targets and downtime ranges.
    pub production: ProductionProfile,
    /// Base ranges for historical series.
    pub history: HistoryProfile,
}

const fn line(
    name: &'static str,
    statuses: &'static [LineStatus],
    efficiency: FloatRange,
    output_rate: IntRange,
    target_rate: u32,
) -> LineProfile {
    LineProfile {
        name,
        statuses,
        efficiency,
        output_rate,
        target_rate,
    }
}

const ASSEMBLY_EFFICIENCY: FloatRange = FloatRange::new(80.0, 98.0);
const PACKAGING_EFFICIENCY: FloatRange = FloatRange::new(85.0, 99.0);
const QUALITY_CONTROL_EFFICIENCY: FloatRange = FloatRange::new(88.0, 99.5);
const TESTING_EFFICIENCY: FloatRange = FloatRange::new(82.0, 96.0);
const FINISHING_EFFICIENCY: FloatRange = FloatRange::new(80.0, 95.0);

const GERMANY_OEE: f64 = 85.0;
const GERMANY_QUALITY: f64 = 97.0;
const UK_OEE: f64 = 82.0;
const UK_QUALITY: f64 = 95.5;

/// Parameters for Germany Manufacturing.
pub const GERMANY: SiteProfile = SiteProfile {
    sensors: SensorProfile {
        temperature: FloatRange::new(20.0, 35.0),
        pressure: FloatRange::new(12.0, 50.0),
        humidity: FloatRange::new(35.0, 65.0),
        vibration: FloatRange::new(0.1, 2.8),
    },
    mes: MesProfile {
        oee: FloatRange::around(GERMANY_OEE, 10.0, 10.0),
        quality: FloatRange::around(GERMANY_QUALITY, 5.0, 2.5),
        lines: [
            line(
                "Assembly Line 1",
                SERVICEABLE_LINE,
                ASSEMBLY_EFFICIENCY,
                IntRange::new(45, 65),
                60,
            ),
            line(
                "Assembly Line 2",
                SERVICEABLE_LINE,
                ASSEMBLY_EFFICIENCY,
                IntRange::new(40, 55),
                50,
            ),
            line(
                "Packaging Line",
                CONTINUOUS_LINE,
                PACKAGING_EFFICIENCY,
                IntRange::new(80, 120),
                100,
            ),
            line(
                "Quality Control",
                SERVICEABLE_LINE,
                QUALITY_CONTROL_EFFICIENCY,
                IntRange::new(35, 50),
                45,
            ),
            line("Testing Line", CONTINUOUS_LINE, TESTING_EFFICIENCY, IntRange::new(25, 40), 35),
            line(
                "Finishing Line",
                SERVICEABLE_LINE,
                FINISHING_EFFICIENCY,
                IntRange::new(60, 85),
                75,
            ),
        ],
        defect_rate: FloatRange::new(0.1, 2.0),
        first_pass_yield: FloatRange::around(GERMANY_QUALITY, 2.0, 2.8),
        rework_rate: FloatRange::new(0.5, 2.5),
    },
    erp: ErpProfile {
        inventory_percent: 120,
        revenue_percent: 100,
        cost_percent: 100,
        supplier_performance: FloatRange::new(88.0, 98.0),
        delivery_delays: IntRange::new(0, 2),
        pending_orders: IntRange::new(5, 25),
    },
    work_orders: WorkOrderProfile {
        order_count: 8,
        products: &["Product A", "Product B", "Product C", "Product D"],
        quantity: IntRange::new(50, 500),
    },
    production: ProductionProfile {
        target: 1_000,
        variance_percent: 15,
        efficiency: FloatRange::new(88.0, 105.0),
        total_downtime: IntRange::new(30, 180),
        unplanned_downtime: IntRange::new(10, 120),
    },
    history: HistoryProfile {
        temperature: FloatRange::new(20.0, 30.0),
        pressure: FloatRange::new(15.0, 25.0),
        production_rate: IntRange::new(50, 70),
    },
};

/// Parameters for UK Manufacturing.
pub const UK: SiteProfile = SiteProfile {
    sensors: SensorProfile {
        temperature: FloatRange::new(15.0, 30.0),
        pressure: FloatRange::new(8.0, 45.0),
        humidity: FloatRange::new(25.0, 75.0),
        vibration: FloatRange::new(0.1, 2.2),
    },
    mes: MesProfile {
        oee: FloatRange::around(UK_OEE, 10.0, 10.0),
        quality: FloatRange::around(UK_QUALITY, 5.0, 2.5),
        lines: [
            line(
                "Assembly Line 1",
                SERVICEABLE_LINE,
                ASSEMBLY_EFFICIENCY,
                IntRange::new(40, 60),
                55,
            ),
            line(
                "Assembly Line 2",
                SERVICEABLE_LINE,
                ASSEMBLY_EFFICIENCY,
                IntRange::new(35, 50),
                45,
            ),
            line(
                "Packaging Line",
                CONTINUOUS_LINE,
                PACKAGING_EFFICIENCY,
                IntRange::new(75, 110),
                95,
            ),
            line(
                "Quality Control",
                SERVICEABLE_LINE,
                QUALITY_CONTROL_EFFICIENCY,
                IntRange::new(30, 45),
                40,
            ),
            line("Testing Line", CONTINUOUS_LINE, TESTING_EFFICIENCY, IntRange::new(20, 35), 30),
            line(
                "Finishing Line",
                SERVICEABLE_LINE,
                FINISHING_EFFICIENCY,
                IntRange::new(55, 80),
                70,
            ),
        ],
        defect_rate: FloatRange::new(0.1, 2.5),
        first_pass_yield: FloatRange::around(UK_QUALITY, 2.0, 2.8),
        rework_rate: FloatRange::new(0.5, 3.0),
    },
    erp: ErpProfile {
        inventory_percent: 100,
        revenue_percent: 85,
        cost_percent: 88,
        supplier_performance: FloatRange::new(85.0, 98.0),
        delivery_delays: IntRange::new(0, 4),
        pending_orders: IntRange::new(8, 30),
    },
    work_orders: WorkOrderProfile {
        order_count: 6,
        products: &["Product X", "Product Y", "Product Z", "Product W"],
        quantity: IntRange::new(40, 400),
    },
    production: ProductionProfile {
        target: 850,
        variance_percent: 18,
        efficiency: FloatRange::new(85.0, 105.0),
        total_downtime: IntRange::new(45, 210),
        unplanned_downtime: IntRange::new(15, 150),
    },
    history: HistoryProfile {
        temperature: FloatRange::new(18.0, 28.0),
        pressure: FloatRange::new(12.0, 22.0),
        production_rate: IntRange::new(45, 65),
    },
};
