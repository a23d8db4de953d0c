//! Enterprise resource planning (ERP) snapshot: inventory, finance, supply chain.
//!
//! Base quantities and amounts are shared by every site; each site scales
//! them by whole-number percentages from its [`ErpProfile`].

use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;
use crate::sampling::{FloatRange, IntRange, Precision, percent_of, pick};
use crate::site::Site;

/// Steel sheet stock before scaling.
pub const STEEL_SHEETS: StockProfile = StockProfile {
    field: "steel_sheets",
    current: IntRange::new(150, 500),
    minimum: 200,
    unit: "sheets",
    statuses: &[StockStatus::Adequate],
};

/// Aluminium bar stock before scaling.
pub const ALUMINUM_BARS: StockProfile = StockProfile {
    field: "aluminum_bars",
    current: IntRange::new(50, 200),
    minimum: 100,
    unit: "bars",
    statuses: &[StockStatus::Low, StockStatus::Adequate],
};

/// Electronic component stock before scaling.
pub const ELECTRONIC_COMPONENTS: StockProfile = StockProfile {
    field: "electronic_components",
    current: IntRange::new(800, 2_000),
    minimum: 1_000,
    unit: "pieces",
    statuses: &[StockStatus::Adequate],
};

/// Finished goods stock ranges for products A, B, and C before scaling.
pub const FINISHED_GOODS: [IntRange; 3] = [
    IntRange::new(50, 200),
    IntRange::new(30, 150),
    IntRange::new(25, 100),
];

/// Daily revenue before scaling.
pub const DAILY_REVENUE: FloatRange = FloatRange::new(45_000.0, 85_000.0);

/// Daily production cost before scaling.
pub const PRODUCTION_COST: FloatRange = FloatRange::new(25_000.0, 45_000.0);

/// Daily efficiency savings before scaling.
pub const EFFICIENCY_SAVINGS: FloatRange = FloatRange::new(2_000.0, 8_000.0);

/// Daily revenue target before scaling.
pub const TARGET_REVENUE: u32 = 75_000;

/// Stock health as reported by the planning system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock is close to or below its minimum.
    Low,
    /// Stock covers planned consumption.
    Adequate,
}

/// Parameter table for one raw material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockProfile {
    /// Field name used in error reports.
    pub field: &'static str,
    /// Current stock range.
    pub current: IntRange,
    /// Minimum stock level.
    pub minimum: u32,
    /// Counting unit.
    pub unit: &'static str,
    /// Statuses the material can report.
    pub statuses: &'static [StockStatus],
}

/// Per-site ERP parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErpProfile {
    /// Scale applied to every inventory quantity, in percent.
    pub inventory_percent: u32,
    /// Scale applied to revenue, savings, and the revenue target, in percent.
    pub revenue_percent: u32,
    /// Scale applied to production cost, in percent.
    pub cost_percent: u32,
    /// Supplier on-time performance range.
    pub supplier_performance: FloatRange,
    /// Delayed deliveries range.
    pub delivery_delays: IntRange,
    /// Open purchase orders range.
    pub pending_orders: IntRange,
}

/// Stock position of one raw material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockItem {
    /// Units currently on hand.
    pub current_stock: u32,
    /// Reorder threshold.
    pub minimum_stock: u32,
    /// Counting unit.
    pub unit: &'static str,
    /// Reported status.
    pub status: StockStatus,
}

/// Raw material stock positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawMaterials {
    /// Steel sheets.
    pub steel_sheets: StockItem,
    /// Aluminium bars.
    pub aluminum_bars: StockItem,
    /// Electronic components.
    pub electronic_components: StockItem,
}

/// Finished goods on hand per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinishedGoods {
    /// Product A.
    pub product_a: u32,
    /// Product B.
    pub product_b: u32,
    /// Product C.
    pub product_c: u32,
}

/// Inventory snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inventory {
    /// Raw materials.
    pub raw_materials: RawMaterials,
    /// Finished goods.
    pub finished_goods: FinishedGoods,
}

/// Daily financial figures in the site's currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialMetrics {
    /// Revenue booked today.
    pub daily_revenue: f64,
    /// Production cost incurred today.
    pub production_cost: f64,
    /// Savings from efficiency programmes.
    pub efficiency_savings: f64,
    /// Revenue target for the day.
    pub target_revenue: u32,
    /// ISO 4217 currency code.
    pub currency: &'static str,
}

/// Supplier and purchasing indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyChain {
    /// Supplier on-time performance in percent.
    pub supplier_performance: f64,
    /// Deliveries currently delayed.
    pub delivery_delays: u32,
    /// Purchase orders awaiting fulfilment.
    pub pending_orders: u32,
}

/// ERP snapshot for one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErpSnapshot {
    /// Inventory positions.
    pub inventory: Inventory,
    /// Financial figures.
    pub financial_metrics: FinancialMetrics,
    /// Supply chain indicators.
    pub supply_chain: SupplyChain,
}

/// Sample a fresh ERP snapshot for `site`.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's ERP table is malformed.
///
/// # Example
///
/// ```
/// use factory_data::{SiteRegistry, generate_erp_snapshot, seeded_rng};
///
/// let site = SiteRegistry::builtin().resolve("uk");
/// let erp = generate_erp_snapshot(&mut seeded_rng(3), site).expect("generated");
/// assert_eq!(erp.financial_metrics.currency, "GBP");
/// assert_eq!(erp.financial_metrics.target_revenue, 63_750);
/// ```
pub fn generate_erp_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
) -> Result<ErpSnapshot, GenerationError> {
    let profile = &site.profile().erp;
    let scale = profile.inventory_percent;
    let [product_a, product_b, product_c] = FINISHED_GOODS.map(|range| range.scaled(scale));

    let inventory = Inventory {
        raw_materials: RawMaterials {
            steel_sheets: sample_stock(rng, &STEEL_SHEETS, scale)?,
            aluminum_bars: sample_stock(rng, &ALUMINUM_BARS, scale)?,
            electronic_components: sample_stock(rng, &ELECTRONIC_COMPONENTS, scale)?,
        },
        finished_goods: FinishedGoods {
            product_a: product_a.sample(rng, "product_a")?,
            product_b: product_b.sample(rng, "product_b")?,
            product_c: product_c.sample(rng, "product_c")?,
        },
    };

    let financial_metrics = FinancialMetrics {
        daily_revenue: DAILY_REVENUE.scaled(profile.revenue_percent).sample(
            rng,
            Precision::Hundredths,
            "daily_revenue",
        )?,
        production_cost: PRODUCTION_COST.scaled(profile.cost_percent).sample(
            rng,
            Precision::Hundredths,
            "production_cost",
        )?,
        efficiency_savings: EFFICIENCY_SAVINGS
            .scaled(profile.revenue_percent)
            .sample(rng, Precision::Hundredths, "efficiency_savings")?,
        target_revenue: percent_of(TARGET_REVENUE, profile.revenue_percent),
        currency: site.info().currency,
    };

    let supply_chain = SupplyChain {
        supplier_performance: profile.supplier_performance.sample(
            rng,
            Precision::Tenths,
            "supplier_performance",
        )?,
        delivery_delays: profile.delivery_delays.sample(rng, "delivery_delays")?,
        pending_orders: profile.pending_orders.sample(rng, "pending_orders")?,
    };

    Ok(ErpSnapshot {
        inventory,
        financial_metrics,
        supply_chain,
    })
}

fn sample_stock<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockProfile,
    scale: u32,
) -> Result<StockItem, GenerationError> {
    Ok(StockItem {
        current_stock: stock.current.scaled(scale).sample(rng, stock.field)?,
        minimum_stock: percent_of(stock.minimum, scale),
        unit: stock.unit,
        status: pick(rng, stock.statuses, stock.field)?,
    })
}
