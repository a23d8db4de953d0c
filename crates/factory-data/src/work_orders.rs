//! Open work orders for a site.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;
use crate::sampling::{IntRange, pick};
use crate::site::Site;

/// Number used by the first order of every generated batch.
pub const FIRST_ORDER_NUMBER: u32 = 2_024_001;

/// Lines an order can be assigned to.
pub const ASSIGNED_LINE: IntRange = IntRange::new(1, 3);

/// Days before the reference date an order may have started.
pub const START_OFFSET_DAYS: IntRange = IntRange::new(0, 7);

/// Days after the reference date an order may fall due.
pub const DUE_OFFSET_DAYS: IntRange = IntRange::new(1, 14);

/// Lifecycle state of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    /// Being worked on.
    InProgress,
    /// Not started yet.
    Pending,
    /// Finished.
    Completed,
    /// Paused part-way through.
    OnHold,
}

impl WorkOrderStatus {
    /// Every status, in the order they are drawn from.
    pub const ALL: [Self; 4] = [Self::InProgress, Self::Pending, Self::Completed, Self::OnHold];

    /// Completion percentages an order in this status may report.
    ///
    /// ```
    /// use factory_data::{IntRange, WorkOrderStatus};
    ///
    /// assert_eq!(WorkOrderStatus::Completed.progress(), IntRange::new(100, 100));
    /// assert_eq!(WorkOrderStatus::OnHold.progress(), IntRange::new(20, 60));
    /// ```
    #[must_use]
    pub const fn progress(self) -> IntRange {
        match self {
            Self::InProgress => IntRange::new(10, 90),
            Self::Pending => IntRange::new(0, 0),
            Self::Completed => IntRange::new(100, 100),
            Self::OnHold => IntRange::new(20, 60),
        }
    }
}

/// Scheduling priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Expedite.
    High,
    /// Normal scheduling.
    Medium,
    /// Fill spare capacity.
    Low,
}

impl Priority {
    /// Every priority.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];
}

/// Per-site work order parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkOrderProfile {
    /// Number of orders in each batch.
    pub order_count: u32,
    /// Product names orders are drawn from.
    pub products: &'static [&'static str],
    /// Ordered quantity range.
    pub quantity: IntRange,
}

/// A single work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkOrder {
    /// Site-prefixed identifier such as `DE-WO2024001`.
    pub id: String,
    /// Product being built.
    pub product: &'static str,
    /// Ordered quantity.
    pub quantity: u32,
    /// Lifecycle state.
    pub status: WorkOrderStatus,
    /// Completion percentage, consistent with `status`.
    pub progress: u32,
    /// Scheduling priority.
    pub priority: Priority,
    /// Site-prefixed line label such as `UK-Line 2`.
    pub assigned_line: String,
    /// Date work started, serialized as `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    /// Date the order is due, serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
}

/// Sample a fresh batch of work orders for `site` relative to `today`.
///
/// # Errors
///
/// Returns [`GenerationError`] if the site's table is malformed or a start or
/// due date falls outside the supported calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use factory_data::{SiteRegistry, generate_work_orders, seeded_rng};
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
/// let site = SiteRegistry::builtin().resolve("uk");
/// let orders = generate_work_orders(&mut seeded_rng(5), site, today).expect("generated");
/// assert_eq!(orders.len(), 6);
/// assert_eq!(orders.first().map(|order| order.id.as_str()), Some("UK-WO2024001"));
/// ```
pub fn generate_work_orders<R: Rng + ?Sized>(
    rng: &mut R,
    site: &Site,
    today: NaiveDate,
) -> Result<Vec<WorkOrder>, GenerationError> {
    let profile = &site.profile().work_orders;
    let prefix = site.info().location_prefix;

    (0..profile.order_count)
        .map(|index| sample_order(&mut *rng, profile, prefix, index, today))
        .collect()
}

fn sample_order<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &WorkOrderProfile,
    prefix: &str,
    index: u32,
    today: NaiveDate,
) -> Result<WorkOrder, GenerationError> {
    let status = pick(rng, &WorkOrderStatus::ALL, "status")?;
    let number = FIRST_ORDER_NUMBER.saturating_add(index);

    Ok(WorkOrder {
        id: format!("{prefix}WO{number}"),
        product: pick(rng, profile.products, "product")?,
        quantity: profile.quantity.sample(rng, "quantity")?,
        status,
        progress: status.progress().sample(rng, "progress")?,
        priority: pick(rng, &Priority::ALL, "priority")?,
        assigned_line: format!("{prefix}Line {}", ASSIGNED_LINE.sample(rng, "assigned_line")?),
        start_date: offset_date(rng, today, START_OFFSET_DAYS, Direction::Back, "start_date")?,
        due_date: offset_date(rng, today, DUE_OFFSET_DAYS, Direction::Forward, "due_date")?,
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

fn offset_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    offsets: IntRange,
    direction: Direction,
    field: &'static str,
) -> Result<NaiveDate, GenerationError> {
    let days = Days::new(u64::from(offsets.sample(rng, field)?));
    match direction {
        Direction::Back => today.checked_sub_days(days),
        Direction::Forward => today.checked_add_days(days),
    }
    .ok_or(GenerationError::TimestampOutOfRange { field })
}
