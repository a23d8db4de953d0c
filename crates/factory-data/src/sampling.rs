//! Bounded uniform sampling primitives shared by every generator.
//!
//! All randomness flows through a caller-supplied [`Rng`], so the same seed
//! always yields the same record. Ranges are inclusive on both ends and are
//! validated before sampling, so a malformed table produces a
//! [`GenerationError`] instead of a panic inside `rand`.

#![expect(
    clippy::float_arithmetic,
    reason = "telemetry values are continuous measurements"
)]

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;

/// Random source used for telemetry generation.
///
/// ChaCha8 is portable and reproducible across platforms, which keeps seeded
/// runs stable between machines.
pub type TelemetryRng = ChaCha8Rng;

/// Build a deterministic random source from a numeric seed.
///
/// # Example
///
/// ```
/// use factory_data::seeded_rng;
/// use rand::Rng;
///
/// let mut first = seeded_rng(7);
/// let mut second = seeded_rng(7);
/// assert_eq!(first.random::<u64>(), second.random::<u64>());
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> TelemetryRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a random source seeded from the thread-local entropy pool.
#[must_use]
pub fn entropy_rng() -> TelemetryRng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}

/// Number of decimal places a continuous value is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// One decimal place.
    Tenths,
    /// Two decimal places.
    Hundredths,
}

impl Precision {
    const fn factor(self) -> f64 {
        match self {
            Self::Tenths => 10.0,
            Self::Hundredths => 100.0,
        }
    }

    /// Round `value` half away from zero to this precision.
    ///
    /// ```
    /// use factory_data::Precision;
    ///
    /// assert_eq!(Precision::Tenths.round(21.46), 21.5);
    /// assert_eq!(Precision::Hundredths.round(1.234), 1.23);
    /// ```
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        let factor = self.factor();
        (value * factor).round() / factor
    }
}

/// Inclusive range of continuous values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl FloatRange {
    /// Construct a range from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Construct a range spanning `below` under and `above` over `base`.
    #[must_use]
    pub const fn around(base: f64, below: f64, above: f64) -> Self {
        Self::new(base - below, base + above)
    }

    /// Widen both bounds symmetrically.
    #[must_use]
    pub const fn widened(self, by: f64) -> Self {
        Self::new(self.min - by, self.max + by)
    }

    /// Scale both bounds by a whole-number percentage.
    ///
    /// ```
    /// use factory_data::FloatRange;
    ///
    /// let scaled = FloatRange::new(45_000.0, 85_000.0).scaled(85);
    /// assert_eq!(scaled, FloatRange::new(38_250.0, 72_250.0));
    /// ```
    #[expect(clippy::cast_lossless, reason = "`f64::from` is not usable in const fn")]
    #[must_use]
    pub const fn scaled(self, percent: u32) -> Self {
        let factor = percent as f64;
        Self::new(self.min * factor / 100.0, self.max * factor / 100.0)
    }

    /// Whether `value` lies within this range once both bounds are rounded to
    /// `precision`.
    #[must_use]
    pub fn contains_rounded(self, value: f64, precision: Precision) -> bool {
        value >= precision.round(self.min) && value <= precision.round(self.max)
    }

    /// Draw a uniformly distributed value and round it to `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when the bounds are inverted
    /// or not finite.
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        precision: Precision,
        field: &'static str,
    ) -> Result<f64, GenerationError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return Err(GenerationError::InvalidRange { field });
        }
        Ok(precision.round(rng.random_range(self.min..=self.max)))
    }
}

/// Inclusive range of whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

impl IntRange {
    /// Construct a range from its bounds.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Widen both bounds symmetrically, saturating at zero.
    #[must_use]
    pub const fn widened(self, by: u32) -> Self {
        Self::new(self.min.saturating_sub(by), self.max.saturating_add(by))
    }

    /// Scale both bounds by a whole-number percentage, truncating towards zero.
    ///
    /// ```
    /// use factory_data::IntRange;
    ///
    /// assert_eq!(IntRange::new(150, 500).scaled(120), IntRange::new(180, 600));
    /// ```
    #[must_use]
    pub const fn scaled(self, percent: u32) -> Self {
        Self::new(percent_of(self.min, percent), percent_of(self.max, percent))
    }

    /// Whether `value` lies within this range.
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw a uniformly distributed value.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when the bounds are inverted.
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        field: &'static str,
    ) -> Result<u32, GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidRange { field });
        }
        Ok(rng.random_range(self.min..=self.max))
    }
}

/// Take `percent` percent of `value`, truncating towards zero.
#[expect(
    clippy::integer_division,
    reason = "stock counts and rates are whole units and truncate"
)]
#[must_use]
pub const fn percent_of(value: u32, percent: u32) -> u32 {
    value.saturating_mul(percent) / 100
}

/// Pick one option uniformly.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyChoice`] when `options` is empty.
pub fn pick<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    options: &[T],
    field: &'static str,
) -> Result<T, GenerationError> {
    options
        .choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyChoice { field })
}
