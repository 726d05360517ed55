#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Core value types shared across the harness: parameter-strength tiers,
//! duration measurements, and the fixed three-slot result set.

use std::time::Duration;

/// Number of parameter strengths compared per algorithm family.
pub const STRENGTH_COUNT: usize = 3;

/// Relative parameter-strength tier of one benchmark case.
///
/// Every algorithm family is compared at three tiers. A family with a single
/// natural parameter size keeps its measurement in the small slot and fills
/// the remaining tiers with the zero sentinel (display uniformity, not a
/// timing of the missing sizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// Smallest parameter set of the family.
    Small,
    /// Middle parameter set.
    Medium,
    /// Largest parameter set.
    Large,
}

impl Strength {
    /// All tiers in result-slot order.
    pub const ALL: [Strength; STRENGTH_COUNT] =
        [Strength::Small, Strength::Medium, Strength::Large];

    /// Human label used in table headers and chart legends.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Strength::Small => "Small",
            Strength::Medium => "Medium",
            Strength::Large => "Large",
        }
    }

    /// Result-set slot index of this tier.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Strength::Small => 0,
            Strength::Medium => 1,
            Strength::Large => 2,
        }
    }
}

/// A wall-clock measurement in seconds, rounded to 6 decimal places.
///
/// Always non-negative by construction (built from an elapsed [`Duration`]
/// or a non-negative microsecond reading). The value `0.0` is the sentinel
/// for "no measurement"; callers must treat it as absent, never as instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSeconds(f64);

impl DurationSeconds {
    /// The "no measurement" sentinel.
    pub const ZERO: DurationSeconds = DurationSeconds(0.0);

    /// Builds a measurement from an elapsed wall-clock [`Duration`].
    #[must_use]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self(round_to_micros(elapsed.as_secs_f64()))
    }

    /// Builds a measurement from a microsecond reading, as printed by the
    /// external benchmark tools.
    #[must_use]
    pub fn from_micros(micros: f64) -> Self {
        Self(round_to_micros(micros / 1_000_000.0))
    }

    /// The measurement in seconds.
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.0
    }

    /// Whether this is the "no measurement" sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Keeps 6 decimal places, i.e. whole-microsecond resolution in seconds.
fn round_to_micros(seconds: f64) -> f64 {
    (seconds * 1_000_000.0).round() / 1_000_000.0
}

/// The fixed three-slot result of one algorithm family, in strength order.
///
/// All-or-nothing: when extraction recovers anything other than exactly
/// three values, the set collapses to the `[0, 0, 0]` sentinel rather than
/// padding or truncating. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSet([DurationSeconds; STRENGTH_COUNT]);

impl ResultSet {
    /// The `[0, 0, 0]` "measurement unavailable" sentinel.
    pub const SENTINEL: ResultSet = ResultSet([DurationSeconds::ZERO; STRENGTH_COUNT]);

    /// Builds a set from exactly three measurements in strength order.
    #[must_use]
    pub const fn new(values: [DurationSeconds; STRENGTH_COUNT]) -> Self {
        Self(values)
    }

    /// All-or-nothing construction: exactly three collected values make a
    /// set, any other count (fewer or more) yields the sentinel.
    #[must_use]
    pub fn from_collected(values: &[DurationSeconds]) -> Self {
        match values {
            [small, medium, large] => Self([*small, *medium, *large]),
            _ => Self::SENTINEL,
        }
    }

    /// Set for a family with a single natural parameter size.
    #[must_use]
    pub const fn from_single(value: DurationSeconds) -> Self {
        Self([value, DurationSeconds::ZERO, DurationSeconds::ZERO])
    }

    /// Measurement for one strength tier.
    #[must_use]
    pub fn get(&self, strength: Strength) -> DurationSeconds {
        self.0[strength.index()]
    }

    /// Slots in strength order.
    #[must_use]
    pub const fn values(&self) -> &[DurationSeconds; STRENGTH_COUNT] {
        &self.0
    }

    /// Whether this set is the all-zero sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.0.iter().all(DurationSeconds::is_zero)
    }
}
