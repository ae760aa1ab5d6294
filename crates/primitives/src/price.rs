//! Fixed-point price values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of implied decimal places in a reported value.
pub const PRICE_DECIMALS: u32 = 6;

/// Divisor turning a stored value into its display value.
pub const PRICE_SCALE: u64 = 10u64.pow(PRICE_DECIMALS);

/// A price scaled by [`PRICE_SCALE`], the representation reporters sign.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FixedPoint(u64);

impl FixedPoint {
    pub const ZERO: Self = Self(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Scales a whole-unit display value, `None` on overflow.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(PRICE_SCALE).map(Self)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whole-unit part of the value, truncating the fraction.
    pub const fn units(self) -> u64 {
        self.0 / PRICE_SCALE
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }
}

impl From<u64> for FixedPoint {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<FixedPoint> for u64 {
    fn from(value: FixedPoint) -> Self {
        value.0
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / PRICE_SCALE,
            self.0 % PRICE_SCALE,
            width = PRICE_DECIMALS as usize
        )
    }
}
