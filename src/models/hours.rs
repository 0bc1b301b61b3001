//! Fixed-point hour quantities.
//!
//! Every hour amount handled by the engine is an integer count of
//! quarter-hours. Real-valued inputs are converted once, at the boundary,
//! so repeated subtraction inside the allocator never drifts.
//!
//! # Granularity
//! - Per-day allocation unit: 0.25 h (one quarter).
//! - Entitlement rounding unit: 0.5 h (two quarters).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Quarter-hours per hour.
pub const QUARTERS_PER_HOUR: u32 = 4;

/// A non-negative amount of time, stored as whole quarter-hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(u32);

impl Hours {
    /// Zero hours.
    pub const ZERO: Hours = Hours(0);
    /// The smallest allocatable amount (0.25 h).
    pub const QUARTER: Hours = Hours(1);
    /// The entitlement rounding unit and floor (0.5 h).
    pub const HALF: Hours = Hours(2);

    /// Creates an amount from a quarter-hour count.
    #[inline]
    pub const fn from_quarters(quarters: u32) -> Self {
        Self(quarters)
    }

    /// Creates an amount from whole hours.
    #[inline]
    pub const fn from_whole(hours: u32) -> Self {
        Self(hours * QUARTERS_PER_HOUR)
    }

    /// Rounds real hours to the nearest 0.5 h, half-up.
    ///
    /// Negative and non-finite inputs map to zero.
    pub fn round_to_half(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::ZERO;
        }
        let halves = (hours * 2.0).round() as u32;
        Self(halves * 2)
    }

    /// Rounds real hours to the nearest 0.25 h, half-up.
    pub fn round_to_quarter(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::ZERO;
        }
        Self((hours * QUARTERS_PER_HOUR as f64).round() as u32)
    }

    /// Quarter-hour count.
    #[inline]
    pub const fn quarters(self) -> u32 {
        self.0
    }

    /// Value in (fractional) hours.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / QUARTERS_PER_HOUR as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether at least one allocatable quarter is present.
    #[inline]
    pub const fn is_allocatable(self) -> bool {
        self.0 >= Self::QUARTER.0
    }

    /// Subtraction clamped at zero.
    #[inline]
    pub const fn saturating_sub(self, rhs: Hours) -> Hours {
        Hours(self.0.saturating_sub(rhs.0))
    }

    /// Repeats this amount `n` times.
    #[inline]
    pub const fn times(self, n: u32) -> Hours {
        Hours(self.0 * n)
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Hours) {
        self.0 += rhs.0;
    }
}

impl Sub for Hours {
    type Output = Hours;

    /// Panics on underflow in debug builds; callers use `saturating_sub`
    /// where the operands are not ordered.
    fn sub(self, rhs: Hours) -> Hours {
        Hours(self.0 - rhs.0)
    }
}

impl SubAssign for Hours {
    fn sub_assign(&mut self, rhs: Hours) {
        self.0 -= rhs.0;
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Hours>>(iter: I) -> Hours {
        iter.fold(Hours::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Hours> for Hours {
    fn sum<I: Iterator<Item = &'a Hours>>(iter: I) -> Hours {
        iter.copied().sum()
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hours = f64::deserialize(deserializer)?;
        if !hours.is_finite() || hours < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "hours must be a non-negative number, got {hours}"
            )));
        }
        Ok(Hours::round_to_quarter(hours))
    }
}
