use derive_more::{Add, AddAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// Non-negative quantity of a single resource dimension
/// (e.g. megabytes of memory or a number of virtual cores).
#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Default,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    AddAssign,
    SubAssign,
    Sub,
    Add,
    Sum,
)]
#[serde(transparent)]
pub struct ResourceAmount(u64);

impl ResourceAmount {
    pub const ZERO: ResourceAmount = ResourceAmount(0);
    pub const MAX: ResourceAmount = ResourceAmount(u64::MAX);

    #[inline]
    pub const fn new(value: u64) -> Self {
        ResourceAmount(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    #[inline]
    pub fn checked_sub(self, other: ResourceAmount) -> Option<ResourceAmount> {
        self.0.checked_sub(other.0).map(ResourceAmount)
    }

    #[inline]
    pub fn saturating_sub(self, other: ResourceAmount) -> ResourceAmount {
        ResourceAmount(self.0.saturating_sub(other.0))
    }

    #[inline]
    pub fn saturating_add(self, other: ResourceAmount) -> ResourceAmount {
        ResourceAmount(self.0.saturating_add(other.0))
    }

    #[inline]
    pub fn div_floor(self, divisor: u64) -> ResourceAmount {
        ResourceAmount(self.0 / divisor)
    }

    #[inline]
    pub fn div_ceil(self, divisor: u64) -> ResourceAmount {
        ResourceAmount(self.0.div_ceil(divisor))
    }

    /// Smallest multiple of `step` that is not smaller than `self`.
    /// A zero step leaves the amount untouched; the result saturates at `MAX`.
    pub fn round_up(self, step: ResourceAmount) -> ResourceAmount {
        if step.is_zero() {
            return self;
        }
        self.0
            .div_ceil(step.0)
            .checked_mul(step.0)
            .map(ResourceAmount)
            .unwrap_or(ResourceAmount::MAX)
    }

    /// Largest multiple of `step` that is not greater than `self`.
    /// A zero step leaves the amount untouched.
    pub fn round_down(self, step: ResourceAmount) -> ResourceAmount {
        if step.is_zero() {
            return self;
        }
        ResourceAmount(self.0 - self.0 % step.0)
    }

    /// Scales the amount, truncating the fractional part.
    /// Negative or NaN factors yield zero, the result saturates at `MAX`.
    #[inline]
    pub fn mul_f64_floor(self, by: f64) -> ResourceAmount {
        ResourceAmount((self.0 as f64 * by).floor() as u64)
    }

    #[inline]
    pub fn mul_f64_ceil(self, by: f64) -> ResourceAmount {
        ResourceAmount((self.0 as f64 * by).ceil() as u64)
    }
}

impl From<u64> for ResourceAmount {
    #[inline]
    fn from(value: u64) -> Self {
        ResourceAmount(value)
    }
}

impl From<ResourceAmount> for u64 {
    #[inline]
    fn from(amount: ResourceAmount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for ResourceAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ra(value: u64) -> ResourceAmount {
        ResourceAmount::new(value)
    }

    #[test]
    pub fn test_amount_add_sub() {
        assert_eq!(ra(10) + ra(32), ra(42));
        assert_eq!(ra(10) - ra(3), ra(7));
        assert_eq!(ra(10) + ResourceAmount::ZERO, ra(10));
        assert_eq!([ra(1), ra(2), ra(3)].into_iter().sum::<ResourceAmount>(), ra(6));
        assert_eq!(ra(3).checked_sub(ra(4)), None);
        assert_eq!(ra(3).saturating_sub(ra(4)), ResourceAmount::ZERO);
        assert_eq!(ResourceAmount::MAX.saturating_add(ra(1)), ResourceAmount::MAX);
    }

    #[test]
    pub fn test_amount_round_up() {
        assert_eq!(ra(1111).round_up(ra(1024)), ra(2048));
        assert_eq!(ra(1024).round_up(ra(1024)), ra(1024));
        assert_eq!(ra(0).round_up(ra(1024)), ra(0));
        assert_eq!(ra(7).round_up(ResourceAmount::ZERO), ra(7));
        assert_eq!(ResourceAmount::MAX.round_up(ra(10)), ResourceAmount::MAX);
    }

    #[test]
    pub fn test_amount_round_down() {
        assert_eq!(ra(1111).round_down(ra(1024)), ra(1024));
        assert_eq!(ra(1023).round_down(ra(1024)), ra(0));
        assert_eq!(ra(2048).round_down(ra(1024)), ra(2048));
        assert_eq!(ra(7).round_down(ResourceAmount::ZERO), ra(7));
    }

    #[test]
    pub fn test_amount_div() {
        assert_eq!(ra(10).div_floor(3), ra(3));
        assert_eq!(ra(10).div_ceil(3), ra(4));
        assert_eq!(ra(9).div_ceil(3), ra(3));
        assert_eq!(ra(0).div_ceil(3), ra(0));
    }

    #[test]
    pub fn test_amount_mul() {
        assert_eq!(ra(10).mul_f64_floor(1.55), ra(15));
        assert_eq!(ra(10).mul_f64_ceil(1.55), ra(16));
        assert_eq!(ra(10).mul_f64_floor(-1.0), ra(0));
        assert_eq!(ra(10).mul_f64_ceil(f64::NAN), ra(0));
        assert_eq!(ra(u64::MAX).mul_f64_floor(4.0), ResourceAmount::MAX);
    }

    #[test]
    pub fn test_amount_display() {
        assert_eq!(ra(0).to_string(), "0");
        assert_eq!(ra(8192).to_string(), "8192");
    }
}
