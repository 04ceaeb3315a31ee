use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::internal::resources::ResourceAmount;
use crate::internal::resources::vector::INLINE_DIMENSIONS;

/// Ratio reported for a non-zero amount measured against a zero capacity.
pub const UNBOUNDED_RATIO: f64 = f64::MAX;

/// Fraction of a capacity taken by an amount.
///
/// A zero capacity is handled explicitly: nothing out of nothing is a zero
/// share, anything else out of nothing is `Unbounded` and orders above every
/// finite share.
#[derive(Debug, Clone, Copy)]
pub enum Share {
    Finite(f64),
    Unbounded,
}

impl Share {
    pub const ZERO: Share = Share::Finite(0.0);

    #[inline]
    pub fn of(amount: ResourceAmount, capacity: ResourceAmount) -> Share {
        if capacity.is_zero() {
            if amount.is_zero() {
                Share::ZERO
            } else {
                Share::Unbounded
            }
        } else {
            Share::Finite(amount.as_f64() / capacity.as_f64())
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Share::Unbounded)
    }

    #[inline]
    pub fn as_ratio(&self) -> f64 {
        match self {
            Share::Finite(value) => *value,
            Share::Unbounded => UNBOUNDED_RATIO,
        }
    }

    /// Divides two shares with the same zero/unbounded rules as [`Share::of`].
    pub fn ratio_to(&self, denominator: &Share) -> f64 {
        match (self, denominator) {
            (Share::Unbounded, Share::Unbounded) => 1.0,
            (Share::Unbounded, Share::Finite(_)) => UNBOUNDED_RATIO,
            (Share::Finite(_), Share::Unbounded) => 0.0,
            (Share::Finite(n), Share::Finite(d)) => {
                if *d == 0.0 {
                    if *n == 0.0 { 0.0 } else { UNBOUNDED_RATIO }
                } else {
                    n / d
                }
            }
        }
    }
}

impl Ord for Share {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Share::Finite(a), Share::Finite(b)) => a.total_cmp(b),
            (Share::Finite(_), Share::Unbounded) => Ordering::Less,
            (Share::Unbounded, Share::Finite(_)) => Ordering::Greater,
            (Share::Unbounded, Share::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Share {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Share {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Share {}

/// Sum of several shares. Unbounded shares are counted separately,
/// so two unbounded shares weigh more than one. Finite shares are added in
/// ascending order, so the sum does not depend on the order of dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareSum {
    unbounded: u32,
    finite: f64,
}

impl FromIterator<Share> for ShareSum {
    fn from_iter<I: IntoIterator<Item = Share>>(iter: I) -> Self {
        let mut unbounded = 0;
        let mut finite: SmallVec<[f64; INLINE_DIMENSIONS]> = SmallVec::new();
        for share in iter {
            match share {
                Share::Finite(value) => finite.push(value),
                Share::Unbounded => unbounded += 1,
            }
        }
        finite.sort_unstable_by(f64::total_cmp);
        ShareSum {
            unbounded,
            finite: finite.iter().sum(),
        }
    }
}

impl Ord for ShareSum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unbounded
            .cmp(&other.unbounded)
            .then_with(|| self.finite.total_cmp(&other.finite))
    }
}

impl PartialOrd for ShareSum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ShareSum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ShareSum {}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(amount: u64, capacity: u64) -> Share {
        Share::of(ResourceAmount::new(amount), ResourceAmount::new(capacity))
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share(0, 0), Share::ZERO);
        assert!(share(1, 0).is_unbounded());
        assert_eq!(share(512, 1024), Share::Finite(0.5));
        assert_eq!(share(2048, 1024).as_ratio(), 2.0);
        assert_eq!(share(1, 0).as_ratio(), UNBOUNDED_RATIO);
    }

    #[test]
    fn test_share_order() {
        assert!(share(1, 0) > share(u64::MAX, 1));
        assert!(share(1, 2) < share(2, 3));
        assert_eq!(share(5, 0), share(1, 0));
        assert_eq!(share(1, 2).max(share(1, 0)), Share::Unbounded);
    }

    #[test]
    fn test_share_ratio_to() {
        assert_eq!(share(1, 2).ratio_to(&share(1, 4)), 2.0);
        assert_eq!(share(0, 2).ratio_to(&share(0, 4)), 0.0);
        assert_eq!(share(1, 2).ratio_to(&share(0, 4)), UNBOUNDED_RATIO);
        assert_eq!(share(1, 0).ratio_to(&share(3, 0)), 1.0);
        assert_eq!(share(1, 0).ratio_to(&share(1, 4)), UNBOUNDED_RATIO);
        assert_eq!(share(1, 4).ratio_to(&share(1, 0)), 0.0);
    }

    #[test]
    fn test_share_sum_order() {
        let one_unbounded: ShareSum = [Share::Unbounded, Share::Finite(0.9)].into_iter().collect();
        let two_unbounded: ShareSum = [Share::Unbounded, Share::Unbounded].into_iter().collect();
        let finite: ShareSum = [Share::Finite(1.0), Share::Finite(1.0)].into_iter().collect();

        assert!(two_unbounded > one_unbounded);
        assert!(one_unbounded > finite);
        assert_eq!(ShareSum::default(), ShareSum::default());
    }

    #[test]
    fn test_share_sum_ignores_order() {
        let ascending: ShareSum = [0.1, 0.2, 0.3].into_iter().map(Share::Finite).collect();
        let descending: ShareSum = [0.3, 0.2, 0.1].into_iter().map(Share::Finite).collect();
        assert_eq!(ascending, descending);

        let shares = [share(1, 3), share(1, 0), share(2, 7), share(5, 11)];
        let forward: ShareSum = shares.iter().copied().collect();
        let backward: ShareSum = shares.iter().rev().copied().collect();
        assert_eq!(forward, backward);
    }
}
