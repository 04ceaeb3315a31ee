use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::internal::calculator::ResourceCalculator;
use crate::internal::calculator::share::{Share, ShareSum};
use crate::internal::resources::ResourceVector;
use crate::internal::resources::vector::{INLINE_DIMENSIONS, assert_same_dimensions};

/// Dominant resource fairness: a vector is as large as its biggest share
/// of the cluster capacity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DominantResourceCalculator;

impl DominantResourceCalculator {
    /// Returns the dominant (maximal) share of `r` in `cluster` together
    /// with the sum of all its shares.
    pub fn shares(cluster: &ResourceVector, r: &ResourceVector) -> (Share, ShareSum) {
        assert_same_dimensions(cluster, r);
        let shares: SmallVec<[Share; INLINE_DIMENSIONS]> = r
            .iter()
            .zip(cluster.iter())
            .map(|(amount, capacity)| Share::of(amount, capacity))
            .collect();
        let dominant = shares.iter().copied().max().unwrap_or(Share::ZERO);
        (dominant, shares.into_iter().collect())
    }

    #[inline]
    pub fn dominant_share(cluster: &ResourceVector, r: &ResourceVector) -> Share {
        Self::shares(cluster, r).0
    }
}

impl ResourceCalculator for DominantResourceCalculator {
    fn name(&self) -> &'static str {
        "dominant"
    }

    /// Dominant shares decide first; equal dominant shares are resolved by
    /// the sum of all shares. Vectors equal in both are equal.
    fn compare(
        &self,
        cluster: &ResourceVector,
        lhs: &ResourceVector,
        rhs: &ResourceVector,
    ) -> Ordering {
        assert_same_dimensions(lhs, rhs);
        let (lhs_dominant, lhs_total) = Self::shares(cluster, lhs);
        let (rhs_dominant, rhs_total) = Self::shares(cluster, rhs);
        lhs_dominant
            .cmp(&rhs_dominant)
            .then_with(|| lhs_total.cmp(&rhs_total))
    }

    fn fits_in(
        &self,
        _cluster: &ResourceVector,
        smaller: &ResourceVector,
        bigger: &ResourceVector,
    ) -> bool {
        smaller.fits_in(bigger)
    }

    fn ratio(&self, a: &ResourceVector, b: &ResourceVector) -> f64 {
        assert_same_dimensions(a, b);
        a.iter()
            .zip(b.iter())
            .map(|(a, b)| Share::of(a, b))
            .max()
            .unwrap_or(Share::ZERO)
            .as_ratio()
    }

    fn divide(
        &self,
        cluster: &ResourceVector,
        numerator: &ResourceVector,
        denominator: &ResourceVector,
    ) -> f64 {
        let numerator = Self::dominant_share(cluster, numerator);
        let denominator = Self::dominant_share(cluster, denominator);
        numerator.ratio_to(&denominator)
    }

    fn compute_available_containers(
        &self,
        available: &ResourceVector,
        required: &ResourceVector,
    ) -> u64 {
        assert_same_dimensions(available, required);
        available
            .iter()
            .zip(required.iter())
            .filter(|(_, required)| !required.is_zero())
            .map(|(available, required)| available.value() / required.value())
            .min()
            .unwrap_or(u64::MAX)
    }

    fn is_invalid_divisor(&self, r: &ResourceVector) -> bool {
        r.iter().any(|amount| amount.is_zero())
    }
}
