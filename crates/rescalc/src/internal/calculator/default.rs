use std::cmp::Ordering;

use crate::internal::calculator::ResourceCalculator;
use crate::internal::calculator::share::Share;
use crate::internal::resources::ResourceVector;
use crate::internal::resources::vector::assert_same_dimensions;

/// Orders and fits vectors by memory only.
/// Rounding and normalization still cover every dimension.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultResourceCalculator;

impl ResourceCalculator for DefaultResourceCalculator {
    fn name(&self) -> &'static str {
        "default"
    }

    fn compare(
        &self,
        _cluster: &ResourceVector,
        lhs: &ResourceVector,
        rhs: &ResourceVector,
    ) -> Ordering {
        assert_same_dimensions(lhs, rhs);
        lhs.memory().cmp(&rhs.memory())
    }

    fn fits_in(
        &self,
        _cluster: &ResourceVector,
        smaller: &ResourceVector,
        bigger: &ResourceVector,
    ) -> bool {
        assert_same_dimensions(smaller, bigger);
        smaller.memory() <= bigger.memory()
    }

    fn ratio(&self, a: &ResourceVector, b: &ResourceVector) -> f64 {
        assert_same_dimensions(a, b);
        Share::of(a.memory(), b.memory()).as_ratio()
    }

    fn divide(
        &self,
        _cluster: &ResourceVector,
        numerator: &ResourceVector,
        denominator: &ResourceVector,
    ) -> f64 {
        self.ratio(numerator, denominator)
    }

    fn compute_available_containers(
        &self,
        available: &ResourceVector,
        required: &ResourceVector,
    ) -> u64 {
        assert_same_dimensions(available, required);
        if required.memory().is_zero() {
            return u64::MAX;
        }
        available.memory().value() / required.memory().value()
    }

    fn is_invalid_divisor(&self, r: &ResourceVector) -> bool {
        r.memory().is_zero()
    }
}
