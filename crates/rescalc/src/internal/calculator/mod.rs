pub mod default;
pub mod dominant;
pub mod normalize;
pub mod share;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::num::NonZeroU64;

use crate::internal::resources::ResourceVector;

pub use default::DefaultResourceCalculator;
pub use dominant::DominantResourceCalculator;

/// Strategy that defines ordering and fit semantics over resource vectors.
///
/// Implementations hold no state; one instance can be shared by any number
/// of threads. All vectors passed to a single call must have the same
/// number of dimensions, otherwise the call panics.
pub trait ResourceCalculator: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Orders `lhs` and `rhs` relative to the `cluster` capacity.
    fn compare(
        &self,
        cluster: &ResourceVector,
        lhs: &ResourceVector,
        rhs: &ResourceVector,
    ) -> Ordering;

    /// Checks whether `smaller` can be placed into `bigger`.
    fn fits_in(
        &self,
        cluster: &ResourceVector,
        smaller: &ResourceVector,
        bigger: &ResourceVector,
    ) -> bool;

    /// How many times `b` is contained in `a`.
    fn ratio(&self, a: &ResourceVector, b: &ResourceVector) -> f64;

    /// Ratio of two vectors measured in the units used by `compare`.
    fn divide(
        &self,
        cluster: &ResourceVector,
        numerator: &ResourceVector,
        denominator: &ResourceVector,
    ) -> f64;

    /// Number of `required` containers that can be carved out of `available`.
    /// Dimensions that are not required do not limit the result.
    fn compute_available_containers(
        &self,
        available: &ResourceVector,
        required: &ResourceVector,
    ) -> u64;

    /// True when `r` would produce an unbounded result as a divisor.
    fn is_invalid_divisor(&self, r: &ResourceVector) -> bool;

    fn normalize(
        &self,
        ask: &ResourceVector,
        minimum: &ResourceVector,
        maximum: &ResourceVector,
        increment: &ResourceVector,
    ) -> ResourceVector {
        normalize::normalize(ask, minimum, maximum, increment)
    }

    fn round_up(&self, r: &ResourceVector, step: &ResourceVector) -> ResourceVector {
        r.zip_map(step, |amount, step| amount.round_up(step))
    }

    fn round_down(&self, r: &ResourceVector, step: &ResourceVector) -> ResourceVector {
        r.zip_map(step, |amount, step| amount.round_down(step))
    }

    fn multiply_and_normalize_up(
        &self,
        r: &ResourceVector,
        by: f64,
        step: &ResourceVector,
    ) -> ResourceVector {
        r.zip_map(step, |amount, step| amount.mul_f64_ceil(by).round_up(step))
    }

    fn multiply_and_normalize_down(
        &self,
        r: &ResourceVector,
        by: f64,
        step: &ResourceVector,
    ) -> ResourceVector {
        r.zip_map(step, |amount, step| amount.mul_f64_floor(by).round_down(step))
    }

    fn divide_and_ceil(&self, r: &ResourceVector, denominator: NonZeroU64) -> ResourceVector {
        r.map(|amount| amount.div_ceil(denominator.get()))
    }

    fn divide_and_floor(&self, r: &ResourceVector, denominator: NonZeroU64) -> ResourceVector {
        r.map(|amount| amount.div_floor(denominator.get()))
    }
}
