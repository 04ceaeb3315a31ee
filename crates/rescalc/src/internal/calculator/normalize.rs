use crate::internal::resources::ResourceAmount;
use crate::internal::resources::vector::{ResourceVector, assert_same_dimensions};

/// Normalizes a single dimension of a request.
///
/// A zero increment falls back to `minimum` as the rounding step. Requests
/// at or below the minimum become exactly the minimum, anything else is
/// rounded up to the step and capped at `maximum`.
#[inline]
pub fn normalize_amount(
    ask: ResourceAmount,
    minimum: ResourceAmount,
    maximum: ResourceAmount,
    increment: ResourceAmount,
) -> ResourceAmount {
    let step = if increment.is_zero() {
        minimum
    } else {
        increment
    };
    let value = if ask <= minimum {
        minimum
    } else {
        ask.round_up(step)
    };
    value.min(maximum)
}

pub fn normalize(
    ask: &ResourceVector,
    minimum: &ResourceVector,
    maximum: &ResourceVector,
    increment: &ResourceVector,
) -> ResourceVector {
    assert_same_dimensions(ask, minimum);
    assert_same_dimensions(ask, maximum);
    assert_same_dimensions(ask, increment);
    ResourceVector::from_amounts(
        ask.iter()
            .zip(minimum.iter())
            .zip(maximum.iter())
            .zip(increment.iter())
            .map(|(((a, min), max), inc)| normalize_amount(a, min, max, inc)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::tests::utils::{rv, rv3};

    fn norm(ask: u64, min: u64, max: u64, inc: u64) -> u64 {
        normalize_amount(
            ResourceAmount::new(ask),
            ResourceAmount::new(min),
            ResourceAmount::new(max),
            ResourceAmount::new(inc),
        )
        .value()
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(norm(1111, 1024, 8192, 1024), 2048);
        assert_eq!(norm(2048, 1024, 8192, 1024), 2048);
        assert_eq!(norm(512, 2048, 8192, 1024), 2048);
        assert_eq!(norm(9216, 2048, 8192, 1024), 8192);
        assert_eq!(norm(8000, 2048, 8192, 1024), 8192);
        assert_eq!(norm(1111, 2048, 8192, 0), 2048);
        assert_eq!(norm(3000, 2048, 8192, 0), 4096);
        assert_eq!(norm(0, 0, 8, 0), 0);
        assert_eq!(norm(5, 0, 8, 0), 5);
    }

    #[test]
    fn test_normalize_unaligned_minimum_is_kept() {
        assert_eq!(norm(100, 1500, 8192, 1024), 1500);
        assert_eq!(norm(1500, 1500, 8192, 1024), 1500);
        assert_eq!(norm(1501, 1500, 8192, 1024), 2048);
    }

    #[test]
    fn test_normalize_near_overflow() {
        assert_eq!(norm(u64::MAX - 1, 1, u64::MAX, 1024), u64::MAX);
        assert_eq!(norm(u64::MAX - 1, 1, 4096, 1024), 4096);
    }

    #[test]
    fn test_normalize_dimensions_are_independent() {
        assert_eq!(
            normalize(&rv(1111, 2), &rv(1024, 1), &rv(8192, 8), &rv(1024, 4)),
            rv(2048, 4)
        );
        assert_eq!(
            normalize(
                &rv3(1111, 2, 3),
                &rv3(1024, 1, 0),
                &rv3(8192, 8, 2),
                &rv3(1024, 4, 1)
            ),
            rv3(2048, 4, 2)
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let min = rv3(1500, 1, 0);
        let max = rv3(8192, 7, 5);
        let inc = rv3(1024, 2, 0);
        for ask in [rv3(0, 0, 0), rv3(1499, 3, 9), rv3(1600, 6, 4), rv3(9000, 9, 1)] {
            let once = normalize(&ask, &min, &max, &inc);
            assert_eq!(normalize(&once, &min, &max, &inc), once);
            assert!(min.fits_in(&once));
            assert!(once.fits_in(&max));
        }
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn test_normalize_mismatched_dimensions() {
        normalize(&rv3(1, 1, 1), &rv(1, 1), &rv(2, 2), &rv(1, 1));
    }
}
