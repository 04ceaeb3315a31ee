//! Calculator-agnostic helpers over resource vectors.
//!
//! Comparison helpers delegate to the calculator passed in by the caller,
//! the elementwise arithmetic does not depend on any calculator.

use std::cmp::Ordering;
use std::num::NonZeroU64;

use crate::internal::calculator::ResourceCalculator;
use crate::internal::common::error::RcError;
use crate::internal::resources::vector::assert_same_dimensions;
use crate::internal::resources::{DimensionId, ResourceAmount, ResourceVector};

/// Empty vector with the given number of dimensions.
pub fn none(dimensions: usize) -> ResourceVector {
    ResourceVector::zeros(dimensions)
}

pub fn is_none(r: &ResourceVector) -> bool {
    r.is_zero()
}

pub fn add(lhs: &ResourceVector, rhs: &ResourceVector) -> ResourceVector {
    lhs.zip_map(rhs, |a, b| a.saturating_add(b))
}

/// Elementwise `lhs - rhs`, failing on the first dimension that would go
/// below zero.
pub fn checked_subtract(
    lhs: &ResourceVector,
    rhs: &ResourceVector,
) -> crate::Result<ResourceVector> {
    lhs.check_same_dimensions(rhs)?;
    lhs.iter_with_ids()
        .zip(rhs.iter())
        .map(|((id, a), b)| {
            a.checked_sub(b)
                .ok_or(RcError::Underflow { dimension: id })
        })
        .collect::<crate::Result<Vec<_>>>()
        .map(ResourceVector::from_amounts)
}

/// Elementwise `lhs - rhs` where every dimension stops at zero.
pub fn subtract_non_negative(lhs: &ResourceVector, rhs: &ResourceVector) -> ResourceVector {
    lhs.zip_map(rhs, |a, b| a.saturating_sub(b))
}

/// Scales every dimension, truncating fractions.
pub fn multiply(r: &ResourceVector, by: f64) -> ResourceVector {
    r.map(|a| a.mul_f64_floor(by))
}

pub fn multiply_and_normalize_up<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    r: &ResourceVector,
    by: f64,
    step: &ResourceVector,
) -> ResourceVector {
    calculator.multiply_and_normalize_up(r, by, step)
}

pub fn multiply_and_round_down<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    r: &ResourceVector,
    by: f64,
    step: &ResourceVector,
) -> ResourceVector {
    calculator.multiply_and_normalize_down(r, by, step)
}

pub fn normalize<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    ask: &ResourceVector,
    minimum: &ResourceVector,
    maximum: &ResourceVector,
    increment: &ResourceVector,
) -> ResourceVector {
    calculator.normalize(ask, minimum, maximum, increment)
}

pub fn round_up<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    r: &ResourceVector,
    step: &ResourceVector,
) -> ResourceVector {
    calculator.round_up(r, step)
}

pub fn round_down<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    r: &ResourceVector,
    step: &ResourceVector,
) -> ResourceVector {
    calculator.round_down(r, step)
}

pub fn ratio<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    a: &ResourceVector,
    b: &ResourceVector,
) -> f64 {
    calculator.ratio(a, b)
}

pub fn divide<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    numerator: &ResourceVector,
    denominator: &ResourceVector,
) -> f64 {
    calculator.divide(cluster, numerator, denominator)
}

pub fn divide_and_ceil<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    r: &ResourceVector,
    denominator: NonZeroU64,
) -> ResourceVector {
    calculator.divide_and_ceil(r, denominator)
}

/// Structural equality, independent of any calculator.
pub fn equals(lhs: &ResourceVector, rhs: &ResourceVector) -> bool {
    assert_same_dimensions(lhs, rhs);
    lhs == rhs
}

#[inline]
pub fn less_than<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &ResourceVector,
    rhs: &ResourceVector,
) -> bool {
    calculator.compare(cluster, lhs, rhs) == Ordering::Less
}

#[inline]
pub fn less_than_or_equal<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &ResourceVector,
    rhs: &ResourceVector,
) -> bool {
    calculator.compare(cluster, lhs, rhs) != Ordering::Greater
}

#[inline]
pub fn greater_than<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &ResourceVector,
    rhs: &ResourceVector,
) -> bool {
    calculator.compare(cluster, lhs, rhs) == Ordering::Greater
}

#[inline]
pub fn greater_than_or_equal<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &ResourceVector,
    rhs: &ResourceVector,
) -> bool {
    calculator.compare(cluster, lhs, rhs) != Ordering::Less
}

/// Smaller of the two operands; `lhs` when they compare as equal.
pub fn min<'a, C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &'a ResourceVector,
    rhs: &'a ResourceVector,
) -> &'a ResourceVector {
    if calculator.compare(cluster, lhs, rhs) != Ordering::Greater {
        lhs
    } else {
        rhs
    }
}

/// Bigger of the two operands; `lhs` when they compare as equal.
pub fn max<'a, C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    lhs: &'a ResourceVector,
    rhs: &'a ResourceVector,
) -> &'a ResourceVector {
    if calculator.compare(cluster, lhs, rhs) != Ordering::Less {
        lhs
    } else {
        rhs
    }
}

pub fn fits_in<C: ResourceCalculator + ?Sized>(
    calculator: &C,
    cluster: &ResourceVector,
    smaller: &ResourceVector,
    bigger: &ResourceVector,
) -> bool {
    calculator.fits_in(cluster, smaller, bigger)
}

/// Elementwise containment, whatever calculator the scheduler uses.
pub fn fits_in_all(smaller: &ResourceVector, bigger: &ResourceVector) -> bool {
    smaller.fits_in(bigger)
}

pub fn componentwise_min(lhs: &ResourceVector, rhs: &ResourceVector) -> ResourceVector {
    lhs.zip_map(rhs, ResourceAmount::min)
}

pub fn componentwise_max(lhs: &ResourceVector, rhs: &ResourceVector) -> ResourceVector {
    lhs.zip_map(rhs, ResourceAmount::max)
}

/// Dimensions in which `smaller` exceeds `bigger`.
pub fn exceeded_dimensions<'a>(
    smaller: &'a ResourceVector,
    bigger: &'a ResourceVector,
) -> impl Iterator<Item = DimensionId> + 'a {
    assert_same_dimensions(smaller, bigger);
    smaller
        .iter_with_ids()
        .zip(bigger.iter())
        .filter(|((_, small), big)| small > big)
        .map(|((id, _), _)| id)
}
