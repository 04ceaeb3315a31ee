use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

use crate::internal::common::error::RcError;
use crate::internal::resources::{
    DimensionId, MEMORY_DIMENSION, ResourceAmount, VCORES_DIMENSION,
};

/// Number of dimensions stored inline before the vector spills to the heap.
pub const INLINE_DIMENSIONS: usize = 4;

pub type ResourceAmounts = SmallVec<[ResourceAmount; INLINE_DIMENSIONS]>;

/// Immutable vector of resource quantities, one slot per dimension.
///
/// Positions are given by a [`DimensionRegistry`](super::DimensionRegistry);
/// memory and vcores are always the first two. Operations that combine two
/// vectors require both of them to have the same number of dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceVector {
    amounts: ResourceAmounts,
}

impl ResourceVector {
    pub fn new(memory: u64, vcores: u64) -> Self {
        Self::from_values(&[memory, vcores])
    }

    pub fn from_values(values: &[u64]) -> Self {
        Self::from_amounts(values.iter().copied().map(ResourceAmount::new))
    }

    pub fn from_amounts(amounts: impl IntoIterator<Item = ResourceAmount>) -> Self {
        ResourceVector {
            amounts: amounts.into_iter().collect(),
        }
    }

    pub fn zeros(dimensions: usize) -> Self {
        Self::filled(dimensions, ResourceAmount::ZERO)
    }

    pub fn filled(dimensions: usize, amount: ResourceAmount) -> Self {
        ResourceVector {
            amounts: SmallVec::from_elem(amount, dimensions),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    #[inline]
    pub fn get(&self, id: DimensionId) -> Option<ResourceAmount> {
        self.amounts.get(usize::from(id)).copied()
    }

    /// Primary dimension; zero for a vector without dimensions.
    #[inline]
    pub fn memory(&self) -> ResourceAmount {
        self.get(MEMORY_DIMENSION).unwrap_or_default()
    }

    #[inline]
    pub fn vcores(&self) -> ResourceAmount {
        self.get(VCORES_DIMENSION).unwrap_or_default()
    }

    #[inline]
    pub fn amounts(&self) -> &[ResourceAmount] {
        &self.amounts
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = ResourceAmount> + '_ {
        self.amounts.iter().copied()
    }

    pub fn iter_with_ids(&self) -> impl Iterator<Item = (DimensionId, ResourceAmount)> + '_ {
        self.amounts
            .iter()
            .enumerate()
            .map(|(idx, amount)| (DimensionId::new(idx as u32), *amount))
    }

    pub fn is_zero(&self) -> bool {
        self.amounts.iter().all(|a| a.is_zero())
    }

    /// Returns a copy of the vector with one dimension replaced.
    ///
    /// # Panics
    /// When `id` is outside of the vector.
    pub fn with_amount(&self, id: DimensionId, amount: ResourceAmount) -> Self {
        let mut amounts = self.amounts.clone();
        amounts[usize::from(id)] = amount;
        ResourceVector { amounts }
    }

    pub fn check_same_dimensions(&self, other: &ResourceVector) -> crate::Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(RcError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            })
        }
    }

    /// Elementwise containment: every dimension of `self` is at most
    /// the corresponding dimension of `bigger`.
    pub fn fits_in(&self, bigger: &ResourceVector) -> bool {
        assert_same_dimensions(self, bigger);
        self.amounts
            .iter()
            .zip(bigger.amounts.iter())
            .all(|(small, big)| small <= big)
    }

    pub(crate) fn map(&self, f: impl Fn(ResourceAmount) -> ResourceAmount) -> Self {
        ResourceVector {
            amounts: self.amounts.iter().map(|a| f(*a)).collect(),
        }
    }

    pub(crate) fn zip_map(
        &self,
        other: &ResourceVector,
        f: impl Fn(ResourceAmount, ResourceAmount) -> ResourceAmount,
    ) -> Self {
        assert_same_dimensions(self, other);
        ResourceVector {
            amounts: self
                .amounts
                .iter()
                .zip(other.amounts.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
}

/// Mixing vectors of different shapes is a caller bug that would silently
/// corrupt scheduling decisions, so it is never tolerated.
#[inline]
#[track_caller]
pub(crate) fn assert_same_dimensions(lhs: &ResourceVector, rhs: &ResourceVector) {
    if let Err(e) = lhs.check_same_dimensions(rhs) {
        panic!("{e}: {lhs} vs {rhs}");
    }
}

impl Index<DimensionId> for ResourceVector {
    type Output = ResourceAmount;

    #[inline]
    fn index(&self, index: DimensionId) -> &Self::Output {
        &self.amounts[usize::from(index)]
    }
}

impl fmt::Display for ResourceVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<")?;
        for (idx, amount) in self.amounts.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{amount}")?;
        }
        write!(f, ">")
    }
}
