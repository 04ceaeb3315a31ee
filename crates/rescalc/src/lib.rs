#[macro_use]
pub(crate) mod internal;

pub type Error = internal::common::error::RcError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod resources {
    pub use crate::internal::resources::{
        DimensionId, DimensionRegistry, MEMORY_DIMENSION, MEMORY_DIMENSION_NAME, ResourceAmount,
        ResourceVector, VCORES_DIMENSION, VCORES_DIMENSION_NAME,
    };
}

pub mod calculator {
    pub use crate::internal::calculator::{
        DefaultResourceCalculator, DominantResourceCalculator, ResourceCalculator,
    };
    pub use crate::internal::calculator::share::{Share, ShareSum, UNBOUNDED_RATIO};
}

pub mod config {
    pub use crate::internal::config::{AllocationLimits, AllocationLimitsConfig, CalculatorKind};
}

pub mod ops {
    pub use crate::internal::ops::*;
}
