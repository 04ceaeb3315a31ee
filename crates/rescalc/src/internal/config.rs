use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::internal::calculator::{
    DefaultResourceCalculator, DominantResourceCalculator, ResourceCalculator,
};
use crate::internal::common::error::RcError;
use crate::internal::resources::vector::assert_same_dimensions;
use crate::internal::resources::{DimensionId, ResourceVector};

/// Scheduler-wide choice of the resource calculator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    #[default]
    Default,
    Dominant,
}

impl CalculatorKind {
    pub fn create(&self) -> Box<dyn ResourceCalculator> {
        log::debug!("Creating {self} resource calculator");
        match self {
            CalculatorKind::Default => Box::new(DefaultResourceCalculator),
            CalculatorKind::Dominant => Box::new(DominantResourceCalculator),
        }
    }
}

impl FromStr for CalculatorKind {
    type Err = RcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "defaultresourcecalculator" => Ok(CalculatorKind::Default),
            "dominant" | "drf" | "dominantresourcecalculator" => Ok(CalculatorKind::Dominant),
            _ => Err(RcError::UnknownCalculator(s.to_string())),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorKind::Default => write!(f, "default"),
            CalculatorKind::Dominant => write!(f, "dominant"),
        }
    }
}

/// Unvalidated form of [`AllocationLimits`] as it appears in configuration.
/// A missing increment means that the minimum is used as the rounding step.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocationLimitsConfig {
    minimum: ResourceVector,
    maximum: ResourceVector,
    #[serde(default)]
    increment: Option<ResourceVector>,
}

/// Bounds and granularity used to normalize container requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AllocationLimitsConfig")]
pub struct AllocationLimits {
    minimum: ResourceVector,
    maximum: ResourceVector,
    increment: ResourceVector,
}

impl AllocationLimits {
    pub fn new(
        minimum: ResourceVector,
        maximum: ResourceVector,
        increment: ResourceVector,
    ) -> crate::Result<Self> {
        minimum.check_same_dimensions(&maximum)?;
        minimum.check_same_dimensions(&increment)?;
        if let Some((id, (min, max))) = minimum
            .iter()
            .zip(maximum.iter())
            .enumerate()
            .find(|(_, (min, max))| min > max)
        {
            return Err(RcError::InvalidLimits(format!(
                "minimum {min} is greater than maximum {max} in dimension {id}"
            )));
        }
        for (id, (min, inc)) in minimum.iter().zip(increment.iter()).enumerate() {
            if !inc.is_zero() && min.round_up(inc) != min {
                log::warn!(
                    "Minimum allocation {min} in dimension {} is not a multiple of increment {inc}",
                    DimensionId::new(id as u32)
                );
            }
        }
        Ok(AllocationLimits {
            minimum,
            maximum,
            increment,
        })
    }

    /// Limits where the minimum is also the rounding step.
    pub fn without_increment(
        minimum: ResourceVector,
        maximum: ResourceVector,
    ) -> crate::Result<Self> {
        let increment = ResourceVector::zeros(minimum.len());
        Self::new(minimum, maximum, increment)
    }

    #[inline]
    pub fn minimum(&self) -> &ResourceVector {
        &self.minimum
    }

    #[inline]
    pub fn maximum(&self) -> &ResourceVector {
        &self.maximum
    }

    #[inline]
    pub fn increment(&self) -> &ResourceVector {
        &self.increment
    }

    pub fn normalize(
        &self,
        calculator: &dyn ResourceCalculator,
        ask: &ResourceVector,
    ) -> ResourceVector {
        assert_same_dimensions(ask, &self.minimum);
        calculator.normalize(ask, &self.minimum, &self.maximum, &self.increment)
    }
}

impl TryFrom<AllocationLimitsConfig> for AllocationLimits {
    type Error = RcError;

    fn try_from(config: AllocationLimitsConfig) -> Result<Self, Self::Error> {
        match config.increment {
            Some(increment) => Self::new(config.minimum, config.maximum, increment),
            None => Self::without_increment(config.minimum, config.maximum),
        }
    }
}
