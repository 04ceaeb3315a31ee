pub mod amount;
pub mod registry;
pub mod vector;

use crate::define_id_type;

pub use amount::ResourceAmount;
pub use registry::{
    DimensionRegistry, MEMORY_DIMENSION, MEMORY_DIMENSION_NAME, VCORES_DIMENSION,
    VCORES_DIMENSION_NAME,
};
pub use vector::ResourceVector;

// Position of a dimension within a resource vector.
define_id_type!(DimensionId, u32);
