#[macro_use]
pub(crate) mod macros;

pub(crate) mod data_structures;
pub(crate) mod error;

pub use data_structures::Map;
