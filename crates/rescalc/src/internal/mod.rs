#[macro_use]
pub(crate) mod common;

pub(crate) mod calculator;
pub(crate) mod config;
pub(crate) mod ops;
pub(crate) mod resources;

#[cfg(test)]
pub(crate) mod tests;
