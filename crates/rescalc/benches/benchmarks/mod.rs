pub mod calculator;
pub mod ops;
