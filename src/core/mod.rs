//! Core math and trait foundations shared across the crate.
pub mod math;
pub mod traits;
