//! Core module has common/shared math and numeric traits.
pub mod math;
pub mod traits;
