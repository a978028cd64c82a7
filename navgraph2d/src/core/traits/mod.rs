//! Numeric traits shared by every geometric routine in the crate.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
