//! Numerical utilities: number formatting, and with the `numerical` feature, finite differences
//! and parallel sampling of expressions.

pub mod fmt;
#[cfg(feature = "numerical")]
pub mod sample;

#[cfg(feature = "numerical")]
pub use sample::{finite_difference, sample};
