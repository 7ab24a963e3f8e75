//! Pure transform logic.
//!
//! Nothing in here performs I/O or reads ambient state. Given the same
//! start value, every function returns the same result.

pub mod classifier;
pub mod driver;
