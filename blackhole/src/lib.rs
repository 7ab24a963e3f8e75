//! Digit "black hole" puzzle: repeated digit classification collapses
//! positive integers to 123.
//!
//! Each step counts a number's even digits, odd digits, and total digits,
//! then concatenates the three counts (even-odd-total order) into the next
//! number. Iterating this transform reaches the fixed point 123, or stops
//! when a value repeats. The crate enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (digit classification, the
//!   convergence driver). No I/O, fully testable in isolation.
//! - **[`report`]**: Presentation-ready views of single runs and range
//!   scans, consumed by the `blackhole` binary.

pub mod core;
pub mod exit_codes;
pub mod logging;
pub mod report;
