//! Stable exit codes for blackhole CLI commands.

/// Run converged to the target, or a scan completed.
pub const OK: i32 = 0;
/// Invalid start value or any other error.
pub const INVALID: i32 = 1;
/// `blackhole run` detected a cycle: the sequence never reaches the target.
pub const CYCLE: i32 = 2;
