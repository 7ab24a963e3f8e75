//! Presentation-ready views of runs and range scans.

use serde::{Deserialize, Serialize};

use crate::core::driver::{self, Termination, Trace, TransformError};

/// JSON-serializable view of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub start: u64,
    pub steps: Vec<u64>,
    pub termination: Termination,
}

impl RunReport {
    pub fn new(start: u64, trace: Trace) -> Self {
        Self {
            start,
            steps: trace.steps,
            termination: trace.termination,
        }
    }
}

/// Aggregate outcome of running every start value in `1..=max`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub max: u64,
    pub converged: u64,
    pub cycles: u64,
    /// Length of the longest trace seen, in values.
    pub longest_trace: usize,
    /// Start value that produced the longest trace.
    pub slowest_start: u64,
}

/// Run the transform for every start value in `1..=max`.
pub fn scan(max: u64) -> Result<ScanSummary, TransformError> {
    let mut summary = ScanSummary {
        max,
        ..ScanSummary::default()
    };
    for start in 1..=max {
        let trace = driver::run(start)?;
        match trace.termination {
            Termination::Converged => summary.converged += 1,
            Termination::CycleDetected => summary.cycles += 1,
        }
        if trace.steps.len() > summary.longest_trace {
            summary.longest_trace = trace.steps.len();
            summary.slowest_start = start;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_small_range_counts_every_start() {
        let summary = scan(500).expect("scan");
        assert_eq!(summary.max, 500);
        assert_eq!(summary.converged + summary.cycles, 500);
        assert!(summary.longest_trace >= 2);
        assert!((1..=500).contains(&summary.slowest_start));
    }

    #[test]
    fn scan_empty_range_is_all_zeroes() {
        let summary = scan(0).expect("scan");
        assert_eq!(summary, ScanSummary::default());
    }

    #[test]
    fn run_report_keeps_trace_order() {
        let trace = driver::run(1234).expect("run");
        let report = RunReport::new(1234, trace);
        assert_eq!(report.start, 1234);
        assert_eq!(report.steps, vec![1234, 224, 303, 123]);
        assert_eq!(report.termination, Termination::Converged);
    }
}
