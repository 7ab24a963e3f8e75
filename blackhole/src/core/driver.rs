//! Convergence driver: iterate the classifier until 123 or a repeat.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::classifier::classify;

/// Fixed point of the classification transform.
pub const TARGET: u64 = 123;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The start value violates the `>= 1` precondition.
    #[error("start value must be a positive integer")]
    InvalidInput,
}

/// Terminal state of one driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The sequence reached [`TARGET`].
    Converged,
    /// A value recurred, so the sequence can never reach [`TARGET`].
    CycleDetected,
}

/// Lazy sequence of transform values, beginning with the start value.
///
/// Finite (the visited set bounds it) and non-restartable: once a terminal
/// state is recorded, `next` returns `None` and [`Steps::termination`]
/// reports how the run ended. A repeated value is yielded once more before
/// the run terminates, so the trace shows the recurrence.
#[derive(Debug)]
pub struct Steps {
    current: u64,
    visited: HashSet<u64>,
    termination: Option<Termination>,
}

impl Steps {
    /// Start a run at `start`. Fails for `start == 0`.
    pub fn new(start: u64) -> Result<Self, TransformError> {
        if start == 0 {
            return Err(TransformError::InvalidInput);
        }
        Ok(Self {
            current: start,
            visited: HashSet::new(),
            termination: None,
        })
    }

    /// Terminal state, set by the `next` call that yields the final value.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }
}

impl Iterator for Steps {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.termination.is_some() {
            return None;
        }
        let value = self.current;
        if value == TARGET {
            self.termination = Some(Termination::Converged);
        } else if !self.visited.insert(value) {
            self.termination = Some(Termination::CycleDetected);
        } else {
            self.current = classify(value).encode();
        }
        Some(value)
    }
}

/// Full trace of one run: every value produced plus the terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<u64>,
    pub termination: Termination,
}

/// Drive the transform from `start` to termination and collect the trace.
pub fn run(start: u64) -> Result<Trace, TransformError> {
    let mut steps = Steps::new(start)?;
    let mut values = Vec::new();
    loop {
        if let Some(value) = steps.next() {
            values.push(value);
        }
        // Recorded by the same call that yields the final value.
        if let Some(termination) = steps.termination() {
            return Ok(Trace {
                steps: values,
                termination,
            });
        }
    }
}
