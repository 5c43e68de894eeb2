//! Result of a single solver run.

use serde::{Deserialize, Serialize};

use crate::error::{Degeneracy, Result, SolveError};

/// Terminal state of a solver run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Status {
    /// The residual fell within tolerance before the budget ran out.
    Converged,
    /// The iteration budget was exhausted first.
    NotConverged,
    /// A division or evaluation went non-finite; the reason says which.
    Degenerate(Degeneracy),
}

/// Diagnostics returned by every solver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationOutcome {
    /// Last estimate held when the run terminated.
    pub estimate: f64,
    /// Number of completed iterations.
    pub iterations: usize,
    /// How the run terminated.
    pub status: Status,
    /// Acceleration factor used by the constant-q Wegstein solver, if any.
    pub acceleration_factor: Option<f64>,
}

impl IterationOutcome {
    pub(crate) fn new(estimate: f64, iterations: usize, status: Status) -> Self {
        Self {
            estimate,
            iterations,
            status,
            acceleration_factor: None,
        }
    }

    pub(crate) fn with_acceleration_factor(mut self, q: Option<f64>) -> Self {
        self.acceleration_factor = q;
        self
    }

    /// Logs the terminal state of a run and hands the outcome back.
    pub(crate) fn logged(self, method: &str) -> Self {
        match self.status {
            Status::Degenerate(reason) => log::warn!(
                "{method}: degenerate after {} iterations at x = {}: {reason}",
                self.iterations,
                self.estimate
            ),
            status => log::debug!(
                "{method}: {status:?} after {} iterations, x = {}",
                self.iterations,
                self.estimate
            ),
        }
        self
    }

    /// Whether the residual tolerance was met.
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// The degeneracy reason, if the run stopped on one.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self.status {
            Status::Degenerate(reason) => Some(reason),
            _ => None,
        }
    }

    /// Converts the outcome into the converged estimate or an error.
    pub fn into_result(self) -> Result<f64> {
        match self.status {
            Status::Converged => Ok(self.estimate),
            Status::NotConverged => Err(SolveError::DidNotConverge {
                iterations: self.iterations,
                estimate: self.estimate,
            }),
            Status::Degenerate(reason) => Err(reason.into()),
        }
    }
}
