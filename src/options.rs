//! Configuration structures shared by every solver.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};

/// Stopping rule for an iterative solve: a residual tolerance and an iteration budget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Iteration stops once `|f(x)| <= tolerance`.
    pub tolerance: f64,
    /// Maximum number of iterations allowed before reporting non-convergence.
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl SolverOptions {
    /// Creates options from an explicit tolerance and budget.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Override the residual tolerance while preserving other defaults.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the iteration budget while preserving other defaults.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Rejects a non-positive or non-finite tolerance and an empty budget.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(SolveError::invalid("tolerance", self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(SolveError::invalid("max_iterations", 0.0));
        }
        Ok(())
    }
}
