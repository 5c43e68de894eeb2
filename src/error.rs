use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for `wegstein` operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// Raised before iterating when a tolerance, budget, seed or acceleration factor is unusable.
    #[error("invalid {parameter}: {value}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The value that was supplied.
        value: f64,
    },

    /// The iteration budget ran out while the residual still exceeded the tolerance.
    #[error("iteration did not converge after {iterations} iterations; last estimate {estimate}")]
    DidNotConverge {
        /// Number of iterations performed before termination.
        iterations: usize,
        /// Estimate held when the budget ran out.
        estimate: f64,
    },

    /// The run stopped on a numerically degenerate step.
    #[error("iteration degenerated: {0}")]
    Degenerate(#[from] Degeneracy),
}

impl SolveError {
    /// Helper to format an [`InvalidParameter`](SolveError::InvalidParameter) error.
    pub fn invalid(parameter: &'static str, value: f64) -> Self {
        Self::InvalidParameter { parameter, value }
    }
}

/// Division sites whose denominator is checked before dividing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivisionSite {
    /// `x2 - x1` in the slope ratio of the acceleration-factor estimate.
    SeedStep,
    /// `a - 1` in `q = a / (a - 1)`.
    SlopeRatio,
    /// `x[i-1] + g[i] - x[i] - g[i-1]` in the adaptive recurrence.
    Secant,
}

/// Reason a run terminated with [`Status::Degenerate`](crate::Status::Degenerate).
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum Degeneracy {
    /// A division had a zero denominator or would have produced a non-finite quotient.
    #[error("denominator at {site:?} is degenerate ({denominator})")]
    DegenerateDenominator {
        /// Which division failed.
        site: DivisionSite,
        /// The offending denominator.
        denominator: f64,
    },

    /// The iteration map or the update rule produced a non-finite value.
    #[error("iteration produced a non-finite value from x = {x}")]
    NonFiniteIterate {
        /// Argument from which the non-finite value was produced.
        x: f64,
    },

    /// The residual function was non-finite at the current estimate.
    #[error("residual is non-finite at x = {x}")]
    NonFiniteResidual {
        /// Estimate at which the residual was evaluated.
        x: f64,
    },
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, SolveError>;
