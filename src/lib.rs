//! Fixed-point iteration and Wegstein acceleration for scalar equations `f(x) = 0`.
//!
//! The caller rewrites `f(x) = 0` as an equivalent fixed-point relation
//! `x = g(x)` and supplies both functions. Three solvers are provided:
//!
//! - plain fixed-point iteration `x <- g(x)` (`fixed_point` module),
//! - Wegstein's method with a constant acceleration factor `q`, supplied or
//!   estimated from the first two steps (`wegstein` module), and
//! - Wegstein's method with the factor re-derived every step through a secant
//!   extrapolation (`wegstein_adaptive` module).
//!
//! All of them stop once `|f(x)| <= tolerance` or the iteration budget runs out,
//! and report how the run ended through [`IterationOutcome::status`]. Divisions
//! that would produce NaN or infinity end the run as
//! [`Status::Degenerate`] instead of iterating on a corrupted estimate.
//!
//! # Quick start
//!
//! ```
//! use wegstein::fixtures::{golden_residual, one_plus_reciprocal, GOLDEN_RATIO};
//! use wegstein::{wegstein_constant_q, SolverOptions, Status};
//!
//! let options = SolverOptions::default();
//! let outcome = wegstein_constant_q(2.0, &golden_residual, &one_plus_reciprocal, None, &options)
//!     .expect("valid parameters");
//!
//! assert_eq!(outcome.status, Status::Converged);
//! assert!((outcome.estimate - GOLDEN_RATIO).abs() < 1e-6);
//! ```
//!
//! Iteration records can be collected by passing any [`TraceSink`] to the
//! `_traced` variants; a `Vec<IterationRecord>` is the simplest one.

pub mod convergence;
mod driver;
pub mod error;
pub mod fixed_point;
pub mod fixtures;
pub mod function;
pub mod options;
pub mod outcome;
pub mod solving;
pub mod trace;
pub mod wegstein;
pub mod wegstein_adaptive;

pub use error::{Degeneracy, DivisionSite, Result, SolveError};
pub use fixed_point::{fixed_point_iterate, fixed_point_iterate_traced};
pub use function::RealFn;
pub use options::SolverOptions;
pub use outcome::{IterationOutcome, Status};
pub use solving::{solve_batch, Method};
pub use trace::{FnTrace, IterationRecord, LogTrace, NoTrace, TraceSink};
pub use wegstein::{
    estimate_acceleration_factor, wegstein_constant_q, wegstein_constant_q_traced,
    AccelerationEstimate,
};
pub use wegstein_adaptive::{wegstein_adaptive_q, wegstein_adaptive_q_traced};
