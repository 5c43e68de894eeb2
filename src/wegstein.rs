//! Wegstein's method with a single acceleration factor held for the whole run.
//!
//! Each step blends the previous estimate with the raw fixed-point update,
//!
//! ```text
//! x <- q·x + (1 - q)·g(x)
//! ```
//!
//! `0 < q < 1` damps the update, `q < 0` extrapolates past it and `q = 0`
//! reduces to plain fixed-point iteration. When no factor is supplied it is
//! estimated from the first two fixed-point steps with the heuristic
//! `a = (x3 - x2) / (x2 - x1)`, `q = a / (a - 1)`.

use serde::{Deserialize, Serialize};

use crate::driver::{iterate, map_finite, validate_start};
use crate::error::{Degeneracy, DivisionSite, Result, SolveError};
use crate::function::RealFn;
use crate::options::SolverOptions;
use crate::outcome::IterationOutcome;
use crate::trace::{NoTrace, TraceSink};

/// Acceleration factor derived from the seed steps `x1 = x0`, `x2 = g(x1)`, `x3 = g(x2)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelerationEstimate {
    /// `a = (x3 - x2) / (x2 - x1)`, a secant estimate of `g'`.
    pub slope_ratio: f64,
    /// `q = a / (a - 1)`.
    pub factor: f64,
}

/// Estimates the constant acceleration factor from two fixed-point steps.
pub fn estimate_acceleration_factor<G>(
    x0: f64,
    g: &G,
) -> std::result::Result<AccelerationEstimate, Degeneracy>
where
    G: RealFn + ?Sized,
{
    let x1 = x0;
    let x2 = map_finite(g, x1)?;
    let x3 = map_finite(g, x2)?;

    let step = x2 - x1;
    let slope_ratio = checked_div(x3 - x2, step, DivisionSite::SeedStep)?;
    let factor = checked_div(slope_ratio, slope_ratio - 1.0, DivisionSite::SlopeRatio)?;

    log::debug!("wegstein: a = {slope_ratio}, q = {factor}");
    Ok(AccelerationEstimate {
        slope_ratio,
        factor,
    })
}

fn checked_div(
    numerator: f64,
    denominator: f64,
    site: DivisionSite,
) -> std::result::Result<f64, Degeneracy> {
    let quotient = numerator / denominator;
    if denominator == 0.0 || !quotient.is_finite() {
        return Err(Degeneracy::DegenerateDenominator { site, denominator });
    }
    Ok(quotient)
}

/// Solves `f(x) = 0` with Wegstein's method using a constant factor `q`.
///
/// With `q = None` the factor is estimated by [`estimate_acceleration_factor`]
/// on the first step, once the seed is known not to satisfy the tolerance; a
/// degenerate estimate ends the run with
/// [`Status::Degenerate`](crate::Status::Degenerate) and zero iterations.
pub fn wegstein_constant_q<F, G>(
    x0: f64,
    f: &F,
    g: &G,
    q: Option<f64>,
    options: &SolverOptions,
) -> Result<IterationOutcome>
where
    F: RealFn + ?Sized,
    G: RealFn + ?Sized,
{
    wegstein_constant_q_traced(x0, f, g, q, options, &mut NoTrace)
}

/// Same as [`wegstein_constant_q`], recording the estimate each completed step
/// started from.
pub fn wegstein_constant_q_traced<F, G, S>(
    x0: f64,
    f: &F,
    g: &G,
    q: Option<f64>,
    options: &SolverOptions,
    trace: &mut S,
) -> Result<IterationOutcome>
where
    F: RealFn + ?Sized,
    G: RealFn + ?Sized,
    S: TraceSink + ?Sized,
{
    validate_start(x0)?;
    options.validate()?;
    if let Some(q) = q {
        if !q.is_finite() {
            return Err(SolveError::invalid("q", q));
        }
        if q == 1.0 {
            log::warn!("wegstein: q = 1 leaves every estimate unchanged");
        }
    }
    log::debug!(
        "wegstein: x0 = {x0}, q = {q:?}, tolerance = {}, max_iterations = {}",
        options.tolerance,
        options.max_iterations
    );

    // estimated on the first step, so a seed already within tolerance needs none
    let mut factor = q;
    let outcome = iterate(x0, f, options, trace, |x| {
        let q = match factor {
            Some(q) => q,
            None => {
                let q = estimate_acceleration_factor(x, g)?.factor;
                factor = Some(q);
                q
            }
        };
        let image = map_finite(g, x)?;
        let next = q * x + (1.0 - q) * image;
        if !next.is_finite() {
            return Err(Degeneracy::NonFiniteIterate { x });
        }
        Ok(next)
    });
    Ok(outcome.with_acceleration_factor(factor).logged("wegstein"))
}
