//! Plain fixed-point iteration `x <- g(x)`.

use crate::driver::{iterate, map_finite, validate_start};
use crate::error::Result;
use crate::function::RealFn;
use crate::options::SolverOptions;
use crate::outcome::IterationOutcome;
use crate::trace::{NoTrace, TraceSink};

/// Solves `f(x) = 0` by iterating `x <- g(x)` from `x0`.
pub fn fixed_point_iterate<F, G>(
    x0: f64,
    f: &F,
    g: &G,
    options: &SolverOptions,
) -> Result<IterationOutcome>
where
    F: RealFn + ?Sized,
    G: RealFn + ?Sized,
{
    fixed_point_iterate_traced(x0, f, g, options, &mut NoTrace)
}

/// Same as [`fixed_point_iterate`], recording the estimate each completed step
/// started from, so the trace holds `iterations` records.
pub fn fixed_point_iterate_traced<F, G, S>(
    x0: f64,
    f: &F,
    g: &G,
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
    log::debug!(
        "fixed-point: x0 = {x0}, tolerance = {}, max_iterations = {}",
        options.tolerance,
        options.max_iterations
    );

    let outcome = iterate(x0, f, options, trace, |x| map_finite(g, x));
    Ok(outcome.logged("fixed-point"))
}
