//! Loop machinery shared by the solvers: seed validation, guarded evaluation of
//! `g`, and the check/record/update driver.

use crate::convergence::{check, Check};
use crate::error::{Degeneracy, Result, SolveError};
use crate::function::RealFn;
use crate::options::SolverOptions;
use crate::outcome::{IterationOutcome, Status};
use crate::trace::{IterationRecord, TraceSink};

pub(crate) fn validate_start(x0: f64) -> Result<()> {
    if !x0.is_finite() {
        return Err(SolveError::invalid("x0", x0));
    }
    Ok(())
}

/// Evaluates `g(x)`, refusing a non-finite image.
pub(crate) fn map_finite<G: RealFn + ?Sized>(
    g: &G,
    x: f64,
) -> std::result::Result<f64, Degeneracy> {
    let image = g.eval(x);
    if !image.is_finite() {
        return Err(Degeneracy::NonFiniteIterate { x });
    }
    Ok(image)
}

/// Check the residual, stop on the budget, update, then record the estimate the
/// step started from.
///
/// A record is emitted only for a completed step, so the trace always holds
/// exactly `iterations` records. An estimate produced by the last permitted
/// update that meets tolerance is reported as converged.
pub(crate) fn iterate<F, S, U>(
    x0: f64,
    f: &F,
    options: &SolverOptions,
    trace: &mut S,
    mut update: U,
) -> IterationOutcome
where
    F: RealFn + ?Sized,
    S: TraceSink + ?Sized,
    U: FnMut(f64) -> std::result::Result<f64, Degeneracy>,
{
    let mut x = x0;
    let mut iteration = 0usize;

    loop {
        match check(f, x, options.tolerance) {
            Check::Converged => return IterationOutcome::new(x, iteration, Status::Converged),
            Check::Degenerate(reason) => {
                return IterationOutcome::new(x, iteration, Status::Degenerate(reason))
            }
            Check::Continue => {}
        }
        if iteration >= options.max_iterations {
            return IterationOutcome::new(x, iteration, Status::NotConverged);
        }

        let next = match update(x) {
            Ok(next) => next,
            Err(reason) => {
                return IterationOutcome::new(x, iteration, Status::Degenerate(reason))
            }
        };
        trace.record(IterationRecord::new(iteration, x));
        x = next;
        iteration += 1;
    }
}
