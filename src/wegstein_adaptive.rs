//! Wegstein's method with the acceleration factor re-derived at every step.
//!
//! The recurrence extrapolates through the two most recent estimate/image pairs,
//!
//! ```text
//! x[i+1] = (x[i-1]·g[i] - x[i]·g[i-1]) / (x[i-1] + g[i] - x[i] - g[i-1])
//! ```
//!
//! which is a secant step on `g(x) - x = 0`. Only those two pairs are kept.

use crate::convergence::{check, Check};
use crate::driver::{map_finite, validate_start};
use crate::error::{Degeneracy, DivisionSite, Result};
use crate::function::RealFn;
use crate::options::SolverOptions;
use crate::outcome::{IterationOutcome, Status};
use crate::trace::{IterationRecord, NoTrace, TraceSink};

/// An estimate and its image under `g`.
#[derive(Clone, Copy, Debug)]
struct Pair {
    x: f64,
    gx: f64,
}

/// Solves `f(x) = 0` with Wegstein's method, updating the factor every step.
pub fn wegstein_adaptive_q<F, G>(
    x0: f64,
    f: &F,
    g: &G,
    options: &SolverOptions,
) -> Result<IterationOutcome>
where
    F: RealFn + ?Sized,
    G: RealFn + ?Sized,
{
    wegstein_adaptive_q_traced(x0, f, g, options, &mut NoTrace)
}

/// Same as [`wegstein_adaptive_q`], recording the two seed estimates and every
/// extrapolated estimate as it is produced.
pub fn wegstein_adaptive_q_traced<F, G, S>(
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
        "wegstein-adaptive: x0 = {x0}, tolerance = {}, max_iterations = {}",
        options.tolerance,
        options.max_iterations
    );

    Ok(extrapolate(x0, f, g, options, trace).logged("wegstein-adaptive"))
}

fn extrapolate<F, G, S>(
    x0: f64,
    f: &F,
    g: &G,
    options: &SolverOptions,
    trace: &mut S,
) -> IterationOutcome
where
    F: RealFn + ?Sized,
    G: RealFn + ?Sized,
    S: TraceSink + ?Sized,
{
    match check(f, x0, options.tolerance) {
        Check::Converged => return IterationOutcome::new(x0, 0, Status::Converged),
        Check::Degenerate(reason) => return degenerate(x0, 0, reason),
        Check::Continue => {}
    }

    // seed: x[1] = g(x[0])
    trace.record(IterationRecord::new(0, x0));
    let g0 = match map_finite(g, x0) {
        Ok(image) => image,
        Err(reason) => return degenerate(x0, 0, reason),
    };
    let mut iteration = 1usize;
    trace.record(IterationRecord::new(iteration, g0));
    let g1 = match map_finite(g, g0) {
        Ok(image) => image,
        Err(reason) => return degenerate(g0, iteration, reason),
    };

    let mut prev = Pair { x: x0, gx: g0 };
    let mut cur = Pair { x: g0, gx: g1 };

    loop {
        match check(f, cur.x, options.tolerance) {
            Check::Converged => return IterationOutcome::new(cur.x, iteration, Status::Converged),
            Check::Degenerate(reason) => return degenerate(cur.x, iteration, reason),
            Check::Continue => {}
        }
        if iteration >= options.max_iterations {
            return IterationOutcome::new(cur.x, iteration, Status::NotConverged);
        }

        let denominator = prev.x + cur.gx - cur.x - prev.gx;
        let next = (prev.x * cur.gx - cur.x * prev.gx) / denominator;
        if denominator == 0.0 || !next.is_finite() {
            let reason = Degeneracy::DegenerateDenominator {
                site: DivisionSite::Secant,
                denominator,
            };
            return degenerate(cur.x, iteration, reason);
        }

        iteration += 1;
        trace.record(IterationRecord::new(iteration, next));
        let image = match map_finite(g, next) {
            Ok(image) => image,
            Err(reason) => return degenerate(next, iteration, reason),
        };

        prev = cur;
        cur = Pair { x: next, gx: image };
    }
}

fn degenerate(x: f64, iteration: usize, reason: Degeneracy) -> IterationOutcome {
    IterationOutcome::new(x, iteration, Status::Degenerate(reason))
}
