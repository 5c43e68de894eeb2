//! Method selection and batch solving.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fixed_point::fixed_point_iterate_traced;
use crate::function::RealFn;
use crate::options::SolverOptions;
use crate::outcome::IterationOutcome;
use crate::trace::{NoTrace, TraceSink};
use crate::wegstein::wegstein_constant_q_traced;
use crate::wegstein_adaptive::wegstein_adaptive_q_traced;

/// Iteration scheme used to solve `f(x) = 0` through `x = g(x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    /// Plain fixed-point iteration.
    FixedPoint,
    /// Wegstein's method with a constant factor; `None` estimates it from the seed.
    WegsteinConstant {
        #[serde(default)]
        q: Option<f64>,
    },
    /// Wegstein's method with the factor updated every step.
    #[default]
    WegsteinAdaptive,
}

impl Method {
    /// Short name used in log lines and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Method::FixedPoint => "fixed-point",
            Method::WegsteinConstant { .. } => "wegstein",
            Method::WegsteinAdaptive => "wegstein-adaptive",
        }
    }

    /// Runs the selected solver from `x0` without tracing.
    pub fn solve<F, G>(
        &self,
        x0: f64,
        f: &F,
        g: &G,
        options: &SolverOptions,
    ) -> Result<IterationOutcome>
    where
        F: RealFn + ?Sized,
        G: RealFn + ?Sized,
    {
        self.solve_traced(x0, f, g, options, &mut NoTrace)
    }

    /// Runs the selected solver from `x0`, sending iteration records to `trace`.
    pub fn solve_traced<F, G, S>(
        &self,
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
        match *self {
            Method::FixedPoint => fixed_point_iterate_traced(x0, f, g, options, trace),
            Method::WegsteinConstant { q } => wegstein_constant_q_traced(x0, f, g, q, options, trace),
            Method::WegsteinAdaptive => wegstein_adaptive_q_traced(x0, f, g, options, trace),
        }
    }
}

/// Solves from every starting point in parallel; results keep the order of `starts`.
///
/// Each start is an independent run, so `f` and `g` only need to be shareable
/// across threads.
pub fn solve_batch<F, G>(
    method: &Method,
    starts: &[f64],
    f: &F,
    g: &G,
    options: &SolverOptions,
) -> Vec<Result<IterationOutcome>>
where
    F: RealFn + Sync + ?Sized,
    G: RealFn + Sync + ?Sized,
{
    log::debug!("{}: solving {} starting points", method.name(), starts.len());
    starts
        .par_iter()
        .map(|&x0| method.solve(x0, f, g, options))
        .collect()
}
