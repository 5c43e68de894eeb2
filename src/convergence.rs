//! Residual-based convergence test shared by all solvers.

use crate::error::Degeneracy;
use crate::function::RealFn;

/// Classification of an estimate against the residual tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Residual {
    /// `|f(x)| <= eps`; iteration stops.
    Within,
    /// `|f(x)| > eps`; iteration continues.
    Outside,
    /// `f(x)` is NaN or infinite.
    NonFinite,
}

/// Returns true while `|f(x)| > eps`.
///
/// Provided for callers driving their own loops. A NaN residual compares false
/// and therefore reads as "stop", so the solvers classify residuals with
/// [`assess`] instead.
pub fn should_continue<F: RealFn + ?Sized>(f: &F, x: f64, eps: f64) -> bool {
    f.eval(x).abs() > eps
}

/// Evaluates `f` once at `x` and classifies the result.
pub fn assess<F: RealFn + ?Sized>(f: &F, x: f64, eps: f64) -> Residual {
    let value = f.eval(x);
    if !value.is_finite() {
        return Residual::NonFinite;
    }
    if value.abs() > eps {
        Residual::Outside
    } else {
        Residual::Within
    }
}

/// Outcome of the loop-head check performed before each iteration.
pub(crate) enum Check {
    Converged,
    Continue,
    Degenerate(Degeneracy),
}

pub(crate) fn check<F: RealFn + ?Sized>(f: &F, x: f64, eps: f64) -> Check {
    match assess(f, x, eps) {
        Residual::Within => Check::Converged,
        Residual::Outside => Check::Continue,
        Residual::NonFinite => Check::Degenerate(Degeneracy::NonFiniteResidual { x }),
    }
}
