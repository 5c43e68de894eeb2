//! Real-valued functions of one real variable.

/// A pure map `ℝ → ℝ`, used for both the residual `f` and the iteration map `g`.
///
/// Implementations must not carry iteration-local state: the solvers assume that
/// evaluating the same `x` twice yields the same value.
pub trait RealFn {
    fn eval(&self, x: f64) -> f64;
}

impl<F> RealFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
