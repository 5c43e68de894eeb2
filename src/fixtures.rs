//! Sample problem: the golden-ratio equation `x² - x - 1 = 0` and four ways of
//! rewriting it as `x = g(x)`.
//!
//! | map                     | behaviour near ϕ from `x0 = 2`                |
//! |-------------------------|-----------------------------------------------|
//! | [`one_plus_reciprocal`] | converges, oscillating (`g'(ϕ) ≈ -0.382`)     |
//! | [`reciprocal_shifted`]  | repelled from ϕ (`g'(ϕ) ≈ -2.618`)            |
//! | [`sqrt_shifted`]        | converges monotonically (`g'(ϕ) ≈ 0.309`)     |
//! | [`square_minus_one`]    | repelled from ϕ (`g'(ϕ) ≈ 3.236`)             |

/// `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// `f(x) = x² - x - 1`.
pub fn golden_residual(x: f64) -> f64 {
    x * x - x - 1.0
}

/// `g(x) = 1 + 1/x`.
pub fn one_plus_reciprocal(x: f64) -> f64 {
    1.0 + 1.0 / x
}

/// `g(x) = 1 / (x - 1)`.
pub fn reciprocal_shifted(x: f64) -> f64 {
    1.0 / (x - 1.0)
}

/// `g(x) = √(x + 1)`.
pub fn sqrt_shifted(x: f64) -> f64 {
    (x + 1.0).sqrt()
}

/// `g(x) = x² - 1`.
pub fn square_minus_one(x: f64) -> f64 {
    x * x - 1.0
}

/// Every sample map with a short name, in the order above.
pub fn sample_maps() -> [(&'static str, fn(f64) -> f64); 4] {
    [
        ("1 + 1/x", one_plus_reciprocal),
        ("1/(x - 1)", reciprocal_shifted),
        ("sqrt(x + 1)", sqrt_shifted),
        ("x^2 - 1", square_minus_one),
    ]
}
