use approx::assert_relative_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wegstein::fixtures::{
    golden_residual, one_plus_reciprocal, sample_maps, sqrt_shifted, square_minus_one,
    GOLDEN_RATIO,
};
use wegstein::{
    fixed_point_iterate, solve_batch, wegstein_adaptive_q, wegstein_constant_q, Degeneracy,
    DivisionSite, IterationRecord, Method, SolveError, SolverOptions, Status,
};

const METHODS: [Method; 3] = [
    Method::FixedPoint,
    Method::WegsteinConstant { q: None },
    Method::WegsteinAdaptive,
];

/// The reference run: x² - x - 1 through g(x) = 1 + 1/x from x0 = 2.
#[test]
fn every_method_reaches_the_golden_ratio() {
    let options = SolverOptions::default();
    let plain = fixed_point_iterate(2.0, &golden_residual, &one_plus_reciprocal, &options).unwrap();
    assert_eq!(plain.status, Status::Converged);
    assert!(plain.iterations < 100);
    assert_relative_eq!(plain.estimate, GOLDEN_RATIO, epsilon = 1e-6);

    let constant =
        wegstein_constant_q(2.0, &golden_residual, &one_plus_reciprocal, None, &options).unwrap();
    let adaptive = wegstein_adaptive_q(2.0, &golden_residual, &one_plus_reciprocal, &options).unwrap();

    for accelerated in [constant, adaptive] {
        assert_eq!(accelerated.status, Status::Converged);
        assert_relative_eq!(accelerated.estimate, GOLDEN_RATIO, epsilon = 1e-6);
        assert!(accelerated.iterations <= plain.iterations);
    }
}

#[test]
fn starting_at_a_fixed_point_returns_immediately() {
    // g(2) = 2 and f(2) = 0 exactly
    let f = |x: f64| x - 2.0;
    let g = |x: f64| 0.5 * x + 1.0;
    let options = SolverOptions::default();

    for method in METHODS {
        let mut trace: Vec<IterationRecord> = Vec::new();
        let outcome = method.solve_traced(2.0, &f, &g, &options, &mut trace).unwrap();
        assert_eq!(outcome.status, Status::Converged, "{}", method.name());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.estimate, 2.0);
        assert!(trace.is_empty());

        let outcome = method
            .solve(GOLDEN_RATIO, &golden_residual, &one_plus_reciprocal, &options)
            .unwrap();
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.status, Status::Converged);
    }
}

#[test]
fn trace_indices_are_contiguous() {
    let options = SolverOptions::default();
    for method in METHODS {
        for g in [one_plus_reciprocal as fn(f64) -> f64, sqrt_shifted] {
            let mut trace: Vec<IterationRecord> = Vec::new();
            method
                .solve_traced(2.0, &golden_residual, &g, &options, &mut trace)
                .unwrap();
            assert!(!trace.is_empty());
            for (expected, record) in trace.iter().enumerate() {
                assert_eq!(record.index, expected, "{}", method.name());
            }
        }
    }
}

#[test]
fn divergent_pair_exhausts_the_budget() {
    let f = |x: f64| x * x - 1.0;
    let options = SolverOptions::default().with_max_iterations(5);

    for method in METHODS {
        let outcome = method.solve(2.0, &f, &square_minus_one, &options).unwrap();
        assert_eq!(outcome.status, Status::NotConverged, "{}", method.name());
        assert_eq!(outcome.iterations, 5);
        assert!(outcome.estimate.is_finite());
    }
}

#[test]
fn constant_map_is_degenerate_for_both_wegstein_variants() {
    let g = |_: f64| 2.0;
    let options = SolverOptions::default();

    let constant = wegstein_constant_q(2.0, &golden_residual, &g, None, &options).unwrap();
    assert!(matches!(
        constant.status,
        Status::Degenerate(Degeneracy::DegenerateDenominator {
            site: DivisionSite::SeedStep,
            ..
        })
    ));

    let adaptive = wegstein_adaptive_q(2.0, &golden_residual, &g, &options).unwrap();
    assert!(matches!(
        adaptive.status,
        Status::Degenerate(Degeneracy::DegenerateDenominator {
            site: DivisionSite::Secant,
            ..
        })
    ));

    for outcome in [constant, adaptive] {
        assert!(outcome.estimate.is_finite());
        assert!(matches!(
            outcome.into_result(),
            Err(SolveError::Degenerate(_))
        ));
    }
}

#[test]
fn invalid_parameters_are_rejected_before_iterating() {
    let zero_tolerance = SolverOptions::default().with_tolerance(0.0);
    let zero_budget = SolverOptions::default().with_max_iterations(0);

    for method in METHODS {
        for options in [zero_tolerance, zero_budget] {
            let mut trace: Vec<IterationRecord> = Vec::new();
            let result = method.solve_traced(
                2.0,
                &golden_residual,
                &one_plus_reciprocal,
                &options,
                &mut trace,
            );
            assert!(
                matches!(result, Err(SolveError::InvalidParameter { .. })),
                "{}",
                method.name()
            );
            assert!(trace.is_empty());
        }
    }
}

#[test]
fn random_starts_converge_in_parallel() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let starts: Vec<f64> = (0..64).map(|_| rng.gen_range(1.0..4.0)).collect();
    let options = SolverOptions::default();

    for method in METHODS {
        let results = solve_batch(
            &method,
            &starts,
            &golden_residual,
            &one_plus_reciprocal,
            &options,
        );
        assert_eq!(results.len(), starts.len());
        for result in results {
            let estimate = result.unwrap().into_result().unwrap();
            assert_relative_eq!(estimate, GOLDEN_RATIO, epsilon = 1e-6);
        }
    }
}

/// Every sample map under every method from x0 = 2.
#[test]
fn sample_maps_end_in_a_terminal_state() {
    let options = SolverOptions::default();
    for (name, g) in sample_maps() {
        for method in METHODS {
            let outcome = method.solve(2.0, &golden_residual, &g, &options).unwrap();
            assert!(outcome.iterations <= options.max_iterations, "{name}");
            assert!(outcome.estimate.is_finite(), "{name}");
            if outcome.is_converged() {
                assert!(golden_residual(outcome.estimate).abs() <= options.tolerance);
            }
        }
    }
}

#[test]
fn run_configuration_loads_from_json() {
    let options: SolverOptions =
        serde_json::from_str(r#"{ "tolerance": 1e-10, "max_iterations": 50 }"#).unwrap();
    let method: Method = serde_json::from_str(r#"{ "method": "wegstein_adaptive" }"#).unwrap();

    let outcome = method
        .solve(2.0, &golden_residual, &one_plus_reciprocal, &options)
        .unwrap();
    assert_eq!(outcome.status, Status::Converged);
    assert!(golden_residual(outcome.estimate).abs() <= 1e-10);
}
