use proptest::prelude::*;
use sgd111::{OnlineLearner, UpdateResult, core::Params};

fn train_all(lr: f64, samples: &[(f64, f64)]) -> Vec<UpdateResult> {
    let mut learner = OnlineLearner::new(lr);
    samples
        .iter()
        .map(|&(x, y_true)| learner.train_sample(x, y_true))
        .collect()
}

#[test]
fn single_step_matches_hand_derivation() {
    let mut learner = OnlineLearner::new(0.05);
    assert_eq!(*learner.params(), Params::new(0.1, 0.0, 0.1, 0.0));
    let result = learner.step(Some(0.5), Some(1.5)).unwrap();
    let tol = 1e-6;
    assert!((result.y_pred - 0.005).abs() < tol);
    assert!((result.loss - 1.1175).abs() < 1e-4);
    assert!((result.w2 - 0.103738).abs() < tol);
    assert!((result.b2 - 0.07475).abs() < tol);
    assert!((result.w1 - 0.103738).abs() < tol);
    assert!((result.b1 - 0.007475).abs() < tol);
}

#[test]
fn loss_decreases_on_a_fixed_pair() {
    let mut learner = OnlineLearner::new(0.01);
    let mut previous = f64::INFINITY;
    for _ in 0..2000 {
        let loss = learner.train_sample(0.5, 1.5).loss;
        assert!(loss < previous, "loss went from {previous} to {loss}");
        previous = loss;
    }
    assert!(previous < 1e-6, "loss did not converge: {previous}");
}

#[test]
fn learns_the_demo_target() {
    let target = |x: f64| 1.5 * f64::max(0.0, 2.0 * x + 0.5);
    let xs = [0.5, -0.1, 0.8, 0.2];
    let mut learner = OnlineLearner::new(0.05);
    for _ in 0..5000 {
        for x in xs {
            learner.train_sample(x, target(x));
        }
    }
    for x in xs {
        let y_pred = learner.predict(x);
        assert!((y_pred - target(x)).abs() < 0.05, "x = {x}, y_pred = {y_pred}");
    }
}

#[test]
fn each_update_starts_from_the_previous_one() {
    let samples = [(0.5, 1.5), (-0.1, 0.45), (0.8, 3.15), (0.2, 1.35)];
    let results = train_all(0.05, &samples);
    let mut params = Params::INITIAL;
    for (&(x, y_true), result) in samples.iter().zip(&results) {
        let mut learner = OnlineLearner::with_params(0.05, params);
        assert_eq!(learner.train_sample(x, y_true), *result);
        params = result.params();
    }
}

proptest! {
    #[test]
    fn runs_are_reproducible(
        lr in 0.001f64..0.5,
        samples in prop::collection::vec((-2.0f64..2.0, -2.0f64..2.0), 0..32),
    ) {
        let a = train_all(lr, &samples);
        let b = train_all(lr, &samples);
        prop_assert_eq!(a.len(), b.len());
        for (result_a, result_b) in a.iter().zip(&b) {
            for ((_, value_a), (_, value_b)) in result_a.fields().iter().zip(result_b.fields()) {
                prop_assert_eq!(value_a.to_bits(), value_b.to_bits());
            }
        }
    }

    #[test]
    fn inactive_hidden_unit_keeps_w1_and_b1(
        w1 in -1.0f64..1.0,
        b1 in -1.0f64..0.0,
        w2 in -1.0f64..1.0,
        b2 in -1.0f64..1.0,
        x in -2.0f64..2.0,
        y_true in -5.0f64..5.0,
    ) {
        prop_assume!(w1 * x + b1 <= 0.0);
        let mut learner = OnlineLearner::with_params(0.05, Params::new(w1, b1, w2, b2));
        let result = learner.train_sample(x, y_true);
        prop_assert_eq!(result.w1, w1);
        prop_assert_eq!(result.b1, b1);
        prop_assert_eq!(result.w2, w2);
        prop_assert_eq!(result.y_pred, b2);
    }

    #[test]
    fn missing_input_emits_nothing(
        x in prop::option::of(-2.0f64..2.0),
        y_true in prop::option::of(-2.0f64..2.0),
    ) {
        prop_assume!(x.is_none() || y_true.is_none());
        let mut learner = OnlineLearner::default();
        prop_assert_eq!(learner.step(x, y_true), None);
        prop_assert_eq!(*learner.params(), Params::INITIAL);
        prop_assert_eq!(learner.n_updates(), 0);
    }
}
