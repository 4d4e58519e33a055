use std::array;

use crate::{
    LearnerConfig,
    core::{Params, apply_derivs, calculate_derivs, forward},
};

pub const DEFAULT_LR: f64 = 0.05;

/// What the learner emits for every processed pair.
///
/// The parameters are the ones after the update triggered by that pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateResult {
    pub y_pred: f64,
    pub loss: f64,
    pub w1: f64,
    pub b1: f64,
    pub w2: f64,
    pub b2: f64,
}

impl UpdateResult {
    pub const FIELD_NAMES: [&'static str; 6] = ["y_pred", "loss", "w1", "b1", "w2", "b2"];

    pub fn params(&self) -> Params {
        Params::new(self.w1, self.b1, self.w2, self.b2)
    }

    /// The six outputs as `(name, value)`, in the order of [`Self::FIELD_NAMES`].
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        let values = [self.y_pred, self.loss, self.w1, self.b1, self.w2, self.b2];
        array::from_fn(|i| (Self::FIELD_NAMES[i], values[i]))
    }
}

/// A 1-1-1 ReLU network trained by single-sample SGD, one update per `(x, y_true)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineLearner {
    lr: f64,
    params: Params,
    n_updates: u64,
}

impl Default for OnlineLearner {
    fn default() -> Self {
        Self::new(DEFAULT_LR)
    }
}

impl OnlineLearner {
    pub fn new(lr: f64) -> Self {
        Self::with_params(lr, Params::INITIAL)
    }

    pub fn with_params(lr: f64, params: Params) -> Self {
        Self {
            lr,
            params,
            n_updates: 0,
        }
    }

    pub fn from_config(config: &LearnerConfig) -> Self {
        Self::new(config.lr)
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of pairs processed so far.
    pub fn n_updates(&self) -> u64 {
        self.n_updates
    }

    /// Fires only if both inputs are present for this event, otherwise nothing happens.
    pub fn step(&mut self, x: Option<f64>, y_true: Option<f64>) -> Option<UpdateResult> {
        let (x, y_true) = x.zip(y_true)?;
        Some(self.train_sample(x, y_true))
    }

    /// Forward pass, back propagation and one SGD step.
    pub fn train_sample(&mut self, x: f64, y_true: f64) -> UpdateResult {
        let results = forward(&self.params, x);
        let loss = results.loss(y_true);
        let derivs = calculate_derivs(&self.params, &results, x, y_true);
        apply_derivs(&mut self.params, &derivs, self.lr);
        self.n_updates += 1;
        let Params { w1, b1, w2, b2 } = self.params;
        UpdateResult {
            y_pred: results.y_pred,
            loss,
            w1,
            b1,
            w2,
            b2,
        }
    }

    /// Prediction with the current parameters, without updating them.
    pub fn predict(&self, x: f64) -> f64 {
        forward(&self.params, x).y_pred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_initial_params() {
        let learner = OnlineLearner::default();
        assert_eq!(learner.lr(), 0.05);
        assert_eq!(learner.params().as_slice(), &[0.1, 0.0, 0.1, 0.0]);
        assert_eq!(learner.n_updates(), 0);
    }

    #[test]
    fn single_step() {
        let mut learner = OnlineLearner::new(0.05);
        let result = learner.train_sample(0.5, 1.5);
        assert!((result.y_pred - 0.005).abs() < 1e-12);
        assert!((result.loss - 1.1175125).abs() < 1e-12);
        assert!((result.w1 - 0.103738).abs() < 1e-6);
        assert!((result.b1 - 0.007475).abs() < 1e-6);
        assert!((result.w2 - 0.103738).abs() < 1e-6);
        assert!((result.b2 - 0.07475).abs() < 1e-6);
        assert_eq!(result.params(), *learner.params());
        assert_eq!(learner.n_updates(), 1);
    }

    #[test]
    fn step_needs_both_inputs() {
        let mut learner = OnlineLearner::default();
        assert_eq!(learner.step(Some(0.5), None), None);
        assert_eq!(learner.step(None, Some(1.5)), None);
        assert_eq!(learner.step(None, None), None);
        assert_eq!(*learner.params(), Params::INITIAL);
        assert_eq!(learner.n_updates(), 0);
        let result = learner.step(Some(0.5), Some(1.5));
        assert_eq!(result, Some(OnlineLearner::default().train_sample(0.5, 1.5)));
    }

    #[test]
    fn predict_does_not_update() {
        let learner = OnlineLearner::default();
        assert!((learner.predict(0.5) - 0.005).abs() < 1e-12);
        assert_eq!(*learner.params(), Params::INITIAL);
    }

    #[test]
    fn fields_are_named_in_emission_order() {
        let result = UpdateResult {
            y_pred: 1.0,
            loss: 2.0,
            w1: 3.0,
            b1: 4.0,
            w2: 5.0,
            b2: 6.0,
        };
        assert_eq!(
            result.fields(),
            [
                ("y_pred", 1.0),
                ("loss", 2.0),
                ("w1", 3.0),
                ("b1", 4.0),
                ("w2", 5.0),
                ("b2", 6.0),
            ]
        );
    }
}
