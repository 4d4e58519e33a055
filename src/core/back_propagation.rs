use std::iter;

use crate::{
    ActivationFunction,
    core::{Derivs, Hidden, Output, Params, Results},
};

/// Calculates the derivatives of the loss `0.5 * (y_pred - y_true)^2` against every parameter.
///
/// `results` must be the forward pass of `x` through `params`.
pub fn calculate_derivs(params: &Params, results: &Results, x: f64, y_true: f64) -> Derivs {
    // Output layer.
    let dy = results.error(y_true);
    let dz2 = Output::chain(results.z2, dy);
    let w2 = results.h1 * dz2;
    let b2 = dz2;
    // Hidden layer.
    let dh = params.w2 * dz2;
    let dz = Hidden::chain(results.z1, dh);
    let w1 = x * dz;
    let b1 = dz;
    Derivs {
        w1,
        b1,
        w2,
        b2,
        dy,
        dh,
        dz,
    }
}

/// One SGD step, `p -= eta * dp` for every parameter.
pub fn apply_derivs(params: &mut Params, derivs: &Derivs, eta: f64) {
    // Output layer first. Every derivative is already computed, so the order is cosmetic.
    for (p, dp) in iter::zip(params.as_mut_slice(), derivs.params()).rev() {
        *p -= eta * (*dp);
    }
}
