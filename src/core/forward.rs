use crate::{
    ActivationFunction,
    core::{Hidden, Output, Params, Results},
};

pub fn forward(params: &Params, x: f64) -> Results {
    let z1 = params.w1 * x + params.b1;
    let h1 = Hidden::apply(z1);
    let z2 = params.w2 * h1 + params.b2;
    let y_pred = Output::apply(z2);
    Results { z1, h1, z2, y_pred }
}
