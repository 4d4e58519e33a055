/// Intermediate values of one forward pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Results {
    /// Pre-activation of the hidden unit.
    pub z1: f64,
    /// Activation of the hidden unit.
    pub h1: f64,
    /// Pre-activation of the output unit.
    pub z2: f64,
    pub y_pred: f64,
}

impl Results {
    /// `err = y_pred - y_true`.
    pub fn error(&self, y_true: f64) -> f64 {
        self.y_pred - y_true
    }

    /// Half squared error, `0.5 * err^2`.
    pub fn loss(&self, y_true: f64) -> f64 {
        let err = self.error(y_true);
        0.5 * err * err
    }
}
