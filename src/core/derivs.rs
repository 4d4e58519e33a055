use bytemuck::{Pod, Zeroable};

use crate::core::Params;

/// Partial derivatives of the loss for one sample.
///
/// The first four fields have the same layout as [`Params`], so the two can be zipped together
/// when applying a step. `dy`, `dh` and `dz` are per-sample values of the intermediate nodes and
/// come after the parameter section.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Derivs {
    pub w1: f64,
    pub b1: f64,
    pub w2: f64,
    pub b2: f64,
    /// ∂L/∂y_pred, which is also the error.
    pub dy: f64,
    /// ∂L/∂h1.
    pub dh: f64,
    /// ∂L/∂z1.
    pub dz: f64,
}

impl Derivs {
    fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// The parameter section, in the same order as [`Params::as_slice`].
    pub fn params(&self) -> &[f64] {
        &self.as_slice()[..Params::N_PARAMS]
    }
}
