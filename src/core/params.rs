use bytemuck::{Pod, Zeroable};

use crate::PrettyPrintParams;

/// The four parameters of the 1-1-1 network.
///
/// ```text
/// h1 = relu(w1 * x + b1)
/// y  = w2 * h1 + b2
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Params {
    pub w1: f64,
    pub b1: f64,
    pub w2: f64,
    pub b2: f64,
}

impl Params {
    pub const N_PARAMS: usize = 4;

    /// Non-zero weights keep the hidden unit from starting out dead.
    pub const INITIAL: Self = Self {
        w1: 0.1,
        b1: 0.0,
        w2: 0.1,
        b2: 0.0,
    };

    pub const fn new(w1: f64, b1: f64, w2: f64, b2: f64) -> Self {
        Self { w1, b1, w2, b2 }
    }

    /// Parameters in the order `w1, b1, w2, b2`.
    pub fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    pub fn pretty_print(&self) -> PrettyPrintParams<'_> {
        PrettyPrintParams::new(self)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<[f64; 4]> for Params {
    fn from([w1, b1, w2, b2]: [f64; 4]) -> Self {
        Self { w1, b1, w2, b2 }
    }
}

impl From<Params> for [f64; 4] {
    fn from(params: Params) -> Self {
        bytemuck::cast(params)
    }
}
