//! Core parts of the algorithm without the learner's state handling.

mod back_propagation;
mod derivs;
mod forward;
mod params;
mod results;

pub use back_propagation::*;
pub use derivs::Derivs;
pub use forward::*;
pub use params::Params;
pub use results::Results;

use crate::activation_functions::{Identity, Relu};

/// Activation function of the hidden unit.
pub type Hidden = Relu;

/// Activation function of the output unit.
pub type Output = Identity;
