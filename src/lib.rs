//! Online SGD of a 1-1-1 neural network (one input, one hidden ReLU unit, one linear output).
//!
//! [`OnlineLearner`] holds the four parameters and performs a forward pass, back propagation and
//! one SGD step for every `(x, y_true)` pair it is given. [`stream`] drives a learner from two
//! timestamped input streams.

mod activation;
mod config;
pub mod core;
mod learner;
mod pretty_print;
pub mod stream;

pub use activation::*;
pub use config::*;
pub use learner::*;
pub use pretty_print::*;
