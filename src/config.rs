use clap::Args;
use derive_more::{Display, Error};

use crate::DEFAULT_LR;

#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum ConfigError {
    #[display("learning rate must be finite and positive, got {lr}")]
    InvalidLearningRate { lr: f64 },
}

/// Static configuration of an [`OnlineLearner`](crate::OnlineLearner).
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct LearnerConfig {
    /// Learning rate of the SGD step, fixed for the whole run.
    #[arg(long, default_value_t = DEFAULT_LR)]
    pub lr: f64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self { lr: DEFAULT_LR }
    }
}

impl LearnerConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self.lr.is_finite() && self.lr > 0.0 {
            true => Ok(self),
            false => Err(ConfigError::InvalidLearningRate { lr: self.lr }),
        }
    }
}
