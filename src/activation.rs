use std::fmt::{self, Debug};

#[derive(Clone, Copy)]
pub struct DynActivationFunction {
    name: &'static str,
    apply: fn(f64) -> f64,
    deriv: fn(f64) -> f64,
    chain: fn(f64, f64) -> f64,
}

impl Debug for DynActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self.name, f)
    }
}

impl PartialEq for DynActivationFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl DynActivationFunction {
    pub fn new<Phi: ActivationFunction>(_: Phi) -> Self {
        Self {
            name: Phi::NAME,
            apply: Phi::apply,
            deriv: Phi::deriv,
            chain: Phi::chain,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, z: f64) -> f64 {
        (self.apply)(z)
    }

    pub fn deriv(&self, z: f64) -> f64 {
        (self.deriv)(z)
    }

    pub fn chain(&self, z: f64, da: f64) -> f64 {
        (self.chain)(z, da)
    }
}

pub trait ActivationFunction: Send + Sync + 'static {
    const NAME: &'static str;

    fn apply(z: f64) -> f64;

    fn deriv(z: f64) -> f64;

    /// Derivative of the loss against `z`, given `da`, the derivative of the loss against
    /// `apply(z)`.
    fn chain(z: f64, da: f64) -> f64 {
        da * Self::deriv(z)
    }
}

pub mod activation_functions {
    use super::ActivationFunction;

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Identity;
    impl ActivationFunction for Identity {
        const NAME: &'static str = "identity";

        fn apply(z: f64) -> f64 {
            z
        }

        fn deriv(_: f64) -> f64 {
            1.0
        }

        fn chain(_: f64, da: f64) -> f64 {
            da
        }
    }

    /// `max(0, z)`.
    ///
    /// The derivative at exactly `z = 0` is taken as 0, so a unit sitting on the kink passes no
    /// gradient.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Relu;
    impl ActivationFunction for Relu {
        const NAME: &'static str = "relu";

        fn apply(z: f64) -> f64 {
            match z > 0.0 {
                true => z,
                false => 0.0,
            }
        }

        fn deriv(z: f64) -> f64 {
            match z > 0.0 {
                true => 1.0,
                false => 0.0,
            }
        }

        // Gate instead of multiplying so that a non-finite `da` is still cut off.
        fn chain(z: f64, da: f64) -> f64 {
            match z > 0.0 {
                true => da,
                false => 0.0,
            }
        }
    }
}
