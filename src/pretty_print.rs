use std::fmt::{self, Debug, Display};

use crate::{
    DynActivationFunction,
    core::{Hidden, Output, Params},
};

struct Layer {
    output: &'static str,
    input: &'static str,
    w: f64,
    b: f64,
    phi: DynActivationFunction,
}

/// Prints the network as one equation per layer.
///
/// ```text
/// h1 = relu( 0.1037 x +  0.0075)
///  y = identity( 0.1037 h1 +  0.0748)
/// ```
pub struct PrettyPrintParams<'a> {
    params: &'a Params,
}

impl<'a> PrettyPrintParams<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self { params }
    }

    fn layers(&self) -> [Layer; 2] {
        [
            Layer {
                output: "h1",
                input: "x",
                w: self.params.w1,
                b: self.params.b1,
                phi: DynActivationFunction::new(Hidden::default()),
            },
            Layer {
                output: " y",
                input: "h1",
                w: self.params.w2,
                b: self.params.b2,
                phi: DynActivationFunction::new(Output::default()),
            },
        ]
    }
}

impl Debug for PrettyPrintParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

fn write_element(f: &mut fmt::Formatter, element: f64) -> fmt::Result {
    if element.is_sign_positive() {
        write!(f, " {:.04?}", element)
    } else {
        write!(f, "{:.04?}", element)
    }
}

impl Display for PrettyPrintParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let layers = self.layers();
        for (i_layer, layer) in layers.iter().enumerate() {
            write!(f, "{} = {}(", layer.output, layer.phi.name())?;
            write_element(f, layer.w)?;
            write!(f, " {} + ", layer.input)?;
            write_element(f, layer.b)?;
            write!(f, ")")?;
            if i_layer != layers.len() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
