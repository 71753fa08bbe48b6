use ndarray::ArrayView1;

use super::{Dense, Regressor};
use crate::{ModelErr, Result};

/// A sequential model: information flows forward through its dense layers, the last of which
/// yields a single output.
#[derive(Debug, Clone)]
pub struct Sequential {
    layers: Vec<Dense>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance, or an error if the layers can't be chained or the last one
    /// doesn't produce exactly one output.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Dense>,
    {
        let layers: Vec<Dense> = layers.into_iter().collect();

        let Some(last) = layers.last() else {
            return Err(ModelErr::EmptyModel);
        };

        // Adjacent layers must have compatible dimensions: prev.m == next.n
        for (i, pair) in layers.windows(2).enumerate() {
            let (_, previous_output) = pair[0].dim();
            let (input, _) = pair[1].dim();
            if previous_output != input {
                return Err(ModelErr::IncompatibleLayers {
                    layer: i + 1,
                    input,
                    previous_output,
                });
            }
        }

        let (_, outputs) = last.dim();
        if outputs != 1 {
            return Err(ModelErr::SizeMismatch {
                what: "sequential output",
                got: outputs,
                expected: 1,
            });
        }

        Ok(Self { layers })
    }
}

impl Regressor for Sequential {
    fn input_size(&self) -> usize {
        self.layers[0].dim().0
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.input_size() {
            return Err(ModelErr::SizeMismatch {
                what: "sequential input",
                got: x.len(),
                expected: self.input_size(),
            });
        }

        let mut a = x.to_owned();
        for layer in &self.layers {
            a = layer.forward(a.view());
        }

        Ok(a[0])
    }
}
