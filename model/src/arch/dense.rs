use ndarray::prelude::*;

use super::ActFn;
use crate::{ModelErr, Result};

/// A fully connected layer with already trained parameters.
#[derive(Debug, Clone)]
pub struct Dense {
    w: Array2<f64>,
    b: Array1<f64>,
    act_fn: Option<ActFn>,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `dim` - The `(inputs, outputs)` shape of the layer.
    /// * `weights` - Row-major weights, `dim.0 * dim.1` of them.
    /// * `biases` - One bias per output.
    /// * `act_fn` - An optional activation applied after the affine map.
    ///
    /// # Returns
    /// The layer, or an error if a buffer has the wrong length or holds a non finite value.
    pub fn new(
        dim: (usize, usize),
        weights: Vec<f64>,
        biases: Vec<f64>,
        act_fn: Option<ActFn>,
    ) -> Result<Self> {
        let (n, m) = dim;
        let expected = n
            .checked_mul(m)
            .ok_or(ModelErr::DimensionOverflow { dim })?;

        if weights.len() != expected {
            return Err(ModelErr::SizeMismatch {
                what: "dense weights",
                got: weights.len(),
                expected,
            });
        }

        if biases.len() != m {
            return Err(ModelErr::SizeMismatch {
                what: "dense biases",
                got: biases.len(),
                expected: m,
            });
        }

        if !weights.iter().chain(&biases).all(|p| p.is_finite()) {
            return Err(ModelErr::NonFinite {
                what: "dense parameter",
            });
        }

        let got = weights.len();
        let w = Array2::from_shape_vec(dim, weights).map_err(|_| ModelErr::SizeMismatch {
            what: "dense weights",
            got,
            expected,
        })?;

        Ok(Self {
            w,
            b: Array1::from_vec(biases),
            act_fn,
        })
    }

    /// Returns the `(inputs, outputs)` shape of this layer.
    pub fn dim(&self) -> (usize, usize) {
        self.w.dim()
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `x` - The layer input, `dim().0` elements long.
    ///
    /// # Returns
    /// The layer output, `dim().1` elements long.
    pub fn forward(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let mut z = x.dot(&self.w) + &self.b;

        if let Some(act_fn) = &self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        z
    }
}
