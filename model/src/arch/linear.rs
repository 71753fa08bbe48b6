use ndarray::{Array1, ArrayView1};

use super::Regressor;
use crate::{ModelErr, Result};

/// An ordinary linear regressor: `y = x · coefficients + intercept`.
#[derive(Debug, Clone)]
pub struct Linear {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl Linear {
    /// Creates a new `Linear` regressor.
    ///
    /// # Returns
    /// The regressor, or an error if any parameter is not finite.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if !coefficients.iter().all(|c| c.is_finite()) || !intercept.is_finite() {
            return Err(ModelErr::NonFinite {
                what: "linear parameter",
            });
        }

        Ok(Self {
            coefficients: Array1::from_vec(coefficients),
            intercept,
        })
    }
}

impl Regressor for Linear {
    fn input_size(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.input_size() {
            return Err(ModelErr::SizeMismatch {
                what: "linear input",
                got: x.len(),
                expected: self.input_size(),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}
