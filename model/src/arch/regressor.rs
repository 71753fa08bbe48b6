use ndarray::ArrayView1;

use crate::Result;

/// A trained model mapping one row of features into a single scalar.
pub trait Regressor: Send + Sync {
    /// Returns the amount of features the regressor consumes.
    fn input_size(&self) -> usize;

    /// Evaluates the regressor over a single row.
    ///
    /// # Arguments
    /// * `x` - The features, already laid out in the order the regressor expects.
    ///
    /// # Returns
    /// The prediction or an error if `x` doesn't have `input_size` elements.
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64>;
}
