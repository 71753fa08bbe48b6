use ndarray::Array1;

use crate::{
    InputRecord, ModelErr, Result,
    record::{NUM_FEATURES, column_index},
};

/// How the readings of an `InputRecord` are laid out before reaching a regressor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnBinding {
    /// The regressor consumes the readings in `FEATURE_NAMES` order.
    Positional,
    /// The regressor's `j`-th input is the record's column at `order[j]`.
    Named(Vec<usize>),
}

impl ColumnBinding {
    /// Resolves the column names stored in an artifact against the record's columns.
    ///
    /// # Arguments
    /// * `names` - The artifact's input columns, in the order its regressor expects them.
    ///
    /// # Returns
    /// A `Named` binding, or an error if the names aren't a permutation of `FEATURE_NAMES`.
    pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() != NUM_FEATURES {
            return Err(ModelErr::SizeMismatch {
                what: "feature names",
                got: names.len(),
                expected: NUM_FEATURES,
            });
        }

        let mut seen = [false; NUM_FEATURES];
        let mut order = Vec::with_capacity(NUM_FEATURES);

        for name in names {
            let name = name.as_ref();
            let i = column_index(name).ok_or_else(|| ModelErr::UnknownColumn(name.to_string()))?;
            if seen[i] {
                return Err(ModelErr::DuplicateColumn(name.to_string()));
            }

            seen[i] = true;
            order.push(i);
        }

        Ok(Self::Named(order))
    }

    /// Lays the record's readings out in the order the regressor expects.
    pub fn arrange(&self, record: &InputRecord) -> Array1<f64> {
        let values = record.values();

        match self {
            Self::Positional => Array1::from_vec(values.to_vec()),
            Self::Named(order) => order.iter().map(|&i| values[i]).collect(),
        }
    }
}
