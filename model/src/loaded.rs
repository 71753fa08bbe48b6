use std::{fmt, fs, path::Path};

use log::{debug, info, warn};

use crate::{
    ColumnBinding, InputRecord, ModelErr, Result,
    arch::{ActFn, Dense, Linear, Regressor, Sequential},
    record::NUM_FEATURES,
    spec::{ArtifactSpec, LayerSpec, RegressorSpec},
};

/// A trained regressor bound to the columns of an `InputRecord`.
///
/// Loaded once and shared read-only afterwards.
pub struct LoadedModel {
    regressor: Box<dyn Regressor>,
    binding: ColumnBinding,
}

impl LoadedModel {
    /// Reads and validates a model artifact.
    ///
    /// # Arguments
    /// * `path` - The JSON artifact's location.
    ///
    /// # Errors
    /// Returns `ModelErr` if the file can't be read, parsed or describes an invalid model.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let spec: ArtifactSpec = serde_json::from_str(&content)?;
        Self::from_spec(spec)
    }

    /// Loads the artifact at `path`, logging why it couldn't be loaded when it fails.
    ///
    /// # Returns
    /// The model, or `None` when callers should fall back to demo predictions.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();

        match Self::load(path) {
            Ok(model) => {
                info!("model loaded successfully from {}", path.display());
                Some(model)
            }
            Err(e) => {
                warn!("{e}; serving demo predictions");
                None
            }
        }
    }

    /// Builds the model described by an already parsed artifact.
    ///
    /// # Errors
    /// Returns `ModelErr` if the regressor is malformed or doesn't consume one row of readings.
    pub fn from_spec(spec: ArtifactSpec) -> Result<Self> {
        let regressor = build_regressor(spec.regressor)?;

        if regressor.input_size() != NUM_FEATURES {
            return Err(ModelErr::SizeMismatch {
                what: "model input",
                got: regressor.input_size(),
                expected: NUM_FEATURES,
            });
        }

        let binding = match spec.feature_names {
            None => ColumnBinding::Positional,
            Some(names) => ColumnBinding::resolve(&names).unwrap_or_else(|e| {
                warn!("cannot bind artifact columns by name ({e}), falling back to positional order");
                ColumnBinding::Positional
            }),
        };
        debug!("model columns bound as {binding:?}");

        Ok(Self { regressor, binding })
    }

    /// Returns how record columns are laid out for this model.
    pub fn binding(&self) -> &ColumnBinding {
        &self.binding
    }

    /// Predicts the target for a single record.
    ///
    /// # Errors
    /// Returns `ModelErr::NonFinite` if the prediction is NaN or infinite.
    pub fn predict(&self, record: &InputRecord) -> Result<f64> {
        let x = self.binding.arrange(record);
        debug!(columns = x.len(); "evaluating regressor over a single row");

        let y = self.regressor.predict(x.view())?;
        if !y.is_finite() {
            return Err(ModelErr::NonFinite { what: "prediction" });
        }

        Ok(y)
    }
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("input_size", &self.regressor.input_size())
            .field("binding", &self.binding)
            .finish()
    }
}

fn build_regressor(spec: RegressorSpec) -> Result<Box<dyn Regressor>> {
    let regressor: Box<dyn Regressor> = match spec {
        RegressorSpec::Linear {
            coefficients,
            intercept,
        } => Box::new(Linear::new(coefficients, intercept)?),
        RegressorSpec::Sequential { layers } => {
            let layers = layers
                .into_iter()
                .map(build_layer)
                .collect::<Result<Vec<_>>>()?;
            Box::new(Sequential::new(layers)?)
        }
    };

    Ok(regressor)
}

fn build_layer(spec: LayerSpec) -> Result<Dense> {
    match spec {
        LayerSpec::Dense {
            dim,
            weights,
            biases,
            act_fn,
        } => Dense::new(dim, weights, biases, act_fn.map(ActFn::from)),
    }
}
