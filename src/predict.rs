use std::fmt;

use log::{debug, info, warn};
use model::{FEATURE_NAMES, InputRecord, LoadedModel, NUM_FEATURES, demo_prediction};

/// The message shown when a submitted form doesn't hold ten numeric readings.
pub const INVALID_INPUT_MESSAGE: &str = "Error: Please enter valid numeric values for all fields.";

/// The outcome of a single prediction request. Its `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// The loaded model's prediction, in °C.
    Model(f64),
    /// The closed-form estimate used when no model is loaded.
    Demo(f64),
    /// The loaded model couldn't produce a prediction.
    Failed(String),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Model(value) => write!(f, "Predicted Rotor Temperature: {value:.2}°C"),
            Prediction::Demo(value) => {
                write!(f, "Model not loaded. Demo prediction: {value:.2}°C")
            }
            Prediction::Failed(detail) => write!(f, "Prediction failed: {detail}"),
        }
    }
}

/// Predicts the rotor temperature for one record.
///
/// # Arguments
/// * `model` - The loaded model, `None` when running on demo predictions.
/// * `record` - The sensor readings.
///
/// # Returns
/// The prediction; model failures are reported as `Prediction::Failed` rather than as errors.
pub fn predict(model: Option<&LoadedModel>, record: &InputRecord) -> Prediction {
    let Some(model) = model else {
        let value = demo_prediction(record);
        info!("using demo prediction: {value}");
        return Prediction::Demo(value);
    };

    match model.predict(record) {
        Ok(value) => {
            info!("prediction successful: {value}");
            Prediction::Model(value)
        }
        Err(e) => {
            warn!("prediction failed: {e}");
            Prediction::Failed(e.to_string())
        }
    }
}

/// Logs the readings of a record and the shape it is evaluated with.
pub(crate) fn log_record(record: &InputRecord) {
    let received = record
        .columns()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ");

    debug!("received values: {received}");
    debug!(rows = 1, columns = NUM_FEATURES; "input record columns: {FEATURE_NAMES:?}");
}
