use serde::{Deserialize, Serialize};

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f64 },
    Relu,
}

/// The specification for a trained layer.
///
/// `weights` is row-major with shape `dim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    Dense {
        dim: (usize, usize),
        weights: Vec<f64>,
        biases: Vec<f64>,
        #[serde(default)]
        act_fn: Option<ActFnSpec>,
    },
}

/// The specification for a trained regressor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressorSpec {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    Sequential {
        layers: Vec<LayerSpec>,
    },
}

/// The on-disk model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// The input columns in the order the regressor expects them, when the artifact knows them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub regressor: RegressorSpec,
}
