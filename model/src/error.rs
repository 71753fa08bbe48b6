use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire model crate.
pub type Result<T> = std::result::Result<T, ModelErr>;

/// The model crate's error type.
#[derive(Debug)]
pub enum ModelErr {
    /// The artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The artifact is not valid JSON or doesn't match the artifact layout.
    Parse(serde_json::Error),
    /// A buffer or dimension doesn't have the size it should.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A layer's shape holds more parameters than can be addressed.
    DimensionOverflow { dim: (usize, usize) },
    /// Two adjacent layers can't be chained.
    IncompatibleLayers {
        layer: usize,
        input: usize,
        previous_output: usize,
    },
    /// A sequential model without layers.
    EmptyModel,
    /// A parameter or an output is NaN or infinite.
    NonFinite { what: &'static str },
    /// The artifact names a column the input record doesn't have.
    UnknownColumn(String),
    /// The artifact names the same column twice.
    DuplicateColumn(String),
}

impl Display for ModelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelErr::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            ModelErr::Parse(e) => write!(f, "invalid model artifact: {e}"),
            ModelErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            ModelErr::DimensionOverflow { dim: (n, m) } => {
                write!(f, "layer shape ({n}, {m}) is too large")
            }
            ModelErr::IncompatibleLayers {
                layer,
                input,
                previous_output,
            } => write!(
                f,
                "layer {layer}: input size ({input}) does not match previous layer output size ({previous_output})"
            ),
            ModelErr::EmptyModel => write!(f, "model must have at least one layer"),
            ModelErr::NonFinite { what } => write!(f, "{what} is not a finite number"),
            ModelErr::UnknownColumn(name) => write!(f, "unknown column '{name}'"),
            ModelErr::DuplicateColumn(name) => write!(f, "column '{name}' appears more than once"),
        }
    }
}

impl Error for ModelErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelErr::Io { source, .. } => Some(source),
            ModelErr::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
