mod activations;
mod dense;
mod linear;
mod regressor;
mod sequential;

pub use activations::ActFn;
pub use dense::Dense;
pub use linear::Linear;
pub use regressor::Regressor;
pub use sequential::Sequential;
