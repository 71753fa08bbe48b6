//! Trained rotor temperature regressors: the on-disk artifact format, its validation and
//! single-row evaluation.

pub mod arch;
mod binding;
mod demo;
mod error;
mod loaded;
mod record;
pub mod spec;

pub use binding::ColumnBinding;
pub use demo::demo_prediction;
pub use error::{ModelErr, Result};
pub use loaded::LoadedModel;
pub use record::{FEATURE_NAMES, InputRecord, NUM_FEATURES, column_index};
