//! A small web front end predicting an electric motor's rotor temperature from ten sensor
//! readings.

pub mod config;
pub mod form;
pub mod predict;
pub mod render;
pub mod server;

pub use config::Config;
pub use predict::{Prediction, predict};
pub use server::{AppState, router, serve};
