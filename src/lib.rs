//! polyview - N-dimensional hypercube viewer
//!
//! Library half of the `polyview` binary: configuration, scene construction
//! and the headless simulation/render systems.

pub mod config;
pub mod error;
pub mod scene;
pub mod systems;

pub use config::AppConfig;
pub use error::AppError;
