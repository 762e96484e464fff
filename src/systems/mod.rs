//! Application systems
//!
//! The headless loop is split into a simulation step and a frame step.

mod render;
mod simulation;

pub use render::{write_lines, FrameStats, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
