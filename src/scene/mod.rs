//! Scene construction utilities
//!
//! This module provides a declarative API for building worlds of hypercubes.

mod scene_builder;

pub use scene_builder::SceneBuilder;
