//! Core types for polyview
//!
//! This crate provides the simulation scaffolding that supplies transforms to
//! the projection pipeline:
//!
//! - [`Entity`] - A shared model, its model-to-world transform, and a [`Motion`]
//! - [`Motion`] - `Static`, `Kinetic { velocity }` or `Piloted { controller }`
//! - [`PilotController`] - Steering source for piloted entities
//! - [`World`] - Container for all entities
//! - [`EntityKey`] - Generational key to an entity in the world
//! - [`PolytopeCache`] - Caller-owned memo of generated hypercubes

mod entity;
mod world;
mod polytope_cache;

pub use entity::{
    DirtyFlags, Entity, Motion, PilotCommand, PilotController, PlaneRotation, SpinController,
};
pub use world::{EntityKey, World};
pub use polytope_cache::PolytopeCache;

// Re-export commonly used types from polyview_math for convenience
pub use polyview_math::{
    generate_polytope, GeometryError, HomogeneousMatrix, Polytope, Topology, TopologyKind,
    VertexTable,
};
