//! N-dimensional geometry for polyview
//!
//! This crate provides homogeneous transforms and hypercube geometry of any
//! dimension.
//!
//! ## Core Types
//!
//! - [`HomogeneousMatrix`] - (D+1)x(D+1) affine/projective transform
//! - [`GeometryError`] - Contract violations reported by every operation
//!
//! ## Geometry
//!
//! - [`Polytope`] - Vertex table plus edge, face or triangle topology
//! - [`generate_polytope`] - The D-cube spanning `[0, 1]^D`
//! - [`triangulate`] - Quadrilateral face to four triangles

mod error;
pub mod matrix;
pub mod shape;
pub mod polytope;
pub mod triangulate;

pub use error::GeometryError;
pub use matrix::HomogeneousMatrix;
pub use shape::{Edge, Face, Triangle};
pub use polytope::{generate_polytope, Polytope, Topology, TopologyKind, VertexTable};
pub use triangulate::{triangulate, triangulate_all};
