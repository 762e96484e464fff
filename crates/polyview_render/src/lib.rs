//! Projection and draw-list building for polyview
//!
//! This crate turns D-dimensional polytopes into 2D screen geometry. It does
//! not own a window or a GPU device: the output is plain `bytemuck::Pod`
//! vertex data for whatever backend draws it.
//!
//! ## Key Components
//!
//! - [`projection::project`] - Model/world/camera/screen transform chain and perspective divide
//! - [`palette::Palette`] - Shade scalar to 8-bit colour
//! - [`camera::OrbitCamera`] - World-to-camera matrix advanced by a fixed orbit step
//! - [`camera::ScreenTransform`] - Camera-to-screen matrix
//! - [`frame::Frame`] - Coloured line and triangle lists with culling

pub mod camera;
pub mod frame;
pub mod palette;
pub mod projection;

pub use camera::{OrbitCamera, ScreenTransform};
pub use frame::{ColoredVertex, Frame};
pub use palette::Palette;
pub use projection::{project, project_polytope, ScreenVertex, ScreenVertexTable};

// Re-export core types for convenience
pub use polyview_core::{Entity, EntityKey, Motion, World};
pub use polyview_math::{GeometryError, HomogeneousMatrix, Polytope, TopologyKind};
