//! Projection pipeline
//!
//! Maps D-dimensional vertices to screen space through the transform chain
//! `camera_to_screen * world_to_camera * model_to_world`, followed by the
//! perspective divide.
//!
//! Only three rows survive: x and y (divided by w) and the undivided third
//! row, which is used as the shade scalar. Coordinates beyond the third are
//! dropped for D > 3.

use std::ops::Index;

use bytemuck::{Pod, Zeroable};
use polyview_math::{GeometryError, HomogeneousMatrix, Polytope, VertexTable};

/// A projected vertex
///
/// `shade` is the raw depth scalar. It is not clamped here: values above 1 or
/// below 0 are left for the renderer to interpret (negative means behind the
/// camera).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ScreenVertex {
    pub x: f64,
    pub y: f64,
    pub shade: f64,
}

impl ScreenVertex {
    pub fn new(x: f64, y: f64, shade: f64) -> Self {
        Self { x, y, shade }
    }
}

/// One [`ScreenVertex`] per input vertex, in input order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenVertexTable {
    vertices: Vec<ScreenVertex>,
}

impl ScreenVertexTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScreenVertex> {
        self.vertices.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScreenVertex> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[ScreenVertex] {
        &self.vertices
    }

    /// Raw bytes for upload to a rendering backend
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Index<usize> for ScreenVertexTable {
    type Output = ScreenVertex;

    fn index(&self, index: usize) -> &ScreenVertex {
        &self.vertices[index]
    }
}

/// Project `vertices` into screen space
///
/// `model_to_world` is applied first, then `world_to_camera`, then
/// `camera_to_screen`. The last output row is w; x and y are divided by it.
/// A vertex with w = 0 yields non-finite coordinates.
///
/// # Errors
///
/// - [`GeometryError::DimensionMismatch`] with `expected: 3` if the vertices
///   have fewer than 3 coordinates (there is no depth row to shade with)
/// - [`GeometryError::DimensionMismatch`] if any matrix side differs from
///   `vertices.dimension() + 1`
pub fn project(
    model_to_world: &HomogeneousMatrix,
    world_to_camera: &HomogeneousMatrix,
    camera_to_screen: &HomogeneousMatrix,
    vertices: &VertexTable,
) -> Result<ScreenVertexTable, GeometryError> {
    let dimension = vertices.dimension();
    if dimension < 3 {
        return Err(GeometryError::DimensionMismatch {
            expected: 3,
            found: dimension,
        });
    }

    let side = dimension + 1;
    for matrix in [model_to_world, world_to_camera, camera_to_screen] {
        if matrix.side() != side {
            return Err(GeometryError::DimensionMismatch {
                expected: side,
                found: matrix.side(),
            });
        }
    }

    let transform = camera_to_screen
        .compose(world_to_camera)?
        .compose(model_to_world)?;

    let mut homogeneous = vec![1.0; side];
    let mut projected = Vec::with_capacity(vertices.len());
    for point in vertices.iter() {
        homogeneous[..dimension].copy_from_slice(point);
        let out = transform.apply(&homogeneous)?;
        let w = out[dimension];
        projected.push(ScreenVertex::new(out[0] / w, out[1] / w, out[2]));
    }

    Ok(ScreenVertexTable { vertices: projected })
}

/// [`project`] applied to a polytope's vertex table
pub fn project_polytope(
    model_to_world: &HomogeneousMatrix,
    world_to_camera: &HomogeneousMatrix,
    camera_to_screen: &HomogeneousMatrix,
    polytope: &Polytope,
) -> Result<ScreenVertexTable, GeometryError> {
    project(model_to_world, world_to_camera, camera_to_screen, polytope.vertices())
}
