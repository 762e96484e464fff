//! Frame building - turns projected polytopes into coloured draw lists
//!
//! A frame is a pair of flat vertex lists an external backend can upload
//! directly: line segments (two vertices each) and triangles (three vertices
//! each). Primitives that reach behind the camera are dropped.

use bytemuck::{Pod, Zeroable};
use polyview_core::World;
use polyview_math::{GeometryError, Polytope, Topology};

use crate::camera::{OrbitCamera, ScreenTransform};
use crate::palette::Palette;
use crate::projection::{project_polytope, ScreenVertex, ScreenVertexTable};

/// A screen-space vertex with its 8-bit colour
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Screen position in pixels
    pub position: [f32; 2],
    /// RGBA colour
    pub color: [u8; 4],
}

impl ColoredVertex {
    pub fn new(position: [f32; 2], color: [u8; 4]) -> Self {
        Self { position, color }
    }
}

/// Draw lists for one frame
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Line segment endpoints, two per segment
    pub lines: Vec<ColoredVertex>,
    /// Triangle corners, three per triangle
    pub triangles: Vec<ColoredVertex>,
    culled: usize,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame with room for the given numbers of vertices
    pub fn with_capacity(line_vertices: usize, triangle_vertices: usize) -> Self {
        Self {
            lines: Vec::with_capacity(line_vertices),
            triangles: Vec::with_capacity(triangle_vertices),
            culled: 0,
        }
    }

    /// Project and collect every entity in the world
    ///
    /// Each entity's model goes through its own model-to-world transform, the
    /// camera's world-to-camera matrix and the screen transform.
    pub fn from_world(
        world: &World,
        camera: &OrbitCamera,
        screen: &ScreenTransform,
        palette: &Palette,
    ) -> Result<Self, GeometryError> {
        let camera_to_screen = screen.matrix(camera.dimension())?;

        // Estimate capacity (before culling)
        let mut line_vertices = 0;
        let mut triangle_vertices = 0;
        for entity in world.iter() {
            match entity.model().topology() {
                Topology::Edges(edges) => line_vertices += 2 * edges.len(),
                Topology::Faces(faces) => triangle_vertices += 12 * faces.len(),
                Topology::Triangles(triangles) => triangle_vertices += 3 * triangles.len(),
            }
        }

        let mut frame = Self::with_capacity(line_vertices, triangle_vertices);
        for entity in world.iter() {
            let table = project_polytope(
                entity.transform(),
                camera.world_to_camera(),
                &camera_to_screen,
                entity.model(),
            )?;
            frame.add_polytope(&table, entity.model(), palette)?;
        }

        log::trace!(
            "Frame: {} lines, {} triangles, {} culled",
            frame.line_count(),
            frame.triangle_count(),
            frame.culled_count()
        );
        Ok(frame)
    }

    /// Append the primitives of `polytope` using already projected vertices
    ///
    /// Edges become line segments; faces are triangulated; triangles pass
    /// through. A primitive is culled if any of its vertices has a negative
    /// shade or a non-finite screen position. Shades above 1 are clamped.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DimensionMismatch`] if `table` was not projected from
    /// a vertex table of the same length as the polytope's.
    pub fn add_polytope(
        &mut self,
        table: &ScreenVertexTable,
        polytope: &Polytope,
        palette: &Palette,
    ) -> Result<(), GeometryError> {
        if table.len() != polytope.vertex_count() {
            return Err(GeometryError::DimensionMismatch {
                expected: polytope.vertex_count(),
                found: table.len(),
            });
        }

        match polytope.topology() {
            Topology::Edges(edges) => {
                for edge in edges {
                    self.push_primitive(table, &edge.indices, palette, Primitive::Line)?;
                }
            }
            Topology::Faces(_) | Topology::Triangles(_) => {
                for triangle in polytope.triangles() {
                    self.push_primitive(table, &triangle.indices, palette, Primitive::Triangle)?;
                }
            }
        }
        Ok(())
    }

    fn push_primitive(
        &mut self,
        table: &ScreenVertexTable,
        indices: &[usize],
        palette: &Palette,
        primitive: Primitive,
    ) -> Result<(), GeometryError> {
        if indices.iter().any(|&i| !is_visible(&table[i])) {
            self.culled += 1;
            return Ok(());
        }

        let target = match primitive {
            Primitive::Line => &mut self.lines,
            Primitive::Triangle => &mut self.triangles,
        };
        for &i in indices {
            let v = table[i];
            let color = palette.color_rgba(v.shade.min(1.0))?;
            target.push(ColoredVertex::new([v.x as f32, v.y as f32], color));
        }
        Ok(())
    }

    /// Number of line segments
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of primitives dropped by culling
    pub fn culled_count(&self) -> usize {
        self.culled
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }

    /// Line vertices as raw bytes
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Triangle vertices as raw bytes
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Iterate over line segments as endpoint pairs
    pub fn segments(&self) -> impl Iterator<Item = (&ColoredVertex, &ColoredVertex)> {
        self.lines.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Remove all primitives and reset the cull count
    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
        self.culled = 0;
    }
}

#[derive(Clone, Copy)]
enum Primitive {
    Line,
    Triangle,
}

fn is_visible(v: &ScreenVertex) -> bool {
    v.shade >= 0.0 && v.x.is_finite() && v.y.is_finite()
}
