//! Hypercube polytopes
//!
//! A D-cube spanning `[0, 1]^D` is built by extruding the (D-1)-cube along a
//! new axis: every vertex gets a "floor" copy (new coordinate 0) and a
//! "ceiling" copy (new coordinate 1), with vertex `i` and `i + n` being the
//! two copies of the same lower-dimensional vertex.
//!
//! Element order is fully determined by the construction order, so the output
//! for a given dimension is reproducible.

use std::collections::HashSet;
use std::slice::ChunksExact;

use serde::{Deserialize, Serialize};

use crate::shape::{Edge, Face, Triangle};
use crate::triangulate::triangulate_all;
use crate::{GeometryError, HomogeneousMatrix};

/// Which kind of topology to generate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    /// Line segments, for wireframe rendering
    Edges,
    /// Quadrilateral faces, for solid rendering
    Faces,
    /// Faces already split into four triangles each
    Triangles,
}

/// D-dimensional points, one per vertex
///
/// Each point is stored contiguously, i.e. the table is conceptually a
/// `D x count` matrix with one column per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexTable {
    dimension: usize,
    coords: Vec<f64>,
}

impl VertexTable {
    /// Create an empty table of `dimension`-dimensional points
    pub fn new(dimension: usize) -> Result<Self, GeometryError> {
        if dimension == 0 {
            return Err(GeometryError::InvalidDimension(dimension));
        }
        Ok(Self {
            dimension,
            coords: Vec::new(),
        })
    }

    /// Build a table from a list of points, all of length `dimension`
    pub fn from_points<P: AsRef<[f64]>>(
        dimension: usize,
        points: impl IntoIterator<Item = P>,
    ) -> Result<Self, GeometryError> {
        let mut table = Self::new(dimension)?;
        for point in points {
            table.push(point.as_ref())?;
        }
        Ok(table)
    }

    /// Append a point
    pub fn push(&mut self, point: &[f64]) -> Result<(), GeometryError> {
        if point.len() != self.dimension {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension,
                found: point.len(),
            });
        }
        self.coords.extend_from_slice(point);
        Ok(())
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dimension
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of vertex `index`
    #[inline]
    pub fn point(&self, index: usize) -> &[f64] {
        &self.coords[index * self.dimension..(index + 1) * self.dimension]
    }

    /// Iterate over points in vertex order
    pub fn iter(&self) -> ChunksExact<'_, f64> {
        self.coords.chunks_exact(self.dimension)
    }

    /// Floor copy (new coordinate 0) followed by ceiling copy (new coordinate 1)
    fn extruded(&self) -> Self {
        let mut coords = Vec::with_capacity(2 * (self.coords.len() + self.len()));
        for level in [0.0, 1.0] {
            for point in self.iter() {
                coords.extend_from_slice(point);
                coords.push(level);
            }
        }
        Self {
            dimension: self.dimension + 1,
            coords,
        }
    }

    /// Pad every point with zeros up to `dimension` coordinates
    pub fn embedded(&self, dimension: usize) -> Result<Self, GeometryError> {
        if dimension < self.dimension {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension,
                found: dimension,
            });
        }
        let mut coords = Vec::with_capacity(self.len() * dimension);
        for point in self.iter() {
            coords.extend_from_slice(point);
            coords.resize(coords.len() + dimension - self.dimension, 0.0);
        }
        Ok(Self { dimension, coords })
    }

    /// Apply an affine transform to every point, dropping the homogeneous row
    pub fn transformed(&self, matrix: &HomogeneousMatrix) -> Result<Self, GeometryError> {
        if matrix.dimension() != self.dimension {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension + 1,
                found: matrix.side(),
            });
        }
        let mut homogeneous = vec![1.0; self.dimension + 1];
        let mut coords = Vec::with_capacity(self.coords.len());
        for point in self.iter() {
            homogeneous[..self.dimension].copy_from_slice(point);
            let result = matrix.apply(&homogeneous)?;
            coords.extend_from_slice(&result[..self.dimension]);
        }
        Ok(Self {
            dimension: self.dimension,
            coords,
        })
    }
}

/// Edge, face or triangle topology over a vertex table
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
    Edges(Vec<Edge>),
    Faces(Vec<Face>),
    Triangles(Vec<Triangle>),
}

impl Topology {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Edges(_) => TopologyKind::Edges,
            Topology::Faces(_) => TopologyKind::Faces,
            Topology::Triangles(_) => TopologyKind::Triangles,
        }
    }

    /// Number of topology elements
    pub fn len(&self) -> usize {
        match self {
            Topology::Edges(edges) => edges.len(),
            Topology::Faces(faces) => faces.len(),
            Topology::Triangles(triangles) => triangles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match self {
            Topology::Edges(edges) => Box::new(edges.iter().flat_map(|e| e.indices)),
            Topology::Faces(faces) => Box::new(faces.iter().flat_map(|f| f.indices)),
            Topology::Triangles(tris) => Box::new(tris.iter().flat_map(|t| t.indices)),
        }
    }

    fn shifted(&self, offset: usize) -> Self {
        match self {
            Topology::Edges(edges) => {
                Topology::Edges(edges.iter().map(|e| e.shifted(offset)).collect())
            }
            Topology::Faces(faces) => {
                Topology::Faces(faces.iter().map(|f| f.shifted(offset)).collect())
            }
            Topology::Triangles(tris) => {
                Topology::Triangles(tris.iter().map(|t| t.shifted(offset)).collect())
            }
        }
    }

    fn extend(&mut self, other: Topology) -> Result<(), GeometryError> {
        match (self, other) {
            (Topology::Edges(a), Topology::Edges(b)) => a.extend(b),
            (Topology::Faces(a), Topology::Faces(b)) => a.extend(b),
            (Topology::Triangles(a), Topology::Triangles(b)) => a.extend(b),
            _ => return Err(GeometryError::TopologyMismatch),
        }
        Ok(())
    }
}

/// Immutable geometry: a vertex table plus topology over it
///
/// Every index in the topology is smaller than the vertex count.
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope {
    vertices: VertexTable,
    topology: Topology,
}

impl Polytope {
    /// Assemble a polytope from parts, e.g. a mesh supplied by an external loader
    pub fn new(vertices: VertexTable, topology: Topology) -> Result<Self, GeometryError> {
        let vertex_count = vertices.len();
        if let Some(index) = topology.indices().find(|&i| i >= vertex_count) {
            return Err(GeometryError::IndexOutOfBounds { index, vertex_count });
        }
        Ok(Self { vertices, topology })
    }

    #[inline]
    pub fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.vertices.dimension()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edges, or an empty slice for non-edge topology
    pub fn edges(&self) -> &[Edge] {
        match &self.topology {
            Topology::Edges(edges) => edges,
            _ => &[],
        }
    }

    /// Faces, or an empty slice for non-face topology
    pub fn faces(&self) -> &[Face] {
        match &self.topology {
            Topology::Faces(faces) => faces,
            _ => &[],
        }
    }

    /// Triangles ready for a triangle-only backend
    ///
    /// Faces are triangulated (4 triangles each), raw triangles are passed
    /// through, and edge topology yields nothing.
    pub fn triangles(&self) -> Vec<Triangle> {
        match &self.topology {
            Topology::Edges(_) => Vec::new(),
            Topology::Faces(faces) => triangulate_all(faces),
            Topology::Triangles(triangles) => triangles.clone(),
        }
    }

    /// Same topology, vertices mapped through an affine transform
    pub fn transformed(&self, matrix: &HomogeneousMatrix) -> Result<Self, GeometryError> {
        Ok(Self {
            vertices: self.vertices.transformed(matrix)?,
            topology: self.topology.clone(),
        })
    }

    /// Translate every vertex by `offset`
    pub fn shift(&self, offset: &[f64]) -> Result<Self, GeometryError> {
        self.transformed(&HomogeneousMatrix::translation(offset)?)
    }

    /// Scale every vertex uniformly about the origin
    pub fn rescale(&self, factor: f64) -> Result<Self, GeometryError> {
        let factors = vec![factor; self.dimension()];
        self.transformed(&HomogeneousMatrix::scaling(&factors)?)
    }

    /// Rotate every vertex about the origin in the `axis_i`-`axis_j` plane
    pub fn rotate(&self, angle: f64, axis_i: usize, axis_j: usize) -> Result<Self, GeometryError> {
        let rotation = HomogeneousMatrix::rotation(self.dimension(), angle, axis_i, axis_j)?;
        self.transformed(&rotation)
    }

    /// Pad vertices with zero coordinates up to `dimension`
    pub fn embed(&self, dimension: usize) -> Result<Self, GeometryError> {
        Ok(Self {
            vertices: self.vertices.embedded(dimension)?,
            topology: self.topology.clone(),
        })
    }

    /// Merge two polytopes of the same dimension and topology kind
    ///
    /// `other`'s vertices are appended after this polytope's, and its indices
    /// are offset accordingly.
    pub fn unite(&self, other: &Self) -> Result<Self, GeometryError> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }

        let mut vertices = self.vertices.clone();
        vertices.coords.extend_from_slice(&other.vertices.coords);
        let mut topology = self.topology.clone();
        topology.extend(other.topology.shifted(self.vertex_count()))?;

        Ok(Self { vertices, topology })
    }
}

/// Generate the D-cube spanning `[0, 1]^D`
///
/// # Errors
/// [`GeometryError::InvalidDimension`] when `dimension` is 0.
///
/// # Example
/// ```
/// use polyview_math::{generate_polytope, TopologyKind};
/// let tesseract = generate_polytope(4, TopologyKind::Edges).unwrap();
/// assert_eq!(tesseract.vertex_count(), 16);
/// assert_eq!(tesseract.edges().len(), 32);
/// ```
pub fn generate_polytope(dimension: usize, kind: TopologyKind) -> Result<Polytope, GeometryError> {
    if dimension == 0 {
        return Err(GeometryError::InvalidDimension(dimension));
    }

    let (vertices, edges, faces) = extrude_cube(dimension);
    let topology = match kind {
        TopologyKind::Edges => Topology::Edges(edges),
        TopologyKind::Faces => Topology::Faces(faces),
        TopologyKind::Triangles => Topology::Triangles(triangulate_all(&faces)),
    };
    log::debug!(
        "Generated {}-cube: {} vertices, {} {:?}",
        dimension,
        vertices.len(),
        topology.len(),
        kind
    );

    Ok(Polytope { vertices, topology })
}

/// Vertices, edges and faces of the `dimension`-cube (dimension >= 1)
fn extrude_cube(dimension: usize) -> (VertexTable, Vec<Edge>, Vec<Face>) {
    if dimension == 1 {
        let vertices = VertexTable {
            dimension: 1,
            coords: vec![0.0, 1.0],
        };
        return (vertices, vec![Edge::new(0, 1)], Vec::new());
    }

    let (base_vertices, base_edges, base_faces) = extrude_cube(dimension - 1);
    let n = base_vertices.len();
    let vertices = base_vertices.extruded();

    let mut edges = Vec::with_capacity(2 * base_edges.len() + n);
    edges.extend_from_slice(&base_edges);
    edges.extend(base_edges.iter().map(|e| e.shifted(n)));
    edges.extend((0..n).map(|i| Edge::new(i, i + n)));

    let faces = if dimension == 2 {
        vec![Face::new([0, 1, 3, 2])]
    } else {
        extrude_faces(&base_faces, n)
    };

    (vertices, edges, faces)
}

/// Floor faces, ceiling faces, then one side face per distinct base edge
///
/// Base edges are visited face by face in cyclic order; an edge shared by two
/// base faces only produces its side face the first time.
fn extrude_faces(base_faces: &[Face], n: usize) -> Vec<Face> {
    let mut faces = Vec::with_capacity(base_faces.len() * 4);
    faces.extend_from_slice(base_faces);
    faces.extend(base_faces.iter().map(|f| f.shifted(n)));

    let mut seen: HashSet<[usize; 2]> = HashSet::new();
    for face in base_faces {
        for edge in face.edges() {
            if seen.insert(edge.canonical()) {
                let [a, b] = edge.indices;
                faces.push(Face::new([a, b, b + n, a + n]));
            }
        }
    }

    faces
}
