//! Topology primitives
//!
//! Edges, faces and triangles are pure index tuples into a polytope's vertex
//! table. They carry no coordinates, colors or rendering info.

use serde::{Deserialize, Serialize};

/// A line segment between two vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Indices into the parent polytope's vertex table
    pub indices: [usize; 2],
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }

    /// The edge with sorted endpoints (for deduplication)
    #[inline]
    pub fn canonical(&self) -> [usize; 2] {
        let [a, b] = self.indices;
        if a <= b { [a, b] } else { [b, a] }
    }

    /// Offset both endpoints by `offset`
    #[inline]
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.indices[0] + offset, self.indices[1] + offset)
    }
}

/// A planar quadrilateral face
///
/// The four vertices are listed cyclically around the face, so
/// `(indices[k], indices[(k + 1) % 4])` is always an edge of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    /// Indices into the parent polytope's vertex table, in cyclic order
    pub indices: [usize; 4],
}

impl Face {
    #[inline]
    pub fn new(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    /// Offset every vertex index by `offset`
    #[inline]
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.indices.map(|i| i + offset))
    }

    /// The four boundary edges, in cyclic order
    pub fn edges(&self) -> [Edge; 4] {
        let v = self.indices;
        [
            Edge::new(v[0], v[1]),
            Edge::new(v[1], v[2]),
            Edge::new(v[2], v[3]),
            Edge::new(v[3], v[0]),
        ]
    }
}

/// A triangle, as handed to backends that only draw triangulated primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    /// Indices into the parent polytope's vertex table
    pub indices: [usize; 3],
}

impl Triangle {
    #[inline]
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    #[inline]
    pub fn shifted(&self, offset: usize) -> Self {
        Self::new(self.indices.map(|i| i + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical() {
        assert_eq!(Edge::new(5, 2).canonical(), [2, 5]);
        assert_eq!(Edge::new(2, 5).canonical(), [2, 5]);
    }

    #[test]
    fn test_edge_shifted() {
        assert_eq!(Edge::new(0, 1).shifted(4), Edge::new(4, 5));
    }

    #[test]
    fn test_face_edges_are_cyclic() {
        let face = Face::new([0, 1, 3, 2]);
        let edges = face.edges();
        assert_eq!(edges[0], Edge::new(0, 1));
        assert_eq!(edges[1], Edge::new(1, 3));
        assert_eq!(edges[2], Edge::new(3, 2));
        assert_eq!(edges[3], Edge::new(2, 0));
    }

    #[test]
    fn test_face_shifted() {
        assert_eq!(Face::new([0, 1, 3, 2]).shifted(4).indices, [4, 5, 7, 6]);
    }

    #[test]
    fn test_triangle_shifted() {
        assert_eq!(Triangle::new([0, 1, 2]).shifted(3).indices, [3, 4, 5]);
    }
}
