//! Quadrilateral face triangulation
//!
//! Consumers are not assumed to disable backface culling. Every face is split
//! along its first diagonal and each half is emitted in both windings, so
//! whichever side faces the viewer is filled.

use crate::shape::{Face, Triangle};

/// Split a cyclic face `(a, b, c, d)` into four triangles
///
/// Returns `(a,b,c), (c,b,a), (a,d,c), (c,d,a)`.
pub fn triangulate(face: Face) -> [Triangle; 4] {
    let [a, b, c, d] = face.indices;
    [
        Triangle::new([a, b, c]),
        Triangle::new([c, b, a]),
        Triangle::new([a, d, c]),
        Triangle::new([c, d, a]),
    ]
}

/// Triangulate every face in order
pub fn triangulate_all(faces: &[Face]) -> Vec<Triangle> {
    faces.iter().flat_map(|&face| triangulate(face)).collect()
}
