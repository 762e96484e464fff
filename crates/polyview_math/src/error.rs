//! Geometry error types
//!
//! Every operation in the geometry crates is a pure function that only fails
//! on a contract violation. These are reported at the point of detection.

use std::fmt;

/// Error type for matrix, polytope, projection and palette operations
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension of zero was requested (dimensions start at 1)
    InvalidDimension(usize),
    /// Two operands disagree on their dimension (matrix side or vector length)
    DimensionMismatch {
        expected: usize,
        found: usize,
    },
    /// A scalar fell outside its allowed [0, 1] domain
    OutOfRange(f64),
    /// A rotation plane names an axis that does not exist, or the same axis twice
    InvalidAxis {
        axis: usize,
        dimension: usize,
    },
    /// A topology element references a vertex that is not in the vertex table
    IndexOutOfBounds {
        index: usize,
        vertex_count: usize,
    },
    /// Two polytopes with different topology kinds were combined
    TopologyMismatch,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension(d) => {
                write!(f, "Invalid dimension: {}", d)
            }
            GeometryError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {}, found {}", expected, found)
            }
            GeometryError::OutOfRange(value) => {
                write!(f, "Value out of range [0, 1]: {}", value)
            }
            GeometryError::InvalidAxis { axis, dimension } => {
                write!(f, "Invalid axis {} for dimension {}", axis, dimension)
            }
            GeometryError::IndexOutOfBounds { index, vertex_count } => {
                write!(f, "Vertex index {} out of bounds ({} vertices)", index, vertex_count)
            }
            GeometryError::TopologyMismatch => {
                write!(f, "Topology mismatch: cannot combine different topology kinds")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
