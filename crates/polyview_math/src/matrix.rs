//! Homogeneous matrices for D-dimensional transformations
//!
//! A D-dimensional affine (or projective) transform is stored as a square
//! matrix of side D+1 acting on column vectors `[x_0, ..., x_{D-1}, 1]`.
//!
//! Two constructors here are deliberately unconventional and the rest of the
//! pipeline depends on them:
//! - [`HomogeneousMatrix::scaling`] puts a 0 (not a 1) in the last diagonal
//!   entry, so the homogeneous coordinate is collapsed by the scale.
//! - [`HomogeneousMatrix::projection`] copies the last spatial coordinate into
//!   the w slot, so the perspective divide is by depth.

use std::ops::{Index, IndexMut};

use crate::GeometryError;

/// Square matrix of side `dimension + 1` (row-major)
#[derive(Clone, Debug, PartialEq)]
pub struct HomogeneousMatrix {
    side: usize,
    data: Vec<f64>,
}

impl HomogeneousMatrix {
    fn zeros(side: usize) -> Self {
        Self {
            side,
            data: vec![0.0; side * side],
        }
    }

    fn check_dimension(dimension: usize) -> Result<(), GeometryError> {
        if dimension == 0 {
            return Err(GeometryError::InvalidDimension(dimension));
        }
        Ok(())
    }

    /// The (d+1)-sided identity
    pub fn identity(dimension: usize) -> Result<Self, GeometryError> {
        Self::check_dimension(dimension)?;
        let mut m = Self::zeros(dimension + 1);
        for i in 0..m.side {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// Translation by `offset`; the dimension is `offset.len()`
    ///
    /// # Example
    /// ```
    /// use polyview_math::HomogeneousMatrix;
    /// let m = HomogeneousMatrix::translation(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.apply(&[1.0, 1.0, 1.0, 1.0]).unwrap(), vec![2.0, 3.0, 4.0, 1.0]);
    /// ```
    pub fn translation(offset: &[f64]) -> Result<Self, GeometryError> {
        let mut m = Self::identity(offset.len())?;
        let last = m.side - 1;
        for (row, &value) in offset.iter().enumerate() {
            m[(row, last)] = value;
        }
        Ok(m)
    }

    /// Axis-aligned scaling by `factors`
    ///
    /// The last diagonal entry is 0, not 1: `scaling(v)` maps `(1, ..., 1, 1)`
    /// to `(v_1, ..., v_n, 0)`.
    pub fn scaling(factors: &[f64]) -> Result<Self, GeometryError> {
        Self::check_dimension(factors.len())?;
        let mut m = Self::zeros(factors.len() + 1);
        for (i, &factor) in factors.iter().enumerate() {
            m[(i, i)] = factor;
        }
        Ok(m)
    }

    /// Rotation by `angle` radians in the plane spanned by `axis_i` and `axis_j`
    ///
    /// `rotation(d, PI / 2.0, 0, 2)` sends the X axis to the Z axis.
    pub fn rotation(
        dimension: usize,
        angle: f64,
        axis_i: usize,
        axis_j: usize,
    ) -> Result<Self, GeometryError> {
        let mut m = Self::identity(dimension)?;
        for axis in [axis_i, axis_j] {
            if axis >= dimension {
                return Err(GeometryError::InvalidAxis { axis, dimension });
            }
        }
        if axis_i == axis_j {
            return Err(GeometryError::InvalidAxis { axis: axis_j, dimension });
        }

        let (sn, cs) = angle.sin_cos();
        m[(axis_i, axis_i)] = cs;
        m[(axis_i, axis_j)] = -sn;
        m[(axis_j, axis_i)] = sn;
        m[(axis_j, axis_j)] = cs;
        Ok(m)
    }

    /// Perspective projection that writes the last spatial coordinate into w
    ///
    /// Applied to `[x, y, z, 1]` (d = 3) this gives `[x, y, z, z]`, so dividing
    /// by w yields `x / z, y / z`. The matrix is idempotent.
    pub fn projection(dimension: usize) -> Result<Self, GeometryError> {
        let mut m = Self::identity(dimension)?;
        let last = m.side - 1;
        m[(last, last)] = 0.0;
        m[(last, last - 1)] = 1.0;
        Ok(m)
    }

    /// Spatial dimension this matrix transforms (side - 1)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.side - 1
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// A row of the matrix as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.side..(row + 1) * self.side]
    }

    /// Multiply two matrices: result = self * other
    ///
    /// Applied to a column vector this applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Result<Self, GeometryError> {
        if self.side != other.side {
            return Err(GeometryError::DimensionMismatch {
                expected: self.side,
                found: other.side,
            });
        }

        let n = self.side;
        let mut result = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self[(i, k)];
                for j in 0..n {
                    result[(i, j)] += a * other[(k, j)];
                }
            }
        }
        Ok(result)
    }

    /// Transform a homogeneous column vector: result = M * v
    pub fn apply(&self, v: &[f64]) -> Result<Vec<f64>, GeometryError> {
        if v.len() != self.side {
            return Err(GeometryError::DimensionMismatch {
                expected: self.side,
                found: v.len(),
            });
        }

        Ok((0..self.side)
            .map(|row| self.row(row).iter().zip(v).map(|(m, x)| m * x).sum())
            .collect())
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.side == other.side
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Index<(usize, usize)> for HomogeneousMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.side + col]
    }
}

impl IndexMut<(usize, usize)> for HomogeneousMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.side + col]
    }
}
